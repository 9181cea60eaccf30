use std::io::{stdout, Write};

use anyhow::Result;
use log::info;

use crate::{
    config::Config,
    docker::{list_images, pull_image, show_api_version},
    images::{build_reference, read_images},
    report::{filter_images, Report},
};

/// Runs the pull-and-report pipeline once, start to finish. The first error
/// anywhere aborts the run.
pub async fn run(config: &Config) -> Result<()> {
    let names = read_images(&config.images_path)?;

    show_api_version(&config.docker_socket).await;

    let mut references = vec![];
    for name in &names {
        let reference = build_reference(&config.repo, name, &config.tag);
        references.push(reference.clone());

        info!("Pulling {reference}. ");
        pull_image(&config.docker_socket, &config.repo, name, &config.tag).await?;
    }

    let listed = list_images(&config.docker_socket).await?;
    let matched = filter_images(&references, &listed);

    info!("{} of {} listed image(s) matched a requested reference. ", matched.len(), listed.len());

    let report = Report::new(matched);
    let json = serde_json::to_string_pretty(&report)?;

    stdout().write_all(json.as_bytes())?;

    Ok(())
}
