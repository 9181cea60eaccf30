use std::io::{stderr, Write};

use anyhow::{anyhow, Result};
use hyper::{
    body::{self, HttpBody},
    Body, Client, Method, Request, Response, StatusCode,
};
use hyperlocal::{UnixClientExt, Uri as LocalUri};
use log::{debug, error, info};
use serde::Deserialize;

use crate::docker::listed_image::ListedImage;

// Engine API version the deployment's daemons are addressed with.
const API_VERSION: &str = "v1.22";
const USER_AGENT: &str = "prestage-cli-1.0";

async fn make_request(socket: &str, method: Method, uri: &str) -> Result<Response<Body>> {
    let uri: LocalUri = LocalUri::new(socket, uri);
    let client = Client::unix();

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("User-Agent", USER_AGENT)
        .body(Body::empty())?;

    let response = client.request(request).await?;

    Ok(response)
}

pub async fn show_api_version(socket: &str) {
    let api_ver = match get_api_version(socket).await {
        Ok(x) => x,
        Err(e) => {
            error!("Failed to get Docker API version: {e}. ");
            return;
        },
    };

    info!("Daemon API version: {}. ", api_ver.0);
    match api_ver.1 {
        Some(x) => debug!("Minimum API version: {x}. "),
        None => debug!("Daemon didn't specify a minimum API version. "),
    }
}

async fn get_api_version(socket: &str) -> Result<(String, Option<String>)> {
    let response = make_request(socket, Method::GET, "/version").await?;

    if response.status() != StatusCode::OK {
        return Err(anyhow!("Docker API returned non-OK status code: {}", response.status().as_u16()));
    }

    let response = body::to_bytes(response).await?;

    #[derive(Deserialize)]
    struct VersionResponse {
        #[serde(rename = "ApiVersion")]
        api_version: String,
        #[serde(rename = "MinAPIVersion")]
        min_api_version: Option<String>,
    }

    let response: VersionResponse = serde_json::from_slice(&response)?;

    Ok((response.api_version, response.min_api_version))
}

/// Pulls `repo/name:tag` through the daemon, streaming progress to stderr.
///
/// The daemon only commits the pull once the progress body has been read to
/// completion, so the stream is always fully drained.
pub async fn pull_image(socket: &str, repo: &str, name: &str, tag: &str) -> Result<()> {
    let uri = format!("/{API_VERSION}/images/create?fromImage={repo}/{name}&tag={tag}");
    let mut response = make_request(socket, Method::POST, &uri).await?;

    if response.status() != StatusCode::OK {
        return Err(anyhow!("Docker API returned non-OK status code: {}", response.status().as_u16()));
    }

    let progress = response.body_mut();
    while let Some(chunk) = progress.data().await {
        let chunk = chunk?;
        stderr().write_all(&chunk)?;
    }

    Ok(())
}

/// Returns every image the daemon currently holds, untagged ones included.
pub async fn list_images(socket: &str) -> Result<Vec<ListedImage>> {
    let uri = format!("/{API_VERSION}/images/json?all=1");
    let response = make_request(socket, Method::GET, &uri).await?;

    if response.status() != StatusCode::OK {
        return Err(anyhow!("Docker API returned non-OK status code: {}", response.status().as_u16()));
    }

    let response = body::to_bytes(response).await?;
    let images: Vec<ListedImage> = serde_json::from_slice(&response)?;

    debug!("Daemon reported {} image(s). ", images.len());

    Ok(images)
}
