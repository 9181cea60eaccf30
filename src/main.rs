mod app;
mod config;
mod docker;
mod images;
mod logging;
mod report;

use std::{env, process::exit};

use clap::Parser;
use log::{error, info, LevelFilter};

use crate::config::{Args, Config};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    if args.verbose >= 1 {
        env::set_var("RUST_BACKTRACE", "1");
    }

    if let Err(e) = logging::setup_logger(log_level) {
        eprintln!("Failed to initialize logger: {e}. ");
        exit(1);
    }

    info!("Started {} version {}. ", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = ctrlc::set_handler(move || {
        error!("Received SIGINT, aborting. ");
        exit(1);
    }) {
        error!("Failed to set SIGINT handler: {e}. ");
        exit(1);
    }

    let config = match Config::new(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}. ");
            exit(1);
        },
    };

    if let Err(e) = app::run(&config).await {
        error!("Program failed: {e}. ");
        exit(1);
    }
}
