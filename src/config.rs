use anyhow::{anyhow, Result};
use clap::Parser;
use log::debug;
use url::Url;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
pub struct Args {
    /// Path to the list of images to pull
    #[arg(long, value_name = "/path/to/images.txt")]
    pub images: String,

    /// The repository to pull from
    #[arg(long, default_value = "discoenv")]
    pub repo: String,

    /// The tag to use when pulling the images
    #[arg(long)]
    pub tag: String,

    /// The Docker daemon URI to connect to
    #[arg(long, default_value = "unix:///var/run/docker.sock")]
    pub docker_uri: String,

    /// Enable debug output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Immutable runtime configuration, built once from the parsed arguments.
pub struct Config {
    pub images_path: String,
    pub repo: String,
    pub tag: String,
    pub docker_socket: String,
}

impl Config {
    pub fn new(args: &Args) -> Result<Self> {
        let docker_socket = socket_from_uri(&args.docker_uri)?;
        debug!("Using Docker socket {docker_socket}. ");

        Ok(Self {
            images_path: args.images.clone(),
            repo: args.repo.clone(),
            tag: args.tag.clone(),
            docker_socket,
        })
    }
}

fn socket_from_uri(uri: &str) -> Result<String> {
    let parsed = Url::parse(uri)?;

    if parsed.scheme() != "unix" {
        return Err(anyhow!("unsupported Docker URI scheme {}", parsed.scheme()));
    }

    Ok(parsed.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_from_uri() {
        let socket = socket_from_uri("unix:///var/run/docker.sock").unwrap();
        assert_eq!(socket, "/var/run/docker.sock");
    }

    #[test]
    fn test_socket_from_uri_rejects_tcp() {
        assert!(socket_from_uri("tcp://127.0.0.1:2375").is_err());
    }

    #[test]
    fn test_args_require_images() {
        let result = Args::try_parse_from(["prestage", "--tag", "v1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_require_tag() {
        let result = Args::try_parse_from(["prestage", "--images", "/tmp/images.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from([
            "prestage", "--images", "/tmp/images.txt", "--tag", "v1",
        ]).unwrap();

        assert_eq!(args.repo, "discoenv");
        assert_eq!(args.docker_uri, "unix:///var/run/docker.sock");
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from([
            "prestage",
            "--images", "/tmp/images.txt",
            "--repo", "acme",
            "--tag", "v1",
        ]).unwrap();

        let config = Config::new(&args).unwrap();
        assert_eq!(config.images_path, "/tmp/images.txt");
        assert_eq!(config.repo, "acme");
        assert_eq!(config.tag, "v1");
        assert_eq!(config.docker_socket, "/var/run/docker.sock");
    }
}
