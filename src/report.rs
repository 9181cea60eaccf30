use chrono::Local;
use libc::{c_char, gethostname};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::docker::ListedImage;

/// The structure printed to stdout once every pull has finished.
#[derive(Deserialize, Serialize)]
pub struct Report {
    #[serde(rename = "Hostname")]
    pub hostname: String,

    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Images")]
    pub images: Vec<ListedImage>,
}

impl Report {
    pub fn new(images: Vec<ListedImage>) -> Self {
        Self {
            hostname: local_hostname(),
            date: Local::now().format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            images,
        }
    }
}

/// Cross-references the listed images against the requested references.
///
/// An image is appended once per matching tag alias, so an image matching
/// several requested references shows up several times.
pub fn filter_images(references: &[String], listed: &[ListedImage]) -> Vec<ListedImage> {
    let mut matched = vec![];

    for reference in references {
        for image in listed {
            for repo_tag in image.repo_tags.iter().flatten() {
                if repo_tag == reference {
                    matched.push(image.clone());
                }
            }
        }
    }

    matched
}

fn local_hostname() -> String {
    // one spare byte so the name stays NUL-terminated even when truncated
    let mut buffer = vec![0u8; 256];
    let len = buffer.len() - 1;

    let result = unsafe { gethostname(buffer.as_mut_ptr() as *mut c_char, len) };
    if result != 0 {
        warn!("Failed to determine hostname, leaving it empty. ");
        return String::new();
    }

    let end = buffer.iter().position(|&b| b == 0).unwrap_or(len);
    match std::str::from_utf8(&buffer[..end]) {
        Ok(name) => name.to_string(),
        Err(_) => String::new(),
    }
}
