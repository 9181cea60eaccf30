use std::fs;

use anyhow::Result;
use log::debug;

/// Splits `content` on line boundaries. Blank lines and duplicates are kept
/// so the output count always matches the file's line count.
pub fn read_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Reads the image list file and returns one name per line, in file order.
pub fn read_images(path: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let images = read_lines(&content);

    debug!("Read {} image name(s) from {path}. ", images.len());

    Ok(images)
}

/// Builds the fully qualified reference `repo/name:tag`.
pub fn build_reference(repo: &str, name: &str, tag: &str) -> String {
    format!("{repo}/{name}:{tag}")
}
