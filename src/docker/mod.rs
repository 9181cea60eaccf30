mod api;
mod listed_image;

pub use api::{list_images, pull_image, show_api_version};
pub use listed_image::ListedImage;
