pub mod types;

pub use types::{GalleryError, GalleryImage, ImageList};
