pub mod cache;
pub mod loader;
pub mod preload;

pub use cache::{CachedImage, ImageCache};
pub use loader::{LoadError, LoadedImage, load_image, load_thumbnail, resolve_locator};
pub use preload::preload_window;
