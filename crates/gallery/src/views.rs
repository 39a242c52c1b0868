pub mod carousel;
pub mod lightbox;

pub use carousel::{CarouselView, RAIL_SCROLL_ID, rail_metrics};
pub use lightbox::LightboxView;

pub const PAGE_SCROLL_ID: &str = "listing-page";
