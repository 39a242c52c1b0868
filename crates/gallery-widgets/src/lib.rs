pub mod dots;
pub mod indicators;
pub mod rail;
pub mod swipe_surface;
pub mod thumbnail_sync;

pub use dots::dot_strip;
pub use indicators::{DotStrip, RailLayout};
pub use rail::{RailThumb, ThumbnailRail, thumbnail_rail};
pub use swipe_surface::{SurfaceTouch, SwipeSurface, surface_touch, swipe_surface};
pub use thumbnail_sync::{RailMetrics, ScrollAction, ThumbRect, VisibleRange, sync_thumbnail};
