pub mod autoplay;
pub mod carousel;
pub mod focus;
pub mod gallery;
pub mod gesture;
pub mod keyboard;
pub mod lightbox;
pub mod scroll_lock;
pub mod source;

pub use autoplay::AutoPlay;
pub use carousel::{CarouselState, TRANSITION_SETTLE, TransitionTicket};
pub use focus::FocusTarget;
pub use gallery::{Effect, Gallery};
pub use gesture::{GestureRecognizer, SWIPE_THRESHOLD, Swipe, TouchState};
pub use keyboard::{Action, GalleryKey, Mode, RouteContext};
pub use lightbox::{LightboxController, LightboxState};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use source::{SourceError, load_source};
