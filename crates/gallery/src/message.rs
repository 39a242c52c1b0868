use cosmic::{iced::widget::scrollable::Viewport, widget::image::Handle};
use gallery_config::GalleryConfig;
use gallery_nav::{GalleryKey, TransitionTicket};
use gallery_types::GalleryImage;
use gallery_widgets::SurfaceTouch;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselMessage),
    Lightbox(LightboxMessage),
    Image(ImageMessage),
    /// Touch on the main image surface.
    Touch(SurfaceTouch),
    Key(GalleryKey),
    SourceLoaded(Vec<GalleryImage>),
    SourceFailed(Arc<String>),
    PageScrolled(Viewport),
    ConfigChanged(GalleryConfig),
}

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    Next,
    Previous,
    GoTo(usize),
    /// Click on a rail slot.
    Thumbnail(usize),
    /// Click or tap on the main image.
    ActivateMain,
    Settled(TransitionTicket),
    AutoPlayTick,
    RailScrolled(Viewport),
}

#[derive(Debug, Clone)]
pub enum LightboxMessage {
    Close,
    Next,
    Previous,
    /// Swallows presses inside the dialog so they do not reach the backdrop.
    Inside,
}

#[derive(Debug, Clone)]
pub enum ImageMessage {
    Loaded {
        id: String,
        handle: Handle,
        width: u32,
        height: u32,
    },
    ThumbnailReady {
        id: String,
        handle: Handle,
        width: u32,
        height: u32,
    },
    LoadFailed {
        id: String,
        error: String,
    },
    ThumbnailFailed {
        id: String,
        error: String,
    },
}
