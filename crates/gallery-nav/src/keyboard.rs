//! Key routing for the two gallery modes.
//!
//! Every key goes through [`route`], so the full transition table lives in
//! one match and can be tested without a window.

use crate::focus::FocusTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Carousel,
    Lightbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Escape,
    Tab,
    ShiftTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
    OpenLightbox,
    CloseLightbox,
    LightboxNext,
    LightboxPrevious,
    FocusNext,
    FocusPrevious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteContext {
    pub mode: Mode,
    pub focus: Option<FocusTarget>,
    pub lightbox_enabled: bool,
}

pub fn route(ctx: RouteContext, key: GalleryKey) -> Option<Action> {
    match ctx.mode {
        Mode::Lightbox => match key {
            GalleryKey::Escape => Some(Action::CloseLightbox),
            GalleryKey::ArrowLeft => Some(Action::LightboxPrevious),
            GalleryKey::ArrowRight => Some(Action::LightboxNext),
            GalleryKey::Tab => Some(Action::FocusNext),
            GalleryKey::ShiftTab => Some(Action::FocusPrevious),
            GalleryKey::Enter | GalleryKey::Space => match ctx.focus {
                Some(FocusTarget::LightboxClose) => Some(Action::CloseLightbox),
                Some(FocusTarget::LightboxPrevious) => Some(Action::LightboxPrevious),
                Some(FocusTarget::LightboxNext) => Some(Action::LightboxNext),
                _ => None,
            },
            GalleryKey::Home | GalleryKey::End => None,
        },
        Mode::Carousel => match key {
            GalleryKey::ArrowLeft => Some(Action::Previous),
            GalleryKey::ArrowRight => Some(Action::Next),
            GalleryKey::Home => Some(Action::First),
            GalleryKey::End => Some(Action::Last),
            GalleryKey::Tab => Some(Action::FocusNext),
            GalleryKey::ShiftTab => Some(Action::FocusPrevious),
            GalleryKey::Enter | GalleryKey::Space => match ctx.focus {
                Some(FocusTarget::MainImage) if ctx.lightbox_enabled => {
                    Some(Action::OpenLightbox)
                }
                Some(FocusTarget::Previous) => Some(Action::Previous),
                Some(FocusTarget::Next) => Some(Action::Next),
                Some(FocusTarget::Thumbnail(index)) => Some(Action::GoTo(index)),
                _ => None,
            },
            GalleryKey::Escape => None,
        },
    }
}
