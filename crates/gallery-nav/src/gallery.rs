//! The gallery engine: one owner for carousel, lightbox, gesture and focus
//! state, with one entry point per host event.

use crate::{
    autoplay::AutoPlay,
    carousel::{CarouselState, TransitionTicket},
    focus::{self, FocusTarget, LIGHTBOX_RING},
    gesture::{GestureRecognizer, Swipe},
    keyboard::{self, Action, GalleryKey, Mode, RouteContext},
    lightbox::LightboxController,
    scroll_lock::ScrollLock,
};
use gallery_config::GalleryConfig;
use gallery_types::{GalleryImage, ImageList};
use std::time::Duration;

/// Work the host must carry out after an engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Call [`Gallery::settle`] with this ticket once the settle window has passed.
    ScheduleSettle(TransitionTicket),
    /// Bring the thumbnail of this image into view.
    RevealThumbnail(usize),
    /// Decode this image and its neighbours.
    Preload(usize),
    /// Move keyboard focus to this control.
    Focus(FocusTarget),
}

#[derive(Debug)]
pub struct Gallery {
    images: ImageList,
    carousel: CarouselState,
    gesture: GestureRecognizer,
    lightbox: LightboxController,
    auto_play: AutoPlay,
    show_lightbox: bool,
    thumbnail_lead: usize,
    focus: Option<FocusTarget>,
}

impl Gallery {
    pub fn new(images: ImageList, config: &GalleryConfig, scroll_lock: ScrollLock) -> Self {
        let len = images.len();

        Self {
            images,
            carousel: CarouselState::new(len),
            gesture: GestureRecognizer::new(),
            lightbox: LightboxController::new(len, scroll_lock),
            auto_play: AutoPlay::new(config.auto_play, config.auto_play_interval()),
            show_lightbox: config.show_lightbox,
            thumbnail_lead: config.thumbnail_lead.max(1),
            focus: None,
        }
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    pub fn active_image(&self) -> &GalleryImage {
        &self.images[self.carousel.active_index()]
    }

    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    pub fn lightbox_image(&self) -> Option<&GalleryImage> {
        self.lightbox.index().and_then(|idx| self.images.get(idx))
    }

    pub fn mode(&self) -> Mode {
        if self.lightbox.is_open() {
            Mode::Lightbox
        } else {
            Mode::Carousel
        }
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn show_lightbox(&self) -> bool {
        self.show_lightbox
    }

    pub fn thumbnail_lead(&self) -> usize {
        self.thumbnail_lead
    }

    /// Autoplay period, present only while autoplay may run.
    pub fn auto_play_interval(&self) -> Option<Duration> {
        self.auto_play.interval(self.mode())
    }

    pub fn set_config(&mut self, config: &GalleryConfig) -> Vec<Effect> {
        self.auto_play = AutoPlay::new(config.auto_play, config.auto_play_interval());
        self.thumbnail_lead = config.thumbnail_lead.max(1);
        self.show_lightbox = config.show_lightbox;

        if !self.show_lightbox && self.lightbox.is_open() {
            return self.close_lightbox();
        }

        Vec::new()
    }

    pub fn set_focus(&mut self, focus: Option<FocusTarget>) {
        self.focus = focus;
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::First => self.first(),
            Action::Last => self.last(),
            Action::GoTo(index) => self.go_to(index),
            Action::OpenLightbox => self.open_lightbox(None, self.focus),
            Action::CloseLightbox => self.close_lightbox(),
            Action::LightboxNext => self.lightbox_next(),
            Action::LightboxPrevious => self.lightbox_previous(),
            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrevious => self.cycle_focus(false),
        }
    }

    pub fn key(&mut self, key: GalleryKey) -> Vec<Effect> {
        let ctx = RouteContext {
            mode: self.mode(),
            focus: self.focus,
            lightbox_enabled: self.show_lightbox,
        };

        match keyboard::route(ctx, key) {
            Some(action) => self.apply(action),
            None => Vec::new(),
        }
    }

    pub fn next(&mut self) -> Vec<Effect> {
        let ticket = self.carousel.go_to_next();
        self.transitioned(ticket)
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        let ticket = self.carousel.go_to_previous();
        self.transitioned(ticket)
    }

    pub fn go_to(&mut self, index: usize) -> Vec<Effect> {
        let ticket = self.carousel.go_to_index(index);
        self.transitioned(ticket)
    }

    /// Pointer activation of a rail thumbnail; focus follows the click.
    pub fn select_thumbnail(&mut self, index: usize) -> Vec<Effect> {
        self.focus = Some(FocusTarget::Thumbnail(index));
        self.go_to(index)
    }

    pub fn first(&mut self) -> Vec<Effect> {
        let ticket = self.carousel.go_to_first();
        self.transitioned(ticket)
    }

    pub fn last(&mut self) -> Vec<Effect> {
        let ticket = self.carousel.go_to_last();
        self.transitioned(ticket)
    }

    pub fn settle(&mut self, ticket: TransitionTicket) {
        if !self.carousel.settle(ticket) {
            tracing::trace!("ignoring stale transition ticket");
        }
    }

    /// Opens at `index`, or at the active image when `None`.
    pub fn open_lightbox(
        &mut self,
        index: Option<usize>,
        opener: Option<FocusTarget>,
    ) -> Vec<Effect> {
        if !self.show_lightbox {
            tracing::debug!("lightbox disabled, ignoring open request");
            return Vec::new();
        }

        let index = index.unwrap_or_else(|| self.carousel.active_index());
        // The opener is only recorded if it is a carousel control
        let opener = opener.filter(|target| !target.is_lightbox());
        self.lightbox.open(index, opener);
        self.gesture.cancel();
        self.focus = Some(FocusTarget::LightboxClose);

        let mut effects = vec![Effect::Focus(FocusTarget::LightboxClose)];
        if let Some(index) = self.lightbox.index() {
            effects.push(Effect::Preload(index));
        }
        effects
    }

    /// Click or tap on the main image. A finger that is mid-swipe lifts over
    /// the image too; that release belongs to the swipe.
    pub fn activate_main_image(&mut self) -> Vec<Effect> {
        if self.gesture.is_swiping() {
            return Vec::new();
        }

        self.focus = Some(FocusTarget::MainImage);
        self.open_lightbox(None, Some(FocusTarget::MainImage))
    }

    pub fn close_lightbox(&mut self) -> Vec<Effect> {
        if !self.lightbox.is_open() {
            return Vec::new();
        }

        self.focus = self.lightbox.close();
        self.focus.map(Effect::Focus).into_iter().collect()
    }

    pub fn lightbox_next(&mut self) -> Vec<Effect> {
        self.lightbox.next().map(Effect::Preload).into_iter().collect()
    }

    pub fn lightbox_previous(&mut self) -> Vec<Effect> {
        self.lightbox
            .previous()
            .map(Effect::Preload)
            .into_iter()
            .collect()
    }

    pub fn touch_start(&mut self, finger: u64, x: f32) {
        if self.mode() == Mode::Carousel {
            self.gesture.touch_start(finger, x);
        }
    }

    pub fn touch_move(&mut self, finger: u64, x: f32) {
        if self.mode() == Mode::Carousel {
            self.gesture.touch_move(finger, x);
        }
    }

    pub fn touch_end(&mut self, finger: u64) -> Vec<Effect> {
        if self.mode() != Mode::Carousel {
            self.gesture.cancel();
            return Vec::new();
        }

        match self.gesture.touch_end(finger) {
            Some(Swipe::Left) => self.next(),
            Some(Swipe::Right) => self.previous(),
            None => Vec::new(),
        }
    }

    pub fn touch_cancel(&mut self) {
        self.gesture.cancel();
    }

    pub fn auto_play_tick(&mut self) -> Vec<Effect> {
        if !self.auto_play.is_running(self.mode()) {
            tracing::trace!("autoplay tick while suspended");
            return Vec::new();
        }

        self.next()
    }

    /// Releases every scoped resource the engine holds.
    pub fn teardown(&mut self) {
        self.carousel.cancel();
        self.lightbox.close();
        self.gesture.cancel();
        self.focus = None;
    }

    fn cycle_focus(&mut self, forward: bool) -> Vec<Effect> {
        let target = match self.mode() {
            Mode::Lightbox => focus::cycle(&LIGHTBOX_RING, self.focus, forward),
            Mode::Carousel => {
                let visible = self.images.len().min(self.thumbnail_lead);
                focus::cycle(&focus::carousel_ring(visible), self.focus, forward)
            }
        };

        self.focus = target;
        target.map(Effect::Focus).into_iter().collect()
    }

    fn transitioned(&mut self, ticket: Option<TransitionTicket>) -> Vec<Effect> {
        let Some(ticket) = ticket else {
            tracing::debug!(
                index = self.carousel.active_index(),
                "navigation dropped while transition in flight"
            );
            return Vec::new();
        };

        let index = self.carousel.active_index();
        vec![
            Effect::ScheduleSettle(ticket),
            Effect::RevealThumbnail(index),
            Effect::Preload(index),
        ]
    }
}
