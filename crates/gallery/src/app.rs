//! Main app state

use crate::{
    fl,
    key_binds::key_press_handler,
    message::{CarouselMessage, ImageMessage, LightboxMessage, Message},
    views::{CarouselView, LightboxView, PAGE_SCROLL_ID, RAIL_SCROLL_ID, rail_metrics},
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{
        Length, Subscription,
        time::every,
        widget::scrollable::{AbsoluteOffset, Viewport},
    },
    iced_widget::{scrollable, stack},
    theme,
    widget::{Id, Space, column, container, mouse_area, text},
};
use gallery_config::{APP_ID, GalleryConfig};
use gallery_image::{CachedImage, ImageCache, load_image, load_thumbnail, preload_window};
use gallery_nav::{Effect, FocusTarget, Gallery, ScrollLock, TRANSITION_SETTLE, TransitionTicket};
use gallery_types::{GalleryError, GalleryImage, ImageList};
use gallery_widgets::{RailLayout, ScrollAction, SurfaceTouch, VisibleRange, sync_thumbnail};
use std::{path::PathBuf, sync::Arc};

pub struct GalleryApp {
    core: Core,
    config: GalleryConfig,
    config_handler: Option<Config>,
    /// `None` until a non-empty list has loaded; nothing is rendered then.
    gallery: Option<Gallery>,
    cache: ImageCache,
    scroll_lock: ScrollLock,
    /// Last page offset seen while the scroll lock was free.
    page_offset: AbsoluteOffset,
    rail_visible: Option<VisibleRange>,
}

impl GalleryApp {
    fn load_source(path: PathBuf) -> Task<Action<Message>> {
        cosmic::task::future(async move {
            match gallery_nav::load_source(path).await {
                Ok(images) => Message::SourceLoaded(images),
                Err(e) => Message::SourceFailed(Arc::new(e.to_string())),
            }
        })
    }

    fn mount(&mut self, images: Vec<GalleryImage>) -> Task<Action<Message>> {
        match ImageList::new(images) {
            Ok(list) => {
                tracing::info!(images = list.len(), "gallery mounted");
                self.cache.clear();
                self.rail_visible = None;
                self.gallery = Some(Gallery::new(list, &self.config, self.scroll_lock.clone()));

                Task::batch([self.preload_around(0), self.load_rail_thumbnails()])
            }
            Err(GalleryError::Empty) => {
                tracing::info!("no images to show");
                self.gallery = None;
                Task::none()
            }
            Err(e) => {
                tracing::error!("rejected image list: {e}");
                self.gallery = None;
                Task::none()
            }
        }
    }

    fn settle_after(ticket: TransitionTicket) -> Task<Action<Message>> {
        cosmic::task::future(async move {
            tokio::time::sleep(TRANSITION_SETTLE).await;
            Message::Carousel(CarouselMessage::Settled(ticket))
        })
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Action<Message>> {
        let mut tasks = Vec::with_capacity(effects.len());

        for effect in effects {
            tasks.push(match effect {
                Effect::ScheduleSettle(ticket) => Self::settle_after(ticket),
                Effect::RevealThumbnail(index) => self.reveal_thumbnail(index),
                Effect::Preload(index) => self.preload_around(index),
                Effect::Focus(target) => self.focus_moved(target),
            });
        }

        Task::batch(tasks)
    }

    fn reveal_thumbnail(&mut self, index: usize) -> Task<Action<Message>> {
        let (Some(gallery), Some(visible)) = (&self.gallery, self.rail_visible) else {
            return Task::none();
        };

        let layout = RailLayout::new(gallery.images().len(), gallery.thumbnail_lead());
        let metrics = rail_metrics(self.config.thumbnail_size.pixels());
        let target = metrics.thumb_rect(layout.slot_for(index));

        match sync_thumbnail(visible, target) {
            ScrollAction::None => Task::none(),
            ScrollAction::ScrollTo(x) => {
                self.rail_visible = Some(VisibleRange::new(x, visible.width));
                scrollable::scroll_to(Id::new(RAIL_SCROLL_ID), AbsoluteOffset { x, y: 0.0 })
            }
        }
    }

    fn focus_moved(&mut self, target: FocusTarget) -> Task<Action<Message>> {
        tracing::trace!(?target, "focus moved");

        match target {
            FocusTarget::Thumbnail(slot) => self.reveal_thumbnail(slot),
            _ => Task::none(),
        }
    }

    // Decode the image at `index` and its neighbours
    fn preload_around(&mut self, index: usize) -> Task<Action<Message>> {
        let Some(gallery) = &self.gallery else {
            return Task::none();
        };

        let images = gallery.images();
        let mut tasks = Vec::new();

        for idx in preload_window(index, images.len(), self.config.preload_radius) {
            let Some(img) = images.get(idx) else { continue };

            if !self.cache.begin_load(&img.id) {
                continue;
            }

            let id = img.id.clone();
            let src = img.src.clone();

            tasks.push(cosmic::task::future(async move {
                match load_image(src).await {
                    Ok(img) => Message::Image(ImageMessage::Loaded {
                        id,
                        handle: img.handle,
                        width: img.width,
                        height: img.height,
                    }),
                    Err(e) => Message::Image(ImageMessage::LoadFailed {
                        id,
                        error: e.to_string(),
                    }),
                }
            }));
        }

        Task::batch(tasks)
    }

    fn load_rail_thumbnails(&mut self) -> Task<Action<Message>> {
        let Some(gallery) = &self.gallery else {
            return Task::none();
        };

        let thumbnail_size = self.config.thumbnail_size.pixels();
        let mut tasks = Vec::new();

        for img in gallery.images().iter().take(gallery.thumbnail_lead()) {
            if !self.cache.begin_thumbnail_load(&img.id) {
                continue;
            }

            let id = img.id.clone();
            let src = img.src.clone();

            tasks.push(cosmic::task::future(async move {
                match load_thumbnail(src, thumbnail_size).await {
                    Ok(img) => Message::Image(ImageMessage::ThumbnailReady {
                        id,
                        handle: img.handle,
                        width: img.width,
                        height: img.height,
                    }),
                    Err(e) => Message::Image(ImageMessage::ThumbnailFailed {
                        id,
                        error: e.to_string(),
                    }),
                }
            }));
        }

        Task::batch(tasks)
    }

    fn update_carousel(&mut self, message: CarouselMessage) -> Task<Action<Message>> {
        if let CarouselMessage::RailScrolled(viewport) = message {
            self.rail_visible = Some(visible_range(&viewport));
            return Task::none();
        }

        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        let effects = match message {
            CarouselMessage::Next => gallery.next(),
            CarouselMessage::Previous => gallery.previous(),
            CarouselMessage::GoTo(index) => gallery.go_to(index),
            CarouselMessage::Thumbnail(slot) => gallery.select_thumbnail(slot),
            CarouselMessage::ActivateMain => gallery.activate_main_image(),
            CarouselMessage::Settled(ticket) => {
                gallery.settle(ticket);
                Vec::new()
            }
            CarouselMessage::AutoPlayTick => gallery.auto_play_tick(),
            CarouselMessage::RailScrolled(_) => Vec::new(),
        };

        self.run_effects(effects)
    }

    fn update_lightbox(&mut self, message: LightboxMessage) -> Task<Action<Message>> {
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        let effects = match message {
            LightboxMessage::Close => gallery.close_lightbox(),
            LightboxMessage::Next => gallery.lightbox_next(),
            LightboxMessage::Previous => gallery.lightbox_previous(),
            LightboxMessage::Inside => Vec::new(),
        };

        self.run_effects(effects)
    }

    fn update_touch(&mut self, touch: SurfaceTouch) -> Task<Action<Message>> {
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        let effects = touch_effects(gallery, touch);
        self.run_effects(effects)
    }

    fn update_image(&mut self, message: ImageMessage) {
        match message {
            ImageMessage::Loaded {
                id,
                handle,
                width,
                height,
            } => self.cache.insert_full(
                id,
                CachedImage {
                    handle,
                    width,
                    height,
                },
            ),
            ImageMessage::ThumbnailReady {
                id,
                handle,
                width,
                height,
            } => self.cache.insert_thumbnail(
                id,
                CachedImage {
                    handle,
                    width,
                    height,
                },
            ),
            ImageMessage::LoadFailed { id, error } => {
                tracing::warn!(%id, "Image failed to load: {error}");
                self.cache.mark_failed(id, error);
            }
            ImageMessage::ThumbnailFailed { id, error } => {
                tracing::warn!(%id, "Thumbnail failed to load: {error}");
                self.cache.mark_thumbnail_failed(id, error);
            }
        }
    }

    /// Holds the page still while the scroll lock is held.
    fn page_scrolled(&mut self, viewport: Viewport) -> Task<Action<Message>> {
        let offset = viewport.absolute_offset();

        if !self.scroll_lock.is_locked() {
            self.page_offset = offset;
            return Task::none();
        }

        if offset == self.page_offset {
            return Task::none();
        }

        scrollable::scroll_to(Id::new(PAGE_SCROLL_ID), self.page_offset)
    }

    fn page(&self, gallery: &Gallery) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let content = column()
            .push(text::title3(fl!("app-title")))
            .push(text::caption(fl!(
                "listing-summary",
                count = gallery.images().len()
            )))
            .push(CarouselView::new(gallery, &self.cache, &self.config).view())
            .spacing(spacing.space_s)
            .padding(spacing.space_m)
            .width(Length::Fill);

        scrollable(content)
            .id(Id::new(PAGE_SCROLL_ID))
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Feeds one main-surface touch to the engine.
fn touch_effects(gallery: &mut Gallery, touch: SurfaceTouch) -> Vec<Effect> {
    match touch {
        SurfaceTouch::Pressed { finger, x } => {
            gallery.touch_start(finger, x);
            Vec::new()
        }
        SurfaceTouch::Moved { finger, x } => {
            gallery.touch_move(finger, x);
            Vec::new()
        }
        SurfaceTouch::Lifted { finger } => gallery.touch_end(finger),
        SurfaceTouch::Lost => {
            gallery.touch_cancel();
            Vec::new()
        }
    }
}

fn visible_range(viewport: &Viewport) -> VisibleRange {
    VisibleRange::new(viewport.absolute_offset().x, viewport.bounds().width)
}

impl Application for GalleryApp {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut tasks = vec![];

        let (config, config_handler) = match gallery_config::config() {
            Ok(handler) => {
                let config = match GalleryConfig::get_entry(&handler) {
                    Ok(c) => c,
                    Err((errors, c)) => {
                        for err in errors {
                            tracing::warn!("config: {err}");
                        }
                        c
                    }
                };
                (config, Some(handler))
            }
            Err(e) => {
                tracing::warn!("config store unavailable, using defaults: {e}");
                (GalleryConfig::default(), None)
            }
        };

        let mut app = Self {
            core,
            config,
            config_handler,
            gallery: None,
            cache: ImageCache::with_defaults(),
            scroll_lock: ScrollLock::new(),
            page_offset: AbsoluteOffset::default(),
            rail_visible: None,
        };

        if let Some(id) = app.core.main_window_id() {
            tasks.push(app.set_window_title(fl!("app-title"), id));
        }

        match flags.or_else(dirs::picture_dir) {
            Some(path) => tasks.push(Self::load_source(path)),
            None => tracing::info!("no image source given"),
        }

        (app, Task::batch(tasks))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let Some(gallery) = &self.gallery else {
            return Space::new(Length::Fill, Length::Fill).into();
        };

        let page = self.page(gallery);

        if !gallery.lightbox().is_open() {
            return page;
        }

        // Use mouse-area to close the lightbox when the backdrop is clicked.
        let backdrop = mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .class(theme::Container::Transparent),
        )
        .on_press(Message::Lightbox(LightboxMessage::Close));

        let dialog = LightboxView::new(gallery, &self.cache).view();

        stack![page, backdrop, dialog].into()
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::Carousel(msg) => self.update_carousel(msg),
            Message::Lightbox(msg) => self.update_lightbox(msg),
            Message::Touch(msg) => self.update_touch(msg),
            Message::Image(msg) => {
                self.update_image(msg);
                Task::none()
            }
            Message::Key(key) => match self.gallery.as_mut() {
                Some(gallery) => {
                    let effects = gallery.key(key);
                    self.run_effects(effects)
                }
                None => Task::none(),
            },
            Message::SourceLoaded(images) => self.mount(images),
            Message::SourceFailed(why) => {
                tracing::error!("Failed to load image source: {why}");
                self.gallery = None;
                Task::none()
            }
            Message::PageScrolled(viewport) => self.page_scrolled(viewport),
            Message::ConfigChanged(config) => {
                let thumbnails_changed = config.thumbnail_size != self.config.thumbnail_size;
                self.config = config;

                let effects = match self.gallery.as_mut() {
                    Some(gallery) => gallery.set_config(&self.config),
                    None => Vec::new(),
                };

                if thumbnails_changed {
                    self.cache.clear();
                    let active = self.gallery.as_ref().map_or(0, Gallery::active_index);
                    return Task::batch([
                        self.run_effects(effects),
                        self.preload_around(active),
                        self.load_rail_thumbnails(),
                    ]);
                }

                self.run_effects(effects)
            }
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        // Autoplay timer, present only while it may advance the carousel
        let auto_play_sub = match self.gallery.as_ref().and_then(Gallery::auto_play_interval) {
            Some(interval) => {
                every(interval).map(|_| Message::Carousel(CarouselMessage::AutoPlayTick))
            }
            None => Subscription::none(),
        };

        Subscription::batch([
            cosmic::iced::keyboard::on_key_press(key_press_handler),
            self.core()
                .watch_config::<GalleryConfig>(APP_ID)
                .map(|update| Message::ConfigChanged(update.config)),
            auto_play_sub,
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.teardown();
        }

        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            tracing::warn!("failed to save config: {e}");
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic::iced::{Point, touch};
    use gallery_widgets::surface_touch;

    fn gallery(len: usize) -> Gallery {
        let images = (0..len)
            .map(|i| GalleryImage::new(format!("img-{i}"), format!("{i}.jpg"), "Room"))
            .collect();
        let list = ImageList::new(images).unwrap();
        Gallery::new(list, &GalleryConfig::default(), ScrollLock::new())
    }

    /// Runs a horizontal drag through the surface filter, as the stage layer does.
    fn drag(gallery: &mut Gallery, from: f32, to: f32, on_surface: bool) -> Vec<Effect> {
        let finger = touch::Finger(0);
        let events = [
            touch::Event::FingerPressed {
                id: finger,
                position: Point::new(from, 500.0),
            },
            touch::Event::FingerMoved {
                id: finger,
                position: Point::new(to, 500.0),
            },
            touch::Event::FingerLifted {
                id: finger,
                position: Point::new(to, 500.0),
            },
        ];

        let mut effects = Vec::new();
        for (step, event) in events.iter().enumerate() {
            // Only the press is judged against the surface bounds
            let over = step > 0 || on_surface;
            if let Some(touch) = surface_touch(event, over) {
                effects.extend(touch_effects(gallery, touch));
            }
        }
        effects
    }

    #[test]
    fn test_drag_starting_on_rail_leaves_carousel_alone() {
        let mut g = gallery(5);
        assert!(drag(&mut g, 400.0, 300.0, false).is_empty());
        assert_eq!(g.active_index(), 0);
    }

    #[test]
    fn test_drag_starting_on_main_image_steps() {
        let mut g = gallery(5);
        let effects = drag(&mut g, 400.0, 300.0, true);
        assert!(matches!(effects.first(), Some(Effect::ScheduleSettle(_))));
        assert_eq!(g.active_index(), 1);

        for effect in effects {
            if let Effect::ScheduleSettle(ticket) = effect {
                g.settle(ticket);
            }
        }

        drag(&mut g, 300.0, 400.0, true);
        assert_eq!(g.active_index(), 0);
    }
}
