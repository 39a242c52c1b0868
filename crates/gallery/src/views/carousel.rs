//! The in-page carousel: main image, arrows, counter, caption, dots and rail

use crate::{
    fl, labels,
    message::{CarouselMessage, Message},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::stack,
    theme,
    widget::{
        Id, Space, button, column, container, horizontal_space, icon, image, row, text, tooltip,
    },
};
use gallery_config::GalleryConfig;
use gallery_image::ImageCache;
use gallery_nav::{FocusTarget, Gallery};
use gallery_widgets::{
    DotStrip, RailLayout, RailMetrics, RailThumb, dot_strip, swipe_surface, thumbnail_rail,
};
use shared::LoadingState;

pub const RAIL_SCROLL_ID: &str = "thumbnail-rail";
const RAIL_SPACING: u16 = 8;
const RAIL_PADDING: u16 = 4;
const STAGE_HEIGHT: f32 = 420.0;

/// Rail geometry shared by the view and the sync policy in `update`.
pub fn rail_metrics(thumbnail_size: u32) -> RailMetrics {
    RailMetrics::new(
        thumbnail_size as f32,
        RAIL_SPACING as f32,
        RAIL_PADDING as f32,
    )
}

fn control_class(focused: bool) -> theme::Button {
    if focused {
        theme::Button::Suggested
    } else {
        theme::Button::Standard
    }
}

pub struct CarouselView<'a> {
    gallery: &'a Gallery,
    cache: &'a ImageCache,
    config: &'a GalleryConfig,
}

impl<'a> CarouselView<'a> {
    pub fn new(gallery: &'a Gallery, cache: &'a ImageCache, config: &'a GalleryConfig) -> Self {
        Self {
            gallery,
            cache,
            config,
        }
    }

    fn is_focused(&self, target: FocusTarget) -> bool {
        self.gallery.focus() == Some(target)
    }

    fn stage(&self) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;
        let active = self.gallery.active_image();

        let picture: Element<'a, Message> = match self.cache.get_full(&active.id) {
            Some(cached) => image(cached.handle)
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(STAGE_HEIGHT))
                .opacity(self.gallery.carousel().opacity())
                .into(),
            None => {
                let status = match self.cache.state(&active.id) {
                    LoadingState::Error(_) => fl!("image-unavailable"),
                    _ => fl!("status-loading"),
                };

                container(text::body(status))
                    .center(Length::Fill)
                    .height(Length::Fixed(STAGE_HEIGHT))
                    .class(theme::Container::Card)
                    .into()
            }
        };

        let label = labels::main_image(
            self.gallery.active_index(),
            self.gallery.images().len(),
            &active.alt,
            self.gallery.show_lightbox(),
        );

        let main = button::custom(picture)
            .padding(0)
            .width(Length::Fill)
            .class(if self.is_focused(FocusTarget::MainImage) {
                theme::Button::Suggested
            } else {
                theme::Button::Text
            })
            .on_press_maybe(
                self.gallery
                    .show_lightbox()
                    .then_some(Message::Carousel(CarouselMessage::ActivateMain)),
            );

        let counter = container(text::caption(fl!(
            "image-counter",
            current = (self.gallery.active_index() + 1).to_string(),
            total = self.gallery.images().len().to_string()
        )))
        .padding([spacing.space_xxxs, spacing.space_xs])
        .class(theme::Container::Dialog);

        let badge_row = row()
            .push(horizontal_space())
            .push(counter)
            .width(Length::Fill)
            .padding(spacing.space_xs);

        // Swipes count only when they start on the main image
        let touch_layer = swipe_surface(Message::Touch);

        let stage = stack![
            tooltip(main, text::caption(label), tooltip::Position::Bottom),
            badge_row,
            touch_layer
        ];

        let prev_btn = container(
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press(Message::Carousel(CarouselMessage::Previous))
                .class(control_class(self.is_focused(FocusTarget::Previous))),
        )
        .center_y(Length::Fixed(STAGE_HEIGHT));

        let next_btn = container(
            button::icon(icon::from_name("go-next-symbolic"))
                .on_press(Message::Carousel(CarouselMessage::Next))
                .class(control_class(self.is_focused(FocusTarget::Next))),
        )
        .center_y(Length::Fixed(STAGE_HEIGHT));

        let previous = tooltip(
            prev_btn,
            text::caption(fl!("carousel-previous")),
            tooltip::Position::Top,
        );
        let next = tooltip(
            next_btn,
            text::caption(fl!("carousel-next")),
            tooltip::Position::Top,
        );

        row()
            .push(previous)
            .push(stage)
            .push(next)
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }

    fn caption(&self) -> Option<Element<'a, Message>> {
        let spacing = theme::active().cosmic().spacing;
        let title = self.gallery.active_image().title.as_deref()?;

        Some(
            container(text::body(title.to_string()))
                .padding(spacing.space_xs)
                .width(Length::Fill)
                .class(theme::Container::Card)
                .into(),
        )
    }

    fn rail(&self) -> Element<'a, Message> {
        let images = self.gallery.images();
        let layout = RailLayout::new(images.len(), self.gallery.thumbnail_lead());
        let metrics = rail_metrics(self.config.thumbnail_size.pixels());

        let thumbs = images
            .iter()
            .take(layout.visible)
            .enumerate()
            .map(|(index, img)| {
                let handle = self.cache.get_thumbnail(&img.id).map(|cached| cached.handle);
                let state = self.cache.thumbnail_state(&img.id);
                RailThumb::new(labels::thumbnail(index, &img.alt), handle, &state)
            })
            .collect();

        let focused = match self.gallery.focus() {
            Some(FocusTarget::Thumbnail(slot)) => Some(slot),
            _ => None,
        };

        thumbnail_rail(thumbs, layout)
            .active(self.gallery.active_index())
            .focused(focused)
            .thumbnail_size(metrics.thumb_width as u16)
            .spacing(RAIL_SPACING)
            .padding(RAIL_PADDING)
            .id(Id::new(RAIL_SCROLL_ID))
            .overflow_label(labels::overflow(layout.hidden))
            .on_select(|slot| Message::Carousel(CarouselMessage::Thumbnail(slot)))
            .on_scroll(|viewport| Message::Carousel(CarouselMessage::RailScrolled(viewport)))
            .into_element()
    }

    pub fn view(self) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let strip = DotStrip::new(self.gallery.images().len(), self.config.max_dots);
        let dots = dot_strip(
            strip,
            self.gallery.active_index(),
            labels::overflow(strip.overflow),
            |dot| Message::Carousel(CarouselMessage::GoTo(dot)),
        );

        let mut content = column()
            .push(self.stage())
            .spacing(spacing.space_s)
            .width(Length::Fill);

        if let Some(caption) = self.caption() {
            content = content.push(caption);
        }

        content
            .push(
                row()
                    .push(horizontal_space())
                    .push(dots)
                    .push(horizontal_space())
                    .width(Length::Fill),
            )
            .push(self.rail())
            .push(Space::new(Length::Fill, Length::Fixed(spacing.space_xs as f32)))
            .into()
    }
}
