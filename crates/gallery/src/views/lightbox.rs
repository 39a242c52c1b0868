use crate::{
    fl, labels,
    message::{LightboxMessage, Message},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{
        Space, button, column, container, horizontal_space, icon, image, mouse_area, row, text,
        tooltip,
    },
};
use gallery_image::ImageCache;
use gallery_nav::{FocusTarget, Gallery};
use gallery_types::GalleryImage;
use shared::{AccessibilityInfo, LoadingState};

/// Full-window dialog showing the lightbox image. The backdrop and the stack
/// are assembled by the application view.
pub struct LightboxView<'a> {
    gallery: &'a Gallery,
    cache: &'a ImageCache,
}

impl<'a> LightboxView<'a> {
    pub fn new(gallery: &'a Gallery, cache: &'a ImageCache) -> Self {
        Self { gallery, cache }
    }

    fn control(
        &self,
        icon_name: &'static str,
        target: FocusTarget,
        message: LightboxMessage,
    ) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let class = if self.gallery.focus() == Some(target) {
            theme::Button::Suggested
        } else if target == FocusTarget::LightboxClose {
            theme::Button::Destructive
        } else {
            theme::Button::Standard
        };

        button::icon(icon::from_name(icon_name))
            .on_press(Message::Lightbox(message))
            .padding(spacing.space_xs)
            .class(class)
            .into()
    }

    fn picture(&self, image_info: &GalleryImage) -> Element<'a, Message> {
        match self.cache.get_full(&image_info.id) {
            Some(cached) => container(
                image(cached.handle)
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .center(Length::Fill)
            .into(),
            None => {
                let status = match self.cache.state(&image_info.id) {
                    LoadingState::Error(_) => fl!("image-unavailable"),
                    _ => fl!("status-loading"),
                };

                container(
                    column()
                        .push(icon::from_name("content-loading-symbolic").size(48))
                        .push(text::body(status))
                        .spacing(theme::active().cosmic().spacing.space_s)
                        .align_x(Alignment::Center),
                )
                .center(Length::Fill)
                .into()
            }
        }
    }

    pub fn view(self) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let (Some(index), Some(current)) =
            (self.gallery.lightbox().index(), self.gallery.lightbox_image())
        else {
            return Space::new(Length::Shrink, Length::Shrink).into();
        };
        let total = self.gallery.images().len();

        let dialog_info = AccessibilityInfo::dialog().with_label(fl!("lightbox-title"));

        // Live counter, re-rendered on every step
        let counter_info = AccessibilityInfo::status()
            .with_label(labels::position(index, total))
            .make_live_region();

        let close_btn = tooltip(
            self.control(
                "window-close-symbolic",
                FocusTarget::LightboxClose,
                LightboxMessage::Close,
            ),
            text::caption(fl!("lightbox-close")),
            tooltip::Position::Bottom,
        );

        let header = row()
            .push(text::heading(dialog_info.get_aria_label()))
            .push(horizontal_space())
            .push(text::body(counter_info.get_aria_label()))
            .push(close_btn)
            .spacing(spacing.space_s)
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .padding(spacing.space_xs);

        let prev_btn = container(tooltip(
            self.control(
                "go-previous-symbolic",
                FocusTarget::LightboxPrevious,
                LightboxMessage::Previous,
            ),
            text::caption(fl!("lightbox-previous")),
            tooltip::Position::Right,
        ))
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        let next_btn = container(tooltip(
            self.control(
                "go-next-symbolic",
                FocusTarget::LightboxNext,
                LightboxMessage::Next,
            ),
            text::caption(fl!("lightbox-next")),
            tooltip::Position::Left,
        ))
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        let content_row = row()
            .push(prev_btn)
            .push(self.picture(current))
            .push(next_btn)
            .width(Length::Fill)
            .height(Length::Fill);

        let caption = current.title.clone().unwrap_or_else(|| current.alt.clone());
        let footer = row()
            .push(horizontal_space())
            .push(text::body(caption))
            .push(horizontal_space())
            .width(Length::Fill)
            .padding(spacing.space_xs);

        // Presses inside the dialog must not reach the backdrop
        container(
            mouse_area(
                container(
                    column()
                        .push(header)
                        .push(content_row)
                        .push(footer)
                        .width(Length::Fill)
                        .height(Length::Fill),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .class(theme::Container::Dialog),
            )
            .on_press(Message::Lightbox(LightboxMessage::Inside)),
        )
        .padding([60, 80])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
