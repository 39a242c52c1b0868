//! ThumbnailRail - horizontal strip of thumbnails under the carousel
//!
//! Renders at most `thumbnail_lead` thumbnails. When images are left out the
//! last thumbnail carries a "+N" badge. Scrolling is driven from outside
//! through the scrollable id and [`crate::thumbnail_sync`].

use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::{
        scrollable::{Direction, Scrollbar, Viewport},
        stack,
    },
    theme,
    widget::{
        Id, Space, button, container, icon, image, image::Handle, row, scrollable, text, tooltip,
    },
};
use shared::{AccessibilityInfo, LoadingState};

use crate::indicators::RailLayout;

/// One rendered slot of the rail.
#[derive(Debug, Clone)]
pub struct RailThumb {
    pub handle: Option<Handle>,
    pub failed: bool,
    pub accessibility: AccessibilityInfo,
}

impl RailThumb {
    /// `label` is the spoken name of the slot, e.g. "View image 3: Lobby".
    pub fn new(label: impl Into<String>, handle: Option<Handle>, state: &LoadingState) -> Self {
        Self {
            failed: handle.is_none() && matches!(state, LoadingState::Error(_)),
            handle,
            accessibility: AccessibilityInfo::button().with_label(label),
        }
    }
}

pub struct ThumbnailRail<'a, M> {
    thumbs: Vec<RailThumb>,
    layout: RailLayout,
    active: usize,
    focused: Option<usize>,
    thumbnail_size: u16,
    spacing: u16,
    padding: u16,
    id: Option<Id>,
    overflow_label: Option<String>,
    on_select: Option<Box<dyn Fn(usize) -> M + 'a>>,
    on_scroll: Option<Box<dyn Fn(Viewport) -> M + 'a>>,
}

impl<'a, M: Clone + 'static> ThumbnailRail<'a, M> {
    /// `thumbs` holds the visible slots only, in order.
    pub fn new(thumbs: Vec<RailThumb>, layout: RailLayout) -> Self {
        Self {
            thumbs,
            layout,
            active: 0,
            focused: None,
            thumbnail_size: 96,
            spacing: 8,
            padding: 4,
            id: None,
            overflow_label: None,
            on_select: None,
            on_scroll: None,
        }
    }

    pub fn active(mut self, index: usize) -> Self {
        self.active = index;
        self
    }

    /// Rail slot holding keyboard focus.
    pub fn focused(mut self, slot: Option<usize>) -> Self {
        self.focused = slot;
        self
    }

    pub fn thumbnail_size(mut self, size: u16) -> Self {
        self.thumbnail_size = size;
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> M + 'a,
    {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Reports the rail viewport; feed it back as the sync policy's visible range.
    pub fn on_scroll<F>(mut self, f: F) -> Self
    where
        F: Fn(Viewport) -> M + 'a,
    {
        self.on_scroll = Some(Box::new(f));
        self
    }

    /// Badge text for the marker slot, e.g. "+12".
    pub fn overflow_label(mut self, label: impl Into<String>) -> Self {
        self.overflow_label = Some(label.into());
        self
    }

    fn slot_view(&self, slot: usize, thumb: &RailThumb) -> Element<'a, M> {
        let size = self.thumbnail_size as f32;

        let picture: Element<'a, M> = match &thumb.handle {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .into(),
            None if thumb.failed => container(icon::from_name("image-missing-symbolic").size(24))
                .center(Length::Fixed(size))
                .class(theme::Container::Dialog)
                .into(),
            None => container(Space::new(Length::Fixed(size), Length::Fixed(size)))
                .class(theme::Container::Card)
                .into(),
        };

        let badge = self
            .overflow_label
            .clone()
            .filter(|_| self.layout.marker_slot() == Some(slot));

        let content: Element<'a, M> = match badge {
            Some(label) => {
                let badge = container(text::title4(label))
                    .center(Length::Fixed(size))
                    .class(theme::Container::Dialog);
                stack![picture, badge].into()
            }
            None => picture,
        };

        let highlighted =
            self.layout.is_highlighted(slot, self.active) || self.focused == Some(slot);

        let mut btn = button::custom(content)
            .padding(0)
            .class(if highlighted {
                theme::Button::Suggested
            } else {
                theme::Button::Text
            });

        if let Some(ref on_select) = self.on_select {
            btn = btn.on_press(on_select(slot));
        }

        tooltip(
            btn,
            text::caption(thumb.accessibility.get_aria_label()),
            tooltip::Position::Top,
        )
        .into()
    }

    pub fn into_element(self) -> Element<'a, M> {
        let slots: Vec<Element<'a, M>> = self
            .thumbs
            .iter()
            .enumerate()
            .map(|(slot, thumb)| self.slot_view(slot, thumb))
            .collect();

        let strip = row::with_children(slots)
            .spacing(self.spacing)
            .padding(self.padding)
            .align_y(Alignment::Center);

        let mut rail = scrollable(strip)
            .direction(Direction::Horizontal(Scrollbar::default()))
            .width(Length::Fill);

        if let Some(id) = self.id {
            rail = rail.id(id);
        }

        if let Some(on_scroll) = self.on_scroll {
            rail = rail.on_scroll(on_scroll);
        }

        rail.into()
    }
}

/// Constructor function
pub fn thumbnail_rail<'a, M: Clone + 'static>(
    thumbs: Vec<RailThumb>,
    layout: RailLayout,
) -> ThumbnailRail<'a, M> {
    ThumbnailRail::new(thumbs, layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_thumbnail_gets_its_own_fallback() {
        let failed = RailThumb::new("View image 1: Pool", None, &LoadingState::Error("eof".into()));
        let loading = RailThumb::new("View image 2: Lobby", None, &LoadingState::Loading);

        assert!(failed.failed);
        assert!(!loading.failed);
        assert_eq!(failed.accessibility.get_aria_label(), "View image 1: Pool");
    }

    #[test]
    fn test_decoded_thumbnail_is_never_marked_failed() {
        let handle = Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let thumb = RailThumb::new("View image 1: Pool", Some(handle), &LoadingState::Ready);
        assert!(!thumb.failed);
    }
}
