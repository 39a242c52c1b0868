//! SwipeSurface - invisible layer that reports touches on the surface below it
//!
//! Stack it over the main image. A gesture counts only when its first press
//! lands inside the layer's bounds; moves and lifts are still reported once
//! the finger leaves, so a swipe may end anywhere. Events are never captured,
//! so the widgets underneath keep receiving them.

use cosmic::{
    Element, Renderer,
    iced::{
        Length, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer as iced_renderer,
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Cursor},
        touch,
    },
};

/// Touch input that belongs to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceTouch {
    Pressed { finger: u64, x: f32 },
    Moved { finger: u64, x: f32 },
    Lifted { finger: u64 },
    Lost,
}

/// Presses outside the surface are dropped, which keeps their finger from
/// ever being tracked.
pub fn surface_touch(event: &touch::Event, pressed_on_surface: bool) -> Option<SurfaceTouch> {
    match event {
        touch::Event::FingerPressed { id, position } => {
            pressed_on_surface.then_some(SurfaceTouch::Pressed {
                finger: id.0,
                x: position.x,
            })
        }
        touch::Event::FingerMoved { id, position } => Some(SurfaceTouch::Moved {
            finger: id.0,
            x: position.x,
        }),
        touch::Event::FingerLifted { id, .. } => Some(SurfaceTouch::Lifted { finger: id.0 }),
        touch::Event::FingerLost { .. } => Some(SurfaceTouch::Lost),
    }
}

pub struct SwipeSurface<'a, M> {
    on_touch: Box<dyn Fn(SurfaceTouch) -> M + 'a>,
    width: Length,
    height: Length,
}

impl<'a, M> SwipeSurface<'a, M> {
    pub fn new<F>(on_touch: F) -> Self
    where
        F: Fn(SurfaceTouch) -> M + 'a,
    {
        Self {
            on_touch: Box::new(on_touch),
            width: Length::Fill,
            height: Length::Fill,
        }
    }
}

impl<'a, M: Clone + 'static> Widget<M, cosmic::Theme, Renderer> for SwipeSurface<'a, M> {
    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        let limits = limits.width(self.width).height(self.height);
        Node::new(limits.resolve(self.width, self.height, Size::ZERO))
    }

    fn draw(
        &self,
        _tree: &Tree,
        _renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &iced_renderer::Style,
        _layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        _viewport: &Rectangle,
    ) -> Status {
        if let Event::Touch(touch_event) = event {
            // The cursor follows the finger and is already translated into
            // this layer's coordinates by any enclosing scrollable.
            let on_surface = cursor.is_over(layout.bounds());

            if let Some(touch) = surface_touch(&touch_event, on_surface) {
                shell.publish((self.on_touch)(touch));
            }
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        _layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        // Leaves the cursor available to the layers underneath
        mouse::Interaction::None
    }
}

impl<'a, M: Clone + 'static> From<SwipeSurface<'a, M>> for Element<'a, M> {
    fn from(surface: SwipeSurface<'a, M>) -> Self {
        Element::new(surface)
    }
}

/// Constructor function
pub fn swipe_surface<'a, M, F>(on_touch: F) -> SwipeSurface<'a, M>
where
    F: Fn(SurfaceTouch) -> M + 'a,
{
    SwipeSurface::new(on_touch)
}
