use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget::{Space, button, container, row, text},
};
use crate::indicators::DotStrip;

const DOT_SIZE: f32 = 8.0;

/// Dot indicators. `overflow_label` trails the dots when the list outgrows
/// the strip.
pub fn dot_strip<'a, M, F>(
    strip: DotStrip,
    active: usize,
    overflow_label: String,
    on_select: F,
) -> Element<'a, M>
where
    M: Clone + 'static,
    F: Fn(usize) -> M,
{
    let mut dots = row().spacing(6).align_y(Alignment::Center);

    for dot in 0..strip.dots {
        let fill = container(Space::new(Length::Fixed(DOT_SIZE), Length::Fixed(DOT_SIZE)));

        dots = dots.push(
            button::custom(fill)
                .padding(2)
                .class(if strip.is_active(dot, active) {
                    theme::Button::Suggested
                } else {
                    theme::Button::Standard
                })
                .on_press(on_select(dot)),
        );
    }

    if strip.overflow > 0 {
        dots = dots.push(text::caption(overflow_label));
    }

    dots.into()
}
