/// Interactive gallery controls that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Previous,
    MainImage,
    Next,
    Thumbnail(usize),
    LightboxClose,
    LightboxPrevious,
    LightboxNext,
}

impl FocusTarget {
    pub fn is_lightbox(self) -> bool {
        matches!(
            self,
            FocusTarget::LightboxClose | FocusTarget::LightboxPrevious | FocusTarget::LightboxNext
        )
    }
}

/// Focus order inside the lightbox. The close control comes first and
/// receives focus when the lightbox opens.
pub const LIGHTBOX_RING: [FocusTarget; 3] = [
    FocusTarget::LightboxClose,
    FocusTarget::LightboxPrevious,
    FocusTarget::LightboxNext,
];

/// Focus order of the carousel surface: arrows around the main image, then the
/// visible thumbnails.
pub fn carousel_ring(visible_thumbnails: usize) -> Vec<FocusTarget> {
    let mut ring = vec![
        FocusTarget::Previous,
        FocusTarget::MainImage,
        FocusTarget::Next,
    ];
    ring.extend((0..visible_thumbnails).map(FocusTarget::Thumbnail));
    ring
}

pub fn cycle(
    ring: &[FocusTarget],
    current: Option<FocusTarget>,
    forward: bool,
) -> Option<FocusTarget> {
    let len = ring.len();
    if len == 0 {
        return None;
    }

    let position = current.and_then(|target| ring.iter().position(|&t| t == target));

    let next = match (position, forward) {
        (Some(pos), true) => (pos + 1) % len,
        (Some(pos), false) => (pos + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };

    Some(ring[next])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        let ring = carousel_ring(2);
        assert_eq!(ring.len(), 5);

        assert_eq!(
            cycle(&ring, Some(FocusTarget::Thumbnail(1)), true),
            Some(FocusTarget::Previous)
        );
        assert_eq!(
            cycle(&ring, Some(FocusTarget::Previous), false),
            Some(FocusTarget::Thumbnail(1))
        );
    }

    #[test]
    fn test_cycle_enters_ring_from_outside() {
        assert_eq!(
            cycle(&LIGHTBOX_RING, Some(FocusTarget::MainImage), true),
            Some(FocusTarget::LightboxClose)
        );
        assert_eq!(
            cycle(&LIGHTBOX_RING, None, false),
            Some(FocusTarget::LightboxNext)
        );
        assert_eq!(cycle(&[], None, true), None);
    }
}
