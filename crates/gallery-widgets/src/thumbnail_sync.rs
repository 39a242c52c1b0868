//! Thumbnail rail geometry and the policy that keeps the active thumbnail in view

/// Gap kept between a revealed thumbnail and the rail edge.
pub const SYNC_MARGIN: f32 = 20.0;

/// The horizontal slice of the rail currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisibleRange {
    pub offset: f32,
    pub width: f32,
}

impl VisibleRange {
    pub fn new(offset: f32, width: f32) -> Self {
        Self { offset, width }
    }

    pub fn right(&self) -> f32 {
        self.offset + self.width
    }
}

/// Left and right edges of one thumbnail in rail content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbRect {
    pub left: f32,
    pub right: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    None,
    ScrollTo(f32),
}

/// Scroll only when the target is not fully visible.
pub fn sync_thumbnail(visible: VisibleRange, target: ThumbRect) -> ScrollAction {
    if target.left < visible.offset {
        ScrollAction::ScrollTo((target.left - SYNC_MARGIN).max(0.0))
    } else if target.right > visible.right() {
        ScrollAction::ScrollTo(target.right - visible.width + SYNC_MARGIN)
    } else {
        ScrollAction::None
    }
}

/// Fixed thumbnail geometry of the rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailMetrics {
    pub thumb_width: f32,
    pub spacing: f32,
    pub padding: f32,
}

impl RailMetrics {
    pub fn new(thumb_width: f32, spacing: f32, padding: f32) -> Self {
        Self {
            thumb_width,
            spacing,
            padding,
        }
    }

    pub fn thumb_rect(&self, slot: usize) -> ThumbRect {
        let left = self.padding + slot as f32 * (self.thumb_width + self.spacing);
        ThumbRect {
            left,
            right: left + self.thumb_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: VisibleRange = VisibleRange {
        offset: 100.0,
        width: 300.0,
    };

    #[test]
    fn test_visible_target_does_not_scroll() {
        let target = ThumbRect {
            left: 100.0,
            right: 400.0,
        };
        assert_eq!(sync_thumbnail(VIEW, target), ScrollAction::None);
    }

    #[test]
    fn test_target_left_of_view() {
        let target = ThumbRect {
            left: 60.0,
            right: 124.0,
        };
        assert_eq!(sync_thumbnail(VIEW, target), ScrollAction::ScrollTo(40.0));
    }

    #[test]
    fn test_left_scroll_clamps_at_zero() {
        let target = ThumbRect {
            left: 8.0,
            right: 72.0,
        };
        assert_eq!(sync_thumbnail(VIEW, target), ScrollAction::ScrollTo(0.0));
    }

    #[test]
    fn test_target_right_of_view() {
        let target = ThumbRect {
            left: 380.0,
            right: 444.0,
        };
        // 444 - 300 + 20
        assert_eq!(sync_thumbnail(VIEW, target), ScrollAction::ScrollTo(164.0));
    }

    #[test]
    fn test_thumb_rects() {
        let metrics = RailMetrics::new(96.0, 8.0, 4.0);

        assert_eq!(
            metrics.thumb_rect(0),
            ThumbRect {
                left: 4.0,
                right: 100.0
            }
        );
        assert_eq!(metrics.thumb_rect(2).left, 4.0 + 2.0 * 104.0);
    }
}
