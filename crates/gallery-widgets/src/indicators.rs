//! Slot bookkeeping for dot indicators and the capped thumbnail rail.

/// Dots shown under the carousel, plus how many images have no dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotStrip {
    pub dots: usize,
    pub overflow: usize,
}

impl DotStrip {
    pub fn new(len: usize, max_dots: usize) -> Self {
        let dots = len.min(max_dots);
        Self {
            dots,
            overflow: len - dots,
        }
    }

    /// A dot lights up only for its own image; images past the last dot light none.
    pub fn is_active(&self, dot: usize, active: usize) -> bool {
        dot < self.dots && dot == active
    }
}

/// Thumbnails rendered in the rail and how many were left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailLayout {
    pub visible: usize,
    pub hidden: usize,
}

impl RailLayout {
    pub fn new(len: usize, lead: usize) -> Self {
        let visible = len.min(lead.max(1));
        Self {
            visible,
            hidden: len - visible,
        }
    }

    /// The slot carrying the "+N" marker, if anything is hidden.
    pub fn marker_slot(&self) -> Option<usize> {
        (self.hidden > 0).then(|| self.visible - 1)
    }

    /// Slot that stands for `active`. Hidden images map onto the marked slot.
    pub fn slot_for(&self, active: usize) -> usize {
        active.min(self.visible.saturating_sub(1))
    }

    pub fn is_highlighted(&self, slot: usize, active: usize) -> bool {
        slot == self.slot_for(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_cap_with_overflow() {
        let strip = DotStrip::new(12, 8);
        assert_eq!(strip, DotStrip { dots: 8, overflow: 4 });

        assert!(strip.is_active(3, 3));
        assert!((0..8).all(|dot| !strip.is_active(dot, 10)));
    }

    #[test]
    fn test_short_list_has_no_overflow() {
        assert_eq!(DotStrip::new(3, 8).overflow, 0);
        assert_eq!(RailLayout::new(3, 10).marker_slot(), None);
    }

    #[test]
    fn test_rail_marker() {
        let rail = RailLayout::new(14, 10);
        assert_eq!(rail, RailLayout { visible: 10, hidden: 4 });
        assert_eq!(rail.marker_slot(), Some(9));
    }

    #[test]
    fn test_hidden_active_maps_onto_marker() {
        let rail = RailLayout::new(14, 10);

        assert_eq!(rail.slot_for(4), 4);
        assert_eq!(rail.slot_for(9), 9);
        assert_eq!(rail.slot_for(12), 9);
        assert!(rail.is_highlighted(9, 13));
        assert!(!rail.is_highlighted(4, 13));
    }
}
