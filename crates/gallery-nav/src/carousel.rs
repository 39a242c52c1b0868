use std::time::Duration;

/// How long an index change holds the transition lock.
pub const TRANSITION_SETTLE: Duration = Duration::from_millis(300);

/// Proof of one lock acquisition. Only the ticket of the transition in flight
/// can release the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    active_index: usize,
    is_transitioning: bool,
    len: usize,
    generation: u64,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            active_index: 0,
            is_transitioning: false,
            len: len.max(1),
            generation: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Opacity of the displayed image; it fades out for the settle window.
    pub fn opacity(&self) -> f32 {
        if self.is_transitioning { 0.0 } else { 1.0 }
    }

    pub fn go_to_next(&mut self) -> Option<TransitionTicket> {
        if self.is_transitioning {
            return None;
        }

        let next = (self.active_index + 1) % self.len;
        Some(self.begin(next))
    }

    pub fn go_to_previous(&mut self) -> Option<TransitionTicket> {
        if self.is_transitioning {
            return None;
        }

        let prev = (self.active_index + self.len - 1) % self.len;
        Some(self.begin(prev))
    }

    pub fn go_to_index(&mut self, index: usize) -> Option<TransitionTicket> {
        if self.is_transitioning || index == self.active_index || index >= self.len {
            return None;
        }

        Some(self.begin(index))
    }

    pub fn go_to_first(&mut self) -> Option<TransitionTicket> {
        self.go_to_index(0)
    }

    pub fn go_to_last(&mut self) -> Option<TransitionTicket> {
        self.go_to_index(self.len - 1)
    }

    /// Releases the lock if `ticket` belongs to the transition in flight.
    pub fn settle(&mut self, ticket: TransitionTicket) -> bool {
        if !self.is_transitioning || ticket.generation != self.generation {
            return false;
        }

        self.is_transitioning = false;
        true
    }

    /// Invalidates any outstanding ticket and drops the lock.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.is_transitioning = false;
    }

    fn begin(&mut self, index: usize) -> TransitionTicket {
        self.active_index = index;
        self.is_transitioning = true;
        self.generation = self.generation.wrapping_add(1);

        TransitionTicket {
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_next(carousel: &mut CarouselState) {
        let ticket = carousel.go_to_next().expect("lock is free");
        assert!(carousel.settle(ticket));
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        for len in 1..6 {
            let mut carousel = CarouselState::new(len);
            for _ in 0..len - 1 {
                step_next(&mut carousel);
            }
            assert_eq!(carousel.active_index(), len - 1);

            step_next(&mut carousel);
            assert_eq!(carousel.active_index(), 0);
        }
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        for len in 1..6 {
            let mut carousel = CarouselState::new(len);
            let ticket = carousel.go_to_previous().unwrap();
            assert_eq!(carousel.active_index(), len - 1);
            assert!(carousel.settle(ticket));
        }
    }

    #[test]
    fn test_second_request_inside_window_is_dropped() {
        let mut carousel = CarouselState::new(5);

        let first = carousel.go_to_next();
        let second = carousel.go_to_next();

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(carousel.active_index(), 1);
        assert!(carousel.is_transitioning());
        assert_eq!(carousel.opacity(), 0.0);
    }

    #[test]
    fn test_go_to_index_ignores_current_and_out_of_range() {
        let mut carousel = CarouselState::new(3);

        assert!(carousel.go_to_index(0).is_none());
        assert!(carousel.go_to_index(3).is_none());
        assert!(!carousel.is_transitioning());

        let ticket = carousel.go_to_index(2).unwrap();
        assert_eq!(carousel.active_index(), 2);
        assert!(carousel.go_to_index(1).is_none());
        assert!(carousel.settle(ticket));
        assert_eq!(carousel.opacity(), 1.0);
    }

    #[test]
    fn test_stale_ticket_does_not_release_lock() {
        let mut carousel = CarouselState::new(4);

        let stale = carousel.go_to_next().unwrap();
        carousel.cancel();
        let fresh = carousel.go_to_next().unwrap();

        assert!(!carousel.settle(stale));
        assert!(carousel.is_transitioning());
        assert!(carousel.settle(fresh));
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_first_and_last() {
        let mut carousel = CarouselState::new(6);
        let ticket = carousel.go_to_last().unwrap();
        assert_eq!(carousel.active_index(), 5);
        carousel.settle(ticket);

        let ticket = carousel.go_to_first().unwrap();
        assert_eq!(carousel.active_index(), 0);
        carousel.settle(ticket);
        assert!(carousel.go_to_first().is_none());
    }
}
