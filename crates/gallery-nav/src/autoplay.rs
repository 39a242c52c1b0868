use crate::keyboard::Mode;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlay {
    enabled: bool,
    interval: Duration,
}

impl AutoPlay {
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self { enabled, interval }
    }

    /// Autoplay and the lightbox are never active together.
    pub fn is_running(&self, mode: Mode) -> bool {
        self.enabled && mode == Mode::Carousel
    }

    /// Tick period while running; `None` means no timer should exist.
    pub fn interval(&self, mode: Mode) -> Option<Duration> {
        self.is_running(mode).then_some(self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspended_while_lightbox_open() {
        let auto_play = AutoPlay::new(true, Duration::from_secs(5));
        assert_eq!(
            auto_play.interval(Mode::Carousel),
            Some(Duration::from_secs(5))
        );
        assert_eq!(auto_play.interval(Mode::Lightbox), None);
    }

    #[test]
    fn test_disabled_never_runs() {
        let auto_play = AutoPlay::new(false, Duration::from_secs(5));
        assert!(!auto_play.is_running(Mode::Carousel));
        assert_eq!(auto_play.interval(Mode::Carousel), None);
    }
}
