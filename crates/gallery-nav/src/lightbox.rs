use crate::{
    focus::FocusTarget,
    scroll_lock::{ScrollLock, ScrollLockGuard},
};

/// Open lightbox. Owning the guard ties the page scroll lock to this state:
/// leaving `Open` by any path releases it.
#[derive(Debug)]
pub struct OpenLightbox {
    index: usize,
    opener: Option<FocusTarget>,
    _scroll_lock: ScrollLockGuard,
}

impl OpenLightbox {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn opener(&self) -> Option<FocusTarget> {
        self.opener
    }
}

#[derive(Debug, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(OpenLightbox),
}

#[derive(Debug)]
pub struct LightboxController {
    state: LightboxState,
    len: usize,
    scroll_lock: ScrollLock,
}

impl LightboxController {
    pub fn new(len: usize, scroll_lock: ScrollLock) -> Self {
        Self {
            state: LightboxState::Closed,
            len: len.max(1),
            scroll_lock,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn index(&self) -> Option<usize> {
        match &self.state {
            LightboxState::Open(open) => Some(open.index),
            LightboxState::Closed => None,
        }
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    /// Opens at `index` (clamped into range). Re-opening while open re-seeds
    /// the index and keeps the single lock already held.
    pub fn open(&mut self, index: usize, opener: Option<FocusTarget>) {
        let index = index.min(self.len - 1);

        match &mut self.state {
            LightboxState::Open(open) => open.index = index,
            LightboxState::Closed => {
                self.state = LightboxState::Open(OpenLightbox {
                    index,
                    opener,
                    _scroll_lock: self.scroll_lock.acquire(),
                });
            }
        }
    }

    /// Closes and returns the control that opened the lightbox.
    pub fn close(&mut self) -> Option<FocusTarget> {
        match std::mem::take(&mut self.state) {
            LightboxState::Open(open) => open.opener,
            LightboxState::Closed => None,
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        let len = self.len;
        match &mut self.state {
            LightboxState::Open(open) => {
                open.index = (open.index + 1) % len;
                Some(open.index)
            }
            LightboxState::Closed => None,
        }
    }

    pub fn previous(&mut self) -> Option<usize> {
        let len = self.len;
        match &mut self.state {
            LightboxState::Open(open) => {
                open.index = (open.index + len - 1) % len;
                Some(open.index)
            }
            LightboxState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_locks_and_close_releases() {
        let lock = ScrollLock::new();
        let mut lightbox = LightboxController::new(5, lock.clone());

        lightbox.open(2, Some(FocusTarget::MainImage));
        assert!(lightbox.is_open());
        assert!(lock.is_locked());

        assert_eq!(lightbox.close(), Some(FocusTarget::MainImage));
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_navigation_wraps_without_lock() {
        let mut lightbox = LightboxController::new(3, ScrollLock::new());
        lightbox.open(2, None);

        assert_eq!(lightbox.next(), Some(0));
        assert_eq!(lightbox.next(), Some(1));
        assert_eq!(lightbox.previous(), Some(0));
        assert_eq!(lightbox.previous(), Some(2));
    }

    #[test]
    fn test_reopen_keeps_single_lock() {
        let lock = ScrollLock::new();
        let mut lightbox = LightboxController::new(4, lock.clone());

        lightbox.open(0, Some(FocusTarget::Thumbnail(0)));
        lightbox.open(3, Some(FocusTarget::MainImage));
        assert_eq!(lightbox.index(), Some(3));

        assert_eq!(lightbox.close(), Some(FocusTarget::Thumbnail(0)));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_closed_lightbox_ignores_navigation() {
        let mut lightbox = LightboxController::new(4, ScrollLock::new());
        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.close(), None);
    }

    #[test]
    fn test_out_of_range_open_is_clamped() {
        let mut lightbox = LightboxController::new(4, ScrollLock::new());
        lightbox.open(10, None);
        assert_eq!(lightbox.index(), Some(3));
    }

    #[test]
    fn test_drop_releases_lock() {
        let lock = ScrollLock::new();
        {
            let mut lightbox = LightboxController::new(2, lock.clone());
            lightbox.open(1, None);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }
}
