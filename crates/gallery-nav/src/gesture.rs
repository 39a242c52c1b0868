/// Horizontal travel, in logical pixels, below which a touch is a tap.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger travelled right to left; shows the next image.
    Left,
    /// Finger travelled left to right; shows the previous image.
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchState {
    pub touch_start_x: Option<f32>,
    pub touch_end_x: Option<f32>,
}

/// Turns raw touch callbacks into swipe intents. Only the finger that
/// started the gesture is tracked.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    touch: TouchState,
    finger: Option<u64>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&self) -> TouchState {
        self.touch
    }

    pub fn touch_start(&mut self, finger: u64, x: f32) {
        if self.finger.is_some_and(|active| active != finger) {
            return;
        }

        self.finger = Some(finger);
        self.touch.touch_end_x = None;
        self.touch.touch_start_x = Some(x);
    }

    pub fn touch_move(&mut self, finger: u64, x: f32) {
        if self.finger == Some(finger) {
            self.touch.touch_end_x = Some(x);
        }
    }

    pub fn touch_end(&mut self, finger: u64) -> Option<Swipe> {
        if self.finger != Some(finger) {
            return None;
        }

        let touch = std::mem::take(&mut self.touch);
        self.finger = None;

        let (Some(start), Some(end)) = (touch.touch_start_x, touch.touch_end_x) else {
            return None;
        };

        let distance = start - end;
        if distance > SWIPE_THRESHOLD {
            Some(Swipe::Left)
        } else if distance < -SWIPE_THRESHOLD {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    /// True once the tracked finger has travelled past the threshold.
    pub fn is_swiping(&self) -> bool {
        match (self.touch.touch_start_x, self.touch.touch_end_x) {
            (Some(start), Some(end)) => (start - end).abs() > SWIPE_THRESHOLD,
            _ => false,
        }
    }

    /// Abandons the gesture in progress, e.g. when the touch is lost.
    pub fn cancel(&mut self) {
        self.touch = TouchState::default();
        self.finger = None;
    }
}
