use serde::{Deserialize, Serialize};

/// Load state of one image slot. A failed slot stays failed: there is no retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl LoadingState {
    /// Only idle slots are ever scheduled for decoding.
    pub fn should_load(&self) -> bool {
        matches!(self, LoadingState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_idle_slots_load() {
        assert!(LoadingState::Idle.should_load());
        assert!(!LoadingState::Loading.should_load());
        assert!(!LoadingState::Ready.should_load());
        assert!(!LoadingState::Error("404".to_string()).should_load());
    }
}
