use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AriaRole {
    #[default]
    Button,
    Dialog,
    Status,
}

/// Accessibility description attached to one gallery surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityInfo {
    pub role: AriaRole,
    pub label: Option<String>,
    pub live_region: bool,
}

impl AccessibilityInfo {
    pub fn new(role: AriaRole) -> Self {
        Self {
            role,
            label: None,
            live_region: false,
        }
    }

    pub fn button() -> Self {
        Self::new(AriaRole::Button)
    }

    pub fn dialog() -> Self {
        Self::new(AriaRole::Dialog)
    }

    pub fn status() -> Self {
        Self::new(AriaRole::Status)
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Announced again whenever its label changes.
    pub fn make_live_region(mut self) -> Self {
        self.live_region = true;
        self
    }

    pub fn get_aria_label(&self) -> String {
        match self.label {
            Some(ref label) => label.clone(),
            None => self.get_default_label().to_string(),
        }
    }

    fn get_default_label(&self) -> &'static str {
        match self.role {
            AriaRole::Button => "Gallery control",
            AriaRole::Dialog => "Image viewer",
            AriaRole::Status => "Image position",
        }
    }
}
