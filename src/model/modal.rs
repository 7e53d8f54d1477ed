use serde::{Deserialize, Serialize};

/// Caller-supplied configuration of a single modal.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct ModalConfig {
    #[serde(default)]
    pub full_screen: bool,
    #[serde(default = "default_close_on_click_outside")]
    pub close_on_click_outside: bool,
}

fn default_close_on_click_outside() -> bool {
    true
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            full_screen: false,
            close_on_click_outside: default_close_on_click_outside(),
        }
    }
}

/// Events a modal reports to its parent.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "event", content = "payload")]
pub enum ModalEvent {
    #[serde(rename = "close")]
    Close,
    #[serde(rename = "update:modelValue")]
    UpdateModelValue(bool),
    #[serde(rename = "transitionEnd")]
    TransitionEnd,
}

impl ModalEvent {
    /// Event name as shown in action logs.
    pub fn name(&self) -> &'static str {
        match self {
            ModalEvent::Close => "close",
            ModalEvent::UpdateModelValue(_) => "update:modelValue",
            ModalEvent::TransitionEnd => "transitionEnd",
        }
    }
}

impl std::fmt::Display for ModalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModalEvent::UpdateModelValue(value) => write!(f, "{}({})", self.name(), value),
            _ => write!(f, "{}()", self.name()),
        }
    }
}
