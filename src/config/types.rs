// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::toast::{DEFAULT_DURATION, EXIT_GRACE, ToastDefaults, ToastPosition};

/// Toast configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub default_duration_ms: u64,
    pub exit_grace_ms: u64,
    pub position: ToastPosition,
    pub pause_on_hover: bool,
    pub show_icon: bool,
    pub show_close_button: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            default_duration_ms: DEFAULT_DURATION.as_millis() as u64,
            exit_grace_ms: EXIT_GRACE.as_millis() as u64,
            position: ToastPosition::default(),
            pause_on_hover: true,
            show_icon: true,
            show_close_button: true,
        }
    }
}

impl From<&ToastConfig> for ToastDefaults {
    fn from(config: &ToastConfig) -> Self {
        ToastDefaults {
            duration: Duration::from_millis(config.default_duration_ms),
            exit_grace: Duration::from_millis(config.exit_grace_ms),
            position: config.position,
            pause_on_hover: config.pause_on_hover,
            show_icon: config.show_icon,
            show_close_button: config.show_close_button,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}
