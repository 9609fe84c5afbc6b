//! Configuration types for scrivi
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Per-section sub-types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when nothing else is configured
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Analysis service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Base URL; the client posts to `{base_url}/analyse`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds (0 = wait indefinitely)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ServiceSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

fn default_base_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting with a non-empty draft
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_footer: true }
    }
}

fn default_true() -> bool {
    true
}
