//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Where submissions go and how long the client waits around them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Target URL for the JSON POST.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    /// Per-request timeout. A request that exceeds it settles as a failure.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// How long a success/error toast stays up before dismissing itself.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl EndpointConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            request_timeout_secs: default_request_timeout_secs(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Presentation-only layout variants. The two page variants of the original
/// form differ only in column arrangement, so that difference lives here
/// rather than in a second controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    /// Form on the left, submission history beside it.
    TwoColumn,
    /// Form stacked above the submission history.
    SingleColumn,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_layout")]
    pub layout: LayoutVariant,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            timestamp_format: default_timestamp_format(),
            max_history: default_max_history(),
        }
    }
}

/// Diagnostic logging settings. The terminal is owned by the UI, so logs go
/// to a dated file under `log_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            filter: default_log_filter(),
        }
    }
}

/// Contact details shown alongside the form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn default_endpoint_url() -> String {
    "https://vernanbackend.ezlab.in/api/contact-us/".to_string()
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_toast_duration_ms() -> u64 {
    3500
}
fn default_layout() -> LayoutVariant {
    LayoutVariant::TwoColumn
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_max_history() -> usize {
    100
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/reachout/logs".to_string()
}
fn default_log_filter() -> String {
    "reachout=info".to_string()
}
