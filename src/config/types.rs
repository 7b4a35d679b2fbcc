use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How the simulated short code presents itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Short code shown in the status bar (e.g., "*384*855#").
    #[serde(default = "default_service_code")]
    pub service_code: String,
    /// Carrier name shown in the status bar.
    #[serde(default = "default_operator")]
    pub operator: String,
    /// Message shown when the subscriber exits from the welcome menu.
    #[serde(default = "default_exit_notice")]
    pub exit_notice: String,
}

/// Terminal rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the glyph next to each option label (default: true).
    #[serde(default = "default_true")]
    pub show_icons: bool,
    /// Show the breadcrumb trail under the input line (default: true).
    #[serde(default = "default_true")]
    pub show_breadcrumb: bool,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_service_code() -> String {
    "*384*855#".to_string()
}

fn default_operator() -> String {
    "Safaricom".to_string()
}

fn default_exit_notice() -> String {
    "Thank you for using TheCircle USSD! 🙏\nDial *384*855# anytime to return.\n\n\"Less Noise. More Light.\" ✨"
        .to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            service_code: default_service_code(),
            operator: default_operator(),
            exit_notice: default_exit_notice(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_icons: true,
            show_breadcrumb: true,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
