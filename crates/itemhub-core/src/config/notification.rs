//! Email notification configuration.

use serde::{Deserialize, Serialize};

/// Brevo's transactional email endpoint.
pub const BREVO_SEND_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

/// Settings for the email sent after every item mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Send emails at all. When disabled a no-op notifier is wired in.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Send endpoint of the email provider.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Provider API key, sent in the `api-key` header.
    #[serde(default)]
    pub api_key: String,
    /// Sender address.
    #[serde(default)]
    pub sender_email: String,
    /// Recipient address.
    #[serde(default)]
    pub recipient_email: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            sender_email: String::new(),
            recipient_email: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    BREVO_SEND_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}
