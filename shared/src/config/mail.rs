//! Outbound mail configuration

use serde::{Deserialize, Serialize};
use std::env;

use super::env_or;

/// Mail provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Provider name ("http", "mock")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// HTTP mail API endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key sent as bearer token
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Sender address, e.g. `Toolkit <no-reply@example.com>`
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Retries for transport errors and 5xx responses
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial retry delay in milliseconds (doubles per retry)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Echo mock mail to stdout (development)
    #[serde(default)]
    pub console_output: bool,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: default_api_url(),
            api_key: String::new(),
            from_address: default_from_address(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            console_output: false,
        }
    }
}

impl MailConfig {
    /// Load from `MAIL_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env::var("MAIL_PROVIDER")
                .map(|p| p.trim().to_lowercase())
                .unwrap_or(defaults.provider),
            api_url: env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: env::var("MAIL_API_KEY").unwrap_or_default(),
            from_address: env::var("MAIL_FROM").unwrap_or(defaults.from_address),
            max_retries: env_or("MAIL_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("MAIL_RETRY_DELAY_MS", defaults.retry_delay_ms),
            request_timeout_secs: env_or("MAIL_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            console_output: env_or("MAIL_CONSOLE_OUTPUT", defaults.console_output),
        }
    }

    /// Whether credentials for the HTTP provider are present
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.api_url.trim().is_empty()
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_api_url() -> String {
    String::from("https://api.resend.com/emails")
}

fn default_from_address() -> String {
    String::from("Toolkit <no-reply@toolkit.local>")
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_request_timeout_secs() -> u64 {
    10
}
