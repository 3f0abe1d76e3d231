//! Configuration for the verification service

use chrono::Duration;
use tk_shared::config::VerificationPolicyConfig;

/// Policy limits in the form the service evaluates them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationServiceConfig {
    /// Lifetime of an issued code
    pub code_ttl: Duration,
    /// Minimum spacing between issuances to one email
    pub cooldown: Duration,
    /// Length of the fixed issuance window
    pub window: Duration,
    /// Issuances allowed per email per window
    pub max_sends_per_window: u32,
    /// Failed guesses allowed per code
    pub max_attempts: u32,
}

impl VerificationServiceConfig {
    /// Code lifetime in whole minutes, rounded up, as quoted in mail copy
    pub fn code_ttl_minutes(&self) -> i64 {
        (self.code_ttl.num_seconds() + 59) / 60
    }
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self::from(&VerificationPolicyConfig::default())
    }
}

impl From<&VerificationPolicyConfig> for VerificationServiceConfig {
    fn from(policy: &VerificationPolicyConfig) -> Self {
        Self {
            code_ttl: Duration::seconds(policy.code_ttl_seconds),
            cooldown: Duration::seconds(policy.cooldown_seconds),
            window: Duration::seconds(policy.window_seconds),
            max_sends_per_window: policy.max_sends_per_window,
            max_attempts: policy.max_attempts,
        }
    }
}
