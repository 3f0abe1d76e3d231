//! Verification code policy configuration
//!
//! Covers the limits applied when issuing and checking email verification
//! codes: code lifetime, resend cooldown, the fixed per-email send window and
//! the number of guesses allowed against a single code.

use serde::{Deserialize, Serialize};

use super::env_or;

/// Policy limits for email verification codes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationPolicyConfig {
    /// Seconds a freshly issued code stays valid
    #[serde(default = "default_code_ttl_seconds")]
    pub code_ttl_seconds: i64,

    /// Minimum seconds between two issuances to the same email
    #[serde(default = "default_cooldown_seconds")]
    pub cooldown_seconds: i64,

    /// Length of the fixed rate-limit window in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: i64,

    /// Maximum issuances per email inside one window
    #[serde(default = "default_max_sends_per_window")]
    pub max_sends_per_window: u32,

    /// Maximum failed guesses against one code
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for VerificationPolicyConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl_seconds(),
            cooldown_seconds: default_cooldown_seconds(),
            window_seconds: default_window_seconds(),
            max_sends_per_window: default_max_sends_per_window(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl VerificationPolicyConfig {
    /// Load from `VERIFICATION_*` environment variables
    pub fn from_env() -> Self {
        Self {
            code_ttl_seconds: env_or("VERIFICATION_CODE_TTL_SECONDS", default_code_ttl_seconds()),
            cooldown_seconds: env_or("VERIFICATION_COOLDOWN_SECONDS", default_cooldown_seconds()),
            window_seconds: env_or("VERIFICATION_WINDOW_SECONDS", default_window_seconds()),
            max_sends_per_window: env_or(
                "VERIFICATION_MAX_SENDS_PER_WINDOW",
                default_max_sends_per_window(),
            ),
            max_attempts: env_or("VERIFICATION_MAX_ATTEMPTS", default_max_attempts()),
        }
    }

    /// Reject limits that would make the policy meaningless
    pub fn validate(&self) -> Result<(), String> {
        if self.code_ttl_seconds <= 0 {
            return Err("code_ttl_seconds must be positive".to_string());
        }
        if self.cooldown_seconds < 0 {
            return Err("cooldown_seconds must not be negative".to_string());
        }
        if self.window_seconds <= 0 {
            return Err("window_seconds must be positive".to_string());
        }
        if self.max_sends_per_window == 0 {
            return Err("max_sends_per_window must be at least 1".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Background sweep of abandoned verification records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SweeperConfig {
    /// Whether the periodic sweep runs at all
    #[serde(default)]
    pub enabled: bool,

    /// Seconds between sweeps
    #[serde(default = "default_sweep_interval_seconds")]
    pub interval_seconds: u64,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl SweeperConfig {
    /// Load from `VERIFICATION_SWEEP_ENABLED` / `VERIFICATION_SWEEP_INTERVAL_SECONDS`
    pub fn from_env() -> Self {
        Self {
            enabled: env_or("VERIFICATION_SWEEP_ENABLED", false),
            interval_seconds: env_or(
                "VERIFICATION_SWEEP_INTERVAL_SECONDS",
                default_sweep_interval_seconds(),
            ),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.interval_seconds == 0 {
            return Err("sweep interval must be positive when sweeping is enabled".to_string());
        }
        Ok(())
    }
}

fn default_code_ttl_seconds() -> i64 {
    180 // 3 minutes
}

fn default_cooldown_seconds() -> i64 {
    120
}

fn default_window_seconds() -> i64 {
    3600 // 60 minutes
}

fn default_max_sends_per_window() -> u32 {
    5
}

fn default_max_attempts() -> u32 {
    5
}

fn default_sweep_interval_seconds() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy() {
        let config = VerificationPolicyConfig::default();
        assert_eq!(config.code_ttl_seconds, 180);
        assert_eq!(config.cooldown_seconds, 120);
        assert_eq!(config.window_seconds, 3600);
        assert_eq!(config.max_sends_per_window, 5);
        assert_eq!(config.max_attempts, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = VerificationPolicyConfig::default();
        config.max_attempts = 0;
        assert!(config.validate().is_err());

        let mut config = VerificationPolicyConfig::default();
        config.max_sends_per_window = 0;
        assert!(config.validate().is_err());

        let mut config = VerificationPolicyConfig::default();
        config.code_ttl_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sweeper_disabled_by_default() {
        let sweeper = SweeperConfig::default();
        assert!(!sweeper.enabled);
        assert!(sweeper.validate().is_ok());

        let broken = SweeperConfig {
            enabled: true,
            interval_seconds: 0,
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: VerificationPolicyConfig =
            serde_json::from_str(r#"{"max_attempts": 3}"#).unwrap();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.cooldown_seconds, 120);
    }
}
