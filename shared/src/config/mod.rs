//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound mail provider configuration
//! - `server` - HTTP server and CORS configuration
//! - `verification` - Verification code policy and expiry sweeping

pub mod environment;
pub mod mail;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::MailConfig;
pub use server::{CorsConfig, ServerConfig};
pub use verification::{SweeperConfig, VerificationPolicyConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Verification code policy
    #[serde(default)]
    pub verification: VerificationPolicyConfig,

    /// Background expiry sweeping
    #[serde(default)]
    pub sweeper: SweeperConfig,

    /// Outbound mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            verification: VerificationPolicyConfig::default(),
            sweeper: SweeperConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            verification: VerificationPolicyConfig::from_env(),
            sweeper: SweeperConfig::from_env(),
            mail: MailConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Validate cross-field constraints that `from_env` cannot express
    pub fn validate(&self) -> Result<(), String> {
        self.verification.validate()?;
        self.sweeper.validate()?;
        if self.environment.is_production() && self.mail.provider == "mock" {
            return Err("MAIL_PROVIDER=mock is not allowed in production".to_string());
        }
        if self.mail.provider == "http" && !self.mail.has_credentials() {
            return Err("MAIL_PROVIDER=http requires MAIL_API_KEY and MAIL_API_URL".to_string());
        }
        Ok(())
    }
}

/// Read and parse an environment variable, falling back to `default` when the
/// variable is missing or does not parse.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_production_rejects_mock_mail() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;
        config.mail.provider = "mock".to_string();
        assert!(config.validate().is_err());

        config.mail.provider = "http".to_string();
        assert!(config.validate().is_err());

        config.mail.api_key = "re_live_key".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("TK_SHARED_TEST_ENV_OR", "not-a-number");
        assert_eq!(env_or("TK_SHARED_TEST_ENV_OR", 42u32), 42);

        env::set_var("TK_SHARED_TEST_ENV_OR", " 7 ");
        assert_eq!(env_or("TK_SHARED_TEST_ENV_OR", 42u32), 7);

        env::remove_var("TK_SHARED_TEST_ENV_OR");
        assert_eq!(env_or("TK_SHARED_TEST_ENV_OR", 42u32), 42);
    }
}
