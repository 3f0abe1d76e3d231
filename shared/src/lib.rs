//! Shared utilities and common types for the toolkit server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, server, verification policy, mail)
//! - API response structures
//! - Email utilities (normalization, validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, LogFormat, LoggingConfig, MailConfig, ServerConfig,
    SweeperConfig, VerificationPolicyConfig,
};
pub use types::{ErrorResponse, HealthResponse, HealthStatus};
pub use utils::{email, validation};
