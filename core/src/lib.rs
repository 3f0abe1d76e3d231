//! # Toolkit Core
//!
//! Core business logic for the toolkit backend: issuing, rate-limiting and
//! validating one-time email verification codes, plus the orchestration the
//! HTTP handlers use to deliver codes through a mail sender.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
