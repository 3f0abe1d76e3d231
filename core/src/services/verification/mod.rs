//! Verification service module for email-based one-time codes
//!
//! This module provides the complete code lifecycle:
//! - Code generation from the OS CSPRNG
//! - Per-email resend cooldown and fixed-window issuance quota
//! - Verification with bounded attempts and lazy expiry
//! - A lock-striped in-memory store with per-email atomic updates
//! - An optional background sweep of abandoned records
//! - The mail sender port used to deliver codes

mod clock;
mod code;
mod config;
mod service;
mod store;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use code::OneTimeCode;
pub use config::VerificationServiceConfig;
pub use service::CodeVerificationService;
pub use store::{InMemoryVerificationStore, VerificationStore, DEFAULT_SHARD_COUNT};
pub use sweeper::VerificationSweeper;
pub use traits::{MailSenderTrait, OutgoingMail};
pub use types::{IssuedCode, SendCodeResult};
