//! Verification policy outcomes
//!
//! Every variant is an expected condition a caller can branch on; none of them
//! indicates a fault. Rate and abuse limits carry enough information for the
//! caller to back off correctly.

use thiserror::Error;

/// Rejection reasons returned by the code verification service
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Please wait {retry_after_seconds} seconds before requesting a new code")]
    Cooldown { retry_after_seconds: u64 },

    #[error("Too many codes requested. Try again in {retry_after_seconds} seconds")]
    TooManySends { retry_after_seconds: u64 },

    #[error("No active verification code")]
    NotFound,

    #[error("Verification code expired")]
    Expired,

    #[error("Maximum verification attempts exceeded")]
    TooManyAttempts,

    #[error("Invalid verification code, {remaining_attempts} attempts remaining")]
    InvalidCode { remaining_attempts: u32 },
}

impl VerificationError {
    /// Stable machine-readable reason code
    pub fn reason(&self) -> &'static str {
        match self {
            VerificationError::Cooldown { .. } => "cooldown",
            VerificationError::TooManySends { .. } => "too_many_sends",
            VerificationError::NotFound => "not_found",
            VerificationError::Expired => "expired",
            VerificationError::TooManyAttempts => "too_many_attempts",
            VerificationError::InvalidCode { .. } => "invalid_code",
        }
    }

    /// Seconds the caller should wait before asking for another code
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            VerificationError::Cooldown { retry_after_seconds }
            | VerificationError::TooManySends { retry_after_seconds } => Some(*retry_after_seconds),
            _ => None,
        }
    }

    /// Guesses left against the active code, for `InvalidCode` only
    pub fn remaining_attempts(&self) -> Option<u32> {
        match self {
            VerificationError::InvalidCode { remaining_attempts } => Some(*remaining_attempts),
            _ => None,
        }
    }

    /// Whether this outcome comes from an issuance rate limit
    pub fn is_rate_limited(&self) -> bool {
        self.retry_after_seconds().is_some()
    }
}
