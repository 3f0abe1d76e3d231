//! Result types for verification operations

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::code::OneTimeCode;

/// A code accepted by the issuance policy
///
/// Returned only to the caller that delivers it; never stored.
#[derive(Debug, Clone)]
pub struct IssuedCode {
    pub code: OneTimeCode,
    pub expires_at: DateTime<Utc>,
    /// Issuances in the current window, including this one
    pub window_count: u32,
}

/// Result of sending a verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendCodeResult {
    /// Normalized recipient
    pub email: String,
    /// Message id from the mail provider
    pub message_id: String,
    /// Seconds until another code may be requested
    pub resend_after_seconds: i64,
    /// Seconds until the issued code expires
    pub expires_in_seconds: i64,
}
