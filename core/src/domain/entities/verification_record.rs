//! Verification record entity for email-based verification codes.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code ever issued (codes never start with a zero)
pub const CODE_MIN: u32 = 100_000;

/// Largest code ever issued
pub const CODE_MAX: u32 = 999_999;

/// One-way SHA-256 digest of a verification code
///
/// The digest input is `"{email}:{code}"`, so equal codes issued to
/// different emails never share a digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeDigest([u8; 32]);

impl CodeDigest {
    /// Digest a code for the given normalized email
    pub fn compute(email_key: &str, code: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(email_key.as_bytes());
        hasher.update(b":");
        hasher.update(code.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Compare two digests without short-circuiting on the first differing byte
    pub fn matches(&self, other: &CodeDigest) -> bool {
        constant_time_eq(&self.0, &other.0)
    }

    /// Hexadecimal representation
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for CodeDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodeDigest({}…)", &self.to_hex()[..12])
    }
}

/// Issuance and attempt state for a single normalized email address
///
/// Only the digest of the active code is kept. A record is replaced in place
/// on every issuance and removed once the code is redeemed or found expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Digest of the currently active code
    pub code_digest: CodeDigest,

    /// Moment after which the active code is rejected
    pub expires_at: DateTime<Utc>,

    /// Failed verification attempts against the active code
    pub attempts: u32,

    /// When the active code was issued
    pub last_sent_at: DateTime<Utc>,

    /// Start of the current rate-limit window
    pub window_start: DateTime<Utc>,

    /// Codes issued inside the current window
    pub window_count: u32,
}

impl VerificationRecord {
    /// Create the record for the very first code issued to an email
    pub fn first_issue(code_digest: CodeDigest, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            code_digest,
            expires_at: now + ttl,
            attempts: 0,
            last_sent_at: now,
            window_start: now,
            window_count: 1,
        }
    }

    /// Replace the active code, resetting attempts and committing the window state
    pub fn reissue(
        &mut self,
        code_digest: CodeDigest,
        now: DateTime<Utc>,
        ttl: Duration,
        window_start: DateTime<Utc>,
        window_count: u32,
    ) {
        self.code_digest = code_digest;
        self.expires_at = now + ttl;
        self.attempts = 0;
        self.last_sent_at = now;
        self.window_start = window_start;
        self.window_count = window_count;
    }

    /// Whether the active code has expired at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the fixed rate-limit window has run out at `now`
    pub fn window_elapsed(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now - self.window_start > window
    }

    /// Attempts left before the active code is locked
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }
}
