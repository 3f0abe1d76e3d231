//! Verification code issuance and validation
//!
//! The service owns the per-email policy: one active code per address, a
//! resend cooldown, a fixed issuance window and a cap on guesses per code.
//! All decisions for one email run inside a single store `update`, so the
//! check and the mutation that follows it cannot interleave with another
//! request for the same address.

use chrono::{DateTime, Duration, Utc};
use tk_shared::utils::{mask_email, normalize_email};

use crate::domain::entities::{CodeDigest, VerificationRecord};
use crate::errors::VerificationError;

use super::clock::{Clock, SystemClock};
use super::code::OneTimeCode;
use super::config::VerificationServiceConfig;
use super::store::{InMemoryVerificationStore, VerificationStore};
use super::types::IssuedCode;

/// Issues and checks one-time email verification codes
pub struct CodeVerificationService<S = InMemoryVerificationStore, K = SystemClock> {
    store: S,
    clock: K,
    config: VerificationServiceConfig,
}

impl CodeVerificationService {
    /// Service backed by a fresh in-memory store and the wall clock
    pub fn in_memory(config: VerificationServiceConfig) -> Self {
        Self::new(InMemoryVerificationStore::new(), SystemClock, config)
    }
}

impl<S: VerificationStore, K: Clock> CodeVerificationService<S, K> {
    pub fn new(store: S, clock: K, config: VerificationServiceConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a new code for `email` if the cooldown and window quota allow it
    ///
    /// A successful call replaces any previous code for the address and
    /// resets its attempt counter. Rejections leave the record untouched.
    pub fn request_code(&self, email: &str) -> Result<IssuedCode, VerificationError> {
        let key = normalize_email(email);
        let now = self.clock.now();
        let config = &self.config;

        let outcome = self.store.update(&key, |slot| {
            let (window_start, window_count) = match slot.as_ref() {
                None => (now, 0),
                Some(record) => {
                    let elapsed = now - record.last_sent_at;
                    if elapsed < config.cooldown {
                        return Err(VerificationError::Cooldown {
                            retry_after_seconds: ceil_seconds(config.cooldown - elapsed),
                        });
                    }

                    let (window_start, window_count) = if record.window_elapsed(now, config.window) {
                        (now, 0)
                    } else {
                        (record.window_start, record.window_count)
                    };

                    if window_count >= config.max_sends_per_window {
                        let reopens_in = window_start + config.window - now;
                        return Err(VerificationError::TooManySends {
                            retry_after_seconds: ceil_seconds(reopens_in).max(1),
                        });
                    }

                    (window_start, window_count)
                }
            };

            let code = OneTimeCode::generate();
            let digest = CodeDigest::compute(&key, code.as_str());
            let window_count = window_count + 1;

            match slot.as_mut() {
                Some(record) => {
                    record.reissue(digest, now, config.code_ttl, window_start, window_count)
                }
                None => *slot = Some(VerificationRecord::first_issue(digest, now, config.code_ttl)),
            }

            Ok(IssuedCode {
                code,
                expires_at: now + config.code_ttl,
                window_count,
            })
        });

        match &outcome {
            Ok(issued) => tracing::info!(
                email = %mask_email(&key),
                window_count = issued.window_count,
                event = "code_issued",
                "Issued verification code"
            ),
            Err(e) => tracing::warn!(
                email = %mask_email(&key),
                reason = e.reason(),
                retry_after_seconds = e.retry_after_seconds(),
                event = "code_request_rejected",
                "Verification code request rejected"
            ),
        }

        outcome
    }

    /// Check `code` against the active code for `email`
    ///
    /// Expects `code` to already be six ASCII digits. A match consumes the
    /// code; an expired code is removed when observed.
    pub fn verify_code(&self, email: &str, code: &str) -> Result<(), VerificationError> {
        let key = normalize_email(email);
        let now = self.clock.now();
        let max_attempts = self.config.max_attempts;

        let outcome = self.store.update(&key, |slot| {
            let Some(record) = slot.as_mut() else {
                return Err(VerificationError::NotFound);
            };

            if record.is_expired(now) {
                *slot = None;
                return Err(VerificationError::Expired);
            }

            if record.attempts >= max_attempts {
                return Err(VerificationError::TooManyAttempts);
            }

            if record.code_digest.matches(&CodeDigest::compute(&key, code)) {
                *slot = None;
                return Ok(());
            }

            record.attempts += 1;
            Err(VerificationError::InvalidCode {
                remaining_attempts: record.remaining_attempts(max_attempts),
            })
        });

        match &outcome {
            Ok(()) => tracing::info!(
                email = %mask_email(&key),
                event = "code_verified",
                "Verification code accepted"
            ),
            Err(e) => tracing::warn!(
                email = %mask_email(&key),
                reason = e.reason(),
                remaining_attempts = e.remaining_attempts(),
                event = "code_verification_failed",
                "Verification code rejected"
            ),
        }

        outcome
    }

    /// Snapshot of the record held for `email`, if any
    pub fn record(&self, email: &str) -> Option<VerificationRecord> {
        self.store.get(&normalize_email(email))
    }

    /// Number of emails with a record
    pub fn tracked_emails(&self) -> usize {
        self.store.len()
    }

    /// Drop records that no longer constrain anything
    ///
    /// A record is removed only once its code has expired, its issuance
    /// window has elapsed and its cooldown has passed, so sweeping never lets
    /// a caller request codes sooner than it could otherwise.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        let config = &self.config;
        let removed = self.store.retain(&mut |_, record| !is_sweepable(record, now, config));

        if removed > 0 {
            tracing::debug!(removed, event = "records_swept", "Swept expired verification records");
        }
        removed
    }
}

fn is_sweepable(
    record: &VerificationRecord,
    now: DateTime<Utc>,
    config: &VerificationServiceConfig,
) -> bool {
    record.is_expired(now)
        && record.window_elapsed(now, config.window)
        && now - record.last_sent_at >= config.cooldown
}

/// Whole seconds in `duration`, rounded up
pub(crate) fn ceil_seconds(duration: Duration) -> u64 {
    let millis = duration.num_milliseconds().max(0) as u64;
    (millis + 999) / 1000
}
