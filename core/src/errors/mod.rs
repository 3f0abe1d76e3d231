//! Domain-specific error types and error handling.

mod verification;

pub use verification::VerificationError;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Mail delivery failed: {message}")]
    MailDelivery { message: String },

    // Expected, retryable outcomes of the verification policy
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
