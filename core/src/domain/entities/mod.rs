//! Domain entities representing core business objects.

pub mod verification_record;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use verification_record::{CodeDigest, VerificationRecord, CODE_LENGTH, CODE_MAX, CODE_MIN};
