//! Plaintext one-time codes

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use crate::domain::entities::verification_record::{CODE_MAX, CODE_MIN};

/// A freshly generated plaintext verification code
///
/// Exists only between issuance and mail delivery. `Debug` is redacted so the
/// code cannot leak through logs or error reports.
#[derive(Clone, PartialEq, Eq)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Generate a code from the OS CSPRNG
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a code from a caller-supplied cryptographic RNG
    pub fn generate_with<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let value: u32 = rng.gen_range(CODE_MIN..=CODE_MAX);
        Self(value.to_string())
    }

    /// The plaintext digits, for handing to the mail sender
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimeCode(******)")
    }
}
