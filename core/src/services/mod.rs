//! Business services containing domain logic and use cases.

pub mod auth;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthServiceConfig, EmailAuthService, VerificationEmail};
pub use verification::{
    Clock, CodeVerificationService, InMemoryVerificationStore, IssuedCode, MailSenderTrait,
    ManualClock, OneTimeCode, OutgoingMail, SendCodeResult, SystemClock, VerificationServiceConfig,
    VerificationStore, VerificationSweeper,
};
