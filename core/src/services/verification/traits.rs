//! Port for delivering verification mail

use std::fmt;

use async_trait::async_trait;

/// A fully composed message ready for delivery
#[derive(Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Recipient address
    pub to: String,
    pub subject: String,
    /// Plain-text body
    pub text: String,
    /// HTML body
    pub html: String,
}

// Subject and bodies carry the plaintext code.
impl fmt::Debug for OutgoingMail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutgoingMail")
            .field("to", &tk_shared::utils::mask_email(&self.to))
            .field("subject", &"[redacted]")
            .field("text", &"[redacted]")
            .field("html", &"[redacted]")
            .finish()
    }
}

/// Trait for mail delivery integration
#[async_trait]
pub trait MailSenderTrait: Send + Sync {
    /// Deliver a message, returning the provider's message id
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, String>;
}
