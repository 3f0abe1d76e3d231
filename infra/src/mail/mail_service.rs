//! Mail Service Interface

use async_trait::async_trait;
use tk_core::services::OutgoingMail;

use crate::InfrastructureError;

/// Mail service trait for delivering composed messages
///
/// Implementations include an HTTP mail API client and a mock for development.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Deliver a message
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the accepted message
    /// * `Err(InfrastructureError)` - If delivery fails
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, InfrastructureError>;

    /// Name of the provider, for logs
    fn provider_name(&self) -> &str;
}
