//! Mail Service Trait Adapter
//!
//! Bridges any infrastructure [`MailService`] to the core `MailSenderTrait`.

use async_trait::async_trait;
use tk_core::services::{MailSenderTrait, OutgoingMail};

use super::mail_service::MailService;

/// Adapter that implements the core `MailSenderTrait` for a boxed mail service
pub struct MailServiceAdapter {
    inner: Box<dyn MailService>,
}

impl MailServiceAdapter {
    pub fn new(inner: Box<dyn MailService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl MailSenderTrait for MailServiceAdapter {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, String> {
        self.inner.send_mail(mail).await.map_err(|e| e.to_string())
    }
}
