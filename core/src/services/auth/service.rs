//! Email authentication service implementation

use std::sync::Arc;

use tk_shared::utils::{is_valid_code_format, is_valid_email, mask_email, normalize_email};

use crate::errors::{DomainError, DomainResult};
use crate::services::verification::{
    Clock, CodeVerificationService, InMemoryVerificationStore, MailSenderTrait, SendCodeResult,
    SystemClock, VerificationStore,
};

use super::config::AuthServiceConfig;
use super::email_template::VerificationEmail;

/// Send-code and verify-code flows for email sign-in
pub struct EmailAuthService<M, S = InMemoryVerificationStore, K = SystemClock>
where
    M: MailSenderTrait,
    S: VerificationStore,
    K: Clock,
{
    /// Issuance and validation policy
    verification_service: Arc<CodeVerificationService<S, K>>,
    /// Delivery of composed mail
    mail_sender: Arc<M>,
    config: AuthServiceConfig,
}

impl<M, S, K> EmailAuthService<M, S, K>
where
    M: MailSenderTrait,
    S: VerificationStore,
    K: Clock,
{
    /// Create a new email authentication service
    ///
    /// # Arguments
    ///
    /// * `verification_service` - Shared code verification service
    /// * `mail_sender` - Mail delivery implementation
    /// * `config` - Service configuration
    pub fn new(
        verification_service: Arc<CodeVerificationService<S, K>>,
        mail_sender: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            verification_service,
            mail_sender,
            config,
        }
    }

    pub fn verification_service(&self) -> &Arc<CodeVerificationService<S, K>> {
        &self.verification_service
    }

    /// Issue a verification code for `email` and mail it
    ///
    /// The code is issued before delivery is attempted. If the mail sender
    /// fails, the code stays active and the send still counts toward the
    /// cooldown and the window quota; the caller can retry once the cooldown
    /// has passed.
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - Delivery details; never contains the code
    /// * `Err(DomainError::Validation)` - Empty or malformed email
    /// * `Err(DomainError::Verification)` - Cooldown or window quota rejection
    /// * `Err(DomainError::MailDelivery)` - The mail sender failed
    pub async fn send_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        let email = validate_email(email)?;

        let issued = self.verification_service.request_code(&email)?;

        let policy = self.verification_service.config();
        let mail = VerificationEmail::compose(
            &self.config.product_name,
            issued.code.as_str(),
            policy.code_ttl_minutes(),
        )
            .into_mail(email.as_str());

        let message_id = self.mail_sender.send_mail(&mail).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&email),
                error = %e,
                event = "verification_mail_failed",
                "Failed to deliver verification mail"
            );
            DomainError::MailDelivery { message: e }
        })?;

        tracing::info!(
            email = %mask_email(&email),
            message_id = %message_id,
            event = "verification_mail_sent",
            "Verification mail sent"
        );

        Ok(SendCodeResult {
            email,
            message_id,
            resend_after_seconds: policy.cooldown.num_seconds(),
            expires_in_seconds: policy.code_ttl.num_seconds(),
        })
    }

    /// Check a code submitted for `email`
    ///
    /// Input is validated before the verification service is consulted, so a
    /// malformed code never counts as an attempt.
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<()> {
        let email = validate_email(email)?;

        if !is_valid_code_format(code) {
            return Err(DomainError::Validation {
                message: "Verification code must be 6 digits".to_string(),
            });
        }

        self.verification_service.verify_code(&email, code)?;
        Ok(())
    }
}

fn validate_email(email: &str) -> DomainResult<String> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(DomainError::Validation {
            message: "Email is required".to_string(),
        });
    }
    if !is_valid_email(&email) {
        return Err(DomainError::Validation {
            message: "Invalid email address".to_string(),
        });
    }
    Ok(email)
}
