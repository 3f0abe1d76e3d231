//! HTTP Mail Service Implementation
//!
//! Sends mail through a JSON mail API (Resend-compatible request shape):
//!
//! ```text
//! POST {api_url}
//! Authorization: Bearer {api_key}
//! {"from": "...", "to": ["..."], "subject": "...", "text": "...", "html": "..."}
//! ```
//!
//! Transport errors, `429` and `5xx` responses are retried with exponential
//! backoff. Any other non-2xx status fails immediately.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use tk_core::services::OutgoingMail;
use tk_shared::config::MailConfig;
use tk_shared::utils::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Longest provider error body echoed into an error message
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMailResponse {
    id: Option<String>,
}

enum Attempt {
    Sent(String),
    Retry(String),
    Fatal(InfrastructureError),
}

/// HTTP mail API client
pub struct HttpMailService {
    client: Client,
    config: MailConfig,
}

impl HttpMailService {
    /// Create a new HTTP mail service
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY and MAIL_API_URL are required for the http mail provider".to_string(),
            ));
        }
        if config.from_address.trim().is_empty() {
            return Err(InfrastructureError::Config("MAIL_FROM must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            api_url = %config.api_url,
            max_retries = config.max_retries,
            "HTTP mail service initialized"
        );

        Ok(Self { client, config })
    }

    async fn attempt(&self, payload: &SendMailRequest<'_>) -> Attempt {
        let response = match self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_builder() => return Attempt::Fatal(e.into()),
            Err(e) => return Attempt::Retry(e.to_string()),
        };

        let status = response.status();
        if status.is_success() {
            let id = response
                .json::<SendMailResponse>()
                .await
                .ok()
                .and_then(|body| body.id)
                .unwrap_or_else(|| String::from("unknown"));
            return Attempt::Sent(id);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = format!("status {}: {}", status, truncate(&body, MAX_ERROR_BODY));

        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            Attempt::Retry(detail)
        } else {
            Attempt::Fatal(InfrastructureError::Mail(format!(
                "Mail provider rejected the message ({})",
                detail
            )))
        }
    }

    /// Send with retry logic
    async fn send_with_retry(&self, payload: &SendMailRequest<'_>) -> Result<String, InfrastructureError> {
        let total_attempts = self.config.max_retries.saturating_add(1);
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);
        let masked = mask_email(payload.to[0]);
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!("Sending mail attempt {}/{} to {}", attempts, total_attempts, masked);

            match self.attempt(payload).await {
                Attempt::Sent(id) => {
                    info!(to = %masked, message_id = %id, "Mail accepted by provider");
                    return Ok(id);
                }
                Attempt::Fatal(e) => {
                    error!(to = %masked, error = %e, "Mail delivery failed");
                    return Err(e);
                }
                Attempt::Retry(detail) => {
                    if attempts >= total_attempts {
                        error!(
                            to = %masked,
                            "Mail delivery failed after {} attempts: {}",
                            total_attempts, detail
                        );
                        return Err(InfrastructureError::Mail(format!(
                            "Failed to send mail after {} attempts: {}",
                            total_attempts, detail
                        )));
                    }

                    warn!(
                        "Mail delivery attempt {}/{} failed ({}), retrying after {:?}",
                        attempts, total_attempts, detail, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

#[async_trait]
impl MailService for HttpMailService {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, InfrastructureError> {
        let payload = SendMailRequest {
            from: &self.config.from_address,
            to: [&mail.to],
            subject: &mail.subject,
            text: &mail.text,
            html: &mail.html,
        };
        self.send_with_retry(&payload).await
    }

    fn provider_name(&self) -> &str {
        "HTTP"
    }
}

fn truncate(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
