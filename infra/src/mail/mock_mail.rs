//! Mock Mail Service Implementation
//!
//! Logs mail instead of sending it. Used in development and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use tk_core::services::OutgoingMail;
use tk_shared::utils::{is_valid_email, mask_email};

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Mock mail service for development and testing
///
/// This implementation:
/// - Logs a masked summary of each message
/// - Optionally prints the whole message to stdout
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockMailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    pub(super) console_output: bool,
}

impl MockMailService {
    /// Create a quiet mock service; console echo is opt-in via `with_options`
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, InfrastructureError> {
        let masked = mask_email(&mail.to);

        if !is_valid_email(&mail.to) {
            return Err(InfrastructureError::Mail(format!(
                "Invalid recipient address: {}",
                masked
            )));
        }

        if self.simulate_failure {
            warn!("Mock mail service simulating failure for {}", masked);
            return Err(InfrastructureError::Mail(
                "Simulated mail sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Development only: shows the full message, code included
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", mail.to);
            println!("Subject: {}", mail.subject);
            println!("Message ID: {}", message_id);
            println!("\n{}", mail.text);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "mock",
            to = %masked,
            message_id = %message_id,
            "Mail sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
