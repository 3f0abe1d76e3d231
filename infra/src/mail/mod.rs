//! Mail Service Module
//!
//! Delivery of composed verification mail through a configurable provider.

pub mod adapter;
pub mod http_mail;
pub mod mail_service;
pub mod mock_mail;

pub use adapter::MailServiceAdapter;
pub use http_mail::HttpMailService;
pub use mail_service::MailService;
pub use mock_mail::MockMailService;

use tk_shared::config::MailConfig;

#[cfg(test)]
mod tests;

/// Create a mail service based on configuration
///
/// Unknown providers and HTTP senders that cannot be built fall back to the
/// mock implementation with a warning. Production startup rejects the mock
/// provider separately, in `AppConfig::validate`.
pub fn create_mail_service(config: &MailConfig) -> Box<dyn MailService> {
    match config.provider.as_str() {
        "mock" => Box::new(MockMailService::with_options(config.console_output, false)),
        "http" => match HttpMailService::new(config.clone()) {
            Ok(service) => Box::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP mail service: {}", e);
                tracing::warn!("Falling back to mock mail service");
                Box::new(MockMailService::with_options(config.console_output, false))
            }
        },
        other => {
            tracing::warn!("Unknown mail provider '{}', using mock implementation", other);
            Box::new(MockMailService::with_options(config.console_output, false))
        }
    }
}
