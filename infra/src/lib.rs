//! # Infrastructure Layer
//!
//! Concrete implementations of the ports the core defines. Currently this is
//! outbound mail delivery:
//!
//! - **Mock**: logs (and optionally prints) mail instead of sending it
//! - **HTTP**: posts mail to a JSON mail API with retries
//!
//! [`mail::create_mail_service`] picks an implementation from
//! [`tk_shared::config::MailConfig`], and [`mail::MailServiceAdapter`] plugs it
//! into the core's `MailSenderTrait`.

pub mod mail;

pub use mail::{
    create_mail_service, HttpMailService, MailService, MailServiceAdapter, MockMailService,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail provider rejected or failed the delivery
    #[error("Mail service error: {0}")]
    Mail(String),
}
