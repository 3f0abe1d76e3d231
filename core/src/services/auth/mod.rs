//! Email verification flow used by the HTTP handlers
//!
//! Sits on top of the code verification service: validates caller input,
//! issues codes, composes the verification mail and hands it to a mail
//! sender, and maps policy rejections into domain errors.

mod config;
mod email_template;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use email_template::VerificationEmail;
pub use service::EmailAuthService;
