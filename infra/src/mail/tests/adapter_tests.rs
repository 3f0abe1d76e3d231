//! Tests for the core mail sender adapter

use tk_core::services::MailSenderTrait;

use super::sample_mail;
use crate::mail::{MailServiceAdapter, MockMailService};

#[tokio::test]
async fn test_adapter_forwards_message_id() {
    let adapter = MailServiceAdapter::new(Box::new(MockMailService::with_options(false, false)));

    let message_id = adapter.send_mail(&sample_mail("user@example.com")).await.unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(adapter.provider_name(), "Mock");
}

#[tokio::test]
async fn test_adapter_maps_errors_to_strings() {
    let adapter = MailServiceAdapter::new(Box::new(MockMailService::with_options(false, true)));

    let error = adapter.send_mail(&sample_mail("user@example.com")).await.unwrap_err();

    assert!(error.contains("Simulated mail sending failure"));
}
