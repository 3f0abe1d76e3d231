//! Tests for mail service selection

use tk_shared::config::MailConfig;

use crate::mail::create_mail_service;

#[test]
fn test_mock_provider() {
    let service = create_mail_service(&MailConfig::default());
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_http_provider_with_credentials() {
    let config = MailConfig {
        provider: "http".to_string(),
        api_key: "re_test_key".to_string(),
        ..Default::default()
    };
    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "HTTP");
}

#[test]
fn test_http_provider_without_credentials_falls_back() {
    let config = MailConfig {
        provider: "http".to_string(),
        ..Default::default()
    };
    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_unknown_provider_falls_back() {
    let config = MailConfig {
        provider: "carrier-pigeon".to_string(),
        ..Default::default()
    };
    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}
