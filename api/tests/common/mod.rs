//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;

use tk_api::AppState;
use tk_core::services::{
    AuthServiceConfig, CodeVerificationService, EmailAuthService, InMemoryVerificationStore,
    MailSenderTrait, ManualClock, OutgoingMail, VerificationServiceConfig,
};

/// Mail sender that records messages instead of delivering them
pub struct RecordingMailSender {
    pub sent: Mutex<Vec<OutgoingMail>>,
    pub fail: bool,
}

impl RecordingMailSender {
    pub fn new(fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// The code from the most recent mail (the subject starts with it)
    pub fn last_code(&self) -> String {
        let sent = self.sent.lock().unwrap();
        let mail = sent.last().expect("no mail sent");
        mail.subject.split_whitespace().next().unwrap().to_string()
    }
}

#[async_trait]
impl MailSenderTrait for RecordingMailSender {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<String, String> {
        if self.fail {
            return Err("provider unavailable".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(mail.clone());
        Ok(format!("test-{}", sent.len()))
    }
}

pub type TestState = AppState<RecordingMailSender, InMemoryVerificationStore, Arc<ManualClock>>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub mail: Arc<RecordingMailSender>,
    pub clock: Arc<ManualClock>,
}

pub fn test_context(mail_fails: bool) -> TestContext {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let mail = Arc::new(RecordingMailSender::new(mail_fails));
    let verification = Arc::new(CodeVerificationService::new(
        InMemoryVerificationStore::new(),
        clock.clone(),
        VerificationServiceConfig::default(),
    ));
    let auth_service = Arc::new(EmailAuthService::new(
        verification,
        mail.clone(),
        AuthServiceConfig::default(),
    ));

    TestContext {
        state: web::Data::new(AppState { auth_service }),
        mail,
        clock,
    }
}
