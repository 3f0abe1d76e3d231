//! Email verification route handlers
//!
//! - `POST /api/v1/auth/send-code`
//! - `POST /api/v1/auth/verify-code`

pub mod send_code;
pub mod verify_code;

use std::sync::Arc;

use tk_core::services::{
    Clock, EmailAuthService, InMemoryVerificationStore, MailSenderTrait, SystemClock,
    VerificationStore,
};

/// Application state that holds shared services
pub struct AppState<M, S = InMemoryVerificationStore, K = SystemClock>
where
    M: MailSenderTrait,
    S: VerificationStore,
    K: Clock,
{
    pub auth_service: Arc<EmailAuthService<M, S, K>>,
}
