use actix_web::{web, HttpResponse};
use validator::Validate;

use tk_core::services::{Clock, MailSenderTrait, VerificationStore};
use tk_shared::utils::mask_email;

use super::AppState;
use crate::dto::auth::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/send-code
///
/// Issues a verification code and emails it to the given address.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Verification code sent",
///     "resend_after": 120,
///     "expires_in": 180
/// }
/// ```
///
/// ## Errors
/// - 400 `validation_error`: missing or malformed email
/// - 429 `cooldown` / `too_many_sends`: with `Retry-After`
/// - 502 `mail_delivery_failed`: the mail provider rejected the message
pub async fn send_code<M, S, K>(
    state: web::Data<AppState<M, S, K>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    M: MailSenderTrait + 'static,
    S: VerificationStore + 'static,
    K: Clock + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    tracing::info!(
        email = %mask_email(&request.email),
        event = "send_code_requested",
        "Processing send_code request"
    );

    match state.auth_service.send_code(&request.email).await {
        Ok(result) => HttpResponse::Ok().json(SendCodeResponse {
            message: "Verification code sent".to_string(),
            resend_after: result.resend_after_seconds,
            expires_in: result.expires_in_seconds,
        }),
        Err(error) => handle_domain_error(error),
    }
}
