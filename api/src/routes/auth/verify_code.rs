use actix_web::{web, HttpResponse};
use validator::Validate;

use tk_core::services::{Clock, MailSenderTrait, VerificationStore};
use tk_shared::utils::mask_email;

use super::AppState;
use crate::dto::auth::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/verify-code
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "code": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "verified": true, "message": "Email verified" }
/// ```
///
/// ## Errors
/// - 400 `validation_error`: missing email or a code that is not six digits
/// - 400 `code_expired`: the code expired, a new one must be requested
/// - 400 `invalid_code`: wrong, unknown or locked code
pub async fn verify_code<M, S, K>(
    state: web::Data<AppState<M, S, K>>,
    request: web::Json<VerifyCodeRequest>,
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
        event = "verify_code_requested",
        "Processing verify_code request"
    );

    // Digits-only and email format are enforced by the service
    match state.auth_service.verify_code(&request.email, &request.code).await {
        Ok(()) => HttpResponse::Ok().json(VerifyCodeResponse {
            verified: true,
            message: "Email verified".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
