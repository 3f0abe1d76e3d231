//! Mapping of domain errors to HTTP responses
//!
//! Verification failures are deliberately coarse: callers learn whether a
//! code expired or was wrong, never whether an address is known or how many
//! guesses remain.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};
use tk_core::errors::{DomainError, VerificationError};
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Verification(verification_error) => handle_verification_error(verification_error),
        DomainError::Validation { message } => {
            tracing::debug!(event = "validation_failed", "Rejected request: {}", message);
            ErrorResponse::new("validation_error", message).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::MailDelivery { message } => {
            tracing::error!(event = "mail_delivery_failed", "Mail delivery failed: {}", message);
            ErrorResponse::new(
                "mail_delivery_failed",
                "We could not send the verification email. Please try again later",
            )
            .to_response(StatusCode::BAD_GATEWAY)
        }
    }
}

fn handle_verification_error(error: VerificationError) -> HttpResponse {
    match error {
        VerificationError::Cooldown { retry_after_seconds } => rate_limited(
            error.reason(),
            format!(
                "Please wait {} seconds before requesting a new code",
                retry_after_seconds
            ),
            retry_after_seconds,
        ),
        VerificationError::TooManySends { retry_after_seconds } => rate_limited(
            error.reason(),
            format!(
                "Too many codes requested. Please try again in {} minutes",
                (retry_after_seconds + 59) / 60
            ),
            retry_after_seconds,
        ),
        VerificationError::Expired => ErrorResponse::new(
            "code_expired",
            "This code has expired. Please request a new code",
        )
        .to_response(StatusCode::BAD_REQUEST),
        VerificationError::NotFound
        | VerificationError::InvalidCode { .. }
        | VerificationError::TooManyAttempts => {
            ErrorResponse::new("invalid_code", "The code is incorrect")
                .to_response(StatusCode::BAD_REQUEST)
        }
    }
}

fn rate_limited(error: &str, message: String, retry_after_seconds: u64) -> HttpResponse {
    let body = ErrorResponse::new(error, message)
        .with_detail("retry_after_seconds", serde_json::json!(retry_after_seconds));

    HttpResponse::TooManyRequests()
        .insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()))
        .json(body)
}

/// Convert `validator` failures into a 400 response listing the offending fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    ErrorResponse::new("validation_error", "Invalid request data")
        .with_detail("fields", serde_json::json!(fields))
        .to_response(StatusCode::BAD_REQUEST)
}

/// JSON extractor error handler: malformed bodies get the standard error shape
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &error {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        _ => "Invalid request body".to_string(),
    };

    let response = ErrorResponse::new("validation_error", message).to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(error, response).into()
}
