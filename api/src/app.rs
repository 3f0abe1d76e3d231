//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`].

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use tk_core::services::{Clock, MailSenderTrait, VerificationStore};
use tk_shared::config::{CorsConfig, Environment};
use tk_shared::types::{HealthResponse, HealthStatus};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::error::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{send_code::send_code, verify_code::verify_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<M, S, K>(
    app_state: web::Data<AppState<M, S, K>>,
    cors: &CorsConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    M: MailSenderTrait + 'static,
    S: VerificationStore + 'static,
    K: Clock + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().limit(4096).error_handler(json_error_handler))
        .wrap(create_cors(cors, environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/send-code", web::post().to(send_code::<M, S, K>))
                    .route("/verify-code", web::post().to(verify_code::<M, S, K>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        service: "toolkit-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
