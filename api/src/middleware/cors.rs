//! CORS middleware configuration for cross-origin requests.
//!
//! The toolkit site calls the API from the browser, so the verification
//! endpoints must be reachable cross-origin. Development is permissive when no
//! origins are configured; production only allows the configured origins.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tk_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given configuration.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        // Clients read Retry-After from rate-limited responses
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(config.max_age);

    if config.allowed_origins.is_empty() {
        if environment.is_production() {
            tracing::warn!("No CORS origins configured; cross-origin requests will be rejected");
        } else {
            tracing::info!("Configuring permissive CORS for {}", environment);
            cors = cors.allow_any_origin();
        }
        return cors;
    }

    for origin in &config.allowed_origins {
        tracing::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
