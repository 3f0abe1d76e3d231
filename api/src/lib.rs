//! HTTP API for the toolkit's email verification codes
//!
//! Library exports for the binary and for integration tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::auth::AppState;
