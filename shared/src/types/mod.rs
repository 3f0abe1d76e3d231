//! Type definitions shared by the API layer
//!
//! - `response` - Error bodies and health checks

pub mod response;

// Re-export commonly used types at module level
pub use response::{ErrorResponse, HealthResponse, HealthStatus};
