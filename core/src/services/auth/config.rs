//! Configuration for the email authentication service

/// Configuration for the email authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Product name shown in verification mail
    pub product_name: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            product_name: String::from("Toolkit"),
        }
    }
}
