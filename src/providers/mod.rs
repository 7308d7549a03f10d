//! Provider module for Genie
//!
//! This module contains the inference backend abstraction, the HTTP
//! implementation for the DevOps Genie service, and a scripted fake.

pub mod base;
pub mod fake;
pub mod genie;

pub use base::Provider;
pub use fake::{FakeOutcome, FakeProvider};
pub use genie::GenieProvider;

use crate::config::ApiConfig;
use crate::error::Result;

/// Create the HTTP provider described by the API configuration
///
/// # Errors
///
/// Returns error if the HTTP client cannot be initialized
pub fn create_provider(config: &ApiConfig) -> Result<Box<dyn Provider>> {
    Ok(Box::new(GenieProvider::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_uses_configured_base() {
        let config = ApiConfig {
            base_url: "http://genie.internal:8000/".to_string(),
            ..Default::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.endpoint(), "http://genie.internal:8000");
    }
}
