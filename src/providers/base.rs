//! Base provider trait for Genie
//!
//! This module defines the Provider trait that every inference backend
//! implements. The chat controller only talks to this trait, so tests can
//! swap the HTTP client for an in-process fake.

use crate::error::Result;
use async_trait::async_trait;

/// Inference backend abstraction
///
/// Implementations report failures as [`crate::error::GenieError`] values
/// wrapped in `anyhow::Error`, so callers can downcast to tell transport
/// failures from status failures.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch the identifiers of the models the backend can answer with
    ///
    /// # Returns
    ///
    /// Returns the model identifiers in the order the backend listed them
    ///
    /// # Errors
    ///
    /// Returns `GenieError::Transport`, `GenieError::HttpStatus`,
    /// `GenieError::Upstream`, or `GenieError::MalformedResponse`
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Ask a single question to a model
    ///
    /// # Arguments
    ///
    /// * `model` - Model identifier to answer with
    /// * `question` - The user's question
    ///
    /// # Returns
    ///
    /// Returns `Some(answer)` when the backend produced a non-empty answer,
    /// `None` when the answer was missing or empty, even if the body
    /// carried an `error` field
    ///
    /// # Errors
    ///
    /// Returns `GenieError::Transport`, `GenieError::HttpStatus`, or
    /// `GenieError::MalformedResponse`
    async fn ask(&self, model: &str, question: &str) -> Result<Option<String>>;

    /// Base location of the backend, used in user-facing messages
    fn endpoint(&self) -> String;
}
