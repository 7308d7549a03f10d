//! In-process fake provider for unit and integration tests
//!
//! [`FakeProvider`] replays scripted outcomes instead of making network
//! requests, and records every call so tests can assert that a request was
//! or was not made.
//!
//! # Example
//!
//! ```
//! use genie::providers::fake::{FakeOutcome, FakeProvider};
//! use genie::providers::Provider;
//!
//! # tokio_test::block_on(async {
//! let provider = FakeProvider::new()
//!     .with_models(FakeOutcome::Ok(vec!["llama3.2".to_string()]))
//!     .with_answer(FakeOutcome::Ok(Some("Use a multi-stage build.".to_string())));
//!
//! let answer = provider.ask("llama3.2", "How do I shrink images?").await.unwrap();
//! assert_eq!(answer.as_deref(), Some("Use a multi-stage build."));
//! assert_eq!(provider.ask_calls().len(), 1);
//! # });
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{GenieError, Result};
use crate::providers::Provider;

/// A scripted outcome for one fake call
#[derive(Debug, Clone)]
pub enum FakeOutcome<T> {
    /// The call succeeds with this value
    Ok(T),
    /// The call fails before reaching the server
    Transport(String),
    /// The server answers with a non-2xx status
    Status(u16),
    /// The server answers 2xx with an unreadable body
    Malformed(String),
    /// The server answers 2xx with an `error` payload
    Upstream(String),
}

impl<T> FakeOutcome<T> {
    fn into_result(self) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Transport(msg) => Err(GenieError::Transport(msg).into()),
            Self::Status(status) => Err(GenieError::HttpStatus { status }.into()),
            Self::Malformed(msg) => Err(GenieError::MalformedResponse(msg).into()),
            Self::Upstream(msg) => Err(GenieError::Upstream(msg).into()),
        }
    }
}

/// Provider that replays scripted outcomes
#[derive(Debug)]
pub struct FakeProvider {
    models: FakeOutcome<Vec<String>>,
    answers: Mutex<VecDeque<FakeOutcome<Option<String>>>>,
    ask_calls: Mutex<Vec<(String, String)>>,
    list_calls: AtomicUsize,
}

impl FakeProvider {
    /// Create a fake with an empty model list and no scripted answers
    pub fn new() -> Self {
        Self {
            models: FakeOutcome::Ok(Vec::new()),
            answers: Mutex::new(VecDeque::new()),
            ask_calls: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Set the outcome of every `list_models` call
    pub fn with_models(mut self, outcome: FakeOutcome<Vec<String>>) -> Self {
        self.models = outcome;
        self
    }

    /// Queue the outcome of the next unanswered `ask` call
    pub fn with_answer(self, outcome: FakeOutcome<Option<String>>) -> Self {
        self.push_answer(outcome);
        self
    }

    /// Queue an outcome on a fake that is already shared
    pub fn push_answer(&self, outcome: FakeOutcome<Option<String>>) {
        if let Ok(mut answers) = self.answers.lock() {
            answers.push_back(outcome);
        }
    }

    /// Every `(model, question)` pair passed to `ask`, in call order
    pub fn ask_calls(&self) -> Vec<(String, String)> {
        self.ask_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Number of `list_models` calls made so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for FakeProvider {
    async fn list_models(&self) -> Result<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.models.clone().into_result()
    }

    async fn ask(&self, model: &str, question: &str) -> Result<Option<String>> {
        if let Ok(mut calls) = self.ask_calls.lock() {
            calls.push((model.to_string(), question.to_string()));
        }

        let next = self
            .answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front());

        match next {
            Some(outcome) => outcome.into_result(),
            None => Err(GenieError::Transport("no scripted answer left".to_string()).into()),
        }
    }

    fn endpoint(&self) -> String {
        "fake://genie".to_string()
    }
}
