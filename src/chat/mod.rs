//! Chat state and the question/answer exchange
//!
//! [`ChatController`] owns everything a chat session mutates: the thread,
//! the model catalog, the in-flight flags, and pending notices. Every
//! change goes through its methods; front ends read state back through
//! accessors and [`ChatStatus`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ChatConfig;
use crate::error::{GenieError, Result};
use crate::providers::Provider;

pub mod catalog;
pub mod message;
pub mod notice;

pub use catalog::ModelCatalog;
pub use message::{Message, Role, Thread};
pub use notice::{Notice, NoticeLevel};

/// Assistant text used when the service answered without an answer
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received from the model.";

/// Canned prompts offered on an empty chat
pub const QUICK_ACTIONS: [(&str, &str); 6] = [
    ("CI/CD Pipeline", "Tell me about CI/CD pipeline best practices"),
    ("Docker & Containers", "Explain Docker containerization concepts"),
    ("Cloud Architecture", "How do I design scalable cloud architecture?"),
    ("Infrastructure as Code", "What are Terraform best practices?"),
    ("DevSecOps", "How do I implement security in DevOps?"),
    ("Monitoring & Logging", "Best practices for monitoring microservices"),
];

/// Shared view of the in-flight flags
///
/// Clones observe the same flags, so a spinner or another task can watch a
/// controller that is busy awaiting a response.
#[derive(Debug, Clone, Default)]
pub struct ChatStatus {
    awaiting: Arc<AtomicBool>,
    loading_models: Arc<AtomicBool>,
}

impl ChatStatus {
    /// True while an exchange waits for its response
    pub fn is_awaiting(&self) -> bool {
        self.awaiting.load(Ordering::SeqCst)
    }

    /// True while the model catalog is being fetched
    pub fn is_loading_models(&self) -> bool {
        self.loading_models.load(Ordering::SeqCst)
    }
}

/// Sets a flag for its lifetime and clears it on drop
struct FlagGuard<'a>(&'a AtomicBool);

impl<'a> FlagGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Outcome of one accepted submission
#[derive(Debug, Clone)]
pub struct Exchange {
    /// The question as appended to the thread
    pub question: Message,
    /// The answer, placeholder, or error text appended after it
    pub reply: Message,
    /// True when the reply describes a failure
    pub failed: bool,
}

/// Owner of the chat session state
pub struct ChatController {
    provider: Arc<dyn Provider>,
    thread: Thread,
    catalog: ModelCatalog,
    status: ChatStatus,
    notices: Vec<Notice>,
    fallback_models: Vec<String>,
    preferred_model: Option<String>,
}

impl ChatController {
    /// Create a controller with an empty thread and catalog
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use genie::chat::ChatController;
    /// use genie::config::ChatConfig;
    /// use genie::providers::FakeProvider;
    ///
    /// let controller = ChatController::new(Arc::new(FakeProvider::new()), &ChatConfig::default());
    /// assert!(controller.thread().is_empty());
    /// assert!(controller.selected_model().is_none());
    /// ```
    pub fn new(provider: Arc<dyn Provider>, config: &ChatConfig) -> Self {
        Self {
            provider,
            thread: Thread::new(),
            catalog: ModelCatalog::default(),
            status: ChatStatus::default(),
            notices: Vec::new(),
            fallback_models: config.fallback_models.clone(),
            preferred_model: config.default_model.clone(),
        }
    }

    /// Fetch the model catalog, falling back to the configured list
    ///
    /// Never fails: any problem replaces the catalog with the fallback
    /// models, selects the first of them, and queues an error notice.
    pub async fn load_models(&mut self) -> &[String] {
        let result = {
            let _loading = FlagGuard::raise(&self.status.loading_models);
            self.provider.list_models().await
        };

        match result {
            Ok(models) => {
                tracing::info!("Loaded {} models from API", models.len());
                self.notices.push(Notice::success(
                    "Success",
                    format!("Loaded {} models from API", models.len()),
                ));
                self.catalog
                    .replace(models, self.preferred_model.as_deref());
            }
            Err(e) => {
                tracing::warn!("Failed to load models, using fallback list: {}", e);
                let description = catalog_failure_description(&e, &self.provider.endpoint());
                self.notices.push(Notice::error("Error", description));
                self.catalog.replace(self.fallback_models.clone(), None);
            }
        }

        self.catalog.models()
    }

    /// Send a question to the selected model
    ///
    /// The question is appended to the thread before the request is made,
    /// and an assistant message follows whether the request succeeds or
    /// not. A failed request is still `Ok`, with [`Exchange::failed`] set.
    ///
    /// # Errors
    ///
    /// Returns a precondition error, leaving the thread untouched, when an
    /// exchange is already in flight, the question is blank, or no model is
    /// selected
    pub async fn submit(&mut self, question: &str) -> Result<Exchange> {
        if self.status.is_awaiting() {
            return Err(GenieError::ExchangeInFlight.into());
        }

        let question = question.trim();
        if question.is_empty() {
            self.notices.push(Notice::error(
                "Empty Question",
                "Please enter a question before sending.",
            ));
            return Err(GenieError::EmptyQuestion.into());
        }

        let model = match self.catalog.selected() {
            Some(model) if !model.is_empty() => model.to_string(),
            _ => {
                self.notices.push(Notice::error(
                    "No Model Selected",
                    "Please select a model before sending a message.",
                ));
                return Err(GenieError::NoModelSelected.into());
            }
        };

        let asked = Message::user(question);
        self.thread.push(asked.clone());

        tracing::info!(model = %model, "Sending question to model");
        let result = {
            let _awaiting = FlagGuard::raise(&self.status.awaiting);
            self.provider.ask(&model, question).await
        };

        let (reply, failed) = match result {
            Ok(Some(answer)) => (Message::assistant(answer), false),
            Ok(None) => {
                tracing::warn!(model = %model, "Model returned no answer");
                (Message::assistant(NO_RESPONSE_PLACEHOLDER), false)
            }
            Err(e) => {
                tracing::error!(model = %model, "Error calling model API: {}", e);
                self.notices.push(Notice::error(
                    "Error",
                    "Failed to get response from the model. Please try again.",
                ));
                let text = format!(
                    "Sorry, I encountered an error while processing your request: {}. Please try again.",
                    e
                );
                (Message::assistant(text), true)
            }
        };

        self.thread.push(reply.clone());

        Ok(Exchange {
            question: asked,
            reply,
            failed,
        })
    }

    /// Replace the catalog without asking the API, selecting the first entry
    pub fn use_models(&mut self, models: Vec<String>) {
        self.catalog.replace(models, None);
    }

    /// Make `name` the active model
    ///
    /// # Errors
    ///
    /// Returns `GenieError::UnknownModel` if the catalog does not offer it
    pub fn select_model(&mut self, name: &str) -> Result<()> {
        self.catalog.select(name)?;
        tracing::info!("Selected model {}", name);
        Ok(())
    }

    /// Start over with an empty thread
    pub fn new_chat(&mut self) {
        tracing::debug!("Starting a new chat, dropping {} messages", self.thread.len());
        self.thread = Thread::new();
    }

    /// Drain the notices queued since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The current conversation
    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    /// The current model catalog
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// The active model, if any
    pub fn selected_model(&self) -> Option<&str> {
        self.catalog.selected()
    }

    /// True while an exchange waits for its response
    pub fn is_awaiting(&self) -> bool {
        self.status.is_awaiting()
    }

    /// True while the model catalog is being fetched
    pub fn is_loading_models(&self) -> bool {
        self.status.is_loading_models()
    }

    /// Handle that observes the in-flight flags from elsewhere
    pub fn status(&self) -> ChatStatus {
        self.status.clone()
    }
}

/// Notice text for a failed catalog fetch, by failure kind
fn catalog_failure_description(error: &anyhow::Error, endpoint: &str) -> String {
    match error.downcast_ref::<GenieError>() {
        Some(GenieError::Transport(_)) => format!(
            "Connection error: Cannot connect to {}. Please check that the server is running.",
            endpoint
        ),
        Some(status @ GenieError::HttpStatus { .. }) => format!("Server error: {}", status),
        _ => "Failed to load available models. Using default models.".to_string(),
    }
}
