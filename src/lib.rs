//! Genie - DevOps Genie chat client library
//!
//! This library provides the core of the Genie terminal client: grouping
//! past conversations by recency, exchanging questions and answers with a
//! hosted inference API, and loading the catalog of available models.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `sessions`: Conversation summaries, search filtering and recency grouping
//! - `chat`: Conversation thread, model catalog and the exchange controller
//! - `providers`: Inference API abstraction and the HTTP implementation
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use genie::{ChatController, Config};
//! use genie::providers::{create_provider, Provider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let provider: Arc<dyn Provider> = Arc::from(create_provider(&config.api)?);
//!     let mut chat = ChatController::new(provider, &config.chat);
//!     chat.load_models().await;
//!     let exchange = chat.submit("How do I roll back a deployment?").await?;
//!     println!("{}", exchange.reply.content);
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod providers;
pub mod sessions;

// Re-export commonly used types
pub use chat::{ChatController, Exchange, Message, ModelCatalog, Notice, Role};
pub use config::Config;
pub use error::{GenieError, Result};
pub use sessions::{group_sessions, ConversationSummary, RecencyGroup, SessionGroups};
