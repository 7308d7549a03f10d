//! Single-question command
//!
//! Runs one exchange against a named model without loading the catalog and
//! prints the reply, for use from scripts.

use std::sync::Arc;

use crate::chat::ChatController;
use crate::commands::print_notices;
use crate::config::Config;
use crate::error::Result;
use crate::providers::{self, Provider};

/// Ask one question and print the answer
///
/// # Errors
///
/// Returns error if the question or model is empty, or if the exchange
/// failed; the error reply is printed before returning
pub async fn run_ask(config: &Config, model: &str, question: &str) -> Result<()> {
    let provider: Arc<dyn Provider> = Arc::from(providers::create_provider(&config.api)?);
    let reply = ask_with(provider, config, model, question).await?;
    println!("{}", reply);
    Ok(())
}

/// Run one exchange through `provider` and return the reply text
///
/// # Errors
///
/// Returns the precondition error for a blank question or model, or an
/// error carrying the reply text when the exchange failed
pub async fn ask_with(
    provider: Arc<dyn Provider>,
    config: &Config,
    model: &str,
    question: &str,
) -> Result<String> {
    tracing::info!(model = %model, "Asking a single question");

    let mut chat = ChatController::new(provider, &config.chat);
    chat.use_models(vec![model.to_string()]);

    let result = chat.submit(question).await;
    print_notices(&mut chat);
    let exchange = result?;

    if exchange.failed {
        anyhow::bail!(exchange.reply.content);
    }
    Ok(exchange.reply.content)
}
