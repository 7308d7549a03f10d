//! Model catalog command
//!
//! Fetches the model catalog the same way a chat session does, including
//! the fallback list, and prints it as a table or JSON.

use std::sync::Arc;

use prettytable::{row, Table};

use crate::chat::{ChatController, ModelCatalog};
use crate::commands::print_notices;
use crate::config::Config;
use crate::error::{GenieError, Result};
use crate::providers;

/// List the models offered by the inference API
///
/// # Arguments
///
/// * `config` - Configuration containing the API location
/// * `json` - Print a JSON array instead of a table
///
/// # Errors
///
/// Returns error if the HTTP client cannot be created or JSON output fails;
/// an unreachable API is not an error, the fallback list is printed instead
///
/// # Examples
///
/// ```no_run
/// use genie::config::Config;
/// use genie::commands::models::list_models;
///
/// # async fn example() -> anyhow::Result<()> {
/// list_models(&Config::default(), false).await?;
/// # Ok(())
/// # }
/// ```
pub async fn list_models(config: &Config, json: bool) -> Result<()> {
    tracing::info!("Listing models from {}", config.api.base_url);

    let provider = Arc::from(providers::create_provider(&config.api)?);
    let mut chat = ChatController::new(provider, &config.chat);
    chat.load_models().await;
    print_notices(&mut chat);

    if json {
        output_models_json(chat.catalog())?;
    } else {
        output_models_table(chat.catalog(), &config.api.base_url);
    }

    Ok(())
}

/// Output the catalog as a JSON array
///
/// # Errors
///
/// Returns `GenieError::Serialization` if serialization fails
fn output_models_json(catalog: &ModelCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.models()).map_err(GenieError::Serialization)?;
    println!("{}", json);
    Ok(())
}

/// Output the catalog as a table
fn output_models_table(catalog: &ModelCatalog, base_url: &str) {
    if catalog.is_empty() {
        println!("No models available from {}", base_url);
        return;
    }

    println!("\nAvailable models from {}:\n", base_url);
    build_models_table(catalog).printstd();
    println!();
}

fn build_models_table(catalog: &ModelCatalog) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "Model", "Selected"]);

    for (idx, model) in catalog.models().iter().enumerate() {
        let selected = if catalog.selected() == Some(model.as_str()) {
            "yes"
        } else {
            ""
        };
        table.add_row(row![idx + 1, model, selected]);
    }

    table
}
