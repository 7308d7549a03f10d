//! Interactive chat mode handler.
//!
//! Loads the model catalog, then runs a readline-based loop that sends each
//! line to the selected model and prints the reply. Lines starting with `/`
//! are special commands handled locally.

use std::sync::Arc;

use chrono::Local;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::chat::{ChatController, Message, Role, QUICK_ACTIONS};
use crate::commands::print_notices;
use crate::commands::sessions::{render_sessions, resolve_sessions};
use crate::commands::special_commands::{
    parse_special_command, print_help, print_quick_actions, SpecialCommand,
};
use crate::config::Config;
use crate::error::{GenieError, Result};
use crate::providers::{create_provider, Provider};
use crate::sessions::{group_sessions, ConversationSummary};

/// Start interactive chat mode
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `model` - Optional model to select once the catalog is loaded
///
/// # Errors
///
/// Returns error if the HTTP client, the line editor, or the conversation
/// list cannot be initialized
pub async fn run_chat(config: Config, model: Option<String>) -> Result<()> {
    tracing::info!("Starting interactive chat mode");

    let provider: Arc<dyn Provider> = Arc::from(create_provider(&config.api)?);
    let mut chat = ChatController::new(provider, &config.chat);

    println!("{}", "Loading models...".dimmed());
    chat.load_models().await;
    print_notices(&mut chat);

    if let Some(name) = model.as_deref() {
        if let Err(e) = chat.select_model(name) {
            eprintln!("{}", e.to_string().red());
        }
    }

    let sessions = resolve_sessions(&config, None)?;
    let mut rl = DefaultEditor::new().map_err(GenieError::Readline)?;

    print_welcome_banner(&chat);

    loop {
        match rl.readline(&format_prompt(chat.selected_model())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)
                    .map_err(GenieError::Readline)?;

                let question = match parse_special_command(trimmed) {
                    Ok(SpecialCommand::None) => trimmed.to_string(),
                    Ok(SpecialCommand::Exit) => break,
                    Ok(SpecialCommand::Quick(idx)) => {
                        let (label, prompt) = QUICK_ACTIONS[idx];
                        println!("{} {}", label.cyan(), prompt);
                        prompt.to_string()
                    }
                    Ok(command) => {
                        handle_special_command(&mut chat, command, &sessions);
                        continue;
                    }
                    Err(e) => {
                        eprintln!("{}\n", e.to_string().red());
                        continue;
                    }
                };

                send_question(&mut chat, &question).await;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(GenieError::Readline(e).into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Submit one question and print the outcome
async fn send_question(chat: &mut ChatController, question: &str) {
    println!("{}", "Genie is thinking...".dimmed());

    match chat.submit(question).await {
        Ok(exchange) => print_message(&exchange.reply),
        Err(e) => tracing::debug!("Submission rejected: {}", e),
    }

    print_notices(chat);
}

fn handle_special_command(
    chat: &mut ChatController,
    command: SpecialCommand,
    sessions: &[ConversationSummary],
) {
    match command {
        SpecialCommand::Help => print_help(),
        SpecialCommand::ListModels => print_models(chat),
        SpecialCommand::SelectModel(name) => match chat.select_model(&name) {
            Ok(()) => println!("Switched to model {}\n", name.cyan()),
            Err(e) => eprintln!("{}\n", e.to_string().red()),
        },
        SpecialCommand::Sessions(query) => {
            let query = query.unwrap_or_default();
            let groups = group_sessions(sessions, &query, &Local::now());
            print!("{}", render_sessions(&groups, &query, &Local));
        }
        SpecialCommand::NewChat => {
            chat.new_chat();
            println!("Started a new chat\n");
        }
        SpecialCommand::ShowStatus => print_status(chat),
        SpecialCommand::QuickActions => print_quick_actions(),
        SpecialCommand::Quick(_) | SpecialCommand::Exit | SpecialCommand::None => {}
    }
}

fn format_prompt(model: Option<&str>) -> String {
    match model {
        Some(model) if !model.is_empty() => format!("[{}] >> ", model.cyan()),
        _ => format!("[{}] >> ", "no model".red()),
    }
}

fn print_message(message: &Message) {
    let label = match message.role {
        Role::User => "You".green().bold(),
        Role::Assistant => "Genie".magenta().bold(),
    };
    let time = message.timestamp.with_timezone(&Local).format("%I:%M %p");
    println!("\n{} {}", label, time.to_string().dimmed());
    println!("{}\n", message.content);
}

fn print_models(chat: &ChatController) {
    println!();
    for model in chat.catalog().models() {
        if chat.selected_model() == Some(model.as_str()) {
            println!("  {} {}", "*".green(), model.bold());
        } else {
            println!("    {}", model);
        }
    }
    println!();
}

fn print_status(chat: &ChatController) {
    println!();
    println!(
        "Model:     {}",
        chat.selected_model().unwrap_or("none selected")
    );
    println!("Models:    {}", chat.catalog().models().len());
    println!("Messages:  {}", chat.thread().len());
    println!();
}

fn print_welcome_banner(chat: &ChatController) {
    println!();
    println!("{}", "DevOps Genie".bold().magenta());
    println!("Ask about CI/CD, containers, cloud, infrastructure as code, and more.");
    match chat.selected_model() {
        Some(model) => println!("Model: {}", model.cyan()),
        None => println!("{}", "No model available; use /models and /model <name>".yellow()),
    }
    println!("Type '/help' for commands, '/quick' for example questions, '/exit' to leave.\n");
}
