//! Special commands parser for interactive chat mode
//!
//! Special commands let the user inspect and change the session instead of
//! asking the model:
//! - List and switch models
//! - Browse and search past conversations
//! - Start a new chat
//! - Send one of the quick-action prompts
//! - Display help and exit
//!
//! Commands are prefixed with `/` and are case-insensitive.

use crate::chat::QUICK_ACTIONS;
use colored::Colorize;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during interactive chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Display help information
    Help,

    /// List the model catalog and the active model
    ListModels,

    /// Switch the active model
    SelectModel(String),

    /// Show conversations grouped by recency, optionally filtered
    Sessions(Option<String>),

    /// Drop the current thread and start over
    NewChat,

    /// Show the active model and thread size
    ShowStatus,

    /// List the quick-action prompts
    QuickActions,

    /// Send the quick-action prompt with this zero-based index
    Quick(usize),

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be sent to the model as a question.
    None,
}

/// Parse a user input string into a special command
///
/// # Returns
///
/// Returns Ok(SpecialCommand::None) for input that does not start with `/`
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` for an unrecognized `/command`,
/// `CommandError::MissingArgument` for `/model` without a name, and
/// `CommandError::UnsupportedArgument` for an out-of-range `/quick` index
///
/// # Examples
///
/// ```
/// use genie::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/exit"), Ok(SpecialCommand::Exit));
/// assert_eq!(
///     parse_special_command("/model llama3.2"),
///     Ok(SpecialCommand::SelectModel("llama3.2".to_string()))
/// );
/// assert_eq!(parse_special_command("what is argo?"), Ok(SpecialCommand::None));
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Ok(SpecialCommand::None);
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };
    let command = command.to_lowercase();

    match command.as_str() {
        "/help" | "/h" | "/?" => Ok(SpecialCommand::Help),
        "/models" => Ok(SpecialCommand::ListModels),
        "/model" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/model".to_string(),
                    usage: "/model <name>".to_string(),
                })
            } else {
                Ok(SpecialCommand::SelectModel(rest.to_string()))
            }
        }
        "/sessions" | "/history" => {
            if rest.is_empty() {
                Ok(SpecialCommand::Sessions(None))
            } else {
                Ok(SpecialCommand::Sessions(Some(rest.to_string())))
            }
        }
        "/new" => Ok(SpecialCommand::NewChat),
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/quick" => parse_quick(rest),
        "/exit" | "/quit" | "/q" => Ok(SpecialCommand::Exit),
        _ => Err(CommandError::UnknownCommand(trimmed.to_string())),
    }
}

fn parse_quick(arg: &str) -> Result<SpecialCommand, CommandError> {
    if arg.is_empty() {
        return Ok(SpecialCommand::QuickActions);
    }

    match arg.parse::<usize>() {
        Ok(n) if (1..=QUICK_ACTIONS.len()).contains(&n) => Ok(SpecialCommand::Quick(n - 1)),
        _ => Err(CommandError::UnsupportedArgument {
            command: "/quick".to_string(),
            arg: arg.to_string(),
        }),
    }
}

/// Print the list of special commands
pub fn print_help() {
    println!();
    println!("{}", "Available commands".bold());
    println!("  /models              List available models");
    println!("  /model <name>        Switch to another model");
    println!("  /sessions [query]    Show past conversations, optionally filtered");
    println!("  /new                 Start a new chat");
    println!("  /quick [n]           List quick prompts, or send prompt n");
    println!("  /status              Show the active model and thread size");
    println!("  /help                Show this help");
    println!("  /exit                Leave the chat");
    println!();
}

/// Print the quick-action prompts with their numbers
pub fn print_quick_actions() {
    println!();
    for (idx, (label, prompt)) in QUICK_ACTIONS.iter().enumerate() {
        println!("  {}. {} - {}", idx + 1, label.cyan(), prompt);
    }
    println!();
}
