//! Command-line interface definition for Genie
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, single questions, the model
//! catalog, and the conversation list.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Genie - DevOps Genie terminal chat client
///
/// Pick a model, ask DevOps questions, and browse past conversations.
#[derive(Parser, Debug, Clone)]
#[command(name = "genie")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the inference API base URL
    #[arg(long, env = "GENIE_API_BASE")]
    pub api_base: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Genie
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Model to select once the catalog is loaded
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// Model to answer with
        #[arg(short, long)]
        model: String,

        /// The question to send
        question: String,
    },

    /// List the models offered by the inference API
    Models {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List conversations grouped by recency
    Sessions {
        /// Only show conversations whose title or preview contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Read conversation summaries from a YAML or JSON file
        #[arg(long)]
        fixtures: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            api_base: None,
            command: Commands::Chat { model: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(cli.api_base.is_none());
        assert!(matches!(cli.command, Commands::Chat { model: None }));
    }

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["genie", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat { model: None }));
    }

    #[test]
    fn test_cli_parse_chat_with_model() {
        let cli = Cli::try_parse_from(["genie", "chat", "--model", "llama3.2"]).unwrap();
        if let Commands::Chat { model } = cli.command {
            assert_eq!(model, Some("llama3.2".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_ask() {
        let cli =
            Cli::try_parse_from(["genie", "ask", "-m", "gpt-4", "What is a pod?"]).unwrap();
        if let Commands::Ask { model, question } = cli.command {
            assert_eq!(model, "gpt-4");
            assert_eq!(question, "What is a pod?");
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_ask_requires_model() {
        let cli = Cli::try_parse_from(["genie", "ask", "hello"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_models_json() {
        let cli = Cli::try_parse_from(["genie", "models", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Models { json: true }));
    }

    #[test]
    fn test_cli_parse_sessions_with_search() {
        let cli = Cli::try_parse_from(["genie", "sessions", "--search", "docker"]).unwrap();
        if let Commands::Sessions {
            search,
            fixtures,
            json,
        } = cli.command
        {
            assert_eq!(search, Some("docker".to_string()));
            assert!(fixtures.is_none());
            assert!(!json);
        } else {
            panic!("Expected Sessions command");
        }
    }

    #[test]
    fn test_cli_parse_api_base_flag() {
        let cli =
            Cli::try_parse_from(["genie", "--api-base", "http://genie:9000", "models"]).unwrap();
        assert_eq!(cli.api_base, Some("http://genie:9000".to_string()));
    }

    #[test]
    fn test_cli_parse_verbose_and_config() {
        let cli = Cli::try_parse_from(["genie", "-v", "-c", "custom.yaml", "chat"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
    }

    #[test]
    fn test_cli_unknown_command_fails() {
        let cli = Cli::try_parse_from(["genie", "deploy"]);
        assert!(cli.is_err());
    }
}
