//! Conversation list command
//!
//! Prints conversations grouped by recency, the terminal counterpart of the
//! sidebar next to a chat.

use std::path::PathBuf;

use chrono::{Local, TimeZone};
use colored::Colorize;

use crate::config::Config;
use crate::error::{GenieError, Result};
use crate::sessions::{
    empty_state_message, format_time, group_sessions, load_sessions, seed_sessions,
    ConversationSummary, SessionGroups,
};

/// Conversation summaries to show, by precedence
///
/// An explicit `fixtures` path wins over `sessions.fixtures_path` in the
/// configuration; without either, the built-in demo conversations are used.
///
/// # Errors
///
/// Returns error if a configured file cannot be read or parsed
pub fn resolve_sessions(
    config: &Config,
    fixtures: Option<PathBuf>,
) -> Result<Vec<ConversationSummary>> {
    let path = fixtures.or_else(|| config.sessions.fixtures_path.as_ref().map(PathBuf::from));
    match path {
        Some(path) => load_sessions(path),
        None => {
            tracing::debug!("No conversation file configured, using demo conversations");
            Ok(seed_sessions(Local::now()))
        }
    }
}

/// List conversations grouped by recency
///
/// # Arguments
///
/// * `config` - Configuration holding the conversation file location
/// * `search` - Optional case-insensitive filter over title and preview
/// * `fixtures` - Optional file overriding the configured one
/// * `json` - Print the groups as JSON instead of text
///
/// # Errors
///
/// Returns error if the conversation file cannot be loaded or the groups
/// cannot be serialized
pub fn list_sessions(
    config: &Config,
    search: Option<&str>,
    fixtures: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let query = search.unwrap_or("");
    tracing::info!("Listing conversations (query: {:?})", query);

    let sessions = resolve_sessions(config, fixtures)?;
    let groups = group_sessions(&sessions, query, &Local::now());

    if json {
        let out = serde_json::to_string_pretty(&groups).map_err(GenieError::Serialization)?;
        println!("{}", out);
    } else {
        print!("{}", render_sessions(&groups, query, &Local));
    }

    Ok(())
}

/// Render grouped conversations as terminal text
pub fn render_sessions<Tz>(groups: &SessionGroups, query: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if let Some(message) = empty_state_message(groups, query) {
        return format!("\n{}\n\n", message.yellow());
    }

    let mut out = String::from("\n");
    for (group, sessions) in groups.sections() {
        out.push_str(&format!("{}\n", group.title().to_uppercase().dimmed()));
        for session in sessions {
            out.push_str(&render_session(session, tz));
        }
        out.push('\n');
    }
    out
}

fn render_session<Tz>(session: &ConversationSummary, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let star = if session.is_starred {
        format!("{} ", "*".yellow())
    } else {
        "  ".to_string()
    };
    format!(
        "  {}{} {}\n      {}  {} | {} messages\n",
        star,
        session.id.cyan(),
        session.title.bold(),
        session.preview,
        format_time(&session.timestamp, tz),
        session.message_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_render_sessions_groups_in_order() {
        let groups = group_sessions(&seed_sessions(now()), "", &now());
        let text = render_sessions(&groups, "", &Utc);

        let today = text.find("TODAY").unwrap();
        let yesterday = text.find("YESTERDAY").unwrap();
        let last_week = text.find("LAST 7 DAYS").unwrap();
        let older = text.find("OLDER").unwrap();
        assert!(today < yesterday && yesterday < last_week && last_week < older);
        assert!(text.contains("CI/CD Pipeline Best Practices"));
        assert!(text.contains("12 messages"));
        assert!(text.contains("02:30 PM"));
    }

    #[test]
    fn test_render_sessions_empty_states() {
        let empty = SessionGroups::default();
        assert!(render_sessions(&empty, "", &Utc).contains("No conversations yet"));
        assert!(render_sessions(&empty, "helm", &Utc).contains("No conversations found"));
    }

    #[test]
    fn test_resolve_sessions_defaults_to_demo_data() {
        let sessions = resolve_sessions(&Config::default(), None).unwrap();
        assert_eq!(sessions.len(), 4);
    }

    #[test]
    fn test_resolve_sessions_prefers_explicit_file() {
        let dir = TempDir::new().unwrap();
        let configured = dir.path().join("configured.yaml");
        let explicit = dir.path().join("explicit.json");
        std::fs::write(&configured, "[]").unwrap();
        std::fs::write(
            &explicit,
            r#"[{"id":"e","title":"Explicit","timestamp":"2024-01-12T09:30:00Z","preview":""}]"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.sessions.fixtures_path = Some(configured.to_string_lossy().to_string());

        let from_config = resolve_sessions(&config, None).unwrap();
        assert!(from_config.is_empty());

        let from_flag = resolve_sessions(&config, Some(explicit)).unwrap();
        assert_eq!(from_flag[0].id, "e");
    }
}
