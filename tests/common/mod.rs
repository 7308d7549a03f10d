use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use chrono::{DateTime, Utc};
use genie::sessions::ConversationSummary;

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Config pointing the client at `base_url`
#[allow(dead_code)]
pub fn config_for(base_url: &str) -> (TempDir, PathBuf) {
    temp_config_file(&format!(
        "api:\n  base_url: {}\n  timeout_seconds: 5\n",
        base_url
    ))
}

#[allow(dead_code)]
pub fn summary(id: &str, title: &str, timestamp: DateTime<Utc>) -> ConversationSummary {
    ConversationSummary {
        id: id.to_string(),
        title: title.to_string(),
        timestamp,
        preview: format!("Notes about {}", title.to_lowercase()),
        is_starred: false,
        message_count: 2,
    }
}

/// Write conversation summaries as a JSON fixtures file
#[allow(dead_code)]
pub fn sessions_file(sessions: &[ConversationSummary]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let path = temp_dir.path().join("sessions.json");
    let json = serde_json::to_string_pretty(sessions).expect("failed to serialize sessions");
    fs::write(&path, json).expect("failed to write sessions file");
    (temp_dir, path)
}
