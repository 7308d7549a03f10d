//! Conversation summaries to display
//!
//! There is no conversation store behind the client. The list comes either
//! from a user-supplied YAML/JSON file or from built-in demo data placed
//! relative to the current time.

use std::path::Path;

use chrono::{DateTime, Days, Duration, TimeZone, Utc};

use crate::error::{GenieError, Result};
use crate::sessions::ConversationSummary;

/// Built-in demo conversations, dated relative to `now`
///
/// Dates are worked out in `now`'s timezone so the demo fills every recency
/// group at any time of day: the newest entry never lands before today's
/// midnight and the second one is on yesterday's date.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use genie::sessions::seed_sessions;
///
/// let sessions = seed_sessions(Utc::now());
/// assert_eq!(sessions.len(), 4);
/// assert!(sessions.iter().any(|s| s.is_starred));
/// ```
pub fn seed_sessions<Tz: TimeZone>(now: DateTime<Tz>) -> Vec<ConversationSummary> {
    let demo = [
        (
            "CI/CD Pipeline Best Practices",
            "How to set up a robust CI/CD pipeline for microservices...",
            earlier_today(&now, Duration::minutes(30)),
            true,
            12,
        ),
        (
            "Docker Container Optimization",
            "What are the best practices for optimizing Docker containers...",
            now.clone()
                .checked_sub_days(Days::new(1))
                .unwrap_or_else(|| now.clone() - Duration::days(1)),
            false,
            8,
        ),
        (
            "Kubernetes Troubleshooting",
            "How to debug pod failures in Kubernetes...",
            now.clone() - Duration::days(3),
            false,
            15,
        ),
        (
            "AWS Infrastructure Interview",
            "Common AWS infrastructure interview questions...",
            now.clone() - Duration::days(12),
            true,
            20,
        ),
    ];

    demo.into_iter()
        .enumerate()
        .map(
            |(idx, (title, preview, timestamp, is_starred, message_count))| ConversationSummary {
                id: (idx + 1).to_string(),
                title: title.to_string(),
                timestamp: timestamp.with_timezone(&Utc),
                preview: preview.to_string(),
                is_starred,
                message_count,
            },
        )
        .collect()
}

/// `now - age`, clamped to the start of `now`'s calendar day
fn earlier_today<Tz: TimeZone>(now: &DateTime<Tz>, age: Duration) -> DateTime<Tz> {
    let candidate = now.clone() - age;
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|start| now.timezone().from_local_datetime(&start).earliest());

    match midnight {
        Some(midnight) if candidate < midnight => midnight,
        _ => candidate,
    }
}

/// Read conversation summaries from a file
///
/// Files ending in `.json` are parsed as JSON; anything else as YAML.
///
/// # Errors
///
/// Returns error if the file cannot be read or does not hold a list of
/// conversation summaries
pub fn load_sessions(path: impl AsRef<Path>) -> Result<Vec<ConversationSummary>> {
    let path = path.as_ref();
    tracing::debug!("Loading conversation summaries from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(GenieError::Io)?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let sessions: Vec<ConversationSummary> = if is_json {
        serde_json::from_str(&contents).map_err(GenieError::Serialization)?
    } else {
        serde_yaml::from_str(&contents).map_err(GenieError::Yaml)?
    };

    tracing::info!(
        "Loaded {} conversation summaries from {}",
        sessions.len(),
        path.display()
    );
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::group_sessions;
    use chrono::FixedOffset;
    use tempfile::TempDir;

    #[test]
    fn test_seed_sessions_cover_every_group() {
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 15, 0, 0).unwrap();
        let groups = group_sessions(&seed_sessions(now), "", &now);
        assert_eq!(groups.today.len(), 1);
        assert_eq!(groups.yesterday.len(), 1);
        assert_eq!(groups.last_week.len(), 1);
        assert_eq!(groups.older.len(), 1);
    }

    #[test]
    fn test_seed_sessions_just_after_midnight_stay_today() {
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 0, 10, 0).unwrap();
        let sessions = seed_sessions(now);
        assert_eq!(
            sessions[0].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap()
        );

        let groups = group_sessions(&sessions, "", &now);
        assert_eq!(groups.today.len(), 1);
        assert_eq!(groups.yesterday.len(), 1);
        assert_eq!(groups.last_week.len(), 1);
        assert_eq!(groups.older.len(), 1);
    }

    #[test]
    fn test_seed_sessions_use_now_timezone() {
        // 05:10 UTC is 00:10 in UTC-5, so "today" starts at 05:00 UTC
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2024, 1, 16, 5, 10, 0)
            .unwrap()
            .with_timezone(&eastern);
        let sessions = seed_sessions(now);
        assert_eq!(
            sessions[0].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 16, 5, 0, 0).unwrap()
        );

        let groups = group_sessions(&sessions, "", &now);
        assert_eq!(groups.today.len(), 1);
        assert_eq!(groups.yesterday.len(), 1);
    }

    #[test]
    fn test_seed_session_ids_unique() {
        let sessions = seed_sessions(Utc::now());
        let mut ids: Vec<_> = sessions.iter().map(|s| s.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), sessions.len());
    }

    #[test]
    fn test_load_sessions_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.yaml");
        std::fs::write(
            &path,
            r#"
- id: a1
  title: Terraform State Locking
  timestamp: 2024-01-10T08:00:00Z
  preview: Why does my plan hang on the lock?
  is_starred: true
  message_count: 4
- id: a2
  title: Prometheus Alerts
  timestamp: 2024-01-11T12:00:00Z
  preview: Alertmanager routing
"#,
        )
        .unwrap();

        let sessions = load_sessions(&path).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].title, "Terraform State Locking");
        assert!(sessions[0].is_starred);
        assert!(!sessions[1].is_starred);
        assert_eq!(sessions[1].message_count, 0);
    }

    #[test]
    fn test_load_sessions_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.json");
        std::fs::write(
            &path,
            r#"[{"id":"x","title":"GitOps","timestamp":"2024-01-12T09:30:00Z","preview":"Argo CD sync waves","is_starred":false,"message_count":3}]"#,
        )
        .unwrap();

        let sessions = load_sessions(&path).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "x");
    }

    #[test]
    fn test_load_sessions_missing_file() {
        let result = load_sessions("/nonexistent/sessions.yaml");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenieError>(),
            Some(GenieError::Io(_))
        ));
    }

    #[test]
    fn test_load_sessions_rejects_bad_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.json");
        std::fs::write(&path, r#"{"sessions": []}"#).unwrap();
        assert!(load_sessions(&path).is_err());
    }
}
