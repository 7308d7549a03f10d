//! Conversation list: search and recency grouping
//!
//! The list shown next to a chat is a set of [`ConversationSummary`]
//! snapshots. [`group_sessions`] filters them by a search query and buckets
//! the matches into Today, Yesterday, Last 7 days, and Older relative to an
//! explicit `now`, so the result is deterministic for a given clock reading.

use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub mod fixtures;

pub use fixtures::{load_sessions, seed_sessions};

/// Summary metadata of a past or current conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Opaque identifier
    pub id: String,
    /// Conversation title
    pub title: String,
    /// Last activity
    pub timestamp: DateTime<Utc>,
    /// First words of the conversation
    pub preview: String,
    /// Whether the user starred the conversation
    #[serde(default)]
    pub is_starred: bool,
    /// Number of messages exchanged
    #[serde(default)]
    pub message_count: usize,
}

impl ConversationSummary {
    /// Returns true when the lowercased query occurs in the title or preview
    ///
    /// An empty query matches every conversation.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use genie::sessions::ConversationSummary;
    ///
    /// let session = ConversationSummary {
    ///     id: "2".to_string(),
    ///     title: "Docker Container Optimization".to_string(),
    ///     timestamp: Utc::now(),
    ///     preview: "Shrinking images".to_string(),
    ///     is_starred: false,
    ///     message_count: 8,
    /// };
    /// assert!(session.matches("DOCKER"));
    /// assert!(session.matches("images"));
    /// assert!(!session.matches("kubernetes"));
    /// ```
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.preview.to_lowercase().contains(&needle)
    }
}

/// Recency bucket a conversation falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyGroup {
    /// Same calendar date as now
    Today,
    /// The calendar date before today
    Yesterday,
    /// Strictly between seven days ago and one day ago
    LastWeek,
    /// Everything else
    Older,
}

impl RecencyGroup {
    /// Heading shown above the group
    pub fn title(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastWeek => "Last 7 days",
            Self::Older => "Older",
        }
    }
}

/// Filtered conversations partitioned by recency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionGroups {
    /// Active today
    pub today: Vec<ConversationSummary>,
    /// Active yesterday
    pub yesterday: Vec<ConversationSummary>,
    /// Active within the last week, excluding today and yesterday
    pub last_week: Vec<ConversationSummary>,
    /// Everything else
    pub older: Vec<ConversationSummary>,
}

impl SessionGroups {
    /// Non-empty groups in display order, paired with their group
    pub fn sections(&self) -> Vec<(RecencyGroup, &[ConversationSummary])> {
        [
            (RecencyGroup::Today, self.today.as_slice()),
            (RecencyGroup::Yesterday, self.yesterday.as_slice()),
            (RecencyGroup::LastWeek, self.last_week.as_slice()),
            (RecencyGroup::Older, self.older.as_slice()),
        ]
        .into_iter()
        .filter(|(_, sessions)| !sessions.is_empty())
        .collect()
    }

    /// Number of conversations across all groups
    pub fn len(&self) -> usize {
        self.today.len() + self.yesterday.len() + self.last_week.len() + self.older.len()
    }

    /// True when no conversation matched
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keep the conversations matching `query`, preserving order
pub fn filter_sessions<'a>(
    sessions: &'a [ConversationSummary],
    query: &str,
) -> Vec<&'a ConversationSummary> {
    sessions.iter().filter(|s| s.matches(query)).collect()
}

/// Move `now` back by whole calendar days, keeping its local time of day
///
/// Falls back to a fixed 24-hour step when the local date arithmetic has no
/// answer, and returns `None` when neither fits in chrono's range.
fn days_before<Tz: TimeZone>(now: &DateTime<Tz>, days: u64) -> Option<DateTime<Tz>> {
    now.clone()
        .checked_sub_days(Days::new(days))
        .or_else(|| now.clone().checked_sub_signed(Duration::days(days as i64)))
}

/// Decide which recency group a timestamp belongs to
///
/// Checks run in order and the first match wins, so a timestamp on
/// yesterday's date never also lands in the last-week group.
pub fn classify<Tz: TimeZone>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> RecencyGroup {
    let local = timestamp.with_timezone(&now.timezone());
    let today = now.date_naive();

    if local.date_naive() == today {
        return RecencyGroup::Today;
    }

    if today.pred_opt() == Some(local.date_naive()) {
        return RecencyGroup::Yesterday;
    }

    let (Some(week_ago), Some(day_ago)) = (days_before(now, 7), days_before(now, 1)) else {
        return RecencyGroup::Older;
    };
    if local > week_ago && local < day_ago {
        return RecencyGroup::LastWeek;
    }

    RecencyGroup::Older
}

/// Filter conversations by `query` and bucket the matches by recency
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use genie::sessions::{group_sessions, ConversationSummary};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 16, 15, 0, 0).unwrap();
/// let session = ConversationSummary {
///     id: "1".to_string(),
///     title: "CI/CD Pipeline Best Practices".to_string(),
///     timestamp: now - Duration::days(3),
///     preview: "Robust pipelines for microservices".to_string(),
///     is_starred: true,
///     message_count: 12,
/// };
///
/// let groups = group_sessions(&[session], "pipeline", &now);
/// assert_eq!(groups.last_week.len(), 1);
/// assert!(group_sessions(&groups.last_week, "terraform", &now).is_empty());
/// ```
pub fn group_sessions<Tz: TimeZone>(
    sessions: &[ConversationSummary],
    query: &str,
    now: &DateTime<Tz>,
) -> SessionGroups {
    let mut groups = SessionGroups::default();

    for session in filter_sessions(sessions, query) {
        let bucket = match classify(&session.timestamp, now) {
            RecencyGroup::Today => &mut groups.today,
            RecencyGroup::Yesterday => &mut groups.yesterday,
            RecencyGroup::LastWeek => &mut groups.last_week,
            RecencyGroup::Older => &mut groups.older,
        };
        bucket.push(session.clone());
    }

    groups
}

/// Text shown when a grouping has nothing to display
///
/// Returns `None` when there is at least one conversation to show.
pub fn empty_state_message(groups: &SessionGroups, query: &str) -> Option<&'static str> {
    if !groups.is_empty() {
        return None;
    }
    if query.is_empty() {
        Some("No conversations yet")
    } else {
        Some("No conversations found")
    }
}

/// Render the time of day as `hh:mm AM/PM` in the given timezone
pub fn format_time<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format("%I:%M %p").to_string()
}
