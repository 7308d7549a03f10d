//! Transient user-facing notices

use colored::Colorize;
use std::fmt;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Something worked
    Success,
    /// Something failed and was recovered from
    Error,
}

impl NoticeLevel {
    /// Colored tag for terminal output
    pub fn colored_tag(&self) -> String {
        match self {
            Self::Success => format!("[{}]", "OK".green()),
            Self::Error => format!("[{}]", "ERROR".red()),
        }
    }
}

/// Message surfaced to the user outside the conversation thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Short heading
    pub title: String,
    /// Human-readable detail
    pub description: String,
}

impl Notice {
    /// Creates a success notice
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Creates an error notice
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Colored single-line rendering for the terminal
    pub fn colored(&self) -> String {
        format!(
            "{} {}: {}",
            self.level.colored_tag(),
            self.title.bold(),
            self.description
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let ok = Notice::success("Success", "Loaded 3 models from API");
        assert_eq!(ok.level, NoticeLevel::Success);

        let err = Notice::error("Error", "boom");
        assert_eq!(err.level, NoticeLevel::Error);
    }

    #[test]
    fn test_notice_display() {
        let notice = Notice::error("No Model Selected", "Pick one first.");
        assert_eq!(notice.to_string(), "No Model Selected: Pick one first.");
    }

    #[test]
    fn test_colored_contains_text() {
        let notice = Notice::success("Success", "done");
        let rendered = notice.colored();
        assert!(rendered.contains("OK"));
        assert!(rendered.contains("Success"));
        assert!(rendered.ends_with(": done"));
    }
}
