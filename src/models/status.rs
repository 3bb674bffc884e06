use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StoreError;

/// Lifecycle stage of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

/// Lifecycle stage of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Blocked,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Blocked,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

// Parsing is an exact, case-sensitive match against the stored spelling.
fn parse_exact<T: Copy>(
    kind: &str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
    s: &str,
) -> Result<T, StoreError> {
    all.iter()
        .copied()
        .find(|value| as_str(value) == s)
        .ok_or_else(|| StoreError::validation(format!("unknown {kind}: {s:?}")))
}

impl FromStr for ProjectStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact("project status", &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for TaskStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact("task status", &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for Priority {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact("priority", &Self::ALL, Self::as_str, s)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_spelling() {
        assert_eq!("On Hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("Not Started".parse::<TaskStatus>().unwrap(), TaskStatus::NotStarted);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(matches!(
            "completed".parse::<TaskStatus>(),
            Err(StoreError::Validation(_))
        ));
        assert!("in progress".parse::<ProjectStatus>().is_err());
        assert!("HIGH".parse::<Priority>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for status in TaskStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
