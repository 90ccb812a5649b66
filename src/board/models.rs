//! View-model types serialized to the dashboard.
//!
//! Field and variant spellings here are the wire contract with the frontend;
//! changing them breaks the board rendering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Priority tier of a task. Serialized uppercase (`"HIGH"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Tracker label spelling of this tier.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::High => "p1",
            Self::Medium => "p2",
            Self::Low => "p3",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// One of the four fixed kanban buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Ready,
    Active,
    Review,
    Done,
}

impl ColumnId {
    /// Column order as rendered on the board.
    pub const ALL: [ColumnId; 4] = [Self::Ready, Self::Active, Self::Review, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Active => "active",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Active => "Active",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Display hint consumed by the frontend column header.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Ready => "border-amber-300",
            Self::Active => "border-blue-400",
            Self::Review => "border-purple-400",
            Self::Done => "border-emerald-400",
        }
    }
}

/// Color category of a label-derived tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Slate,
}

/// Glyph attached to a label-derived tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TagIcon {
    Branch,
    Check,
    Summary,
    Commit,
}

/// Glyph of a live-activity entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIcon {
    Search,
    Book,
    Chat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub label: String,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<TagIcon>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub priority: Priority,
    pub group: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub count: usize,
    pub accent: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub icon: ActivityIcon,
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentTask {
    pub title: String,
    pub priority: Priority,
}

/// Coarse agent run state. `Paused` is accepted on the wire but never
/// produced by the assembler.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunState {
    Running,
    Idle,
    Paused,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardStatus {
    pub state: RunState,
    pub running_since: Option<String>,
    pub last_update: Option<String>,
}

/// The full board document returned by the read endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub columns: Vec<Column>,
    pub activities: Vec<Activity>,
    pub current_task: CurrentTask,
    pub status: BoardStatus,
    pub log_preview: String,
    pub log_expanded: String,
    pub system_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_roundtrip() {
        for s in &["LOW", "MEDIUM", "HIGH"] {
            let parsed: Priority = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("high".parse::<Priority>().is_err());
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::High.as_label(), "p1");
        assert_eq!(Priority::Medium.as_label(), "p2");
        assert_eq!(Priority::Low.as_label(), "p3");
    }

    #[test]
    fn test_serde_wire_spellings() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
        assert_eq!(serde_json::to_string(&ColumnId::Ready).unwrap(), "\"ready\"");
        assert_eq!(serde_json::to_string(&Tone::Slate).unwrap(), "\"slate\"");
        assert_eq!(serde_json::to_string(&TagIcon::Branch).unwrap(), "\"branch\"");
        assert_eq!(serde_json::to_string(&ActivityIcon::Chat).unwrap(), "\"chat\"");
        // Run states stay capitalized on the wire.
        assert_eq!(serde_json::to_string(&RunState::Running).unwrap(), "\"Running\"");
    }

    #[test]
    fn test_column_metadata() {
        assert_eq!(ColumnId::ALL.len(), 4);
        for id in ColumnId::ALL {
            assert_eq!(serde_json::to_string(&id).unwrap(), format!("{:?}", id.as_str()));
        }
        assert_eq!(ColumnId::Ready.title(), "Ready");
        assert_eq!(ColumnId::Ready.accent(), "border-amber-300");
        assert_eq!(ColumnId::Active.accent(), "border-blue-400");
        assert_eq!(ColumnId::Review.accent(), "border-purple-400");
        assert_eq!(ColumnId::Done.accent(), "border-emerald-400");
    }

    #[test]
    fn test_board_view_uses_camel_case_fields() {
        let view = BoardView {
            columns: vec![],
            activities: vec![],
            current_task: CurrentTask {
                title: "No open tasks".to_string(),
                priority: Priority::Low,
            },
            status: BoardStatus {
                state: RunState::Idle,
                running_since: None,
                last_update: None,
            },
            log_preview: "No progress yet.".to_string(),
            log_expanded: "No progress yet.".to_string(),
            system_count: 0,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("currentTask").is_some());
        assert!(json.get("logPreview").is_some());
        assert!(json.get("logExpanded").is_some());
        assert!(json.get("systemCount").is_some());
        // Absent timestamps serialize as explicit nulls, not omitted keys.
        assert!(json["status"]["runningSince"].is_null());
        assert!(json["status"]["lastUpdate"].is_null());
    }

    #[test]
    fn test_tag_icon_omitted_when_absent() {
        let tag = Tag {
            label: "docs".to_string(),
            tone: Tone::Slate,
            icon: None,
        };
        let json = serde_json::to_value(&tag).unwrap();
        assert!(json.get("icon").is_none());
    }
}
