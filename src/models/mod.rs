use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// The three top-level tabs, one per resource collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    #[default]
    Notes,
    Tasks,
    Calendar,
}

impl Section {
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Notes => "/notes",
            Self::Tasks => "/tasks",
            Self::Calendar => "/calendar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Tasks => "Tasks",
            Self::Calendar => "Calendar",
        }
    }

    /// Singular noun used in prompts ("delete this note?").
    pub fn noun(self) -> &'static str {
        match self {
            Self::Notes => "note",
            Self::Tasks => "task",
            Self::Calendar => "event",
        }
    }

    pub fn new_label(self) -> &'static str {
        match self {
            Self::Notes => "New Note",
            Self::Tasks => "New Task",
            Self::Calendar => "New Event",
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Wire name, e.g. `in_progress`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Pending => "📋",
            Self::InProgress => "🔄",
            Self::Completed => "✅",
        }
    }
}

/// Unknown statuses from the server display as pending instead of dropping the task.
fn status_or_pending<'de, D: Deserializer<'de>>(d: D) -> Result<TaskStatus, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: TaskStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub linked_task_id: Option<i64>,
}

/// Create-form payloads. Text is trimmed on construction; blank optional
/// dates become `null`.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, due_date: &str, status: TaskStatus) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            due_date: Some(due_date.trim().to_string()).filter(|d| !d.is_empty()),
            status,
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
}

impl EventDraft {
    pub fn new(title: &str, description: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            start_time: start_time.trim().to_string(),
            end_time: end_time.trim().to_string(),
        }
    }
}

/// Per-tab totals shown next to the tab titles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub notes: usize,
    pub tasks: usize,
    pub events: usize,
}

impl Counts {
    pub fn get(&self, section: Section) -> usize {
        match section {
            Section::Notes => self.notes,
            Section::Tasks => self.tasks,
            Section::Calendar => self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_response_contract_deserialize() {
        let json = r#"{
            "id": 7,
            "user_id": 1,
            "title": "Ship spec",
            "description": null,
            "due_date": null,
            "status": "in_progress",
            "created_at": "2025-01-05T14:30:00",
            "updated_at": "2025-01-05T14:30:00"
        }"#;
        let t: Task = serde_json::from_str(json).expect("task should parse");
        assert_eq!(t.id, 7);
        assert_eq!(t.status, TaskStatus::InProgress);
        assert!(t.due_date.is_none());
    }

    #[test]
    fn test_unknown_task_status_reads_as_pending() {
        let t: Task = serde_json::from_str(r#"{"id":1,"title":"x","status":"todo"}"#)
            .expect("task should parse");
        assert_eq!(t.status, TaskStatus::Pending);
    }

    #[test]
    fn test_event_response_ignores_extra_fields() {
        let json = r#"{
            "id": 3, "user_id": 1, "title": "Standup", "description": "daily",
            "start_time": "2025-01-06T09:00:00", "end_time": "2025-01-06T09:15:00",
            "linked_task_id": 7, "created_at": "x", "updated_at": "y"
        }"#;
        let e: CalendarEvent = serde_json::from_str(json).expect("event should parse");
        assert_eq!(e.linked_task_id, Some(7));
        assert_eq!(e.end_time, "2025-01-06T09:15:00");
    }

    #[test]
    fn test_task_draft_serializes_null_due_date() {
        let d = TaskDraft::new("  Ship spec ", "", "  ", TaskStatus::Pending);
        let v = serde_json::to_value(&d).expect("should serialize");
        assert_eq!(v["title"], "Ship spec");
        assert!(v["due_date"].is_null());
        assert_eq!(v["status"], "pending");
    }

    #[test]
    fn test_status_wire_names() {
        let wire: &str = TaskStatus::InProgress.as_ref();
        assert_eq!(wire, "in_progress");
        assert_eq!("completed".parse::<TaskStatus>().ok(), Some(TaskStatus::Completed));
        let tab: &str = Section::Calendar.as_ref();
        assert_eq!(tab, "calendar");
        assert_eq!(TaskStatus::Completed.key(), "completed");
        assert_eq!(Section::Notes.key(), "notes");
    }
}
