//! Resource lists to card view-models.
//!
//! Everything here is a pure function of its input; the Leptos side only
//! lays the models out.

use crate::models::{CalendarEvent, Note, Section, Task, TaskStatus};
use crate::util::{format_date, format_time};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaIcon {
    Clock,
    Calendar,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub icon: &'static str,
    pub label: &'static str,
    /// `status-<wire name>`, matching the stylesheet.
    pub class: String,
}

impl From<TaskStatus> for Badge {
    fn from(status: TaskStatus) -> Self {
        Self {
            icon: status.icon(),
            label: status.label(),
            class: format!("status-{}", status.key()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub meta: String,
    pub meta_icon: MetaIcon,
    pub badge: Option<Badge>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub section: Section,
    pub heading: &'static str,
    pub hint: &'static str,
}

impl EmptyState {
    pub fn for_section(section: Section) -> Self {
        let (heading, hint) = match section {
            Section::Notes => ("No notes yet", "Click \"New Note\" to create your first note"),
            Section::Tasks => ("No tasks yet", "Click \"New Task\" to create your first task"),
            Section::Calendar => (
                "No events yet",
                "Click \"New Event\" to create your first event",
            ),
        };
        Self {
            section,
            heading,
            hint,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Empty(EmptyState),
    Cards(Vec<CardView>),
}

pub trait Render {
    fn card(&self) -> CardView;
}

fn or_placeholder(text: Option<&str>, placeholder: &str) -> String {
    match text {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => placeholder.to_string(),
    }
}

impl Render for Note {
    fn card(&self) -> CardView {
        CardView {
            id: self.id,
            title: self.title.clone(),
            body: or_placeholder(self.content.as_deref(), "No content"),
            meta: format_date(&self.created_at),
            meta_icon: MetaIcon::Clock,
            badge: None,
        }
    }
}

impl Render for Task {
    fn card(&self) -> CardView {
        let meta = match self.due_date.as_deref().filter(|d| !d.is_empty()) {
            Some(due) => format!("Due: {}", format_date(due)),
            None => "No due date".to_string(),
        };
        CardView {
            id: self.id,
            title: self.title.clone(),
            body: or_placeholder(self.description.as_deref(), "No description"),
            meta,
            meta_icon: MetaIcon::Calendar,
            badge: Some(self.status.into()),
        }
    }
}

impl Render for CalendarEvent {
    fn card(&self) -> CardView {
        CardView {
            id: self.id,
            title: self.title.clone(),
            body: or_placeholder(self.description.as_deref(), "No description"),
            meta: format!(
                "{} - {}",
                format_date(&self.start_time),
                format_time(&self.end_time)
            ),
            meta_icon: MetaIcon::Clock,
            badge: None,
        }
    }
}

/// `None` (failed fetch) and `[]` both render the empty state.
pub fn render_list<R: Render>(section: Section, items: Option<&[R]>) -> ListView {
    match items {
        Some(items) if !items.is_empty() => ListView::Cards(items.iter().map(Render::card).collect()),
        _ => ListView::Empty(EmptyState::for_section(section)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: TaskStatus, due: Option<&str>) -> Task {
        Task {
            id: 1,
            title: "Ship spec".to_string(),
            description: None,
            due_date: due.map(str::to_string),
            status,
        }
    }

    #[test]
    fn test_empty_and_missing_lists_render_placeholder() {
        let none = render_list::<Note>(Section::Notes, None);
        let empty = render_list::<Note>(Section::Notes, Some(Vec::new().as_slice()));
        assert_eq!(none, empty);
        let ListView::Empty(state) = none else {
            panic!("expected empty state");
        };
        assert_eq!(state.heading, "No notes yet");
        assert!(matches!(
            render_list::<CalendarEvent>(Section::Calendar, None),
            ListView::Empty(_)
        ));
    }

    #[test]
    fn test_pending_task_without_due_date() {
        let card = task(TaskStatus::Pending, None).card();
        assert_eq!(card.meta, "No due date");
        assert_eq!(card.body, "No description");
        assert_eq!(
            card.badge,
            Some(Badge {
                icon: "📋",
                label: "Pending",
                class: "status-pending".to_string()
            })
        );
    }

    #[test]
    fn test_task_due_date_and_status_badge() {
        let card = task(TaskStatus::InProgress, Some("2025-01-05T14:30:00")).card();
        assert_eq!(card.meta, "Due: Jan 5, 2025, 02:30 PM");
        let badge = card.badge.expect("tasks carry a badge");
        assert_eq!((badge.icon, badge.label), ("🔄", "In Progress"));
        assert_eq!(badge.class, "status-in_progress");

        let done: Badge = TaskStatus::Completed.into();
        assert_eq!(done.icon, "✅");
    }

    #[test]
    fn test_note_card_keeps_markup_as_text() {
        let note = Note {
            id: 3,
            title: "<script>alert(1)</script>".to_string(),
            content: Some(String::new()),
            created_at: "2025-01-05T14:30:00".to_string(),
        };
        let card = note.card();
        // Escaping happens at insertion; the model holds the raw text.
        assert_eq!(card.title, "<script>alert(1)</script>");
        assert_eq!(card.body, "No content");
        assert_eq!(card.meta, "Jan 5, 2025, 02:30 PM");
        assert!(card.badge.is_none());
    }

    #[test]
    fn test_event_time_range() {
        let ev = CalendarEvent {
            id: 8,
            title: "Standup".to_string(),
            description: Some("daily".to_string()),
            start_time: "2025-01-06T09:00:00".to_string(),
            end_time: "2025-01-06T09:15:00".to_string(),
            linked_task_id: None,
        };
        let events = vec![ev];
        let ListView::Cards(cards) = render_list(Section::Calendar, Some(events.as_slice())) else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].meta, "Jan 6, 2025, 09:00 AM - 09:15 AM");
        assert_eq!(cards[0].body, "daily");
        assert_eq!(cards[0].id, 8);
    }
}
