//! Create / list / delete for each resource collection.
//!
//! Controllers never keep local copies: every successful mutation is
//! followed by a full re-fetch so the caller renders the server's view.

use crate::api::ApiClient;
use crate::models::{
    CalendarEvent, Counts, EventDraft, Note, NoteDraft, Section, Task, TaskDraft,
};
use crate::util::parse_timestamp;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use thiserror::Error;

/// Rejected before any request is made.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a {0} title")]
    MissingTitle(&'static str),
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("End time must be after start time")]
    EndNotAfterStart,
}

pub trait Resource: DeserializeOwned + Clone + 'static {
    type Draft: Serialize;
    const SECTION: Section;

    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;
}

impl Resource for Note {
    type Draft = NoteDraft;
    const SECTION: Section = Section::Notes;

    fn validate(draft: &NoteDraft) -> Result<(), ValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle("note"));
        }
        Ok(())
    }
}

impl Resource for Task {
    type Draft = TaskDraft;
    const SECTION: Section = Section::Tasks;

    fn validate(draft: &TaskDraft) -> Result<(), ValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle("task"));
        }
        if let Some(due) = &draft.due_date {
            if parse_timestamp(due).is_none() {
                return Err(ValidationError::InvalidDate(due.clone()));
            }
        }
        Ok(())
    }
}

impl Resource for CalendarEvent {
    type Draft = EventDraft;
    const SECTION: Section = Section::Calendar;

    fn validate(draft: &EventDraft) -> Result<(), ValidationError> {
        if draft.title.trim().is_empty()
            || draft.start_time.trim().is_empty()
            || draft.end_time.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        let start = parse_timestamp(&draft.start_time)
            .ok_or_else(|| ValidationError::InvalidDate(draft.start_time.clone()))?;
        let end = parse_timestamp(&draft.end_time)
            .ok_or_else(|| ValidationError::InvalidDate(draft.end_time.clone()))?;
        if end <= start {
            return Err(ValidationError::EndNotAfterStart);
        }
        Ok(())
    }
}

/// What a create or delete ended up doing.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<R> {
    Rejected(ValidationError),
    /// The user declined the confirmation prompt.
    Cancelled,
    /// The gateway already reported the failure.
    Failed,
    /// The server accepted it; carries the re-fetched list (`None` if that
    /// re-fetch failed).
    Applied(Option<Vec<R>>),
}

pub struct ResourceController<R> {
    api: ApiClient,
    _marker: PhantomData<R>,
}

impl<R> Clone for ResourceController<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _marker: PhantomData,
        }
    }
}

pub type NotesController = ResourceController<Note>;
pub type TasksController = ResourceController<Task>;
pub type EventsController = ResourceController<CalendarEvent>;

impl<R: Resource> ResourceController<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    /// Full collection, or `None` if the fetch did not happen.
    pub async fn load(&self) -> Option<Vec<R>> {
        let reply = self.api.call(R::SECTION.endpoint(), Method::GET, None).await?;
        Some(reply.into_list())
    }

    pub async fn count(&self) -> usize {
        self.api
            .call(R::SECTION.endpoint(), Method::GET, None)
            .await
            .map(|r| r.into_list::<R>().len())
            .unwrap_or(0)
    }

    pub async fn create(&self, draft: &R::Draft) -> Mutation<R> {
        if let Err(e) = R::validate(draft) {
            return Mutation::Rejected(e);
        }
        let body = match serde_json::to_value(draft) {
            Ok(v) => v,
            Err(e) => {
                leptos::logging::error!("could not encode {} draft: {e}", R::SECTION.noun());
                return Mutation::Failed;
            }
        };

        match self
            .api
            .call(R::SECTION.endpoint(), Method::POST, Some(body))
            .await
        {
            Some(_) => Mutation::Applied(self.load().await),
            None => Mutation::Failed,
        }
    }

    /// Asks the user first; nothing is sent unless they confirm.
    pub async fn delete(&self, id: i64) -> Mutation<R> {
        let prompt = format!("Are you sure you want to delete this {}?", R::SECTION.noun());
        if !self.api.dialogs().confirm(&prompt) {
            return Mutation::Cancelled;
        }

        let path = format!("{}/{id}", R::SECTION.endpoint());
        match self.api.call(&path, Method::DELETE, None).await {
            Some(_) => Mutation::Applied(self.load().await),
            None => Mutation::Failed,
        }
    }
}

/// Re-count all three collections at once.
pub async fn fetch_counts(api: &ApiClient) -> Counts {
    let notes = NotesController::new(api.clone());
    let tasks = TasksController::new(api.clone());
    let events = EventsController::new(api.clone());
    let (notes, tasks, events) = futures::join!(notes.count(), tasks.count(), events.count());
    Counts {
        notes,
        tasks,
        events,
    }
}
