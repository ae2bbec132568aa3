use crate::api::{ApiClient, ReqwestTransport, Transport};
use crate::config::EnvConfig;
use crate::controllers::{
    fetch_counts, EventsController, Mutation, NotesController, TasksController,
};
use crate::models::{CalendarEvent, Counts, Note, Section, Task};
use crate::platform::{BrowserDialogs, Dialogs, LoadingIndicator};
use crate::session::{BrowserSession, SessionStore};
use crate::shell::{AuthState, Shell};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    /// Browser-bound services; `Rc`-based, so kept in local storage.
    pub api: StoredValue<ApiClient, LocalStorage>,

    pub authenticated: RwSignal<bool>,
    pub user_email: RwSignal<String>,

    /// Shared busy flag mirrored from the API client's loading indicator.
    pub loading: RwSignal<bool>,

    pub shell: RwSignal<Shell>,
    pub auth: RwSignal<AuthState>,

    /// Last fetched lists. `None` means the fetch failed or has not run.
    pub notes: RwSignal<Option<Vec<Note>>>,
    pub tasks: RwSignal<Option<Vec<Task>>>,
    pub events: RwSignal<Option<Vec<CalendarEvent>>>,
    pub counts: RwSignal<Counts>,
}

impl AppState {
    pub fn new() -> Self {
        let config = EnvConfig::new();
        leptos::logging::log!("api base url: {}", config.api_url);

        Self::with_services(
            Rc::new(ReqwestTransport::new(config.api_url)),
            Rc::new(BrowserSession),
            Rc::new(BrowserDialogs),
        )
    }

    pub(crate) fn with_services(
        transport: Rc<dyn Transport>,
        session: Rc<dyn SessionStore>,
        dialogs: Rc<dyn Dialogs>,
    ) -> Self {
        let authenticated = RwSignal::new(session.is_authenticated());
        let user_email = RwSignal::new(session.identity().map(|i| i.email).unwrap_or_default());
        let loading = RwSignal::new(false);

        let api = ApiClient::new(
            transport,
            session,
            dialogs,
            LoadingIndicator::new(move |visible| loading.set(visible)),
        );

        let state = Self {
            api: StoredValue::new_local(api),
            authenticated,
            user_email,
            loading,
            shell: RwSignal::new(Shell::default()),
            auth: RwSignal::new(AuthState::default()),
            notes: RwSignal::new(None),
            tasks: RwSignal::new(None),
            events: RwSignal::new(None),
            counts: RwSignal::new(Counts::default()),
        };
        state.api.update_value(|api| {
            *api = api.clone().on_unauthorized(move || state.session_expired());
        });
        state
    }

    pub fn client(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn notes_controller(&self) -> NotesController {
        NotesController::new(self.client())
    }

    pub fn tasks_controller(&self) -> TasksController {
        TasksController::new(self.client())
    }

    pub fn events_controller(&self) -> EventsController {
        EventsController::new(self.client())
    }

    pub fn enter_workspace(self) {
        spawn_local(self.enter());
    }

    /// Show the signed-in view and fetch all three lists.
    pub async fn enter(self) {
        let email = self
            .client()
            .session()
            .identity()
            .map(|i| i.email)
            .unwrap_or_default();
        self.user_email.set(email);
        self.shell.set(Shell::default());
        self.authenticated.set(true);

        futures::join!(
            self.fetch(Section::Notes),
            self.fetch(Section::Tasks),
            self.fetch(Section::Calendar)
        );
    }

    /// Back to the sign-in screen; cached lists are dropped.
    pub fn leave_workspace(self) {
        self.authenticated.set(false);
        self.user_email.set(String::new());
        self.auth.set(AuthState::default());
        self.notes.set(None);
        self.tasks.set(None);
        self.events.set(None);
        self.counts.set(Counts::default());
    }

    /// A 401 arrived. Replies still in flight after sign-out must not reset
    /// the sign-in screen.
    fn session_expired(self) {
        if self.authenticated.get_untracked() {
            self.leave_workspace();
        }
    }

    pub fn load(self, section: Section) {
        spawn_local(self.fetch(section));
    }

    pub async fn fetch(self, section: Section) {
        match section {
            Section::Notes => {
                let list = self.notes_controller().load().await;
                self.show(self.notes, list).await;
            }
            Section::Tasks => {
                let list = self.tasks_controller().load().await;
                self.show(self.tasks, list).await;
            }
            Section::Calendar => {
                let list = self.events_controller().load().await;
                self.show(self.events, list).await;
            }
        }
    }

    /// Delete after confirmation and show the re-fetched list.
    pub async fn delete(self, section: Section, id: i64) {
        match section {
            Section::Notes => {
                if let Mutation::Applied(list) = self.notes_controller().delete(id).await {
                    self.show(self.notes, list).await;
                }
            }
            Section::Tasks => {
                if let Mutation::Applied(list) = self.tasks_controller().delete(id).await {
                    self.show(self.tasks, list).await;
                }
            }
            Section::Calendar => {
                if let Mutation::Applied(list) = self.events_controller().delete(id).await {
                    self.show(self.events, list).await;
                }
            }
        }
    }

    /// Store a fetched list and re-count every tab. Lists that land after
    /// sign-out are dropped.
    pub async fn show<R>(self, target: RwSignal<Option<Vec<R>>>, list: Option<Vec<R>>)
    where
        R: Send + Sync + 'static,
    {
        if !self.authenticated.get_untracked() {
            return;
        }
        let recount = list.is_some();
        target.set(list);
        if recount {
            self.recount().await;
        }
    }

    pub async fn recount(self) {
        let counts = fetch_counts(&self.client()).await;
        if self.authenticated.get_untracked() {
            self.counts.set(counts);
        }
    }

    pub fn select_section(self, section: Section) {
        let target = self.shell.try_update(|s| s.select(section));
        if let Some(section) = target {
            self.load(section);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponse;
    use crate::shell::AuthMessage;
    use crate::testing::{block_on, harness, Harness};
    use reqwest::Method;

    const NOTE: &str =
        r#"{"id": 1, "title": "Groceries", "content": "milk", "created_at": "2025-01-05T14:30:00"}"#;
    const EVENT: &str = r#"{"id": 3, "title": "Standup", "start_time": "2025-01-06T09:00:00", "end_time": "2025-01-06T09:15:00"}"#;

    fn app(h: &Harness) -> AppState {
        AppState::with_services(h.transport.clone(), h.session.clone(), h.dialogs.clone())
    }

    fn serve_lists(h: &Harness, notes: &str, tasks: &str, events: &str) {
        h.transport.serve("/notes", ApiResponse::new(200, notes));
        h.transport.serve("/tasks", ApiResponse::new(200, tasks));
        h.transport.serve("/calendar", ApiResponse::new(200, events));
    }

    #[test]
    fn test_login_enters_workspace_and_fetches_everything() {
        let h = harness("t");
        h.session.clear_session();
        let state = app(&h);
        assert!(!state.authenticated.get_untracked());

        h.transport.push(ApiResponse::new(200, r#"{"access_token":"abc","token_type":"bearer"}"#));
        serve_lists(&h, &format!("[{NOTE}]"), "[]", &format!("[{EVENT}]"));

        block_on(async {
            state.client().login("a@b.com", "x").await.expect("login should succeed");
            state.enter().await;
        });

        assert!(state.authenticated.get_untracked());
        assert_eq!(state.user_email.get_untracked(), "a@b.com");
        assert_eq!(state.notes.get_untracked().map(|l| l.len()), Some(1));
        assert_eq!(state.tasks.get_untracked(), Some(vec![]));
        assert_eq!(state.events.get_untracked().map(|l| l.len()), Some(1));
        assert_eq!(
            state.counts.get_untracked(),
            Counts {
                notes: 1,
                tasks: 0,
                events: 1
            }
        );

        let sent = h.transport.requests();
        for path in ["/notes", "/tasks", "/calendar"] {
            assert!(sent.iter().any(|r| r.method == Method::GET && r.path == path));
        }
        assert!(!state.loading.get_untracked());
        assert!(h.dialogs.alerts().is_empty());
    }

    #[test]
    fn test_unauthorized_returns_to_sign_in() {
        let h = harness("expired");
        let state = app(&h);
        assert!(state.authenticated.get_untracked());
        state.notes.set(Some(vec![]));
        state.counts.set(Counts {
            notes: 2,
            tasks: 1,
            events: 0,
        });
        h.transport.push(ApiResponse::new(401, ""));

        block_on(state.fetch(Section::Notes));

        assert!(!state.authenticated.get_untracked());
        assert!(state.user_email.get_untracked().is_empty());
        assert!(state.notes.get_untracked().is_none());
        assert_eq!(state.counts.get_untracked(), Counts::default());
        assert!(h.session.token().is_none());
        assert!(h.dialogs.alerts().is_empty());
    }

    #[test]
    fn test_late_unauthorized_keeps_sign_in_message() {
        let h = harness("t");
        let state = app(&h);
        state.leave_workspace();
        state.auth.update(|a| a.fail("Login failed"));
        h.transport.push(ApiResponse::new(401, ""));

        block_on(state.recount());

        assert_eq!(
            state.auth.get_untracked().message,
            Some(AuthMessage::Error("Login failed".to_string()))
        );
        assert_eq!(state.counts.get_untracked(), Counts::default());
    }

    #[test]
    fn test_deleting_last_item_zeroes_its_counter() {
        let h = harness("t");
        serve_lists(&h, "[]", "[]", "[]");
        let state = app(&h);
        state.notes.set(Some(
            serde_json::from_str(&format!("[{NOTE}]")).expect("note list should parse"),
        ));
        state.counts.set(Counts {
            notes: 1,
            tasks: 0,
            events: 0,
        });
        h.transport.push(ApiResponse::new(204, ""));

        block_on(state.delete(Section::Notes, 1));

        assert_eq!(state.notes.get_untracked(), Some(vec![]));
        assert_eq!(state.counts.get_untracked(), Counts::default());
        let sent = h.transport.requests();
        assert_eq!(sent[0].method, Method::DELETE);
        assert_eq!(sent[0].path, "/notes/1");
        // delete, reload, then one count per tab
        assert_eq!(sent.len(), 5);
    }
}
