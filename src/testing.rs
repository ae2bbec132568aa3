//! Fakes for driving the client headless.

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResponse, ApiResult, Transport};
use crate::platform::{Dialogs, LoadingIndicator};
use crate::session::{Identity, SessionStore};
use async_trait::async_trait;
use reqwest::Method;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

pub(crate) use futures::executor::block_on;

/// Session kept in memory instead of localStorage.
#[derive(Debug, Default)]
pub(crate) struct MemorySession {
    inner: RefCell<Option<(String, Identity)>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(token: &str, email: &str) -> Self {
        let s = Self::new();
        s.set_session(token, &Identity::new(email));
        s
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.inner
            .borrow()
            .as_ref()
            .map(|(t, _)| t.clone())
            .filter(|t| !t.is_empty())
    }

    fn identity(&self) -> Option<Identity> {
        self.inner.borrow().as_ref().map(|(_, i)| i.clone())
    }

    fn set_session(&self, token: &str, identity: &Identity) {
        *self.inner.borrow_mut() = Some((token.to_string(), identity.clone()));
    }

    fn clear_session(&self) {
        self.inner.borrow_mut().take();
    }
}

/// Replays scripted responses in order and records what was sent.
///
/// Once the script runs dry, GETs fall back to the standing reply
/// registered for their path with [`FakeTransport::serve`].
#[derive(Default)]
pub(crate) struct FakeTransport {
    script: RefCell<VecDeque<ApiResult<ApiResponse>>>,
    routes: RefCell<HashMap<String, ApiResponse>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, res: ApiResponse) {
        self.script.borrow_mut().push_back(Ok(res));
    }

    pub fn serve(&self, path: &str, res: ApiResponse) {
        self.routes.borrow_mut().insert(path.to_string(), res);
    }

    pub fn fail(&self, message: &str) {
        self.script
            .borrow_mut()
            .push_back(Err(ApiError::network(message)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let standing = (request.method == Method::GET)
            .then(|| self.routes.borrow().get(&request.path).cloned())
            .flatten();
        self.sent.borrow_mut().push(request);

        if let Some(next) = self.script.borrow_mut().pop_front() {
            return next;
        }
        standing.ok_or_else(|| ApiError::network("no scripted response"))
    }
}

/// Answers every confirmation with a fixed choice and records all prompts.
pub(crate) struct RecordingDialogs {
    answer: Cell<bool>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            alerts: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
        }
    }

    pub fn answer(&self, v: bool) {
        self.answer.set(v);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

pub(crate) struct Harness {
    pub api: ApiClient,
    pub transport: Rc<FakeTransport>,
    pub session: Rc<MemorySession>,
    pub dialogs: Rc<RecordingDialogs>,
}

/// A client signed in with `token`, confirming every prompt.
pub(crate) fn harness(token: &str) -> Harness {
    let transport = Rc::new(FakeTransport::new());
    let session = Rc::new(MemorySession::signed_in(token, "a@b.com"));
    let dialogs = Rc::new(RecordingDialogs::new(true));
    let api = ApiClient::new(
        transport.clone(),
        session.clone(),
        dialogs.clone(),
        LoadingIndicator::default(),
    );
    Harness {
        api,
        transport,
        session,
        dialogs,
    }
}
