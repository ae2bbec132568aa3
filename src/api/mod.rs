use crate::platform::{Dialogs, LoadingIndicator};
use crate::session::{Identity, SessionStore};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::rc::Rc;
use thiserror::Error;

pub(crate) const NETWORK_ALERT: &str = "Network error. Please check your connection.";
pub(crate) const AUTH_NETWORK_ERROR: &str = "Network error. Please try again.";
pub(crate) const OPERATION_FAILED: &str = "Operation failed";
pub(crate) const UNEXPECTED_RESPONSE: &str = "Unexpected response from server";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The token was rejected; the session is no longer valid.
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Request failed ({status})")]
    Http { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    pub(crate) fn network(e: impl std::fmt::Display) -> Self {
        Self::Network(e.to_string())
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Form(Vec<(String, String)>),
}

/// One HTTP exchange, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    #[cfg(test)]
    pub(crate) fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[cfg(test)]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves bytes; knows nothing about sessions or error policy.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut req = self.client.request(request.method, url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = match &request.body {
            RequestBody::Empty => req,
            RequestBody::Json(v) => req.json(v),
            RequestBody::Form(fields) => req.form(fields),
        };

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(ApiError::network)?;
        Ok(ApiResponse { status, body })
    }
}

/// A usable result from [`ApiClient::call`].
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Json(Value),
    /// Success without a body (DELETE → 204).
    NoContent,
}

impl Reply {
    /// Decode a list payload, skipping items that do not match `T`.
    pub fn into_list<T: DeserializeOwned>(self) -> Vec<T> {
        let Reply::Json(Value::Array(items)) = self else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<T>(item) {
                Ok(v) => out.push(v),
                Err(e) => leptos::logging::warn!("skipping malformed list item: {e}"),
            }
        }
        out
    }
}

/// Pull a human-readable message out of a FastAPI error body.
///
/// `detail` is either a string or, for 422s, a list of `{loc, msg, type}`.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}

pub(crate) fn classify(method: &Method, res: ApiResponse) -> ApiResult<Reply> {
    if res.status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if *method == Method::DELETE && res.status == 204 {
        return Ok(Reply::NoContent);
    }
    if !res.is_success() {
        return Err(ApiError::Http {
            status: res.status,
            detail: error_detail(&res.body),
        });
    }
    if res.body.trim().is_empty() {
        return Ok(Reply::NoContent);
    }
    serde_json::from_str(&res.body)
        .map(Reply::Json)
        .map_err(ApiError::parse)
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// The single chokepoint for network calls.
///
/// Every call attaches the session token, drives the shared loading
/// indicator, and turns failures into user-facing side effects so callers
/// only see "it happened" (`Some`) or "it did not" (`None`).
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    session: Rc<dyn SessionStore>,
    dialogs: Rc<dyn Dialogs>,
    loading: LoadingIndicator,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    pub fn new(
        transport: Rc<dyn Transport>,
        session: Rc<dyn SessionStore>,
        dialogs: Rc<dyn Dialogs>,
        loading: LoadingIndicator,
    ) -> Self {
        Self {
            transport,
            session,
            dialogs,
            loading,
            on_unauthorized: None,
        }
    }

    /// Called after a 401 has cleared the session.
    pub fn on_unauthorized(mut self, f: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(f));
        self
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn dialogs(&self) -> &dyn Dialogs {
        self.dialogs.as_ref()
    }

    #[cfg(test)]
    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    #[cfg(test)]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn authorized(&self, endpoint: &str, method: Method, body: Option<Value>) -> ApiRequest {
        let token = self.session.token().unwrap_or_default();
        let req = ApiRequest::new(method, endpoint)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json");
        match body {
            Some(b) => req.json(b),
            None => req,
        }
    }

    async fn exchange(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let _busy = self.loading.begin();
        leptos::logging::log!("{} {}", request.method, request.path);
        self.transport.send(request).await
    }

    /// Authenticated request with the fail-soft policy applied.
    pub async fn call(&self, endpoint: &str, method: Method, body: Option<Value>) -> Option<Reply> {
        let request = self.authorized(endpoint, method.clone(), body);
        let outcome = match self.exchange(request).await {
            Ok(res) => classify(&method, res),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(reply) => Some(reply),
            Err(err) => {
                self.surface(&err);
                None
            }
        }
    }

    fn surface(&self, err: &ApiError) {
        match err {
            ApiError::Unauthorized => {
                leptos::logging::warn!("session rejected by server; signing out");
                self.session.clear_session();
                if let Some(f) = &self.on_unauthorized {
                    f();
                }
            }
            ApiError::Http { status, detail } => {
                leptos::logging::warn!("request failed with status {status}");
                self.dialogs
                    .alert(detail.as_deref().unwrap_or(OPERATION_FAILED));
            }
            ApiError::Network(e) => {
                leptos::logging::warn!("{e}");
                self.dialogs.alert(NETWORK_ALERT);
            }
            ApiError::Parse(e) => {
                leptos::logging::warn!("{e}");
                self.dialogs.alert(UNEXPECTED_RESPONSE);
            }
        }
    }

    /// Unauthenticated request for the auth endpoints; errors come back as
    /// inline messages rather than alerts.
    async fn auth_request(&self, request: ApiRequest, fallback: &str) -> Result<Value, String> {
        let res = match self.exchange(request).await {
            Ok(res) => res,
            Err(e) => {
                leptos::logging::warn!("{e}");
                return Err(AUTH_NETWORK_ERROR.to_string());
            }
        };

        if !res.is_success() {
            return Err(error_detail(&res.body).unwrap_or_else(|| fallback.to_string()));
        }
        if res.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&res.body).map_err(|_| fallback.to_string())
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<(), String> {
        let body = serde_json::to_value(RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| e.to_string())?;
        let request = ApiRequest::new(Method::POST, "/auth/register")
            .header("Content-Type", "application/json")
            .json(body);

        self.auth_request(request, "Registration failed").await?;
        leptos::logging::log!("registered new account");
        Ok(())
    }

    /// Exchange credentials for a token and store the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        let request = ApiRequest::new(Method::POST, "/auth/login")
            .form(&[("username", email), ("password", password)]);

        let data = self.auth_request(request, "Login failed").await?;
        let parsed: LoginResponse =
            serde_json::from_value(data).map_err(|_| "Login failed".to_string())?;
        if parsed.access_token.is_empty() {
            return Err("Login failed".to_string());
        }

        self.session
            .set_session(&parsed.access_token, &Identity::new(email));
        leptos::logging::log!("signed in");
        Ok(())
    }

    pub fn logout(&self) {
        self.session.clear_session();
        leptos::logging::log!("signed out");
    }
}
