use serde::{Deserialize, Serialize};

pub(crate) const TOKEN_KEY: &str = "planner_token";
pub(crate) const USER_KEY: &str = "planner_user";

/// Who the current token belongs to. Only used for display.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    #[serde(default)]
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// The authenticated session, injected into the API client.
///
/// An empty token counts as no token.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn identity(&self) -> Option<Identity>;
    fn set_session(&self, token: &str, identity: &Identity);
    fn clear_session(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Session persisted in `window.localStorage`, surviving reloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        local_storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .filter(|t| !t.is_empty())
    }

    fn identity(&self) -> Option<Identity> {
        let json = local_storage()?.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&json).ok()
    }

    fn set_session(&self, token: &str, identity: &Identity) {
        let Some(storage) = local_storage() else {
            leptos::logging::warn!("localStorage unavailable; session will not persist");
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(identity) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }

    fn clear_session(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// In-process session for headless use.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemorySession;

    #[test]
    fn test_memory_session_starts_unauthenticated() {
        let s = MemorySession::new();
        assert!(!s.is_authenticated());
        assert!(s.identity().is_none());
    }

    #[test]
    fn test_memory_session_set_and_clear() {
        let s = MemorySession::new();
        s.set_session("jwt", &Identity::new("a@b.com"));
        assert_eq!(s.token().as_deref(), Some("jwt"));
        assert_eq!(s.identity().map(|i| i.email), Some("a@b.com".to_string()));

        s.clear_session();
        assert!(s.token().is_none());
        assert!(s.identity().is_none());
    }

    #[test]
    fn test_empty_token_is_unauthenticated() {
        let s = MemorySession::signed_in("", "a@b.com");
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_identity_contract_deserialize() {
        let parsed: Identity = serde_json::from_str(r#"{"email":"u@example.com"}"#)
            .expect("identity should parse");
        assert_eq!(parsed.email, "u@example.com");

        // Older records may be an empty object.
        let parsed: Identity = serde_json::from_str("{}").expect("empty identity should parse");
        assert!(parsed.email.is_empty());
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_session_roundtrip() {
        let s = BrowserSession;
        s.clear_session();
        assert!(!s.is_authenticated());

        s.set_session("t1", &Identity::new("u@example.com"));
        assert_eq!(s.token().as_deref(), Some("t1"));
        assert_eq!(s.identity().map(|i| i.email).as_deref(), Some("u@example.com"));

        s.clear_session();
        assert!(s.token().is_none());
        assert!(s.identity().is_none());
    }
}
