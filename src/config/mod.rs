use serde::{Deserialize, Serialize};

/// Used when neither `window.ENV` nor the page origin is available.
pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    /// Resolve the API base URL from the running page.
    ///
    /// Lookup order: `window.ENV.API_URL`, `window.ENV.api_url`, then the
    /// page origin with `/api` appended.
    pub fn new() -> Self {
        let env_url = env_value("API_URL").or_else(|| env_value("api_url"));
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::resolve(env_url, origin)
    }

    pub(crate) fn resolve(env_url: Option<String>, origin: Option<String>) -> Self {
        let api_url = env_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .or_else(|| {
                origin
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty() && o != "null")
                    .map(|o| format!("{o}/api"))
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_value(key: &str) -> Option<String> {
    let env = web_sys::window()?.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }
    js_sys::Reflect::get(&env, &key.into()).ok()?.as_string()
}
