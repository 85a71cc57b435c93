//! Backend endpoint configuration.
//!
//! DESIGN
//! ======
//! The base URL is injected rather than hardcoded. Resolution order: a
//! `FEDMIND_API_URL` global on `window` (set by the hosting page, so a
//! static bundle can be repointed without a rebuild), then the
//! `FEDMIND_API_URL` compile-time environment variable, then the local
//! development default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Resolved endpoint configuration, provided through context to the
/// request-issuing components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the prediction API, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config with an explicit base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(
            runtime_override(),
            option_env!("FEDMIND_API_URL"),
        ))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Pick the first configured source: runtime global, compiled env var,
/// development default. Blank values count as unset; trailing slashes are
/// stripped so endpoint joining stays uniform.
fn resolve_base_url(runtime: Option<String>, compiled: Option<&str>) -> String {
    let pick = |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.trim_end_matches('/').to_owned())
        }
    };
    runtime
        .as_deref()
        .and_then(pick)
        .or_else(|| compiled.and_then(pick))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

/// Read the `FEDMIND_API_URL` global from `window`, if the hosting page set
/// one. Host builds have no window and always report `None`.
fn runtime_override() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let value =
            js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("FEDMIND_API_URL"))
                .ok()?;
        value.as_string()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
