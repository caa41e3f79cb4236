//! API endpoint configuration.
//!
//! A WASM bundle has no process environment, so the base URL is captured at
//! build time from `STYLEDESK_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7236/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build from `STYLEDESK_API_URL` as seen by the compiler.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("STYLEDESK_API_URL"))
    }

    /// Blank values fall back to [`DEFAULT_API_BASE_URL`]; trailing slashes
    /// are trimmed.
    #[must_use]
    pub fn from_base_url(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Absolute URL for a path relative to the API base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
