//! # ldk-client
//!
//! HTTP client for the logdeck admin REST backend.
//!
//! One method per backend operation, grouped in per-feature modules:
//! - user activities (`/logs/activity/...`)
//! - analytics events (`/logs/analytics/...`)
//! - user sessions (`/logs/sessions/...`)
//! - audit logs (`/logs/audit/...`)
//! - bulk user import (`/v1/import/users`)
//!
//! Each invocation makes exactly one network call and either returns the
//! parsed response body or fails with [`ApiError`]. There is no retry policy;
//! the only timeout is the client-wide default set at construction.
//!
//! Path and query parameters are percent-encoded before interpolation, so
//! user-supplied ids and tokens cannot break request framing.

pub mod activity;
pub mod analytics;
pub mod audit;
pub mod import;
pub mod sessions;

mod error;
mod http;

pub use error::ApiError;

/// HTTP client bound to one backend base path (e.g. `http://host:8080/api`).
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    ///
    /// A trailing slash on `base_url` is stripped so endpoint paths can be
    /// appended uniformly.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::builder()
                .user_agent("logdeck/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base_url,
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = ApiClient::new("http://localhost:8080/api///");
        assert_eq!(
            client.endpoint("/logs/activity"),
            "http://localhost:8080/api/logs/activity"
        );
    }

    #[test]
    fn endpoint_appends_path_verbatim() {
        let client = ApiClient::new("http://localhost:8080/api");
        assert_eq!(
            client.endpoint("/v1/import/users"),
            "http://localhost:8080/api/v1/import/users"
        );
    }
}
