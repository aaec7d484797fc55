//! Client error types.

use thiserror::Error;

/// Errors that can occur when calling the admin backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body text (may itself be a JSON payload).
        message: String,
    },
}

impl ApiError {
    /// First element of a structured error payload, if the backend returned
    /// one. The import endpoint reports failures as a JSON array of per-row
    /// message strings; other endpoints usually return plain text.
    #[must_use]
    pub fn first_detail(&self) -> Option<String> {
        let Self::Api { message, .. } = self else {
            return None;
        };
        serde_json::from_str::<Vec<String>>(message)
            .ok()
            .and_then(|details| details.into_iter().next())
    }
}
