//! User activity log endpoints.

use ldk_core::UserActivity;

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// Fetch all activities recorded for one user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn activities_by_user(&self, user_id: &str) -> Result<Vec<UserActivity>, ApiError> {
        let url = self.endpoint(&format!(
            "/logs/activity/user/{}",
            urlencoding::encode(user_id)
        ));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Record a new activity. Returns the stored record with its
    /// server-assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn log_activity(
        &self,
        user_id: &str,
        action: &str,
        details: &str,
    ) -> Result<UserActivity, ApiError> {
        let url = self.endpoint(&format!(
            "/logs/activity?userId={}&action={}&details={}",
            urlencoding::encode(user_id),
            urlencoding::encode(action),
            urlencoding::encode(details)
        ));
        let resp = check_response(self.http.post(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}
