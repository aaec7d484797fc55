//! Analytics event endpoints.

use ldk_core::{AnalyticsData, Payload};

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// Fetch all analytics events of one event type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn analytics_by_type(
        &self,
        event_type: &str,
    ) -> Result<Vec<AnalyticsData>, ApiError> {
        let url = self.endpoint(&format!(
            "/logs/analytics/type/{}",
            urlencoding::encode(event_type)
        ));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Record a new analytics event. The metadata map travels as the JSON
    /// body; event type and user id as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn log_analytics(
        &self,
        event_type: &str,
        user_id: &str,
        metadata: &Payload,
    ) -> Result<AnalyticsData, ApiError> {
        let url = self.endpoint(&format!(
            "/logs/analytics?eventType={}&userId={}",
            urlencoding::encode(event_type),
            urlencoding::encode(user_id)
        ));
        let resp = check_response(self.http.post(&url).json(metadata).send().await?).await?;
        Ok(resp.json().await?)
    }
}
