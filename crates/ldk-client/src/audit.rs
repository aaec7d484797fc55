//! Audit log endpoints.

use ldk_core::{AuditLog, Payload};

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// Fetch all audit entries recorded for one user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn audit_by_user(&self, user_id: &str) -> Result<Vec<AuditLog>, ApiError> {
        let url = self.endpoint(&format!("/logs/audit/user/{}", urlencoding::encode(user_id)));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Record a new audit entry. The changes map travels as the JSON body;
    /// the remaining fields as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn create_audit(
        &self,
        user_id: &str,
        action: &str,
        resource_type: &str,
        resource_id: &str,
        changes: &Payload,
    ) -> Result<AuditLog, ApiError> {
        let url = self.endpoint(&format!(
            "/logs/audit?userId={}&action={}&resourceType={}&resourceId={}",
            urlencoding::encode(user_id),
            urlencoding::encode(action),
            urlencoding::encode(resource_type),
            urlencoding::encode(resource_id)
        ));
        let resp = check_response(self.http.post(&url).json(changes).send().await?).await?;
        Ok(resp.json().await?)
    }
}
