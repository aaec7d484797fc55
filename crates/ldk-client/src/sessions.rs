//! Session lifecycle endpoints: create, heartbeat, invalidate.
//!
//! These are three independent HTTP calls; any ordering or consistency logic
//! lives on the backend. Heartbeat and invalidate return no body.

use ldk_core::UserSession;

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// Create a new session for a user with the given token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn create_session(
        &self,
        user_id: &str,
        session_token: &str,
    ) -> Result<UserSession, ApiError> {
        let url = self.endpoint(&format!(
            "/logs/sessions?userId={}&sessionToken={}",
            urlencoding::encode(user_id),
            urlencoding::encode(session_token)
        ));
        let resp = check_response(self.http.post(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Mark a session as active now (heartbeat).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend returns a
    /// non-success status.
    pub async fn touch_session(&self, session_token: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!(
            "/logs/sessions/{}",
            urlencoding::encode(session_token)
        ));
        check_response(self.http.put(&url).send().await?).await?;
        Ok(())
    }

    /// Invalidate a session by token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend returns a
    /// non-success status.
    pub async fn invalidate_session(&self, session_token: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!(
            "/logs/sessions/{}",
            urlencoding::encode(session_token)
        ));
        check_response(self.http.delete(&url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ldk_core::UserSession;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "id": "s1",
        "userId": "u1",
        "sessionToken": "tok123",
        "ipAddress": "10.1.2.3",
        "lastActiveTimestamp": "2025-11-02T10:05:00",
        "createdTimestamp": "2025-11-02T09:00:00",
        "isValid": true
    }"#;

    #[test]
    fn parse_created_session_response() {
        let session: UserSession = serde_json::from_str(FIXTURE).expect("fixture should parse");
        assert_eq!(session.id.as_deref(), Some("s1"));
        assert_eq!(session.session_token, "tok123");
        assert!(session.is_valid);
        assert_eq!(
            session.created_timestamp.as_deref(),
            Some("2025-11-02T09:00:00")
        );
    }
}
