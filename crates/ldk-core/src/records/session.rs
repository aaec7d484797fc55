use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user session. Created through the session form, then locally patched on
/// heartbeat/invalidate. The patch is optimistic — the backend may apply
/// additional logic (e.g., expiry) not reflected here until the next search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: Option<String>,
    pub user_id: String,
    pub session_token: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub last_active_timestamp: Option<String>,
    pub created_timestamp: Option<String>,
    pub is_valid: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::UserSession;

    #[test]
    fn deserializes_wire_session() {
        let session: UserSession = serde_json::from_str(
            r#"{
                "id": "s1",
                "userId": "u1",
                "sessionToken": "tok123",
                "isValid": true
            }"#,
        )
        .expect("session should parse");

        assert_eq!(session.id.as_deref(), Some("s1"));
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.session_token, "tok123");
        assert!(session.is_valid);
        assert!(session.last_active_timestamp.is_none());
    }
}
