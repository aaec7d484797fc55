use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single user-initiated action recorded by the backend (append-only).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub id: Option<String>,
    pub user_id: String,
    pub action: String,
    pub details: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: Option<String>,
}
