use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An administered user. Created via bulk CSV import only; the client never
/// edits users directly.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
}
