use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Payload;

/// An audit trail entry with an open changes payload (append-only).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: Option<String>,
    pub user_id: String,
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    #[serde(default)]
    pub changes: Payload,
    pub ip_address: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}
