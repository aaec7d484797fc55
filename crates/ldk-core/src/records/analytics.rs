use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Payload;

/// An analytics event with an open metadata payload (append-only).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub id: Option<String>,
    pub event_type: String,
    pub user_id: String,
    #[serde(default)]
    pub metadata: Payload,
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::AnalyticsData;

    #[test]
    fn metadata_is_an_open_map() {
        let event: AnalyticsData = serde_json::from_str(
            r#"{
                "id": "an1",
                "eventType": "page_view",
                "userId": "u1",
                "metadata": {"page": "/sessions", "durationMs": 412}
            }"#,
        )
        .expect("event should parse");

        assert_eq!(event.event_type, "page_view");
        assert_eq!(event.metadata["page"], "/sessions");
        assert_eq!(event.metadata["durationMs"], 412);
    }

    #[test]
    fn missing_metadata_defaults_to_empty() {
        let event: AnalyticsData =
            serde_json::from_str(r#"{"eventType": "login", "userId": "u1"}"#)
                .expect("event should parse");
        assert!(event.metadata.is_empty());
    }
}
