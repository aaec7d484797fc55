//! Record structs for the backend wire entities.
//!
//! Every record is owned and ultimately validated by the backend; these are
//! transient view snapshots with no durability. Field names follow the wire
//! format (camelCase) via serde renames. Timestamps are carried as opaque
//! strings — the client displays them verbatim and never parses them.

mod activity;
mod analytics;
mod audit;
mod session;
mod user;

pub use activity::UserActivity;
pub use analytics::AnalyticsData;
pub use audit::AuditLog;
pub use session::UserSession;
pub use user::User;

/// Open string-keyed JSON object used for metadata/changes payloads.
///
/// Validated only at the system boundary; the client treats the contents as
/// opaque.
pub type Payload = serde_json::Map<String, serde_json::Value>;
