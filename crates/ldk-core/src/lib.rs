//! # ldk-core
//!
//! Domain record types for logdeck.
//!
//! This crate provides the foundational types shared across all logdeck
//! crates:
//! - Record structs for the backend wire entities (activities, analytics
//!   events, sessions, audit logs, users)
//! - The open string-keyed payload map used for metadata/changes
//!
//! Records are backend-authoritative: the client never derives or caches
//! computed state beyond the per-view snapshot it holds between searches.
//! Error types live at the boundary that raises them (`ApiError` in
//! ldk-client, `ConfigError` in ldk-config, `ProxyError` in ldk-proxy).

pub mod records;

pub use records::{AnalyticsData, AuditLog, Payload, User, UserActivity, UserSession};
