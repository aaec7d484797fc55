//! # ldk-views
//!
//! Per-page view controllers for the logdeck admin console.
//!
//! Every page follows the same shape: local state holds form field values, a
//! search triggers a GET, a form submission triggers a POST/PUT/DELETE, and
//! results land in a collection rendered as a grid. Each controller owns a
//! disjoint state slice and a three-state phase machine
//! (idle → loading → settled), so independent pages can have in-flight
//! requests simultaneously without contention.
//!
//! Controllers consume the transport through the small traits in [`api`],
//! implemented by `ldk_client::ApiClient`; tests drive them with recording
//! fakes instead of a network.
//!
//! Failures are logged for the operator via `tracing` and otherwise leave the
//! page usable — the next action is always possible. Only the import page
//! surfaces an error banner to the end user.

pub mod api;

mod activities;
mod analytics;
mod audit;
mod dashboard;
mod import;
mod pages;
mod phase;
mod sessions;

pub use activities::{ActivitiesView, ActivityForm};
pub use analytics::{AnalyticsForm, AnalyticsView};
pub use audit::{AuditForm, AuditView};
pub use dashboard::{DashboardView, StatCard};
pub use import::{ImportView, SelectedFile};
pub use pages::Page;
pub use phase::{Outcome, Phase};
pub use sessions::{SessionForm, SessionsView};
