//! Page registry: the navigation shell's map from route paths to pages.
//!
//! No business logic lives here; the shell only routes.

use serde::Serialize;

/// The six admin pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    UserActivities,
    Analytics,
    Sessions,
    AuditLogs,
    ImportUsers,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::UserActivities,
        Self::Analytics,
        Self::Sessions,
        Self::AuditLogs,
        Self::ImportUsers,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::UserActivities => "/user-activities",
            Self::Analytics => "/analytics",
            Self::Sessions => "/sessions",
            Self::AuditLogs => "/audit-logs",
            Self::ImportUsers => "/import-users",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::UserActivities => "User Activities",
            Self::Analytics => "Analytics",
            Self::Sessions => "Sessions",
            Self::AuditLogs => "Audit Logs",
            Self::ImportUsers => "Import Users",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}
