mod activity;
mod analytics;
mod audit;
mod session;

pub use activity::ActivityCommands;
pub use analytics::AnalyticsCommands;
pub use audit::AuditCommands;
pub use session::SessionCommands;
