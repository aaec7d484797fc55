use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::subcommands::{ActivityCommands, AnalyticsCommands, AuditCommands, SessionCommands};

/// Top-level commands, one group per admin page.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the overview cards.
    Dashboard,
    /// List the admin pages and their route paths.
    Pages,
    /// User activity log: search and append.
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
    /// Analytics events: search and append.
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
    /// User sessions: create, heartbeat, invalidate.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Audit trail: search and append.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Bulk-import users from a CSV file.
    Import(ImportArgs),
    /// Run the development reverse proxy in the foreground.
    Proxy(ProxyArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file with columns: username, email, firstName, lastName, role.
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ProxyArgs {
    /// Listen address (overrides config).
    #[arg(long)]
    pub listen: Option<String>,

    /// Backend origin to forward `/api/*` to (overrides config).
    #[arg(long)]
    pub backend: Option<String>,
}
