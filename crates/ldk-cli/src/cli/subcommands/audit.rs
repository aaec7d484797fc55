use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum AuditCommands {
    /// List all audit entries recorded for a user.
    Search {
        /// User id to search for.
        user_id: String,
    },
    /// Create an audit entry with one change entry, then show the user's
    /// refreshed listing.
    Create {
        /// User the entry belongs to.
        user_id: String,
        /// Action name, e.g. `UPDATE_PROFILE`.
        action: String,
        /// Resource type, e.g. `user`.
        resource_type: String,
        /// Resource id.
        resource_id: String,
        /// Change entry as `key=value`.
        change: String,
    },
}
