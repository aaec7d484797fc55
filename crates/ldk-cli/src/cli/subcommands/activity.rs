use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ActivityCommands {
    /// List all activities recorded for a user.
    Search {
        /// User id to search for.
        user_id: String,
    },
    /// Log a new activity, then show the user's refreshed listing.
    Log {
        /// User the activity belongs to.
        user_id: String,
        /// Action name, e.g. `login`.
        action: String,
        /// Free-text details.
        details: String,
    },
}
