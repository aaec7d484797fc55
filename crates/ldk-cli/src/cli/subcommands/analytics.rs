use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum AnalyticsCommands {
    /// List all events of an event type.
    Search {
        /// Event type to search for, e.g. `page_view`.
        event_type: String,
    },
    /// Log a new event with one metadata entry, then show the refreshed
    /// listing for its type.
    Log {
        /// Event type, e.g. `page_view`.
        event_type: String,
        /// User the event belongs to.
        user_id: String,
        /// Metadata entry as `key=value`.
        metadata: String,
    },
}
