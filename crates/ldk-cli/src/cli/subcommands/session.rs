use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum SessionCommands {
    /// Create a session for a user and show the stored record.
    Create {
        /// User the session belongs to.
        user_id: String,
        /// Session token. Generated randomly when omitted.
        #[arg(long)]
        token: Option<String>,
    },
    /// Refresh a session's last-active timestamp.
    Touch {
        /// Token of the session to refresh.
        token: String,
    },
    /// Invalidate a session.
    Invalidate {
        /// Token of the session to invalidate.
        token: String,
    },
}
