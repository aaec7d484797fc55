use ldk_client::ApiClient;
use ldk_core::UserSession;
use ldk_views::SessionsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::output::{self, GridOptions};

const HEADERS: [&str; 7] = [
    "ID",
    "User ID",
    "Session Token",
    "IP Address",
    "Status",
    "Last Active",
    "Created",
];

/// Confirmation payload for token-addressed operations, which return no
/// record body.
#[derive(Debug, Serialize)]
struct SessionAck<'a> {
    token: &'a str,
    action: &'a str,
}

pub async fn run(
    command: SessionCommands,
    api: &ApiClient,
    flags: &GlobalFlags,
    options: GridOptions,
) -> anyhow::Result<()> {
    match command {
        SessionCommands::Create { user_id, token } => {
            let token = match token {
                Some(token) => token,
                None => generate_token()?,
            };
            let mut view = SessionsView::new();
            view.form.user_id = user_id;
            view.form.session_token = token;
            view.create(api).await;
            super::shared::ensure_success(view.phase())?;
            output::records(&view.sessions, &HEADERS, to_row, flags.format, options)
        }
        SessionCommands::Touch { token } => {
            api.touch_session(&token).await?;
            ack(&token, "touched", flags)
        }
        SessionCommands::Invalidate { token } => {
            api.invalidate_session(&token).await?;
            ack(&token, "invalidated", flags)
        }
    }
}

fn ack(token: &str, action: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ack = SessionAck { token, action };
    match flags.format {
        crate::cli::OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ack)?),
        crate::cli::OutputFormat::Raw => println!("{}", serde_json::to_string(&ack)?),
        crate::cli::OutputFormat::Table => println!("Session {token} {action}."),
    }
    Ok(())
}

/// Random 16-byte hex token, for when the operator does not supply one.
fn generate_token() -> anyhow::Result<String> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes)
        .map_err(|error| anyhow::anyhow!("failed to gather entropy: {error}"))?;
    Ok(bytes.iter().map(|byte| format!("{byte:02x}")).collect())
}

fn to_row(session: &UserSession) -> Vec<String> {
    vec![
        output::cell(session.id.as_deref()),
        session.user_id.clone(),
        session.session_token.clone(),
        output::cell(session.ip_address.as_deref()),
        if session.is_valid { "Active" } else { "Inactive" }.to_string(),
        output::cell(session.last_active_timestamp.as_deref()),
        output::cell(session.created_timestamp.as_deref()),
    ]
}
