use ldk_client::ApiClient;
use ldk_core::AuditLog;
use ldk_views::AuditView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::output::{self, GridOptions};

const HEADERS: [&str; 9] = [
    "ID",
    "User ID",
    "Action",
    "Resource Type",
    "Resource ID",
    "Changes",
    "Status",
    "Message",
    "Timestamp",
];

pub async fn run(
    command: AuditCommands,
    api: &ApiClient,
    flags: &GlobalFlags,
    options: GridOptions,
) -> anyhow::Result<()> {
    let mut view = AuditView::new();
    match command {
        AuditCommands::Search { user_id } => {
            view.search_user_id = user_id;
            view.search(api).await;
        }
        AuditCommands::Create {
            user_id,
            action,
            resource_type,
            resource_id,
            change,
        } => {
            let (key, value) = super::shared::parse_kv(&change)?;
            view.search_user_id.clone_from(&user_id);
            view.form.user_id = user_id;
            view.form.action = action;
            view.form.resource_type = resource_type;
            view.form.resource_id = resource_id;
            view.form.change_key = key;
            view.form.change_value = value;
            view.submit(api).await;
        }
    }
    super::shared::ensure_success(view.phase())?;

    output::records(&view.entries, &HEADERS, to_row, flags.format, options)
}

fn to_row(entry: &AuditLog) -> Vec<String> {
    vec![
        output::cell(entry.id.as_deref()),
        entry.user_id.clone(),
        entry.action.clone(),
        entry.resource_type.clone(),
        entry.resource_id.clone(),
        output::payload_cell(&entry.changes),
        output::cell(entry.status.as_deref()),
        output::cell(entry.message.as_deref()),
        output::cell(entry.timestamp.as_deref()),
    ]
}
