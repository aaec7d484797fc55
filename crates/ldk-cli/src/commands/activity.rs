use ldk_client::ApiClient;
use ldk_core::UserActivity;
use ldk_views::ActivitiesView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActivityCommands;
use crate::output::{self, GridOptions};

const HEADERS: [&str; 6] = ["ID", "User ID", "Action", "Details", "IP Address", "Timestamp"];

pub async fn run(
    command: ActivityCommands,
    api: &ApiClient,
    flags: &GlobalFlags,
    options: GridOptions,
) -> anyhow::Result<()> {
    let mut view = ActivitiesView::new();
    match command {
        ActivityCommands::Search { user_id } => {
            view.search_user_id = user_id;
            view.search(api).await;
        }
        ActivityCommands::Log {
            user_id,
            action,
            details,
        } => {
            // Searching the same user after the write refreshes the listing
            // with the new row included.
            view.search_user_id.clone_from(&user_id);
            view.form.user_id = user_id;
            view.form.action = action;
            view.form.details = details;
            view.submit(api).await;
        }
    }
    super::shared::ensure_success(view.phase())?;

    output::records(&view.activities, &HEADERS, to_row, flags.format, options)
}

fn to_row(activity: &UserActivity) -> Vec<String> {
    vec![
        output::cell(activity.id.as_deref()),
        activity.user_id.clone(),
        activity.action.clone(),
        activity.details.clone(),
        output::cell(activity.ip_address.as_deref()),
        output::cell(activity.timestamp.as_deref()),
    ]
}
