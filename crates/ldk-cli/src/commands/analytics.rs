use ldk_client::ApiClient;
use ldk_core::AnalyticsData;
use ldk_views::AnalyticsView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnalyticsCommands;
use crate::output::{self, GridOptions};

const HEADERS: [&str; 5] = ["ID", "Event Type", "User ID", "Metadata", "Timestamp"];

pub async fn run(
    command: AnalyticsCommands,
    api: &ApiClient,
    flags: &GlobalFlags,
    options: GridOptions,
) -> anyhow::Result<()> {
    let mut view = AnalyticsView::new();
    match command {
        AnalyticsCommands::Search { event_type } => {
            view.search_event_type = event_type;
            view.search(api).await;
        }
        AnalyticsCommands::Log {
            event_type,
            user_id,
            metadata,
        } => {
            let (key, value) = super::shared::parse_kv(&metadata)?;
            view.search_event_type.clone_from(&event_type);
            view.form.event_type = event_type;
            view.form.user_id = user_id;
            view.form.metadata_key = key;
            view.form.metadata_value = value;
            view.submit(api).await;
        }
    }
    super::shared::ensure_success(view.phase())?;

    output::records(&view.events, &HEADERS, to_row, flags.format, options)
}

fn to_row(event: &AnalyticsData) -> Vec<String> {
    vec![
        output::cell(event.id.as_deref()),
        event.event_type.clone(),
        event.user_id.clone(),
        output::payload_cell(&event.metadata),
        output::cell(event.timestamp.as_deref()),
    ]
}
