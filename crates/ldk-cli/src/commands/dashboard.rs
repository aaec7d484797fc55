use ldk_views::{DashboardView, StatCard};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, GridOptions};

pub fn show(flags: &GlobalFlags, options: GridOptions) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table && !flags.quiet {
        println!("{}\n", DashboardView::WELCOME);
    }
    output::records(
        DashboardView::stat_cards(),
        &["Title", "Value"],
        to_row,
        flags.format,
        options,
    )
}

fn to_row(card: &StatCard) -> Vec<String> {
    vec![card.title.to_string(), card.value.to_string()]
}
