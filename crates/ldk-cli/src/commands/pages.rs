use ldk_views::Page;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::{self, GridOptions};

#[derive(Debug, Serialize)]
struct PageRow {
    title: &'static str,
    path: &'static str,
}

pub fn list(flags: &GlobalFlags, options: GridOptions) -> anyhow::Result<()> {
    let rows: Vec<PageRow> = Page::ALL
        .into_iter()
        .map(|page| PageRow {
            title: page.title(),
            path: page.path(),
        })
        .collect();
    output::records(
        &rows,
        &["Page", "Path"],
        |row| vec![row.title.to_string(), row.path.to_string()],
        flags.format,
        options,
    )
}
