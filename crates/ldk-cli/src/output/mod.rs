//! Output rendering for command results.
//!
//! Table mode keeps the explicit per-page column order the admin console
//! uses; json/raw modes serialize the records untouched so scripts see the
//! wire shape.

use serde::Serialize;

use crate::cli::OutputFormat;

pub mod grid;

pub use grid::GridOptions;

/// Print a list of records. `to_row` supplies the table cells in header
/// order; json/raw serialize the records themselves.
pub fn records<T: Serialize>(
    records: &[T],
    headers: &[&str],
    to_row: impl Fn(&T) -> Vec<String>,
    format: OutputFormat,
    options: GridOptions,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Raw => println!("{}", serde_json::to_string(records)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = records.iter().map(to_row).collect();
            println!("{}", grid::render(headers, &rows, options));
        }
    }
    Ok(())
}

/// Format an optional cell, rendering absence as `-`.
#[must_use]
pub fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Render a JSON payload map as a compact cell.
#[must_use]
pub fn payload_cell(payload: &ldk_core::Payload) -> String {
    serde_json::to_string(payload).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{cell, payload_cell};

    #[test]
    fn missing_cell_renders_dash() {
        assert_eq!(cell(None), "-");
        assert_eq!(cell(Some("T1")), "T1");
    }

    #[test]
    fn payload_renders_compact_json() {
        let mut payload = ldk_core::Payload::new();
        payload.insert("source".to_string(), json!("mobile"));
        assert_eq!(payload_cell(&payload), r#"{"source":"mobile"}"#);
    }
}
