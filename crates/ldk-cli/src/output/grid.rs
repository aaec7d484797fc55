//! Aligned text grid renderer for record listings.

/// Rendering knobs, filled from config and terminal state.
#[derive(Clone, Copy, Debug)]
pub struct GridOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned grid for string rows under the given headers.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: GridOptions) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }

    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.len());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate(value, *width);
                let padded = pad(&truncated, *width);
                if options.color {
                    colorize_status(&padded, &truncated)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

/// Shrink the widest shrinkable column one char at a time until the row fits.
/// A column never drops below its header length.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate = None;
        let mut widest = 0usize;
        for (index, width) in widths.iter().enumerate() {
            let floor = headers[index].len().max(4);
            if *width > floor && *width > widest {
                candidate = Some(index);
                widest = *width;
            }
        }
        let Some(index) = candidate else {
            break;
        };
        widths[index] -= 1;
        total -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}

/// Highlight well-known status words so invalid sessions and failed audit
/// entries stand out in a long listing.
fn colorize_status(padded: &str, plain: &str) -> String {
    let code = match plain {
        "Active" | "SUCCESS" | "true" => Some("32"),
        "Inactive" | "FAILURE" | "false" => Some("31"),
        _ => None,
    };
    code.map_or_else(
        || padded.to_string(),
        |code| format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GridOptions, render};

    const PLAIN: GridOptions = GridOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn empty_rows_render_placeholder() {
        assert_eq!(render(&["ID", "Action"], &[], PLAIN), "(no rows)");
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["a1".to_string(), "login".to_string()],
            vec!["a2".to_string(), "password-reset".to_string()],
        ];
        let rendered = render(&["ID", "Action"], &rows, PLAIN);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "ID    Action        ");
        assert_eq!(lines[2], "a1    login         ");
        assert_eq!(lines[3], "a2    password-reset");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["a1".to_string()]];
        let rendered = render(&["ID", "Action"], &rows, PLAIN);
        assert!(rendered.lines().nth(2).unwrap().contains('-'));
    }

    #[test]
    fn wide_columns_shrink_to_fit_with_ellipsis() {
        let rows = vec![vec![
            "a1".to_string(),
            "a very long details string that will not fit".to_string(),
        ]];
        let rendered = render(
            &["ID", "Details"],
            &rows,
            GridOptions {
                max_width: Some(24),
                color: false,
            },
        );
        for line in rendered.lines() {
            assert!(line.chars().count() <= 24, "line too wide: {line:?}");
        }
        assert!(rendered.contains('…'));
    }

    #[test]
    fn status_words_are_colored() {
        let rows = vec![vec!["s1".to_string(), "Active".to_string()]];
        let rendered = render(
            &["ID", "Status"],
            &rows,
            GridOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(rendered.contains("\u{1b}[32m"));
    }
}
