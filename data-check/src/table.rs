//! Box-drawn console tables.
//!
//! Rows are JSON objects; every distinct key becomes a column in first-seen order,
//! preceded by an `(index)` column holding the row's position.

use serde_json::{Map, Value};

const INDEX_HEADER: &str = "(index)";

/// Renders rows as a table, one line per row plus borders, ending in a newline.
pub fn render(rows: &[Map<String, Value>]) -> String {
    let mut headers: Vec<String> = vec![INDEX_HEADER.to_string()];
    for row in rows {
        for key in row.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut cells = vec![index.to_string()];
            cells.extend(
                headers[1..]
                    .iter()
                    .map(|key| row.get(key).map(format_value).unwrap_or_default()),
            );
            cells
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .map(|cells| cells[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&line(&headers, &widths));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for cells in &body {
        out.push_str(&line(cells, &widths));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn border(widths: &[usize], left: char, join: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&join.to_string()), right)
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let fill = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(fill))
        })
        .collect();
    format!("│{}│\n", padded.join("│"))
}
