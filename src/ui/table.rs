use console::style;

use crate::db::StressRecord;

use super::EMPTY_HISTORY_MESSAGE;

const HEADERS: [&str; 5] = ["id", "jam_tidur", "beban_tugas", "emosi", "hasil"];

/// Plain-text table of the history, one row per record.
pub fn render_history(records: &[StressRecord]) -> String {
    if records.is_empty() {
        return style(EMPTY_HISTORY_MESSAGE).dim().to_string();
    }

    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|record| {
            [
                record.id.to_string(),
                record.sleep_hours.to_string(),
                record.workload.to_string(),
                record.emotional_pressure.to_string(),
                record.result.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
