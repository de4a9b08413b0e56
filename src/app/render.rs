//! 純文字表格輸出

use crate::core::table::{ArtworkTable, RowView};
use crate::core::selection::SelectionController;
use std::fmt::Write;

const TITLE: &str = "Artworks Data";

/// (標題, 欄寬)
const COLUMNS: [(&str, usize); 7] = [
    ("Id", 8),
    ("Title", 32),
    ("Place of Origin", 16),
    ("Artist", 28),
    ("Inscriptions", 20),
    ("Start Date", 10),
    ("End Date", 10),
];

pub fn render_table(table: &ArtworkTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    if table.is_loading() {
        let _ = writeln!(out, "Loading…");
    }

    let mut header = String::from("[ ] ");
    for (name, width) in COLUMNS {
        header.push_str(&cell(name, width));
    }
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{}", "-".repeat(header.trim_end().chars().count()));

    let rows = table.rows();
    if rows.is_empty() {
        let _ = writeln!(out, "No artworks on this page.");
    }
    for row in &rows {
        let _ = writeln!(out, "{}", render_row(row).trim_end());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", render_footer(table));
    out
}

pub fn render_row(row: &RowView<'_>) -> String {
    let record = row.record;
    let values = [
        record.id.to_string(),
        record.title.clone(),
        record.place_of_origin.clone(),
        record.artist_display.clone(),
        record.inscriptions.clone(),
        record.date_start.to_string(),
        record.date_end.to_string(),
    ];

    let mut line = String::from(if row.checked { "[x] " } else { "[ ] " });
    for (value, (_, width)) in values.iter().zip(COLUMNS) {
        line.push_str(&cell(value, width));
    }
    line
}

pub fn render_footer(table: &ArtworkTable) -> String {
    let previous = if table.pages().can_go_previous() {
        "prev"
    } else {
        "prev (disabled)"
    };
    format!(
        "Page {}   [{} | next]   Selected: {} ({} on this page)",
        table.page(),
        previous,
        table.selection().len(),
        table.selected_on_page()
    )
}

pub fn render_selection(selection: &SelectionController) -> String {
    if selection.is_empty() {
        return "No artworks selected.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} selected:", selection.len());
    for artwork in selection.selected() {
        let _ = writeln!(out, "  {:>8}  {}", artwork.id, single_line(&artwork.title));
    }
    out
}

/// 截斷並補齊到固定寬度，欄與欄之間留一格空白
fn cell(value: &str, width: usize) -> String {
    let text = single_line(value);
    let count = text.chars().count();
    let fitted = if count > width {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        text
    };
    let padding = width.saturating_sub(fitted.chars().count());
    format!("{}{} ", fitted, " ".repeat(padding))
}

// 上游的 artist_display 常含換行
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
