//! Table formatting for candidate lists and jump history.

use crate::disambiguate::ChoiceList;
use crate::history::JumpHistory;
use crate::tags::TagEntry;
use comfy_table::{Attribute, Cell, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

/// Builder for creating formatted tables.
pub struct TableBuilder {
    table: Table,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
        Self { table }
    }

    pub fn set_headers<'a>(mut self, headers: impl IntoIterator<Item = &'a str>) -> Self {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect();
        self.table.set_header(header_cells);
        self
    }

    pub fn add_row(mut self, row: Vec<String>) -> Self {
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> String {
        self.table.to_string()
    }
}

/// Numbered rows of a choice list; `visible` holds row indices to show.
///
/// Numbers are 1-based positions within `visible`.
pub fn choice_table(list: &ChoiceList, visible: &[usize]) -> String {
    let headers = std::iter::once("#").chain(list.headers.iter().copied());
    visible
        .iter()
        .enumerate()
        .filter_map(|(shown, &idx)| list.rows.get(idx).map(|row| (shown, row)))
        .fold(TableBuilder::new().set_headers(headers), |table, (shown, row)| {
            let mut cells = vec![(shown + 1).to_string()];
            cells.extend(row.columns().iter().map(|c| c.to_string()));
            table.add_row(cells)
        })
        .build()
}

/// Every candidate with its full path.
pub fn candidates_table(entries: &[TagEntry]) -> String {
    entries
        .iter()
        .fold(
            TableBuilder::new().set_headers(["Tag", "Path", "Location", "Info"]),
            |table, entry| {
                table.add_row(vec![
                    entry.name.clone(),
                    entry.location.display().to_string(),
                    entry.locator.to_string(),
                    entry.extra.replace('\t', " "),
                ])
            },
        )
        .build()
}

/// History records, marking the one the cursor points at.
pub fn history_table(history: &JumpHistory) -> String {
    let current = history.position();
    history
        .records()
        .iter()
        .enumerate()
        .fold(
            TableBuilder::new().set_headers(["", "#", "File", "Offset"]),
            |table, (idx, record)| {
                let marker = if idx + 1 == current { ">" } else { "" };
                table.add_row(vec![
                    marker.to_string(),
                    (idx + 1).to_string(),
                    record.location.display().to_string(),
                    record.position.to_string(),
                ])
            },
        )
        .build()
}
