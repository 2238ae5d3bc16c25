//! Choosing one definition among several matches.

use crate::tags::TagEntry;
use serde::Serialize;

/// Column the host should filter on when the user types into the list.
pub const SEARCH_COLUMN: usize = 1;

pub const HEADERS: [&str; 4] = ["Tag", "File", "Location", "Info"];

/// One selectable row describing a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceRow {
    pub name: String,
    pub file_name: String,
    pub locator: String,
    pub extra: String,
}

impl ChoiceRow {
    pub fn from_entry(entry: &TagEntry) -> Self {
        Self {
            name: entry.name.clone(),
            file_name: entry.file_name(),
            locator: entry.locator.to_string(),
            extra: display_extra(&entry.extra),
        }
    }

    pub fn columns(&self) -> [&str; 4] {
        [&self.name, &self.file_name, &self.locator, &self.extra]
    }
}

/// A titled, multi-column list handed to the host UI.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceList {
    pub title: String,
    pub headers: [&'static str; 4],
    pub rows: Vec<ChoiceRow>,
    pub search_column: usize,
}

impl ChoiceList {
    pub fn for_entries(query: &str, entries: &[TagEntry]) -> Self {
        Self {
            title: format!("{} definitions of '{query}'", entries.len()),
            headers: HEADERS,
            rows: entries.iter().map(ChoiceRow::from_entry).collect(),
            search_column: SEARCH_COLUMN,
        }
    }

    /// Indices of rows whose search column contains `filter` (case-insensitive).
    pub fn filter(&self, filter: &str) -> Vec<usize> {
        let needle = filter.to_lowercase();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.columns()[self.search_column].to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Host UI collaborator presenting a choice list.
pub trait ChoicePrompt {
    /// Index of the chosen row, or `None` when the user cancels.
    fn choose(&mut self, list: &ChoiceList) -> Option<usize>;
}

/// Reduce `entries` to a single target.
///
/// No entries or a cancelled prompt give `None`. A single entry is returned
/// without prompting.
pub fn disambiguate(
    query: &str,
    mut entries: Vec<TagEntry>,
    prompt: &mut dyn ChoicePrompt,
) -> Option<TagEntry> {
    match entries.len() {
        0 => None,
        1 => entries.pop(),
        _ => {
            let list = ChoiceList::for_entries(query, &entries);
            let choice = prompt.choose(&list)?;
            (choice < entries.len()).then(|| entries.swap_remove(choice))
        }
    }
}

/// Ext fields for display: tabs become spaces and a leading kind is dropped,
/// either `kind:` or a bare one-letter kind such as `f`.
fn display_extra(extra: &str) -> String {
    let extra = extra.trim();
    let extra = match extra.strip_prefix("kind:") {
        Some(rest) => rest,
        None => strip_kind_letter(extra),
    };
    extra.trim().split('\t').collect::<Vec<_>>().join(" ")
}

fn strip_kind_letter(extra: &str) -> &str {
    let mut chars = extra.chars();
    match (chars.next(), chars.next()) {
        (Some(kind), None) if kind.is_ascii_alphabetic() => "",
        (Some(kind), Some(sep)) if kind.is_ascii_alphabetic() && sep.is_whitespace() => {
            chars.as_str()
        }
        _ => extra,
    }
}
