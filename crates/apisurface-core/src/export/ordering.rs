//! Entry ordering and snapshot text rendering.

use std::cmp::Ordering;

use crate::model::{CodeModel, ElementId};

use super::entry::extract_entries;

/// Line separator placed between snapshot entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    /// Separator text
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Ordinal comparison ignoring case
///
/// Characters are compared by code point after simple uppercase folding.
/// Characters whose uppercase form expands to several characters (`ß`) are
/// compared unchanged.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Sort entries with [`compare_ignore_case`]
///
/// The relative order of entries that differ only by case is unspecified.
pub fn sort_entries(entries: &mut [String]) {
    entries.sort_by(|a, b| compare_ignore_case(a, b));
}

/// Extract and sort all entries under `root`
pub fn extract_sorted_entries(model: &CodeModel, root: ElementId) -> Vec<String> {
    let mut entries = extract_entries(model, root);
    sort_entries(&mut entries);
    entries
}

/// Join entries with the given separator, without a trailing separator
pub fn join_entries(entries: &[String], line_ending: LineEnding) -> String {
    entries.join(line_ending.as_str())
}

/// Full snapshot text for the tree under `root`
pub fn render_snapshot(model: &CodeModel, root: ElementId, line_ending: LineEnding) -> String {
    join_entries(&extract_sorted_entries(model, root), line_ending)
}
