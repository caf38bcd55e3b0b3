//! Sorting and layout computation
//!
//! Given the entries of one group, decide their order and compute either
//! the long-format columns or the short-format grid. Nothing here writes
//! output or emits escape sequences.

use chrono::{DateTime, Duration, Local};
use unicode_width::UnicodeWidthStr;

use crate::collate::Collation;
use crate::config::ListingConfig;
use crate::metadata::Entry;

/// Order a group's entries.
///
/// Entries are first sorted by display name under `collation`. When
/// recursing, a leading entry whose name starts with `..` is swapped with
/// the second one so the `.` pseudo-entry comes first. Finally, with
/// `sort_by_size`, a stable sort by size (largest first) is applied on top
/// of the name order.
pub fn sort_entries(entries: &mut [Entry], config: &ListingConfig, collation: Collation) {
    entries.sort_by(|a, b| collation.compare(&a.display_name, &b.display_name));

    if config.recursive {
        swap_leading_parent(entries);
    }

    if config.sort_by_size {
        entries.sort_by(|a, b| b.size.cmp(&a.size));
    }
}

/// Swap the first two entries when the first one's name starts with `..`.
///
/// Collation tends to put `../` ahead of `./`. This only looks at the first
/// two entries and is applied in recursive listings only.
pub fn swap_leading_parent(entries: &mut [Entry]) {
    if entries.len() >= 2 && entries[0].display_name.starts_with("..") {
        entries.swap(0, 1);
    }
}

/// Sum of entry sizes in 1024-byte blocks, each rounded up.
pub fn total_blocks(entries: &[Entry]) -> u64 {
    entries.iter().map(Entry::blocks).sum()
}

/// Displayed width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Format a modification time the way `ls -l` does: time of day for
/// anything from the last 365 days (or the future), the year otherwise.
pub fn format_timestamp(modified: DateTime<Local>, now: DateTime<Local>) -> String {
    if modified < now - Duration::days(365) {
        modified.format("%b %d  %Y").to_string()
    } else {
        modified.format("%b %d %H:%M").to_string()
    }
}

/// Number of right-justified metadata columns in a long-format row.
pub const LONG_FIELDS: usize = 6;

/// Column layout for the long format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongLayout {
    pub total_blocks: u64,
    /// Widest value in each field column
    pub widths: [usize; LONG_FIELDS],
    /// Permissions, link count, owner, group, size and timestamp per entry
    pub rows: Vec<[String; LONG_FIELDS]>,
}

impl LongLayout {
    pub fn build(entries: &[Entry], now: DateTime<Local>) -> Self {
        let rows: Vec<[String; LONG_FIELDS]> = entries
            .iter()
            .map(|e| {
                [
                    e.permissions.clone(),
                    e.link_count.to_string(),
                    e.owner.clone(),
                    e.group.clone(),
                    e.size.to_string(),
                    format_timestamp(e.modified, now),
                ]
            })
            .collect();

        let mut widths = [0; LONG_FIELDS];
        for row in &rows {
            for (width, field) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(field));
            }
        }

        Self {
            total_blocks: total_blocks(entries),
            widths,
            rows,
        }
    }

    /// The metadata part of row `index`, fields right-justified and
    /// separated by single spaces. The name is appended by the caller.
    pub fn format_fields(&self, index: usize) -> String {
        self.rows[index]
            .iter()
            .zip(self.widths)
            .map(|(field, width)| {
                let pad = width.saturating_sub(display_width(field));
                format!("{}{}", " ".repeat(pad), field)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Grid layout for the short format.
///
/// Entries fill the grid column by column: entry `i` lands in row
/// `i % row_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Width of every cell: the widest display name
    pub column_width: usize,
    /// Columns that fit in the terminal width (at least one)
    pub columns: usize,
    /// Entry indices, row by row
    pub rows: Vec<Vec<usize>>,
}

impl GridLayout {
    pub fn build(entries: &[Entry], terminal_width: usize) -> Self {
        let widths: Vec<usize> = entries
            .iter()
            .map(|e| display_width(&e.display_name))
            .collect();
        Self::from_widths(&widths, terminal_width)
    }

    /// Lay out cells of the given widths.
    pub fn from_widths(widths: &[usize], terminal_width: usize) -> Self {
        let column_width = widths.iter().copied().max().unwrap_or(0);
        let columns = if column_width == 0 {
            1
        } else {
            (terminal_width / column_width).max(1)
        };
        let row_count = widths.len().div_ceil(columns);

        let mut rows = vec![Vec::new(); row_count];
        for index in 0..widths.len() {
            rows[index % row_count].push(index);
        }

        tracing::trace!(column_width, columns, row_count, "grid layout");
        Self {
            column_width,
            columns,
            rows,
        }
    }
}
