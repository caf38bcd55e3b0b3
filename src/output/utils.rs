//! Shared helpers for console output

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::layout::display_width;
use crate::metadata::Entry;

const RESET: &str = "\x1b[0m";

/// The coloured form of an entry's name: `ESC[<code>m <label>ESC[0m<indicator>`.
pub fn colored_name(entry: &Entry) -> String {
    format!(
        "\x1b[{}m {}{}{}",
        entry.color_class.ansi_code(),
        entry.label,
        RESET,
        entry.indicator
    )
}

/// The coloured form with escape sequences left out, so cells line up the
/// same way whether or not colour is on.
pub fn plain_name(entry: &Entry) -> String {
    format!(" {}{}", entry.label, entry.indicator)
}

/// Write an entry's name, coloured if the stream supports it.
pub fn write_name<W: WriteColor>(out: &mut W, entry: &Entry) -> io::Result<()> {
    if out.supports_color() {
        write!(out, "{}", colored_name(entry))
    } else {
        write!(out, "{}", plain_name(entry))
    }
}

/// Spaces needed after an entry's name to fill a grid cell.
pub fn cell_padding(entry: &Entry, column_width: usize) -> usize {
    column_width.saturating_sub(display_width(&entry.display_name))
}
