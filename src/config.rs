//! Configuration types for a listing run

use std::path::PathBuf;

/// What to list and how to order it.
///
/// Produced by the command-line layer and consumed by the collector and
/// the layout engine. Presentation options (colour, terminal width) live in
/// [`crate::output::OutputConfig`].
#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    /// Use the long listing format
    pub long_format: bool,
    /// Include entries starting with `.` and the `.`/`..` pseudo-entries
    pub show_hidden: bool,
    /// Sort by size, largest first
    pub sort_by_size: bool,
    /// List subdirectories recursively
    pub recursive: bool,
    /// Paths to list, in the order given. Empty means the current directory.
    pub paths: Vec<PathBuf>,
}

impl ListingConfig {
    /// The paths to list, defaulting to `.` when none were given.
    pub fn targets(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }

    /// Whether each group gets a header line.
    ///
    /// Headers are shown when more than one top-level path was requested or
    /// when recursing.
    pub fn show_headers(&self) -> bool {
        self.recursive || self.paths.len() > 1
    }
}
