//! Output configuration types

use chrono::{DateTime, Local};

/// Width assumed when neither `COLUMNS` nor the terminal report one.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub long_format: bool,
    /// Columns available for the short-format grid
    pub terminal_width: usize,
    /// Reference time deciding between time-of-day and year in timestamps
    pub now: DateTime<Local>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            long_format: false,
            terminal_width: DEFAULT_TERMINAL_WIDTH,
            now: Local::now(),
        }
    }
}

/// Terminal width from `COLUMNS`, else the attached terminal, else 80.
pub fn detect_terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0);

    let width = from_env.unwrap_or_else(|| {
        console::Term::stdout()
            .size_checked()
            .map(|(_rows, cols)| usize::from(cols))
            .filter(|&cols| cols > 0)
            .unwrap_or(DEFAULT_TERMINAL_WIDTH)
    });
    tracing::debug!(width, "terminal width");
    width
}
