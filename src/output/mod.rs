//! Listing output
//!
//! This module provides formatters that receive finished groups from the
//! listing pipeline:
//! - Console output, long or short format, optionally coloured
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types and terminal width detection
//! - `utils` - Name colouring and cell padding
//! - `console` - Console formatter
//! - `json` - JSON formatter

mod config;
mod console;
mod json;
mod utils;

pub use config::{DEFAULT_TERMINAL_WIDTH, OutputConfig, detect_terminal_width};
pub use console::ConsoleFormatter;
pub use json::JsonFormatter;
pub use utils::{cell_padding, colored_name, plain_name, write_name};
