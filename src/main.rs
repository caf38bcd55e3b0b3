//! CLI entry point for lsrs

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::{Parser, ValueEnum};
use lsrs::output::detect_terminal_width;
use lsrs::{ConsoleFormatter, JsonFormatter, Lister, ListingConfig, OutputConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lsrs")]
#[command(about = "List information about the FILEs (the current directory by default)")]
#[command(version)]
struct Args {
    /// Use a long listing format
    #[arg(short, long)]
    long: bool,

    /// Do not ignore entries starting with .
    #[arg(short, long)]
    all: bool,

    /// Sort by file size, largest first
    #[arg(short = 'S', long)]
    sort: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// File paths
    files: Vec<PathBuf>,
}

fn main() {
    lsrs::logging::init_logging();
    let args = Args::parse();

    let config = ListingConfig {
        long_format: args.long,
        show_hidden: args.all,
        sort_by_size: args.sort,
        recursive: args.recursive,
        paths: args.files,
    };
    let lister = Lister::new(config);

    let result = if args.json {
        lister.list(&mut JsonFormatter::stdout())
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            long_format: lister.config().long_format,
            terminal_width: detect_terminal_width(),
            now: Local::now(),
        };
        lister.list(&mut ConsoleFormatter::stdout(output_config))
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "listing failed");
        eprintln!("{}", e);
        process::exit(1);
    }
}
