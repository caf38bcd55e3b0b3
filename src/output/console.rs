//! Console output formatter
//!
//! Writes each group as soon as it is ready: an optional `label:` header,
//! then either the long-format rows (preceded by the block total) or the
//! short-format grid, then a blank line.

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::layout::{GridLayout, LongLayout};
use crate::listing::{Group, ListingOutput};

use super::config::OutputConfig;
use super::utils::{cell_padding, write_name};

pub struct ConsoleFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl ConsoleFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::AlwaysAnsi
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_long(&mut self, group: &Group) -> io::Result<()> {
        let layout = LongLayout::build(&group.entries, self.config.now);
        writeln!(self.out, "total: {}", layout.total_blocks)?;
        for (index, entry) in group.entries.iter().enumerate() {
            write!(self.out, "{} ", layout.format_fields(index))?;
            write_name(&mut self.out, entry)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn write_grid(&mut self, group: &Group) -> io::Result<()> {
        let layout = GridLayout::build(&group.entries, self.config.terminal_width);
        for row in &layout.rows {
            for &index in row {
                let entry = &group.entries[index];
                write_name(&mut self.out, entry)?;
                let pad = cell_padding(entry, layout.column_width);
                write!(self.out, "{:pad$}", "", pad = pad)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> ListingOutput for ConsoleFormatter<W> {
    fn output_group(&mut self, group: &Group) -> io::Result<()> {
        if let Some(label) = &group.label {
            writeln!(self.out, "{}:", label)?;
        }

        if self.config.long_format {
            self.write_long(group)?;
        } else {
            self.write_grid(group)?;
        }

        writeln!(self.out)?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
