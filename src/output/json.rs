//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::listing::{Group, ListingOutput};
use crate::metadata::Entry;

#[derive(Debug, Clone, Serialize)]
struct JsonGroup {
    label: Option<String>,
    total_blocks: u64,
    entries: Vec<Entry>,
}

/// Buffers every group and writes them as one pretty-printed JSON array
/// when the listing finishes.
pub struct JsonFormatter<W: Write> {
    out: W,
    groups: Vec<JsonGroup>,
}

impl JsonFormatter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            groups: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ListingOutput for JsonFormatter<W> {
    fn output_group(&mut self, group: &Group) -> io::Result<()> {
        self.groups.push(JsonGroup {
            label: group.label.clone(),
            total_blocks: group.total_blocks(),
            entries: group.entries.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.groups).map_err(io::Error::other)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}
