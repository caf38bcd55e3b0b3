//! The listing pipeline
//!
//! Collects paths, stats each one, orders each group and hands finished
//! groups to a [`ListingOutput`] one at a time. All targets are validated
//! before the first group is produced; any later error stops the run after
//! whatever groups were already emitted.

use std::io;

use serde::Serialize;

use crate::collate::Collation;
use crate::collect::{self, PathGroup};
use crate::config::ListingConfig;
use crate::error::Result;
use crate::layout::{sort_entries, total_blocks};
use crate::metadata::Entry;
use crate::owner::OwnerResolver;

/// Entries rendered together under one header.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    /// Header text, present when headers are shown
    pub label: Option<String>,
    pub entries: Vec<Entry>,
}

impl Group {
    pub fn total_blocks(&self) -> u64 {
        total_blocks(&self.entries)
    }
}

/// Receives finished groups in order.
pub trait ListingOutput {
    fn output_group(&mut self, group: &Group) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs the listing for one configuration.
#[derive(Debug)]
pub struct Lister {
    config: ListingConfig,
    collation: Collation,
    owners: OwnerResolver,
}

impl Lister {
    /// A lister using the process locale and the platform's owner lookup.
    pub fn new(config: ListingConfig) -> Self {
        Self {
            config,
            collation: Collation::from_env(),
            owners: OwnerResolver::detect(),
        }
    }

    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    pub fn with_owner_resolver(mut self, owners: OwnerResolver) -> Self {
        self.owners = owners;
        self
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Stream every group to `output`.
    pub fn list<O: ListingOutput>(&self, output: &mut O) -> Result<()> {
        let targets = collect::resolve_targets(&self.config)?;
        for target in &targets {
            for paths in collect::collect_target(target, &self.config)? {
                let group = self.load_group(paths)?;
                output.output_group(&group)?;
            }
        }
        output.finish()?;
        Ok(())
    }

    fn load_group(&self, paths: PathGroup) -> Result<Group> {
        let mut entries = paths
            .members
            .iter()
            .map(|m| Entry::load(&m.path, &m.name, &self.owners))
            .collect::<Result<Vec<_>>>()?;
        sort_entries(&mut entries, &self.config, self.collation);

        let label = self
            .config
            .show_headers()
            .then(|| paths.label.display().to_string());
        tracing::debug!(label = ?label, entries = entries.len(), "group ready");
        Ok(Group { label, entries })
    }
}
