//! Path collection
//!
//! Turns the configured targets into groups of paths to stat: one group per
//! target, or one group per directory visited when recursing. Every target
//! is checked for existence before anything is collected, so a bad argument
//! fails the whole run up front.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::ListingConfig;
use crate::error::{ListingError, Result};

/// A path to stat, with the name it is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub path: PathBuf,
    pub name: String,
}

impl Member {
    fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    fn pseudo(path: PathBuf, name: &str) -> Self {
        Self {
            path,
            name: name.to_string(),
        }
    }
}

/// Paths listed together under one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGroup {
    /// The target as given, or the directory visited when recursing
    pub label: PathBuf,
    pub members: Vec<Member>,
}

/// A validated target and whether it is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Check every target exists, stopping at the first one that does not.
///
/// Symlinks given as targets are followed here, so a link to a directory
/// lists the directory's contents.
pub fn resolve_targets(config: &ListingConfig) -> Result<Vec<Target>> {
    config
        .targets()
        .into_iter()
        .map(|path| match fs::metadata(&path) {
            Ok(meta) => Ok(Target {
                is_dir: meta.is_dir(),
                path,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ListingError::PathNotFound { path })
            }
            Err(e) => Err(ListingError::access(path, e)),
        })
        .collect()
}

/// Collect the groups for one target.
pub fn collect_target(target: &Target, config: &ListingConfig) -> Result<Vec<PathGroup>> {
    if !target.is_dir {
        return Ok(vec![PathGroup {
            label: target.path.clone(),
            members: vec![Member::new(target.path.clone())],
        }]);
    }

    if config.recursive {
        walk_tree(&target.path, config.show_hidden)
    } else {
        Ok(vec![read_level(&target.path, config.show_hidden)?])
    }
}

/// Immediate children of `dir`, led by `.` and `..` when hidden entries are shown.
fn read_level(dir: &Path, show_hidden: bool) -> Result<PathGroup> {
    let mut members = Vec::new();
    if show_hidden {
        members.push(Member::pseudo(dir.to_path_buf(), "."));
        members.push(Member::pseudo(dir.join(".."), ".."));
    }

    let entries = fs::read_dir(dir).map_err(|e| ListingError::access(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ListingError::access(dir, e))?;
        let member = Member::new(entry.path());
        if !show_hidden && member.name.starts_with('.') {
            continue;
        }
        members.push(member);
    }

    tracing::debug!(dir = %dir.display(), count = members.len(), "read directory");
    Ok(PathGroup {
        label: dir.to_path_buf(),
        members,
    })
}

/// Depth-first walk producing one group per directory, root first.
/// Subdirectories are visited in name order; symlinked directories below
/// the root are listed but not descended into. A symlinked root is listed
/// through, the same as a non-recursive listing.
fn walk_tree(root: &Path, show_hidden: bool) -> Result<Vec<PathGroup>> {
    // The trailing separator makes the walker stat through a symlinked root.
    let walker = WalkBuilder::new(root.join(""))
        .standard_filters(false)
        // Without -a, hidden directories are neither listed nor descended into.
        .hidden(!show_hidden)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut groups = vec![read_level(root, show_hidden)?];
    for result in walker {
        let dent = result.map_err(|e| walk_error(root, e))?;
        if dent.depth() == 0 || !dent.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        groups.push(read_level(dent.path(), show_hidden)?);
    }
    Ok(groups)
}

fn walk_error(root: &Path, err: ignore::Error) -> ListingError {
    let source = match err.into_io_error() {
        Some(e) => e,
        None => io::Error::other("directory walk failed"),
    };
    ListingError::access(root, source)
}
