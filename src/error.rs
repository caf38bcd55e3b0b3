//! Error types for the listing pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListingError>;

/// Fatal conditions that stop a listing run.
///
/// Owner/group names that cannot be resolved are not errors; the numeric
/// id is shown instead (see [`crate::owner::OwnerResolver`]).
#[derive(Debug, Error)]
pub enum ListingError {
    /// An input argument does not resolve to any filesystem object.
    #[error("Specified path does not exist.")]
    PathNotFound { path: PathBuf },

    /// A metadata or directory query failed after the path was confirmed to exist.
    #[error("{}", describe_io_error(.source))]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the listing to the output stream failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ListingError {
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }
}

/// The operating system's description of an I/O error, without the
/// trailing `(os error N)` that `io::Error`'s Display appends.
pub fn describe_io_error(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(pos) if err.raw_os_error().is_some() => text[..pos].to_string(),
        _ => text,
    }
}
