//! lsrs - List directory contents, with colors

pub mod classify;
pub mod collate;
pub mod collect;
pub mod config;
pub mod error;
pub mod layout;
pub mod listing;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod owner;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use classify::ColorClass;
pub use collate::Collation;
pub use config::ListingConfig;
pub use error::{ListingError, Result};
pub use listing::{Group, Lister, ListingOutput};
pub use metadata::{Entry, FileKind};
pub use output::{ConsoleFormatter, JsonFormatter, OutputConfig};
pub use owner::OwnerResolver;
