//! Owner and group name resolution
//!
//! Whether a user/group database is available is decided once, when the
//! resolver is built. Per-entry lookups never probe for it again.

use std::fmt;

#[cfg(unix)]
use uzers::{Groups, Users, UsersCache};

/// Strategy for turning numeric owner/group ids into display strings.
pub enum OwnerResolver {
    /// Look names up in the system user/group database, caching results.
    #[cfg(unix)]
    Names(UsersCache),
    /// Show the numeric ids as-is.
    Numeric,
}

impl OwnerResolver {
    /// Pick the best strategy the platform supports.
    #[cfg(unix)]
    pub fn detect() -> Self {
        tracing::debug!("owner resolver: user/group database");
        Self::Names(UsersCache::new())
    }

    /// Pick the best strategy the platform supports.
    #[cfg(not(unix))]
    pub fn detect() -> Self {
        tracing::debug!("owner resolver: numeric ids");
        Self::Numeric
    }

    /// Display string for a user id. Unknown ids fall back to the number.
    pub fn user_name(&self, uid: u32) -> String {
        match self {
            #[cfg(unix)]
            Self::Names(cache) => cache
                .get_user_by_uid(uid)
                .map(|u| u.name().to_string_lossy().into_owned())
                .unwrap_or_else(|| uid.to_string()),
            Self::Numeric => uid.to_string(),
        }
    }

    /// Display string for a group id. Unknown ids fall back to the number.
    pub fn group_name(&self, gid: u32) -> String {
        match self {
            #[cfg(unix)]
            Self::Names(cache) => cache
                .get_group_by_gid(gid)
                .map(|g| g.name().to_string_lossy().into_owned())
                .unwrap_or_else(|| gid.to_string()),
            Self::Numeric => gid.to_string(),
        }
    }
}

impl fmt::Debug for OwnerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(unix)]
            Self::Names(_) => f.write_str("OwnerResolver::Names"),
            Self::Numeric => f.write_str("OwnerResolver::Numeric"),
        }
    }
}

impl Default for OwnerResolver {
    fn default() -> Self {
        Self::detect()
    }
}
