//! Per-entry metadata extraction
//!
//! Entries are built from `lstat`-style queries: symbolic links are
//! reported (with their literal target), never followed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::classify::{ColorClass, classify};
use crate::error::{ListingError, Result};
use crate::owner::OwnerResolver;

// File type bits of `st_mode`.
const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;
const S_IFDOOR: u32 = 0o150000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Kind of filesystem object, as seen without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Door,
    /// The path does not resolve to an existing object (e.g. a dangling symlink).
    Missing,
}

impl FileKind {
    /// Decode the file type bits of a POSIX mode.
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFDIR => Self::Directory,
            S_IFLNK => Self::Symlink,
            S_IFCHR => Self::CharDevice,
            S_IFBLK => Self::BlockDevice,
            S_IFIFO => Self::Fifo,
            S_IFSOCK => Self::Socket,
            S_IFDOOR => Self::Door,
            _ => Self::Regular,
        }
    }
}

/// Render a POSIX mode as the 10-character string `ls -l` shows,
/// e.g. `drwxr-xr-x` or `-rwsr-x--T`.
pub fn permission_string(mode: u32) -> String {
    let type_char = match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        S_IFDOOR => 'D',
        S_IFREG => '-',
        _ => '?',
    };

    let bit = |mask: u32, c: char| if mode & mask != 0 { c } else { '-' };
    // execute slot that doubles as setuid/setgid/sticky
    let special = |exec: u32, flag: u32, set: char| match (mode & exec != 0, mode & flag != 0) {
        (true, true) => set,
        (false, true) => set.to_ascii_uppercase(),
        (true, false) => 'x',
        (false, false) => '-',
    };

    [
        type_char,
        bit(0o400, 'r'),
        bit(0o200, 'w'),
        special(0o100, S_ISUID, 's'),
        bit(0o040, 'r'),
        bit(0o020, 'w'),
        special(0o010, S_ISGID, 's'),
        bit(0o004, 'r'),
        bit(0o002, 'w'),
        special(0o001, S_ISVTX, 't'),
    ]
    .iter()
    .collect()
}

/// Raw metadata for one path, before any display decisions.
#[derive(Debug, Clone)]
pub struct RawMetadata {
    pub kind: FileKind,
    pub mode: u32,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub link_count: u64,
    pub uid: u32,
    pub gid: u32,
    /// Literal link content for symlinks
    pub link_target: Option<PathBuf>,
}

/// Query filesystem status for `path` without following symlinks.
pub fn extract(path: &Path) -> Result<RawMetadata> {
    let meta = fs::symlink_metadata(path).map_err(|e| ListingError::access(path, e))?;
    let modified = meta
        .modified()
        .map_err(|e| ListingError::access(path, e))?;

    let (mode, link_count, uid, gid) = platform_fields(&meta);
    let mut kind = FileKind::from_mode(mode);

    let link_target = if kind == FileKind::Symlink {
        Some(fs::read_link(path).map_err(|e| ListingError::access(path, e))?)
    } else {
        None
    };

    // Follows links: a dangling symlink (or an entry removed since it was
    // read from its directory) does not exist.
    if !path.exists() {
        kind = FileKind::Missing;
    }

    tracing::trace!(path = %path.display(), ?kind, "stat");

    Ok(RawMetadata {
        kind,
        mode,
        size: meta.len(),
        modified: DateTime::<Local>::from(modified),
        link_count,
        uid,
        gid,
        link_target,
    })
}

#[cfg(unix)]
fn platform_fields(meta: &fs::Metadata) -> (u32, u64, u32, u32) {
    use std::os::unix::fs::MetadataExt;

    (meta.mode(), meta.nlink(), meta.uid(), meta.gid())
}

/// Without POSIX modes, synthesize one from the file type and read-only flag.
#[cfg(not(unix))]
fn platform_fields(meta: &fs::Metadata) -> (u32, u64, u32, u32) {
    let file_type = meta.file_type();
    let type_bits = if file_type.is_symlink() {
        S_IFLNK
    } else if file_type.is_dir() {
        S_IFDIR
    } else {
        S_IFREG
    };
    let perm_bits = match (file_type.is_dir(), meta.permissions().readonly()) {
        (true, true) => 0o555,
        (true, false) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    };
    (type_bits | perm_bits, 1, 0, 0)
}

/// One filesystem object being listed.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: FileKind,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub permissions: String,
    pub link_count: u64,
    pub owner: String,
    pub group: String,
    /// Name as shown, with ` -> target` for symlinks but without indicator
    #[serde(skip)]
    pub label: String,
    /// Trailing type indicator (`/` for directories)
    #[serde(skip)]
    pub indicator: &'static str,
    /// `label` followed by `indicator`; the key names are sorted by
    pub display_name: String,
    pub color_class: ColorClass,
}

impl Entry {
    /// Stat `path` and build the entry shown as `name`.
    pub fn load(path: &Path, name: &str, owners: &OwnerResolver) -> Result<Self> {
        let raw = extract(path)?;
        Ok(Self::from_raw(path, name, raw, owners))
    }

    pub fn from_raw(path: &Path, name: &str, raw: RawMetadata, owners: &OwnerResolver) -> Self {
        let naming = classify(name, path, raw.kind, raw.link_target.as_deref());
        let display_name = naming.display_name();
        Self {
            path: path.to_path_buf(),
            kind: raw.kind,
            size: raw.size,
            modified: raw.modified,
            permissions: permission_string(raw.mode),
            link_count: raw.link_count,
            owner: owners.user_name(raw.uid),
            group: owners.group_name(raw.gid),
            label: naming.label,
            indicator: naming.indicator,
            display_name,
            color_class: naming.class,
        }
    }

    /// Size in 1024-byte blocks, rounded up.
    pub fn blocks(&self) -> u64 {
        self.size.div_ceil(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_string_common_modes() {
        assert_eq!(permission_string(0o100644), "-rw-r--r--");
        assert_eq!(permission_string(0o040755), "drwxr-xr-x");
        assert_eq!(permission_string(0o120777), "lrwxrwxrwx");
        assert_eq!(permission_string(0o020620), "crw--w----");
        assert_eq!(permission_string(0o060660), "brw-rw----");
        assert_eq!(permission_string(0o010600), "prw-------");
        assert_eq!(permission_string(0o140755), "srwxr-xr-x");
    }

    #[test]
    fn test_permission_string_special_bits() {
        assert_eq!(permission_string(0o104755), "-rwsr-xr-x");
        assert_eq!(permission_string(0o104644), "-rwSr--r--");
        assert_eq!(permission_string(0o102755), "-rwxr-sr-x");
        assert_eq!(permission_string(0o041777), "drwxrwxrwt");
        assert_eq!(permission_string(0o041776), "drwxrwxrwT");
    }

    #[test]
    fn test_permission_string_is_ten_chars() {
        for mode in [0o0, 0o100000, 0o177777, 0o150644] {
            assert_eq!(permission_string(mode).chars().count(), 10);
        }
        assert!(permission_string(0o150644).starts_with('D'));
    }

    #[test]
    fn test_file_kind_from_mode() {
        assert_eq!(FileKind::from_mode(0o100644), FileKind::Regular);
        assert_eq!(FileKind::from_mode(0o040755), FileKind::Directory);
        assert_eq!(FileKind::from_mode(0o120777), FileKind::Symlink);
        assert_eq!(FileKind::from_mode(0o020666), FileKind::CharDevice);
        assert_eq!(FileKind::from_mode(0o060660), FileKind::BlockDevice);
        assert_eq!(FileKind::from_mode(0o010644), FileKind::Fifo);
        assert_eq!(FileKind::from_mode(0o140777), FileKind::Socket);
        assert_eq!(FileKind::from_mode(0o150644), FileKind::Door);
    }

    #[test]
    fn test_extract_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![0u8; 2048]).unwrap();

        let raw = extract(&path).unwrap();
        assert_eq!(raw.kind, FileKind::Regular);
        assert_eq!(raw.size, 2048);
        assert!(raw.link_target.is_none());
    }

    #[test]
    fn test_extract_nonexistent_is_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, ListingError::Access { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_symlink_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("target"), "hello").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink("target", &link).unwrap();

        let raw = extract(&link).unwrap();
        assert_eq!(raw.kind, FileKind::Symlink);
        assert_eq!(raw.link_target.as_deref(), Some(Path::new("target")));
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_dangling_symlink_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("broken");
        std::os::unix::fs::symlink("nowhere", &link).unwrap();

        let raw = extract(&link).unwrap();
        assert_eq!(raw.kind, FileKind::Missing);
        assert_eq!(permission_string(raw.mode).chars().next(), Some('l'));
    }

    #[test]
    fn test_entry_blocks_round_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        fs::write(&path, vec![0u8; 1025]).unwrap();

        let entry = Entry::load(&path, "f", &OwnerResolver::Numeric).unwrap();
        assert_eq!(entry.blocks(), 2);
        assert_eq!(entry.display_name, "f");
    }
}
