//! Entry classification: display names, type indicators and colour classes
//!
//! Classification is a pure function of the entry's name, path, kind and
//! link target. Turning a [`ColorClass`] into escape sequences is left to
//! the output layer.

use std::path::Path;

use serde::Serialize;

use crate::metadata::FileKind;

/// Logical colour category of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorClass {
    Default,
    Directory,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Door,
    Missing,
    Link,
    Archive,
    Image,
    Audio,
    Video,
}

impl ColorClass {
    /// SGR parameters used when the class is rendered on a terminal.
    pub fn ansi_code(self) -> &'static str {
        match self {
            Self::Default => "0",
            Self::Directory => "01;34",
            Self::Link => "01;36",
            Self::Fifo => "40;33",
            Self::Socket | Self::Door => "01;35",
            Self::BlockDevice | Self::CharDevice => "40;33;01",
            Self::Missing => "01;05;37;41",
            Self::Archive => "01;31",
            Self::Image => "01;35",
            Self::Audio => "00;36",
            Self::Video => "01;35",
        }
    }
}

/// File extensions (without the dot) that get their own colour class.
/// Matching is case-sensitive.
const EXTENSION_CLASSES: &[(&str, ColorClass)] = &[
    // archives
    ("tar", ColorClass::Archive),
    ("tgz", ColorClass::Archive),
    ("arc", ColorClass::Archive),
    ("arj", ColorClass::Archive),
    ("taz", ColorClass::Archive),
    ("lha", ColorClass::Archive),
    ("lz4", ColorClass::Archive),
    ("lzh", ColorClass::Archive),
    ("lzma", ColorClass::Archive),
    ("tlz", ColorClass::Archive),
    ("txz", ColorClass::Archive),
    ("tzo", ColorClass::Archive),
    ("t7z", ColorClass::Archive),
    ("zip", ColorClass::Archive),
    ("z", ColorClass::Archive),
    ("dz", ColorClass::Archive),
    ("gz", ColorClass::Archive),
    ("lrz", ColorClass::Archive),
    ("lz", ColorClass::Archive),
    ("lzo", ColorClass::Archive),
    ("xz", ColorClass::Archive),
    ("zst", ColorClass::Archive),
    ("tzst", ColorClass::Archive),
    ("bz2", ColorClass::Archive),
    ("bz", ColorClass::Archive),
    ("tbz", ColorClass::Archive),
    ("tbz2", ColorClass::Archive),
    ("tz", ColorClass::Archive),
    ("deb", ColorClass::Archive),
    ("rpm", ColorClass::Archive),
    ("jar", ColorClass::Archive),
    ("war", ColorClass::Archive),
    ("ear", ColorClass::Archive),
    ("sar", ColorClass::Archive),
    ("rar", ColorClass::Archive),
    ("alz", ColorClass::Archive),
    ("ace", ColorClass::Archive),
    ("zoo", ColorClass::Archive),
    ("cpio", ColorClass::Archive),
    ("7z", ColorClass::Archive),
    ("rz", ColorClass::Archive),
    ("cab", ColorClass::Archive),
    ("wim", ColorClass::Archive),
    ("swm", ColorClass::Archive),
    ("dwm", ColorClass::Archive),
    ("esd", ColorClass::Archive),
    // images
    ("jpg", ColorClass::Image),
    ("jpeg", ColorClass::Image),
    ("mjpg", ColorClass::Image),
    ("mjpeg", ColorClass::Image),
    ("gif", ColorClass::Image),
    ("bmp", ColorClass::Image),
    ("pbm", ColorClass::Image),
    ("pgm", ColorClass::Image),
    ("ppm", ColorClass::Image),
    ("tga", ColorClass::Image),
    ("xbm", ColorClass::Image),
    ("xpm", ColorClass::Image),
    ("tif", ColorClass::Image),
    ("tiff", ColorClass::Image),
    ("png", ColorClass::Image),
    ("svg", ColorClass::Image),
    ("svgz", ColorClass::Image),
    ("mng", ColorClass::Image),
    ("pcx", ColorClass::Image),
    ("webp", ColorClass::Image),
    ("xcf", ColorClass::Image),
    ("xwd", ColorClass::Image),
    ("emf", ColorClass::Image),
    // video
    ("mov", ColorClass::Video),
    ("mpg", ColorClass::Video),
    ("mpeg", ColorClass::Video),
    ("m2v", ColorClass::Video),
    ("mkv", ColorClass::Video),
    ("webm", ColorClass::Video),
    ("ogm", ColorClass::Video),
    ("mp4", ColorClass::Video),
    ("m4v", ColorClass::Video),
    ("mp4v", ColorClass::Video),
    ("vob", ColorClass::Video),
    ("qt", ColorClass::Video),
    ("nuv", ColorClass::Video),
    ("wmv", ColorClass::Video),
    ("asf", ColorClass::Video),
    ("rm", ColorClass::Video),
    ("rmvb", ColorClass::Video),
    ("flc", ColorClass::Video),
    ("avi", ColorClass::Video),
    ("fli", ColorClass::Video),
    ("flv", ColorClass::Video),
    ("gl", ColorClass::Video),
    ("dl", ColorClass::Video),
    ("ogv", ColorClass::Video),
    // audio
    ("aac", ColorClass::Audio),
    ("au", ColorClass::Audio),
    ("flac", ColorClass::Audio),
    ("m4a", ColorClass::Audio),
    ("mid", ColorClass::Audio),
    ("midi", ColorClass::Audio),
    ("mka", ColorClass::Audio),
    ("mp3", ColorClass::Audio),
    ("mpc", ColorClass::Audio),
    ("ogg", ColorClass::Audio),
    ("ra", ColorClass::Audio),
    ("wav", ColorClass::Audio),
    ("oga", ColorClass::Audio),
    ("opus", ColorClass::Audio),
    ("spx", ColorClass::Audio),
    ("xspf", ColorClass::Audio),
];

/// Look up the colour class for a file extension.
pub fn class_for_extension(ext: &str) -> Option<ColorClass> {
    EXTENSION_CLASSES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, class)| *class)
}

/// Display fields derived for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// The name as shown, including ` -> target` for symlinks
    pub label: String,
    /// Type indicator appended after the coloured label (`/` for directories)
    pub indicator: &'static str,
    pub class: ColorClass,
}

impl Naming {
    /// Label and indicator together, uncoloured. This is the sort key.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.label, self.indicator)
    }
}

/// Classify an entry. The first matching rule wins:
/// directory, special files, missing, regular file by extension, symlink.
pub fn classify(name: &str, path: &Path, kind: FileKind, link_target: Option<&Path>) -> Naming {
    let plain = |class| Naming {
        label: name.to_string(),
        indicator: "",
        class,
    };

    match kind {
        FileKind::Directory => Naming {
            label: name.to_string(),
            indicator: "/",
            class: ColorClass::Directory,
        },
        FileKind::CharDevice => plain(ColorClass::CharDevice),
        FileKind::BlockDevice => plain(ColorClass::BlockDevice),
        FileKind::Fifo => plain(ColorClass::Fifo),
        FileKind::Socket => plain(ColorClass::Socket),
        FileKind::Door => plain(ColorClass::Door),
        FileKind::Missing => plain(ColorClass::Missing),
        FileKind::Regular => {
            let class = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(class_for_extension)
                .unwrap_or(ColorClass::Default);
            plain(class)
        }
        FileKind::Symlink => {
            let label = match link_target {
                Some(target) => format!("{} -> {}", name, target.display()),
                None => name.to_string(),
            };
            Naming {
                label,
                indicator: "",
                class: ColorClass::Link,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_gets_slash_indicator() {
        let naming = classify("src", Path::new("src"), FileKind::Directory, None);
        assert_eq!(naming.label, "src");
        assert_eq!(naming.indicator, "/");
        assert_eq!(naming.class, ColorClass::Directory);
        assert_eq!(naming.display_name(), "src/");
    }

    #[test]
    fn test_symlink_shows_literal_target() {
        let naming = classify(
            "link",
            Path::new("dir/link"),
            FileKind::Symlink,
            Some(Path::new("target")),
        );
        assert_eq!(naming.display_name(), "link -> target");
        assert_eq!(naming.class, ColorClass::Link);
    }

    #[test]
    fn test_missing_keeps_plain_name() {
        let naming = classify("dangling", Path::new("dangling"), FileKind::Missing, None);
        assert_eq!(naming.display_name(), "dangling");
        assert_eq!(naming.class, ColorClass::Missing);
    }

    #[test]
    fn test_regular_file_extension_classes() {
        let class = |name: &str| classify(name, Path::new(name), FileKind::Regular, None).class;
        assert_eq!(class("backup.tar"), ColorClass::Archive);
        assert_eq!(class("photo.png"), ColorClass::Image);
        assert_eq!(class("song.mp3"), ColorClass::Audio);
        assert_eq!(class("clip.mkv"), ColorClass::Video);
        assert_eq!(class("notes.txt"), ColorClass::Default);
        assert_eq!(class("Makefile"), ColorClass::Default);
        // case-sensitive
        assert_eq!(class("PHOTO.PNG"), ColorClass::Default);
    }

    #[test]
    fn test_special_files() {
        let class = |kind| classify("x", Path::new("x"), kind, None).class;
        assert_eq!(class(FileKind::CharDevice), ColorClass::CharDevice);
        assert_eq!(class(FileKind::BlockDevice), ColorClass::BlockDevice);
        assert_eq!(class(FileKind::Fifo), ColorClass::Fifo);
        assert_eq!(class(FileKind::Socket), ColorClass::Socket);
        assert_eq!(class(FileKind::Door), ColorClass::Door);
    }

    #[test]
    fn test_ansi_codes_are_distinct_for_core_classes() {
        assert_eq!(ColorClass::Directory.ansi_code(), "01;34");
        assert_eq!(ColorClass::Link.ansi_code(), "01;36");
        assert_ne!(
            ColorClass::Missing.ansi_code(),
            ColorClass::Default.ansi_code()
        );
    }
}
