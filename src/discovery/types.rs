use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name carried by `ContainerKind::Other` for files without an extension
pub const UNKNOWN_EXTENSION: &str = "unknown";

/// Outer file format, deciding which decoder applies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ContainerKind {
    MP4,
    MKV,
    Other(String),
}

impl ContainerKind {
    /// Classify by file name suffix. Matching is case-sensitive, so `CLIP.MP4`
    /// is `Other`, the same as any name without a recognised suffix.
    pub fn from_path(path: &Path) -> ContainerKind {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if name.ends_with(".mp4") {
            ContainerKind::MP4
        } else if name.ends_with(".mkv") {
            ContainerKind::MKV
        } else {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| UNKNOWN_EXTENSION.to_string());
            ContainerKind::Other(ext)
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ContainerKind::MP4 => "MP4",
            ContainerKind::MKV => "MKV",
            ContainerKind::Other(s) => s,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, ContainerKind::MP4 | ContainerKind::MKV)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A candidate video file found on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub path: PathBuf,
    pub kind: ContainerKind,
}

impl Video {
    pub fn new(path: impl Into<PathBuf>, kind: ContainerKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Video with the container kind derived from the file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = ContainerKind::from_path(&path);
        Self { path, kind }
    }
}
