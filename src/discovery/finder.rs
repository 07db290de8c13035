use super::types::{ContainerKind, Video};
use crate::errors::DiscoveryError;
use log::{debug, info};
use std::path::Path;
use walkdir::WalkDir;

/// List `.mp4` and `.mkv` files under `root`.
///
/// Without `recursive` only the entries of `root` itself are considered.
/// Entries are sorted by file name within each directory. Any traversal
/// failure (missing root, unreadable directory) is returned, not skipped.
pub fn find_videos(root: &Path, recursive: bool) -> Result<Vec<Video>, DiscoveryError> {
    info!(
        "Searching {} for videos{}",
        root.display(),
        if recursive { " (recursive)" } else { "" }
    );

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut videos = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let kind = ContainerKind::from_path(entry.path());
        if !kind.is_supported() {
            continue;
        }
        debug!("Found {} video {}", kind, entry.path().display());
        videos.push(Video::new(entry.into_path(), kind));
    }

    info!("Found {} video files", videos.len());
    Ok(videos)
}
