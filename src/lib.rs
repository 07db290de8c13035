pub mod bits;
pub use bits::reader::{read_u32_be, read_u64_be, read_u8};

pub mod mp4;
pub use mp4::{extract_duration_seconds, MovieHeader, MovieHeaderExtractor, ScanStrategy};

pub mod streams;
pub use streams::{seekable_stream, LocalSeekableStream, SeekableStream};

pub mod discovery;
pub use discovery::{find_videos, ContainerKind, Video};

pub mod duration;
pub use duration::{
    aggregate, format_duration, probe_video, DurationFormat, DurationReport, Extraction,
    FailurePolicy,
};

pub mod cli;

pub mod errors;
pub use errors::{DiscoveryError, MediaDurationError, MediaDurationResult, ParseError};

use std::path::Path;

/// Options for a directory-wide duration run
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub recursive: bool,
    pub policy: FailurePolicy,
    pub strategy: ScanStrategy,
}

/// Find the videos under `root` and sum their durations.
pub fn measure_directory(root: &Path, options: ScanOptions) -> MediaDurationResult<DurationReport> {
    let videos = find_videos(root, options.recursive)?;
    let extractor = MovieHeaderExtractor::with_strategy(options.strategy);
    aggregate(&videos, &extractor, options.policy)
}

/// Duration of a single local file, container kind taken from its name.
pub fn measure_file<P: AsRef<Path>>(path: P) -> MediaDurationResult<Extraction> {
    let video = Video::from_path(path.as_ref());
    probe_video(&video, &MovieHeaderExtractor::new()).map_err(|source| MediaDurationError::File {
        path: video.path.clone(),
        source,
    })
}
