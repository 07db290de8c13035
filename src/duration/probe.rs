use super::types::Extraction;
use crate::discovery::{ContainerKind, Video};
use crate::errors::ParseError;
use crate::mp4::extractor::MovieHeaderExtractor;
use crate::streams::seekable_stream::{LocalSeekableStream, SeekableStream};
use log::debug;

/// Duration of a stream holding a container of the given kind.
///
/// MP4 goes through the movie header extractor, MKV yields the
/// `Unsupported` stub without touching the stream, anything else fails
/// with `UnsupportedContainer`.
pub fn extract_duration<S: SeekableStream>(
    stream: &mut S,
    kind: &ContainerKind,
    extractor: &MovieHeaderExtractor,
) -> Result<Extraction, ParseError> {
    match kind {
        ContainerKind::MP4 => Ok(Extraction::Measured(
            extractor.extract_duration_seconds(stream)?,
        )),
        ContainerKind::MKV => Ok(Extraction::Unsupported(ContainerKind::MKV)),
        ContainerKind::Other(name) => Err(ParseError::UnsupportedContainer(name.clone())),
    }
}

/// Duration of a video file on disk.
///
/// The file is opened for MP4 only and closed before returning, on success
/// and on every error path.
pub fn probe_video(
    video: &Video,
    extractor: &MovieHeaderExtractor,
) -> Result<Extraction, ParseError> {
    debug!("Probing {} ({})", video.path.display(), video.kind);
    match video.kind {
        ContainerKind::MP4 => {
            let mut stream = LocalSeekableStream::open(&video.path)?;
            extract_duration(&mut stream, &video.kind, extractor)
        }
        _ => {
            let mut empty = std::io::Cursor::new(Vec::<u8>::new());
            extract_duration(&mut empty, &video.kind, extractor)
        }
    }
}
