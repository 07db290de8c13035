use crate::bits::reader::read_u32_be;
use crate::errors::ParseError;
use crate::mp4::mvhd::MovieHeader;
use crate::mp4::r#box::{BoxWalker, FourCC};
use crate::mp4::scan::scan_for_box;
use crate::streams::seekable_stream::SeekableStream;
use log::debug;
use serde::Serialize;
use std::io::{Seek, SeekFrom};

/// How the movie header box is located in the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ScanStrategy {
    /// Walk `ftyp`/`moov`/... as nested boxes and read `moov/mvhd`, falling
    /// back to `Linear` when the box tree cannot be walked.
    #[default]
    Structured,
    /// Search the raw bytes for the first `mvhd` tag.
    Linear,
}

/// Reads the declared movie duration out of the `mvhd` box.
///
/// Stateless apart from its strategy; the stream is only borrowed for the
/// duration of a call and its position is the only thing that changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieHeaderExtractor {
    strategy: ScanStrategy,
}

impl MovieHeaderExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: ScanStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ScanStrategy {
        self.strategy
    }

    /// Duration in whole seconds (`duration / timescale`, truncated).
    pub fn extract_duration_seconds<S: SeekableStream>(
        &self,
        stream: &mut S,
    ) -> Result<u64, ParseError> {
        let header = self.read_movie_header(stream)?;
        let seconds = header.duration_seconds()?;
        debug!(
            "mvhd v{}: duration {} / timescale {} = {}s",
            header.version, header.duration, header.timescale, seconds
        );
        Ok(seconds)
    }

    /// Locate and decode the movie header box.
    pub fn read_movie_header<S: SeekableStream>(
        &self,
        stream: &mut S,
    ) -> Result<MovieHeader, ParseError> {
        match self.strategy {
            ScanStrategy::Structured => read_movie_header_structured(stream),
            ScanStrategy::Linear => read_movie_header_linear(stream),
        }
    }
}

/// Duration in whole seconds using the default (structured) strategy.
pub fn extract_duration_seconds<S: SeekableStream>(stream: &mut S) -> Result<u64, ParseError> {
    MovieHeaderExtractor::new().extract_duration_seconds(stream)
}

/// Walk to `moov/mvhd`. If the walk cannot complete, for example on a 64-bit
/// `mdat` ahead of `moov` or a stream holding a bare `mvhd`, the stream is
/// rewound and searched linearly instead.
fn read_movie_header_structured<S: SeekableStream>(
    stream: &mut S,
) -> Result<MovieHeader, ParseError> {
    match walk_to_movie_header(stream) {
        Ok(header) => Ok(header),
        Err(e) => {
            debug!("Box walk failed ({}), falling back to a linear scan", e);
            stream.seek(SeekFrom::Start(0))?;
            read_movie_header_linear(stream)
        }
    }
}

fn walk_to_movie_header<S: SeekableStream>(stream: &mut S) -> Result<MovieHeader, ParseError> {
    let mut top = BoxWalker::new(stream)?;
    while let Some(mut moov) = top.find(FourCC::MOOV)? {
        let mut children = moov.children();
        if let Some(mut mvhd) = children.find(FourCC::MVHD)? {
            let mut payload = mvhd.payload()?;
            return MovieHeader::read(&mut payload);
        }
        debug!("'moov' @ offset {} has no 'mvhd'", moov.header().offset);
    }
    Err(ParseError::HeaderNotFound)
}

fn read_movie_header_linear<S: SeekableStream>(
    stream: &mut S,
) -> Result<MovieHeader, ParseError> {
    let offset = scan_for_box(stream, FourCC::MVHD)?;

    let size = read_u32_be(stream)?;
    if size == 0 || size == 1 {
        return Err(ParseError::UnsupportedBoxSize { offset, size });
    }
    // tag was matched by the scan
    stream.seek(SeekFrom::Current(4))?;
    MovieHeader::read(stream)
}
