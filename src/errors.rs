use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::mp4::r#box::FourCC;

/// Enumeration of all errors surfaced by the crate
#[derive(Debug)]
pub enum MediaDurationError {
    Parse(ParseError),
    /// Parse failure attributed to the file it happened in
    File { path: PathBuf, source: ParseError },
    Discovery(DiscoveryError),
    Other(io::Error),
}

/// Failures of the movie header extractor
#[derive(Debug)]
pub enum ParseError {
    /// Open, read or seek failure on the underlying stream
    Io(io::Error),
    /// The stream ended before a `mvhd` box was located
    HeaderNotFound,
    /// Box size field is 0 (box runs to end of file) or 1 (64-bit size follows)
    UnsupportedBoxSize { offset: u64, size: u32 },
    /// Box is smaller than its own header or overruns its parent
    InvalidBoxSize {
        fourcc: FourCC,
        offset: u64,
        size: u64,
    },
    /// Movie header declares a timescale of zero
    InvalidTimescale,
    /// No decoder exists for this container kind
    UnsupportedContainer(String),
}

/// File discovery errors
#[derive(Debug)]
pub struct DiscoveryError {
    pub path: Option<PathBuf>,
    pub message: String,
}

impl DiscoveryError {
    /// Create a new error with the given message.
    pub fn new(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for MediaDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaDurationError::Parse(err) => write!(f, "Parse error: {}", err),
            MediaDurationError::File { path, source } => {
                write!(f, "Parse error in {}: {}", path.display(), source)
            }
            MediaDurationError::Discovery(err) => write!(f, "Discovery error: {}", err),
            MediaDurationError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "I/O error: {}", err),
            ParseError::HeaderNotFound => write!(f, "movie header box (mvhd) not found"),
            ParseError::UnsupportedBoxSize { offset, size } => write!(
                f,
                "unsupported box size {} @ offset {} (0 and 1 are not handled)",
                size, offset
            ),
            ParseError::InvalidBoxSize {
                fourcc,
                offset,
                size,
            } => write!(
                f,
                "invalid size {} for box '{}' @ offset {}",
                size, fourcc, offset
            ),
            ParseError::InvalidTimescale => write!(f, "movie header timescale is zero"),
            ParseError::UnsupportedContainer(kind) => {
                write!(f, "container format '{}' is not supported", kind)
            }
        }
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for MediaDurationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MediaDurationError::Parse(err) => Some(err),
            MediaDurationError::File { source, .. } => Some(source),
            MediaDurationError::Discovery(err) => Some(err),
            MediaDurationError::Other(err) => Some(err),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Error for DiscoveryError {}

// Conversion implementations
impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err)
    }
}

impl From<io::Error> for MediaDurationError {
    fn from(err: io::Error) -> Self {
        MediaDurationError::Other(err)
    }
}

impl From<ParseError> for MediaDurationError {
    fn from(err: ParseError) -> Self {
        MediaDurationError::Parse(err)
    }
}

impl From<DiscoveryError> for MediaDurationError {
    fn from(err: DiscoveryError) -> Self {
        MediaDurationError::Discovery(err)
    }
}

impl From<walkdir::Error> for DiscoveryError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        let message = match err.io_error() {
            Some(io_err) => io_err.to_string(),
            None => err.to_string(),
        };
        DiscoveryError::new(path, message)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<MediaDurationError> for io::Error {
    fn from(err: MediaDurationError) -> Self {
        io::Error::other(err)
    }
}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

// Type alias for Result with MediaDurationError
pub type MediaDurationResult<T> = Result<T, MediaDurationError>;
