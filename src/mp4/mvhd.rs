//! Movie header box (`mvhd`).
//!
//! Location: `moov/mvhd`
//!
//! ```ignore
//! | version | flags (3) | creation | modification | timescale | duration | ...
//!   v0:                    4 bytes    4 bytes        4 bytes     4 bytes
//!   v1:                    8 bytes    8 bytes        4 bytes     8 bytes
//! ```

use crate::bits::reader::{read_u24, read_u32_be, read_u64_be, read_u8, skip_bytes};
use crate::errors::ParseError;
use log::warn;
use serde::Serialize;
use std::io::Read;

/// The fields of `mvhd` needed to derive the movie duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovieHeader {
    pub version: u8,
    /// Number of time units that pass in one second.
    pub timescale: u32,
    /// Duration of the longest track, in timescale units.
    pub duration: u64,
}

impl MovieHeader {
    /// Decode from a reader positioned at the first payload byte (the version).
    ///
    /// Versions other than 1 are decoded with the version 0 layout.
    pub fn read<R: Read>(r: &mut R) -> Result<Self, ParseError> {
        let version = read_u8(r)?;
        let _flags = read_u24(r)?;

        let (timescale, duration) = if version == 1 {
            skip_bytes(r, 16)?;
            let timescale = read_u32_be(r)?;
            (timescale, read_u64_be(r)?)
        } else {
            if version != 0 {
                warn!("Unknown mvhd version {}, reading as version 0", version);
            }
            skip_bytes(r, 8)?;
            let timescale = read_u32_be(r)?;
            (timescale, read_u32_be(r)? as u64)
        };

        Ok(MovieHeader {
            version,
            timescale,
            duration,
        })
    }

    /// Whole seconds, truncated toward zero.
    pub fn duration_seconds(&self) -> Result<u64, ParseError> {
        if self.timescale == 0 {
            return Err(ParseError::InvalidTimescale);
        }
        Ok(self.duration / self.timescale as u64)
    }
}
