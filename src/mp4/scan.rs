use crate::errors::ParseError;
use crate::mp4::r#box::{FourCC, BOX_HEADER_SIZE};
use log::debug;
use memchr::memmem;
use std::io::{self, Read, Seek, SeekFrom};

/// Bytes read per iteration of the linear scan (8KB)
const SCAN_CHUNK_SIZE: usize = 8192;

/// Bytes carried over between chunks so a tag split across two reads still matches
const TAG_OVERLAP: usize = 3;

/// Scan forward from the current position for the raw bytes of `fourcc`.
///
/// This is a byte-pattern search, not a box walk: the first occurrence of the
/// tag anywhere in the stream counts, including inside unrelated payloads. On
/// a match the stream is moved back to the 32-bit size field preceding the tag
/// and that absolute offset is returned. Only relative seeks are issued.
///
/// A first occurrence starting before offset 4 has no room for a size field
/// and fails with an I/O error, as the seek back to it would. Reaching the end
/// of the stream yields `HeaderNotFound`.
pub fn scan_for_box<S: Read + Seek>(stream: &mut S, fourcc: FourCC) -> Result<u64, ParseError> {
    let finder = memmem::Finder::new(fourcc.as_bytes());
    let size_field = BOX_HEADER_SIZE - 4;

    let mut window_start = stream.stream_position()?;
    let mut window: Vec<u8> = Vec::with_capacity(SCAN_CHUNK_SIZE + TAG_OVERLAP);
    let mut chunk = vec![0u8; SCAN_CHUNK_SIZE];

    loop {
        let n = read_some(stream, &mut chunk)?;
        if n == 0 {
            debug!("Reached end of stream without finding '{}'", fourcc);
            return Err(ParseError::HeaderNotFound);
        }
        window.extend_from_slice(&chunk[..n]);

        if let Some(idx) = finder.find(&window) {
            let tag_offset = window_start + idx as u64;
            if tag_offset < size_field {
                // stepping back to the size field would seek before the start
                return Err(ParseError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{}' @ offset {} has no room for a size field", fourcc, tag_offset),
                )));
            }
            let box_offset = tag_offset - size_field;
            // the stream sits at the end of the window
            let position = window_start + window.len() as u64;
            stream.seek(SeekFrom::Current(-((position - box_offset) as i64)))?;
            debug!("Found '{}' @ offset {}", fourcc, box_offset);
            return Ok(box_offset);
        }

        let keep = window.len().min(TAG_OVERLAP);
        let consumed = window.len() - keep;
        window.drain(..consumed);
        window_start += consumed as u64;
    }
}

fn read_some<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match r.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}
