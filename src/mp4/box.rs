use crate::bits::reader::read_u32_be;
use crate::errors::ParseError;
use crate::streams::seekable_stream::SeekableStream;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::io::{self, Read, Seek, SeekFrom, Take};

/// Size of a compact box header: 32-bit size followed by the FourCC.
pub const BOX_HEADER_SIZE: u64 = 8;

/// Four character box type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const FTYP: FourCC = FourCC(*b"ftyp");
    pub const MOOV: FourCC = FourCC(*b"moov");
    pub const MVHD: FourCC = FourCC(*b"mvhd");
    pub const MDAT: FourCC = FourCC(*b"mdat");
    pub const FREE: FourCC = FourCC(*b"free");
    pub const TRAK: FourCC = FourCC(*b"trak");
    pub const UDTA: FourCC = FourCC(*b"udta");

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Whether boxes of this type hold a sequence of child boxes.
    ///
    /// Only containers of the main movie tree are listed:
    /// `moov`, `trak`, `tref`, `edts`, `mdia`, `minf`, `dinf`, `stbl`, `udta`.
    pub fn is_container(&self) -> bool {
        matches!(
            &self.0,
            b"moov" | b"trak" | b"tref" | b"edts" | b"mdia" | b"minf" | b"dinf" | b"stbl" | b"udta"
        )
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // bytes map to chars directly so ISO 8859-1 tags such as `©nam` stay printable
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl From<&[u8; 4]> for FourCC {
    fn from(bytes: &[u8; 4]) -> Self {
        FourCC(*bytes)
    }
}

/// Box header information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxHeader {
    pub fourcc: FourCC,
    /// Total box size including the 8 byte header.
    pub size: u64,
    /// Absolute offset of the size field.
    pub offset: u64,
}

impl BoxHeader {
    pub fn payload_offset(&self) -> u64 {
        self.offset + BOX_HEADER_SIZE
    }

    pub fn payload_size(&self) -> u64 {
        self.size - BOX_HEADER_SIZE
    }

    /// Absolute offset of the first byte after this box.
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }
}

/// Read a box header at the current position of `r`.
///
/// `offset` is the absolute position of the size field and is only used for
/// reporting. Size values 0 and 1 are rejected.
pub fn read_box_header<R: Read>(r: &mut R, offset: u64) -> Result<BoxHeader, ParseError> {
    let size = read_u32_be(r)?;
    let mut name = [0u8; 4];
    r.read_exact(&mut name)?;
    let fourcc = FourCC(name);

    if size == 0 || size == 1 {
        return Err(ParseError::UnsupportedBoxSize { offset, size });
    }
    if (size as u64) < BOX_HEADER_SIZE {
        return Err(ParseError::InvalidBoxSize {
            fourcc,
            offset,
            size: size as u64,
        });
    }

    Ok(BoxHeader {
        fourcc,
        size: size as u64,
        offset,
    })
}

/// Write a box header to a vector
pub fn write_box_header(output: &mut Vec<u8>, name: &str, size: u32) {
    output.extend_from_slice(&size.to_be_bytes());
    output.extend_from_slice(name.as_bytes());
}

/// Build a complete box from a name and payload.
pub fn make_box(name: &str, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.len() + BOX_HEADER_SIZE as usize);
    write_box_header(&mut buf, name, (payload.len() as u64 + BOX_HEADER_SIZE) as u32);
    buf.extend_from_slice(payload);
    buf
}

/// Walks the boxes of one nesting level, lazily and in file order.
///
/// Each call to [`BoxWalker::next_box`] seeks to the next sibling, so a
/// previously returned [`Mp4Box`] may have been read partially or not at all.
/// The walk is finite: it ends at the level boundary or at the first error.
pub struct BoxWalker<'s, S> {
    stream: &'s mut S,
    next: u64,
    end: u64,
    done: bool,
}

impl<'s, S: Read + Seek> BoxWalker<'s, S> {
    /// Walker over the top level of a whole stream.
    pub fn new(stream: &'s mut S) -> io::Result<Self>
    where
        S: SeekableStream,
    {
        let end = stream.byte_len()?;
        Ok(Self::bounded(stream, 0, end))
    }

    /// Walker over the boxes in `start..end`.
    pub fn bounded(stream: &'s mut S, start: u64, end: u64) -> Self {
        Self {
            stream,
            next: start,
            end,
            done: false,
        }
    }

    /// Next box on this level, `None` once the level is exhausted.
    pub fn next_box(&mut self) -> Option<Result<Mp4Box<'_, S>, ParseError>> {
        if self.done {
            return None;
        }
        let remaining = self.end.saturating_sub(self.next);
        if remaining < BOX_HEADER_SIZE {
            if remaining > 0 {
                debug!(
                    "Ignoring {} trailing bytes @ offset {}",
                    remaining, self.next
                );
            }
            self.done = true;
            return None;
        }

        match self.read_header() {
            Ok(header) => {
                self.next = header.end();
                Some(Ok(Mp4Box {
                    header,
                    stream: &mut *self.stream,
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    /// Walk forward until a box of type `fourcc` is found on this level.
    pub fn find(&mut self, fourcc: FourCC) -> Result<Option<Mp4Box<'_, S>>, ParseError> {
        loop {
            let header = match self.next_box() {
                None => return Ok(None),
                Some(Err(e)) => return Err(e),
                Some(Ok(b)) => b.header,
            };
            if header.fourcc == fourcc {
                return Ok(Some(Mp4Box {
                    header,
                    stream: &mut *self.stream,
                }));
            }
        }
    }

    fn read_header(&mut self) -> Result<BoxHeader, ParseError> {
        self.stream.seek(SeekFrom::Start(self.next))?;
        let header = read_box_header(&mut *self.stream, self.next)?;
        if header.end() > self.end {
            return Err(ParseError::InvalidBoxSize {
                fourcc: header.fourcc,
                offset: header.offset,
                size: header.size,
            });
        }
        debug!(
            "Box '{}' [size: {}, pos: {}-{}]",
            header.fourcc,
            header.size,
            header.offset,
            header.end()
        );
        Ok(header)
    }
}

/// A box located by [`BoxWalker`], borrowing the stream it was read from.
pub struct Mp4Box<'s, S> {
    header: BoxHeader,
    stream: &'s mut S,
}

impl<'s, S: Read + Seek> Mp4Box<'s, S> {
    pub fn header(&self) -> &BoxHeader {
        &self.header
    }

    pub fn fourcc(&self) -> FourCC {
        self.header.fourcc
    }

    /// Reader over the payload only. Reads stop at the end of the box.
    pub fn payload(&mut self) -> io::Result<Take<&mut S>> {
        self.stream
            .seek(SeekFrom::Start(self.header.payload_offset()))?;
        Ok(Read::take(&mut *self.stream, self.header.payload_size()))
    }

    /// Walker over the child boxes of a container box.
    pub fn children(&mut self) -> BoxWalker<'_, S> {
        BoxWalker::bounded(
            &mut *self.stream,
            self.header.payload_offset(),
            self.header.end(),
        )
    }
}
