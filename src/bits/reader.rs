/*
# Bits Reader Module

 Byte-aligned readers for the big-endian integers found in MP4 box headers and
 full-box payloads. Everything works on any `Read`, so the same helpers serve a
 whole file, a `Cursor` in tests, or a payload reader bounded with `Read::take`.

 Key components:
 - Stream readers: `read_u8()`, `read_u24()`, `read_u32_be()`, `read_u64_be()`
 - `skip_bytes()` to discard fields without requiring `Seek`
*/

use std::io::{self, Read};

/// Read one byte from a `Read` implementation.
pub fn read_u8<R: Read>(r: &mut R) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a 24-bit big endian value from `r`.
pub fn read_u24<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 3];
    r.read_exact(&mut buf)?;
    Ok(((buf[0] as u32) << 16) | ((buf[1] as u32) << 8) | buf[2] as u32)
}

/// Read a 32-bit big endian value from `r`.
pub fn read_u32_be<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

/// Read a 64-bit big endian value from `r`.
pub fn read_u64_be<R: Read>(r: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}

/// Discard exactly `n` bytes. Fails with `UnexpectedEof` if the reader runs dry.
pub fn skip_bytes<R: Read>(r: &mut R, n: u64) -> io::Result<()> {
    let skipped = io::copy(&mut r.take(n), &mut io::sink())?;
    if skipped != n {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected to skip {} bytes, only {} available", n, skipped),
        ));
    }
    Ok(())
}
