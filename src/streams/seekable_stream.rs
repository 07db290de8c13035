use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// A seekable byte source the movie header extractor can read from
pub trait SeekableStream: Read + Seek {
    /// Total length of the stream in bytes. The read position is left unchanged.
    fn byte_len(&mut self) -> io::Result<u64> {
        let pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        if pos != len {
            self.seek(SeekFrom::Start(pos))?;
        }
        Ok(len)
    }
}

impl<T: AsRef<[u8]>> SeekableStream for Cursor<T> {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.get_ref().as_ref().len() as u64)
    }
}

impl<S: SeekableStream + ?Sized> SeekableStream for &mut S {
    fn byte_len(&mut self) -> io::Result<u64> {
        (**self).byte_len()
    }
}

/// Local file wrapper. The file handle is released when the stream is dropped.
#[derive(Debug)]
pub struct LocalSeekableStream {
    file: File,
    path: PathBuf,
    len: u64,
}

impl LocalSeekableStream {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        // avoid a metadata syscall on every byte_len call
        let len = file.metadata()?.len();
        Ok(LocalSeekableStream {
            file,
            path: path.to_path_buf(),
            len,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for LocalSeekableStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for LocalSeekableStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl SeekableStream for LocalSeekableStream {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.len)
    }
}
