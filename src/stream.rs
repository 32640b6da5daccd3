//! Byte-stream interfaces
//!
//! The server core consumes a byte-read source and a byte-write sink and
//! never touches a socket directly. Any transport that can move bytes can
//! drive a connection: `TcpStream` for real servers, slices and vectors for
//! tests.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

use bytes::{Buf, Bytes};

/// A blocking byte-read source.
///
/// `read` may return fewer bytes than requested; a return of zero signals
/// end-of-stream.
pub trait InputStream {
    /// Read up to `buf.len()` bytes, returning how many were read.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Read exactly `buf.len()` bytes.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] if the source ends early.
    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let mut pos = 0;
        while pos < buf.len() {
            let n = self.read(&mut buf[pos..])?;
            if n == 0 {
                return Err(premature_eof());
            }
            pos += n;
        }
        Ok(())
    }
}

/// A blocking byte-write sink.
pub trait OutputStream {
    /// Write up to `buf.len()` bytes, returning how many were written.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Signal that no further bytes will be written.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Write all of `buf`, looping over partial writes.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let mut pos = 0;
        while pos < buf.len() {
            let n = self.write(&buf[pos..])?;
            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "sink refused to accept bytes",
                ));
            }
            pos += n;
        }
        Ok(())
    }
}

pub(crate) fn premature_eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "premature end of stream")
}

impl<T: InputStream + ?Sized> InputStream for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }
}

impl<T: OutputStream + ?Sized> OutputStream for &mut T {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl InputStream for TcpStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }
}

impl OutputStream for TcpStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(self, buf)
    }

    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Write)
    }
}

/// In-memory source reading from a borrowed slice.
impl InputStream for &[u8] {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.len().min(buf.len());
        buf[..n].copy_from_slice(&self[..n]);
        *self = &self[n..];
        Ok(n)
    }
}

/// In-memory sink appending to a vector.
impl OutputStream for Vec<u8> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Owned in-memory source, used for response bodies of known content.
#[derive(Debug, Clone)]
pub struct BytesStream {
    data: Bytes,
}

impl BytesStream {
    pub fn new(data: impl Into<Bytes>) -> Self {
        BytesStream { data: data.into() }
    }
}

impl InputStream for BytesStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data.advance(n);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source_drains() {
        let mut src: &[u8] = b"hello";
        let mut buf = [0u8; 3];
        assert_eq!(InputStream::read(&mut src, &mut buf).unwrap(), 3);
        assert_eq!(&buf, b"hel");
        assert_eq!(InputStream::read(&mut src, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"lo");
        assert_eq!(InputStream::read(&mut src, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_read_exact_premature_eof() {
        let mut src: &[u8] = b"abc";
        let mut buf = [0u8; 5];
        let err = InputStream::read_exact(&mut src, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_write_all_loops_over_partial_writes() {
        // A sink that accepts a single byte per call.
        struct OneByte(Vec<u8>);
        impl OutputStream for OneByte {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.push(buf[0]);
                Ok(1)
            }
        }

        let mut sink = OneByte(Vec::new());
        OutputStream::write_all(&mut sink, b"chunk").unwrap();
        assert_eq!(sink.0, b"chunk");
    }

    #[test]
    fn test_bytes_stream_advances() {
        let mut body = BytesStream::new("hello world");
        let mut buf = [0u8; 6];
        assert_eq!(InputStream::read(&mut body, &mut buf).unwrap(), 6);
        assert_eq!(&buf, b"hello ");
        assert_eq!(InputStream::read(&mut body, &mut buf).unwrap(), 5);
        assert_eq!(&buf[..5], b"world");
        assert_eq!(InputStream::read(&mut body, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink = Vec::new();
        OutputStream::write_all(&mut sink, b"one").unwrap();
        OutputStream::write_all(&mut sink, b"two").unwrap();
        assert_eq!(sink, b"onetwo");
    }
}
