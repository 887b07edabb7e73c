//! Abstract duplex byte stream supplied by the physical transport.

use std::io;

use bytes::Bytes;

/// Duplex byte stream the message stream reads from and writes to
///
/// Serial ports, USB bridges, and test fixtures implement this. Reads are
/// all-or-nothing: `read_exact` either yields exactly `n` bytes or reports
/// that they are not available yet without consuming anything, so the
/// transport owns the buffering of partial reads.
pub trait ByteStream {
    /// Read exactly `n` bytes, or `Ok(None)` if they would block.
    ///
    /// End of stream is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_exact(&mut self, n: usize) -> io::Result<Option<Bytes>>;

    /// Write every byte of `bytes`.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<S: ByteStream + ?Sized> ByteStream for &mut S {
    fn read_exact(&mut self, n: usize) -> io::Result<Option<Bytes>> {
        (**self).read_exact(n)
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }
}
