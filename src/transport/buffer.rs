//! `ByteStream` over any `std::io` reader/writer.

use std::io::{self, ErrorKind, Read, Write};

use bytes::{Bytes, BytesMut};
use tracing::trace;

use super::ByteStream;

/// Buffering options for [`Buffered`].
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Initial capacity of the receive buffer in bytes.
    pub initial_capacity: usize,
    /// Maximum bytes requested from the reader per call.
    pub read_chunk_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            read_chunk_size: 256,
        }
    }
}

/// Adapts a `Read + Write` handle into a [`ByteStream`].
///
/// Bytes read ahead of what was asked for stay buffered for the next call.
/// `WouldBlock` and `TimedOut` from the reader (non-blocking sockets, serial
/// ports with a read timeout) surface as "not available yet".
#[derive(Debug)]
pub struct Buffered<T> {
    inner: T,
    buf: BytesMut,
    scratch: Vec<u8>,
}

impl<T: Read + Write> Buffered<T> {
    /// Create a buffered stream with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, &StreamConfig::default())
    }

    /// Create a buffered stream with explicit configuration.
    pub fn with_config(inner: T, config: &StreamConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(config.initial_capacity),
            scratch: vec![0u8; config.read_chunk_size.max(1)],
        }
    }

    /// Bytes read from the handle but not yet handed out.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Borrow the underlying handle.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying handle.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the adapter and return the inner handle.
    ///
    /// Any buffered bytes are dropped.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write> ByteStream for Buffered<T> {
    fn read_exact(&mut self, n: usize) -> io::Result<Option<Bytes>> {
        while self.buf.len() < n {
            let read = match self.inner.read(&mut self.scratch) {
                Ok(0) => return Err(io::Error::from(ErrorKind::UnexpectedEof)),
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    trace!(buffered = self.buf.len(), wanted = n, "read would block");
                    return Ok(None);
                }
                Err(err) => return Err(err),
            };
            self.buf.extend_from_slice(&self.scratch[..read]);
        }

        Ok(Some(self.buf.split_to(n).freeze()))
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)?;
        self.inner.flush()
    }
}
