//! Message framing over a [`ByteStream`].

use std::io::ErrorKind;

use bytes::{Bytes, BytesMut};
use tracing::{debug, instrument, trace};

use super::ByteStream;
use crate::protocol::{Codec, Error, HEADER_SIZE, Header, Message, Result};

/// Sends and receives whole APT messages over a byte stream
///
/// Reading happens in two steps, header then payload. If the payload is not
/// available yet the header is held until the next call, so a would-block
/// never loses or duplicates bytes.
#[derive(Debug)]
pub struct MessageStream<'r, S> {
    inner: S,
    codec: Codec<'r>,
    pending_header: Option<Bytes>,
}

impl<S: ByteStream> MessageStream<'static, S> {
    /// Frame messages with the built-in catalog
    pub fn new(inner: S) -> Self {
        Self::with_codec(inner, Codec::default())
    }
}

impl<'r, S: ByteStream> MessageStream<'r, S> {
    /// Frame messages with a specific codec
    pub fn with_codec(inner: S, codec: Codec<'r>) -> Self {
        Self {
            inner,
            codec,
            pending_header: None,
        }
    }

    /// Receive the next message, or `Ok(None)` if it has not fully arrived
    ///
    /// An unknown or mismatched message comes back as an error after being
    /// consumed; calling `recv` again continues with the message after it.
    ///
    /// # Errors
    ///
    /// Decode errors from the codec, [`Error::ConnectionClosed`] at end of
    /// stream, and [`Error::Io`] for transport failures.
    #[instrument(level = "trace", skip(self))]
    pub fn recv(&mut self) -> Result<Option<Message>> {
        let header_bytes = match self.pending_header.take() {
            Some(bytes) => bytes,
            None => match self.read(HEADER_SIZE)? {
                Some(bytes) => bytes,
                None => return Ok(None),
            },
        };
        let header = Header::from_bytes(&header_bytes)?;

        let mut frame = BytesMut::with_capacity(header.frame_len());
        frame.extend_from_slice(&header_bytes);
        if header.payload_len() > 0 {
            // The header stays pending on any failed payload read; the bytes
            // already buffered below it still belong to this message.
            match self.read(header.payload_len()) {
                Ok(Some(payload)) => frame.extend_from_slice(&payload),
                Ok(None) => {
                    trace!(id = header.id(), "holding header until payload arrives");
                    self.pending_header = Some(header_bytes);
                    return Ok(None);
                }
                Err(err) => {
                    debug!(id = header.id(), error = %err, "payload read failed, header held");
                    self.pending_header = Some(header_bytes);
                    return Err(err);
                }
            }
        }

        self.codec.decode_from(&mut frame).map(Some)
    }

    /// Encode and write one message
    ///
    /// # Errors
    ///
    /// [`Error::SchemaViolation`] before anything is written, or
    /// [`Error::Io`] if the write fails.
    #[instrument(level = "trace", skip(self, message), fields(id = message.id()))]
    pub fn send(&mut self, message: &Message) -> Result<()> {
        let bytes = self.codec.encode(message)?;
        self.inner.write_all(&bytes)?;
        Ok(())
    }

    /// Check whether a header is waiting for its payload
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_header.is_some()
    }

    /// Get codec
    #[must_use]
    pub const fn codec(&self) -> &Codec<'r> {
        &self.codec
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consume the message stream and return the inner stream.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn read(&mut self, n: usize) -> Result<Option<Bytes>> {
        self.inner.read_exact(n).map_err(|err| {
            if err.kind() == ErrorKind::UnexpectedEof {
                Error::ConnectionClosed
            } else {
                Error::Io(err)
            }
        })
    }
}
