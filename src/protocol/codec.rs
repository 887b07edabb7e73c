//! APT message codec (encode/decode)
//!
//! The facade composes the header framer, the registry, and the payload
//! codec. Every call is a pure function of its input and the (read-only)
//! registry, so one `Codec` can be shared across threads freely.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use super::metrics::Metrics;
use super::payload::{decode_params, encode_params};
use super::{
    Error, HEADER_SIZE, Header, Layout, Message, MessageDescriptor, Registry, Result, Violation,
    decode_payload, encode_payload,
};

/// Encoder/decoder bound to a descriptor registry
#[derive(Debug, Clone, Copy)]
pub struct Codec<'r> {
    registry: &'r Registry,
}

impl Default for Codec<'static> {
    /// Codec over the built-in catalog
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

impl<'r> Codec<'r> {
    /// Create a codec over `registry`
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Get registry
    #[must_use]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Decode the message at the start of `bytes`
    ///
    /// Trailing bytes after the message are ignored; use
    /// [`frame_len`](super::frame_len) to find where the next one starts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header or the declared payload is not fully present
    /// - The id is not registered, or not in the shape the header signals
    /// - The declared payload length disagrees with the schema
    pub fn decode(&self, bytes: &[u8]) -> Result<Message> {
        let result = Header::from_bytes(bytes).and_then(|header| {
            let frame_len = header.frame_len();
            match bytes.get(..frame_len) {
                Some(frame) => self.decode_frame(header, Bytes::copy_from_slice(frame)),
                None => Err(Error::Incomplete {
                    needed: frame_len,
                    got: bytes.len(),
                }),
            }
        });
        result.inspect_err(Metrics::record_error)
    }

    /// Decode the next message from a stream buffer, advancing past it
    ///
    /// On [`Error::Incomplete`] nothing is consumed and the caller should
    /// append more bytes and retry. Every other outcome consumes exactly one
    /// framed message, so the buffer stays aligned on message boundaries
    /// even when a message is rejected.
    pub fn decode_from(&self, src: &mut BytesMut) -> Result<Message> {
        let result = Header::from_bytes(src).and_then(|header| {
            let frame_len = header.frame_len();
            if src.len() < frame_len {
                return Err(Error::Incomplete {
                    needed: frame_len,
                    got: src.len(),
                });
            }
            self.decode_frame(header, src.split_to(frame_len).freeze())
        });
        result.inspect_err(Metrics::record_error)
    }

    fn decode_frame(&self, header: Header, frame: Bytes) -> Result<Message> {
        let id = header.id();
        let shape = header.shape();

        let Some(variants) = self.registry.lookup(id) else {
            debug!(id = format_args!("{id:#06x}"), len = frame.len(), "unknown message id");
            return Err(Error::UnknownMessageId { id, frame });
        };
        let Some(desc) = variants.get(shape) else {
            debug!(id = format_args!("{id:#06x}"), %shape, "no descriptor for shape");
            return Err(Error::ShapeMismatch {
                id,
                found: shape,
                consumed: frame.len(),
            });
        };

        let fields = match desc.layout() {
            Layout::Short { params } => decode_params(params, header.params().unwrap_or_default()),
            Layout::Long { fields } => decode_payload(fields, &frame.slice(HEADER_SIZE..))
                .inspect_err(|err| debug!(name = desc.name(), error = %err, "payload rejected"))?,
        };

        Metrics::record_decoded(frame.len(), header.payload_len());
        trace!(name = desc.name(), len = frame.len(), "decoded message");
        Ok(Message::from_parts(
            id,
            shape,
            header.dest(),
            header.source(),
            fields,
        ))
    }

    /// Encode a message to bytes
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaViolation`] if the message does not match its
    /// descriptor. No bytes are produced in that case.
    pub fn encode(&self, message: &Message) -> Result<Vec<u8>> {
        let mut dst = BytesMut::new();
        self.encode_into(message, &mut dst)?;
        Ok(dst.to_vec())
    }

    /// Encode a message, appending to `dst`
    ///
    /// `dst` is left untouched on error.
    pub fn encode_into(&self, message: &Message, dst: &mut BytesMut) -> Result<()> {
        let id = message.id();
        let violation = |violation| Error::SchemaViolation { id, violation };

        let result = self
            .descriptor_for(message)
            .map_err(violation)
            .and_then(|desc| {
                let start = dst.len();
                match desc.layout() {
                    Layout::Short { params } => {
                        let raw = encode_params(params, message.fields()).map_err(violation)?;
                        let header = Header::short(id, raw, message.dest(), message.source());
                        dst.put_slice(&header.to_bytes());
                    }
                    Layout::Long { fields } => {
                        let payload_len = u16::try_from(fields.width()).map_err(|_| {
                            Error::MalformedDescriptor {
                                id,
                                reason: "payload wider than the header can declare",
                            }
                        })?;
                        let header =
                            Header::long(id, payload_len, message.dest(), message.source());
                        dst.put_slice(&header.to_bytes());
                        if let Err(err) = encode_payload(fields, message.fields(), dst) {
                            dst.truncate(start);
                            return Err(violation(err));
                        }
                    }
                }

                let frame_len = dst.len() - start;
                Metrics::record_encoded(frame_len);
                trace!(name = desc.name(), len = frame_len, "encoded message");
                Ok(())
            });
        result.inspect_err(Metrics::record_error)
    }

    /// Pick the descriptor an encode request targets
    fn descriptor_for(
        &self,
        message: &Message,
    ) -> std::result::Result<&'r MessageDescriptor, Violation> {
        let variants = self
            .registry
            .lookup(message.id())
            .ok_or(Violation::UnknownId)?;

        match message.shape() {
            Some(shape) => variants.get(shape).ok_or(Violation::ShapeUnavailable(shape)),
            None => variants.single().ok_or(Violation::AmbiguousShape),
        }
    }
}
