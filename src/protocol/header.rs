//! APT message header
//!
//! Every message starts with the same 6 bytes. Whether a payload follows is
//! signalled by the high bit of the destination byte, so this is the only
//! place that looks at that bit; everything above sees a clean
//! [`MessageShape`] and a 7-bit destination address.

use super::{ADDRESS_MASK, Error, HEADER_SIZE, MessageShape, PAYLOAD_FLAG, Result};

/// What occupies header bytes 2-3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderBody {
    /// Two inline parameter bytes (short message)
    Params([u8; 2]),
    /// Length of the payload that follows (long message)
    PayloadLen(u16),
}

/// APT message header (6 bytes)
///
/// # Wire Format
///
/// ```text
///  0       1       2       3       4       5
/// +-------+-------+-------+-------+-------+-------+
/// |  Message ID   | Param1| Param2|F| Dest| Source|
/// |   (u16 LE)    |  or Payload   | |     |       |
/// |               | Length (u16)  | |     |       |
/// +-------+-------+-------+-------+-------+-------+
/// F = bit 7 of byte 4: payload follows
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    id: u16,
    body: HeaderBody,
    dest: u8,
    source: u8,
}

impl Header {
    /// Header of a short message
    #[must_use]
    pub const fn short(id: u16, params: [u8; 2], dest: u8, source: u8) -> Self {
        Self {
            id,
            body: HeaderBody::Params(params),
            dest: dest & ADDRESS_MASK,
            source,
        }
    }

    /// Header of a long message carrying `payload_len` bytes
    #[must_use]
    pub const fn long(id: u16, payload_len: u16, dest: u8, source: u8) -> Self {
        Self {
            id,
            body: HeaderBody::PayloadLen(payload_len),
            dest: dest & ADDRESS_MASK,
            source,
        }
    }

    /// Get message ID
    #[must_use]
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Get header body
    #[must_use]
    pub const fn body(&self) -> HeaderBody {
        self.body
    }

    /// Destination address with the payload flag stripped
    #[must_use]
    pub const fn dest(&self) -> u8 {
        self.dest
    }

    /// Get source address
    #[must_use]
    pub const fn source(&self) -> u8 {
        self.source
    }

    /// Get message shape
    #[must_use]
    pub const fn shape(&self) -> MessageShape {
        match self.body {
            HeaderBody::Params(_) => MessageShape::Short,
            HeaderBody::PayloadLen(_) => MessageShape::Long,
        }
    }

    /// Bytes that follow the header (0 for short messages)
    #[must_use]
    pub const fn payload_len(&self) -> usize {
        match self.body {
            HeaderBody::Params(_) => 0,
            HeaderBody::PayloadLen(len) => len as usize,
        }
    }

    /// Inline parameters of a short message
    #[must_use]
    pub const fn params(&self) -> Option<[u8; 2]> {
        match self.body {
            HeaderBody::Params(params) => Some(params),
            HeaderBody::PayloadLen(_) => None,
        }
    }

    /// Total bytes the message occupies on the wire
    #[must_use]
    pub const fn frame_len(&self) -> usize {
        HEADER_SIZE + self.payload_len()
    }

    /// Convert to bytes (little-endian)
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];

        bytes[0..2].copy_from_slice(&self.id.to_le_bytes());
        match self.body {
            HeaderBody::Params(params) => {
                bytes[2..4].copy_from_slice(&params);
                bytes[4] = self.dest;
            }
            HeaderBody::PayloadLen(len) => {
                bytes[2..4].copy_from_slice(&len.to_le_bytes());
                bytes[4] = self.dest | PAYLOAD_FLAG;
            }
        }
        bytes[5] = self.source;

        bytes
    }

    /// Parse from bytes (little-endian)
    ///
    /// Only the first [`HEADER_SIZE`] bytes are read. Any 6 bytes form a
    /// structurally valid header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let Some(raw) = bytes.first_chunk::<HEADER_SIZE>() else {
            return Err(Error::Incomplete {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        };

        let id = u16::from_le_bytes([raw[0], raw[1]]);
        let body = if raw[4] & PAYLOAD_FLAG == 0 {
            HeaderBody::Params([raw[2], raw[3]])
        } else {
            HeaderBody::PayloadLen(u16::from_le_bytes([raw[2], raw[3]]))
        };

        Ok(Self {
            id,
            body,
            dest: raw[4] & ADDRESS_MASK,
            source: raw[5],
        })
    }
}

/// Length of the message at the start of `bytes`, header included.
///
/// Needs only the header: payload presence and length never depend on the
/// registry, so unknown messages can still be skipped.
pub fn frame_len(bytes: &[u8]) -> Result<usize> {
    Header::from_bytes(bytes).map(|header| header.frame_len())
}
