//! APT codec error types

use bytes::Bytes;
use thiserror::Error;

use super::{FieldKind, HEADER_SIZE, MessageShape};

/// APT codec errors
#[derive(Error, Debug)]
pub enum Error {
    /// Not enough bytes buffered to finish the current message
    #[error("incomplete message: need {needed} bytes, got {got}")]
    Incomplete {
        /// Bytes required before decoding can proceed
        needed: usize,
        /// Bytes currently available
        got: usize,
    },

    /// Message id has no descriptor in the registry
    ///
    /// The message was still framed from its header, so `frame` holds every
    /// byte it occupied on the wire.
    #[error("unknown message id {id:#06x} ({} byte frame)", .frame.len())]
    UnknownMessageId {
        /// Raw message id
        id: u16,
        /// Raw header and payload bytes
        frame: Bytes,
    },

    /// Declared payload length disagrees with the schema width
    #[error("payload length mismatch: header declares {declared} bytes, schema needs {expected}")]
    LengthMismatch {
        /// Length carried in the header
        declared: usize,
        /// Width of the descriptor's field schema
        expected: usize,
    },

    /// Known message id arrived in a shape it has no descriptor for
    #[error("message {id:#06x} has no {found} form")]
    ShapeMismatch {
        /// Raw message id
        id: u16,
        /// Shape signalled by the header flag
        found: MessageShape,
        /// Bytes the message occupied on the wire
        consumed: usize,
    },

    /// Encode request does not match the descriptor
    #[error("schema violation for message {id:#06x}: {violation}")]
    SchemaViolation {
        /// Requested message id
        id: u16,
        /// What was wrong with the request
        violation: Violation,
    },

    /// Two descriptors registered for the same id and shape
    #[error("duplicate {shape} descriptor for message id {id:#06x}")]
    DuplicateDescriptor {
        /// Conflicting message id
        id: u16,
        /// Conflicting shape
        shape: MessageShape,
    },

    /// Descriptor is internally inconsistent
    #[error("malformed descriptor for message id {id:#06x}: {reason}")]
    MalformedDescriptor {
        /// Offending message id
        id: u16,
        /// Reason the descriptor was rejected
        reason: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Byte stream reached end of file
    #[error("connection closed")]
    ConnectionClosed,
}

impl Error {
    /// Bytes a framed-but-rejected message occupied on the wire.
    ///
    /// Callers reading from a raw slice advance by this amount to stay in
    /// sync. Returns `None` for errors that consume nothing.
    #[must_use]
    pub fn consumed(&self) -> Option<usize> {
        match self {
            Self::UnknownMessageId { frame, .. } => Some(frame.len()),
            Self::LengthMismatch { declared, .. } => Some(HEADER_SIZE + declared),
            Self::ShapeMismatch { consumed, .. } => Some(*consumed),
            _ => None,
        }
    }

    /// Whether decoding can continue with the next message.
    ///
    /// A length mismatch means the stream and descriptor disagree, so the
    /// caller should resynchronize instead.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Incomplete { .. } | Self::UnknownMessageId { .. } | Self::ShapeMismatch { .. }
        )
    }
}

/// Ways an encode request can fail to match its descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// No descriptor registered for the id
    #[error("message id is not registered")]
    UnknownId,

    /// Id is registered in both shapes and the request picked neither
    #[error("id has short and long forms; the shape must be chosen explicitly")]
    AmbiguousShape,

    /// Requested shape is not registered for the id
    #[error("no {0} form is registered")]
    ShapeUnavailable(MessageShape),

    /// Named field missing from the request
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// Request carries a field the descriptor does not name
    #[error("unexpected field `{0}`")]
    UnexpectedField(&'static str),

    /// Field present but not where the schema puts it
    #[error("field `{found}` found where `{expected}` belongs")]
    OutOfOrder {
        /// Field the schema expects at this position
        expected: &'static str,
        /// Field the request supplied instead
        found: &'static str,
    },

    /// Integer does not fit the wire width
    #[error("value {value} does not fit field `{name}` ({kind})")]
    OutOfRange {
        /// Field name
        name: &'static str,
        /// Supplied value
        value: i64,
        /// Wire kind of the field
        kind: FieldKind,
    },

    /// Integer supplied for a byte block or vice versa
    #[error("field `{name}` expects {kind}")]
    WrongType {
        /// Field name
        name: &'static str,
        /// Wire kind of the field
        kind: FieldKind,
    },

    /// Byte block longer than its fixed width
    #[error("field `{name}` holds {len} bytes, wider than {width}")]
    BlockTooLong {
        /// Field name
        name: &'static str,
        /// Supplied length
        len: usize,
        /// Fixed width on the wire
        width: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
