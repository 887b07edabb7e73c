//! APT protocol core implementation
//!
//! This module provides the wire format, descriptor registry, and codec.

pub mod catalog;
mod codec;
mod descriptor;
mod error;
mod header;
pub mod metrics;
mod message;
mod payload;
mod registry;
mod schema;
mod types;

pub use codec::Codec;
pub use descriptor::{Layout, MessageDescriptor};
pub use error::{Error, Result, Violation};
pub use header::{Header, HeaderBody, frame_len};
pub use message::Message;
pub use payload::{decode_payload, encode_payload};
pub use registry::{Registry, Variants};
pub use schema::{Field, FieldKind, FieldSchema};
pub use types::{Address, Fields, MessageShape, Value};

/// Header size in bytes (every message carries one)
pub const HEADER_SIZE: usize = 6;

/// Bit 7 of the destination byte: a payload follows the header
pub const PAYLOAD_FLAG: u8 = 0x80;

/// Bits 0-6 of the destination byte: the real destination address
pub const ADDRESS_MASK: u8 = 0x7F;

/// Largest payload length the header can declare
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize;
