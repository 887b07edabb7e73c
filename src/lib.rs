//! aptwire - table-driven codec for the APT motion controller protocol
//!
//! APT controllers exchange small binary messages over serial or USB. Every
//! message starts with a 6-byte header; a flag bit in the destination byte
//! says whether a payload follows. This crate turns bytes into named-field
//! records and back, driven entirely by a table of message descriptors.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aptwire::{Address, Codec, Message};
//!
//! let codec = Codec::default();
//!
//! // Home channel 1
//! let request = Message::new(0x0443, Address::GENERIC_USB, Address::HOST)
//!     .with("chan_ident", 1u8);
//! let bytes = codec.encode(&request)?;
//!
//! // And back again
//! let decoded = codec.decode(&bytes)?;
//! assert_eq!(decoded.int("chan_ident"), Some(1));
//! # Ok::<(), aptwire::Error>(())
//! ```
//!
//! # Features
//!
//! - **Table-driven** - one descriptor per message, no per-message code
//! - **Framing-safe** - unknown messages are skipped by length, never misread
//! - **Reserved fields round-trip** - consumed on decode, zeroed on encode
//! - **Stream adapters** - frame messages over any `Read + Write` handle

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;
pub mod transport;

pub use protocol::{
    Address, Codec, Error, Field, FieldKind, FieldSchema, Fields, HEADER_SIZE, Header,
    MessageDescriptor, Message, MessageShape, Registry, Result, Value, Violation,
};
pub use transport::{Buffered, ByteStream, MessageStream};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
