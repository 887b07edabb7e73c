//! Stream adapters between a byte transport and the codec
//!
//! Opening ports and discovering devices is left to the caller; these
//! types only need something that reads and writes bytes.

mod buffer;
mod byte_stream;
mod stream;

pub use buffer::{Buffered, StreamConfig};
pub use byte_stream::ByteStream;
pub use stream::MessageStream;
