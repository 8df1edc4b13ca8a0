//! # Byte Cursors
//!
//! `ReadStream` walks an immutable buffer with bounds-checked, little-endian
//! reads; `WriteStream` appends into a growable buffer and can seek back to
//! patch a length prefix once the body after it has been written.
//!
//! Every read names the field it is decoding so a short buffer reports
//! which field ran out of bytes.

mod read;
mod write;

pub use read::ReadStream;
pub use write::{WriteStream, CHUNK_SIZE};
