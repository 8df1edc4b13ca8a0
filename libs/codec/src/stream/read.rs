use crate::error::{ProtocolError, ProtocolResult};
use byteorder::{ByteOrder, LittleEndian};
use primitive_types::U256;
use tracing::trace;

/// Bounds-checked reader over a borrowed buffer
///
/// `read_*` methods consume bytes; `peek_*` methods decode the same value
/// without moving the cursor, used to branch on a type tag before the
/// variant decoder re-reads it.
#[derive(Debug, Clone)]
pub struct ReadStream<'a> {
    storage: &'a [u8],
    read_index: usize,
}

impl<'a> ReadStream<'a> {
    pub fn new(storage: &'a [u8]) -> Self {
        Self::with_offset(storage, 0)
    }

    pub fn with_offset(storage: &'a [u8], read_index: usize) -> Self {
        Self {
            storage,
            read_index,
        }
    }

    /// Total buffer length, independent of the cursor
    pub fn length(&self) -> usize {
        self.storage.len()
    }

    /// True iff `count` more bytes can be read
    pub fn has_remaining(&self, count: usize) -> bool {
        self.read_index
            .checked_add(count)
            .is_some_and(|end| end <= self.storage.len())
    }

    /// Bytes not yet consumed
    pub fn unused(&self) -> usize {
        self.storage.len().saturating_sub(self.read_index)
    }

    pub fn read_index(&self) -> usize {
        self.read_index
    }

    pub fn set_read_index(&mut self, read_index: usize) -> ProtocolResult<()> {
        if read_index > self.storage.len() {
            return Err(ProtocolError::invalid_value(
                "readIndex",
                format!(
                    "cannot set the read index to {read_index} as the stream is only {} in length",
                    self.storage.len()
                ),
            ));
        }
        self.read_index = read_index;
        Ok(())
    }

    fn take(&mut self, name: &str, length: usize, advance: bool) -> ProtocolResult<&'a [u8]> {
        if !self.has_remaining(length) {
            return Err(ProtocolError::short_buffer(name, length, self.unused()));
        }
        let start = self.read_index;
        let bytes = &self.storage[start..start + length];
        if advance {
            self.read_index += length;
        }
        trace!(field = name, offset = start, length, "read");
        Ok(bytes)
    }

    /// Read `length` bytes as lowercase hex (no prefix)
    pub fn read_fixed_hex(&mut self, name: &str, length: usize) -> ProtocolResult<String> {
        self.take(name, length, true).map(hex::encode)
    }

    pub fn read_bytes(&mut self, name: &str, length: usize) -> ProtocolResult<&'a [u8]> {
        self.take(name, length, true)
    }

    /// Read exactly `N` bytes into an array
    pub fn read_array<const N: usize>(&mut self, name: &str) -> ProtocolResult<[u8; N]> {
        let bytes = self.take(name, N, true)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self, name: &str) -> ProtocolResult<u8> {
        Ok(self.take(name, 1, true)?[0])
    }

    pub fn peek_u8(&mut self, name: &str) -> ProtocolResult<u8> {
        Ok(self.take(name, 1, false)?[0])
    }

    pub fn read_u16(&mut self, name: &str) -> ProtocolResult<u16> {
        self.take(name, 2, true).map(LittleEndian::read_u16)
    }

    pub fn read_u32(&mut self, name: &str) -> ProtocolResult<u32> {
        self.take(name, 4, true).map(LittleEndian::read_u32)
    }

    pub fn peek_u32(&mut self, name: &str) -> ProtocolResult<u32> {
        self.take(name, 4, false).map(LittleEndian::read_u32)
    }

    pub fn read_u64(&mut self, name: &str) -> ProtocolResult<u64> {
        self.take(name, 8, true).map(LittleEndian::read_u64)
    }

    /// 32 little-endian bytes
    pub fn read_u256(&mut self, name: &str) -> ProtocolResult<U256> {
        self.take(name, 32, true).map(U256::from_little_endian)
    }

    /// Any non-zero byte is true
    pub fn read_bool(&mut self, name: &str) -> ProtocolResult<bool> {
        Ok(self.take(name, 1, true)?[0] != 0)
    }

    /// UTF-8 string of a known byte length
    pub fn read_string(&mut self, name: &str, length: usize) -> ProtocolResult<String> {
        let bytes = self.take(name, length, true)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| ProtocolError::invalid_value(name, e.to_string()))
    }
}
