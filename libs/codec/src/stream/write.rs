use crate::error::{ProtocolError, ProtocolResult};
use byteorder::{ByteOrder, LittleEndian};
use primitive_types::U256;
use tangle_types::common::strip_hex_prefix;

/// Growth increment for the backing buffer
pub const CHUNK_SIZE: usize = 4096;

/// Growable little-endian writer
///
/// The backing buffer grows in `CHUNK_SIZE` steps; only the bytes up to the
/// write index are returned by `final_bytes`. `write_index`/`set_write_index`
/// allow a placeholder to be overwritten after the bytes following it are
/// known.
#[derive(Debug, Clone)]
pub struct WriteStream {
    storage: Vec<u8>,
    write_index: usize,
}

impl Default for WriteStream {
    fn default() -> Self {
        Self::new()
    }
}

impl WriteStream {
    pub fn new() -> Self {
        Self {
            storage: vec![0u8; CHUNK_SIZE],
            write_index: 0,
        }
    }

    /// Allocated capacity of the backing buffer
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes written so far
    pub fn length(&self) -> usize {
        self.write_index
    }

    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Move the cursor, growing the buffer if it moves past the end
    pub fn set_write_index(&mut self, write_index: usize) {
        self.ensure_capacity(write_index.saturating_sub(self.write_index));
        self.write_index = write_index;
    }

    fn ensure_capacity(&mut self, additional: usize) {
        let needed = self.write_index + additional;
        if needed > self.storage.len() {
            let chunks = needed.div_ceil(CHUNK_SIZE);
            self.storage.resize(chunks * CHUNK_SIZE, 0);
        }
    }

    fn slot(&mut self, length: usize) -> &mut [u8] {
        self.ensure_capacity(length);
        let start = self.write_index;
        self.write_index += length;
        &mut self.storage[start..start + length]
    }

    /// Write hex text that must decode to exactly `length` bytes
    pub fn write_fixed_hex(
        &mut self,
        name: &str,
        length: usize,
        value: &str,
    ) -> ProtocolResult<()> {
        let bytes = hex::decode(strip_hex_prefix(value)).map_err(|e| ProtocolError::InvalidHex {
            field: name.to_string(),
            reason: e.to_string(),
        })?;
        if bytes.len() != length {
            return Err(ProtocolError::HexLengthMismatch {
                field: name.to_string(),
                expected: length,
                got: bytes.len(),
            });
        }
        self.write_bytes(&bytes);
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.slot(bytes.len()).copy_from_slice(bytes);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.slot(1)[0] = value;
    }

    pub fn write_u16(&mut self, value: u16) {
        LittleEndian::write_u16(self.slot(2), value);
    }

    pub fn write_u32(&mut self, value: u32) {
        LittleEndian::write_u32(self.slot(4), value);
    }

    pub fn write_u64(&mut self, value: u64) {
        LittleEndian::write_u64(self.slot(8), value);
    }

    pub fn write_u256(&mut self, value: U256) {
        value.to_little_endian(self.slot(32));
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    /// Written bytes only, without spare capacity
    pub fn final_bytes(&self) -> &[u8] {
        &self.storage[..self.write_index]
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.storage.truncate(self.write_index);
        self.storage
    }

    /// Written bytes as lowercase hex (no prefix)
    pub fn final_hex(&self) -> String {
        hex::encode(self.final_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::ReadStream;

    #[test]
    fn test_final_bytes_excludes_spare_capacity() {
        let mut stream = WriteStream::new();
        stream.write_u16(0x0201);
        assert_eq!(stream.capacity(), CHUNK_SIZE);
        assert_eq!(stream.final_bytes(), &[0x01, 0x02]);
        assert_eq!(stream.final_hex(), "0102");
    }

    #[test]
    fn test_grows_in_chunks() {
        let mut stream = WriteStream::new();
        stream.write_bytes(&vec![0xffu8; CHUNK_SIZE + 1]);
        assert_eq!(stream.capacity(), 2 * CHUNK_SIZE);
        assert_eq!(stream.length(), CHUNK_SIZE + 1);
    }

    #[test]
    fn test_length_prefix_patch() {
        let mut stream = WriteStream::new();
        stream.write_u8(0xaa);
        let placeholder = stream.write_index();
        stream.write_u32(0);
        stream.write_bytes(&[1, 2, 3]);
        let end = stream.write_index();

        stream.set_write_index(placeholder);
        stream.write_u32((end - placeholder - 4) as u32);
        stream.set_write_index(end);

        assert_eq!(stream.final_hex(), "aa03000000010203");
    }

    #[test]
    fn test_write_fixed_hex_validation() {
        let mut stream = WriteStream::new();
        stream.write_fixed_hex("id", 2, "0xabcd").unwrap();
        assert_eq!(stream.final_hex(), "abcd");

        let err = stream.write_fixed_hex("id", 2, "abcdef").unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::HexLengthMismatch {
                expected: 2,
                got: 3,
                ..
            }
        ));

        let err = stream.write_fixed_hex("id", 2, "zz").unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidHex { .. }));
        // rejected writes leave the stream untouched
        assert_eq!(stream.length(), 2);
    }

    #[test]
    fn test_writes_read_back() {
        let mut stream = WriteStream::new();
        stream.write_u64(u64::MAX - 1);
        stream.write_u256(U256::from(1_000_000u64));
        stream.write_bool(true);
        stream.write_string("idx");

        let bytes = stream.into_bytes();
        let mut read = ReadStream::new(&bytes);
        assert_eq!(read.read_u64("a").unwrap(), u64::MAX - 1);
        assert_eq!(read.read_u256("b").unwrap(), U256::from(1_000_000u64));
        assert!(read.read_bool("c").unwrap());
        assert_eq!(read.read_string("d", 3).unwrap(), "idx");
        assert_eq!(read.unused(), 0);
    }
}
