//! `.cpm` container serialization and parsing.
//!
//! A container is self-describing: the header carries everything needed to
//! decode the payload without external metadata.
//!
//! # Container Format
//!
//! All integers are little-endian.
//!
//! ```text
//! +---------------------+
//! | padded_bits (4)     |  i32 trailing zero bits in the final payload byte
//! +---------------------+
//! | num_codes (4)       |  u32 number of code table entries
//! +---------------------+
//! | per entry:          |
//! |   symbol (1)        |  u8 byte value
//! |   code_len (4)      |  u32 length of the code
//! |   code (code_len)   |  literal ASCII '0'/'1' characters
//! +---------------------+
//! | original_size (8)   |  u64 uncompressed byte count
//! +---------------------+
//! | name_len (4)        |  u32 length of the original file name
//! +---------------------+
//! | name (name_len)     |  original file name, UTF-8, no directory
//! +---------------------+
//! | payload             |  bit-packed compressed data, to end of file
//! | (variable)          |
//! +---------------------+
//! ```
//!
//! This layout must stay bit-exact: containers written by earlier tools
//! with the same format remain readable, and vice versa.
//!
//! # Bounds Discipline
//!
//! Every declared length is validated against the remaining buffer before
//! it is read. The first violation aborts parsing with a
//! [`ContainerError`]; no partial result is returned.

use crate::error::{ContainerError, Result};
use crate::huffman::CodeTable;

/// Fixed leading fields: padded_bits + num_codes.
const MIN_HEADER_SIZE: usize = 8;

/// A parsed (or about-to-be-written) `.cpm` container.
#[derive(Debug, Clone)]
pub struct Container {
    /// Zero bits appended to the final payload byte (0-7)
    pub padded_bits: i32,

    /// Code table for decoding the payload
    pub codes: CodeTable,

    /// Original uncompressed size in bytes
    pub original_size: u64,

    /// Original file name (no directory component)
    pub original_name: String,

    /// Bit-packed compressed payload
    pub payload: Vec<u8>,
}

impl Container {
    /// Serialize the container into its on-disk byte form.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_HEADER_SIZE + self.payload.len());

        out.extend_from_slice(&self.padded_bits.to_le_bytes());
        out.extend_from_slice(&(self.codes.num_codes() as u32).to_le_bytes());

        for (symbol, code) in self.codes.entries() {
            out.push(symbol);
            out.extend_from_slice(&(code.len() as u32).to_le_bytes());
            out.extend_from_slice(code.as_bytes());
        }

        out.extend_from_slice(&self.original_size.to_le_bytes());
        out.extend_from_slice(&(self.original_name.len() as u32).to_le_bytes());
        out.extend_from_slice(self.original_name.as_bytes());

        out.extend_from_slice(&self.payload);
        out
    }

    /// Parse a container from bytes.
    ///
    /// Everything after the header is taken as the payload.
    ///
    /// # Errors
    /// - [`ContainerError::HeaderTooShort`] if the buffer cannot hold the
    ///   fixed leading fields
    /// - [`ContainerError::TruncatedField`] if any declared length reads
    ///   past the end of the buffer
    /// - [`ContainerError::InvalidCodeByte`] if a stored code holds
    ///   anything but ASCII '0'/'1'
    /// - [`ContainerError::InvalidName`] if the stored name is not UTF-8
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_HEADER_SIZE {
            return Err(ContainerError::HeaderTooShort {
                required: MIN_HEADER_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        let mut cursor = Cursor::new(bytes);

        let padded_bits = i32::from_le_bytes(cursor.take(4, "padded_bits")?.try_into().unwrap());
        let num_codes = u32::from_le_bytes(cursor.take(4, "num_codes")?.try_into().unwrap());

        let mut codes = CodeTable::empty();
        for _ in 0..num_codes {
            let symbol = cursor.take(1, "code symbol")?[0];
            let code_len =
                u32::from_le_bytes(cursor.take(4, "code length")?.try_into().unwrap()) as usize;
            let code_bytes = cursor.take(code_len, "code bits")?;

            if let Some(&byte) = code_bytes.iter().find(|&&b| b != b'0' && b != b'1') {
                return Err(ContainerError::InvalidCodeByte { symbol, byte }.into());
            }
            // Only '0'/'1' bytes remain, so this cannot fail.
            codes.insert(symbol, String::from_utf8(code_bytes.to_vec()).unwrap());
        }

        let original_size =
            u64::from_le_bytes(cursor.take(8, "original_size")?.try_into().unwrap());
        let name_len = u32::from_le_bytes(cursor.take(4, "name_len")?.try_into().unwrap()) as usize;
        let name_bytes = cursor.take(name_len, "original name")?;
        let original_name =
            String::from_utf8(name_bytes.to_vec()).map_err(|_| ContainerError::InvalidName)?;

        let payload = cursor.rest().to_vec();

        Ok(Self {
            padded_bits,
            codes,
            original_size,
            original_name,
            payload,
        })
    }
}

/// Bounds-checked forward reader over the container bytes.
struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Take the next `len` bytes, or fail naming the field that ran out.
    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        let available = self.bytes.len() - self.offset;
        if len > available {
            return Err(ContainerError::TruncatedField {
                field,
                required: len,
                available,
            }
            .into());
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Everything not yet consumed.
    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }
}
