//! Bit packing and unpacking for Huffman payloads.
//!
//! The encoder produces one logical bit sequence (a string of `'0'`/`'1'`
//! symbols, matching how codes are stored in the container header). This
//! module converts that sequence to packed bytes and back.
//!
//! # Bit order and padding
//!
//! Bits are packed MSB-first: the first symbol of the sequence becomes the
//! most significant bit of the first byte. The final byte is completed with
//! trailing zero bits; the caller records the pad count (0-7) in the
//! container header so decoding can strip them.
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{pack_bits, unpack_bits};
//!
//! let (bytes, padded) = pack_bits("10111");
//! assert_eq!(bytes, vec![0b1011_1000]);
//! assert_eq!(padded, 3);
//! assert_eq!(unpack_bits(&bytes), "10111000");
//! ```

use bit_vec::BitVec;

/// Pack a `'0'`/`'1'` bit sequence into bytes, MSB-first.
///
/// Returns the packed bytes and the number of zero bits appended to fill
/// the final byte, always `(8 - bits.len() % 8) % 8`. An empty sequence
/// produces an empty buffer and a pad count of 0.
pub fn pack_bits(bits: &str) -> (Vec<u8>, u32) {
    if bits.is_empty() {
        return (Vec::new(), 0);
    }

    let padded = ((8 - bits.len() % 8) % 8) as u32;

    let mut packed = BitVec::with_capacity(bits.len() + padded as usize);
    for symbol in bits.chars() {
        packed.push(symbol == '1');
    }

    // BitVec::to_bytes zero-fills the trailing partial byte, which is
    // exactly the padding rule the container records.
    (packed.to_bytes(), padded)
}

/// Expand packed bytes into the full bit sequence, 8 symbols per byte.
///
/// This is the pure inverse of [`pack_bits`] up to padding: trailing pad
/// bits come back as `'0'` symbols and the caller removes them.
pub fn unpack_bits(bytes: &[u8]) -> String {
    BitVec::from_bytes(bytes)
        .iter()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
