//! Compress/decompress orchestration over byte buffers.
//!
//! Composes the pipeline end to end: frequencies -> tree -> code table ->
//! bit packing -> container (and the reverse). File handling lives in the
//! app crate; this module only sees bytes and the original file name that
//! gets recorded in the header.

use std::collections::HashMap;

use crate::bitio::{pack_bits, unpack_bits};
use crate::container::Container;
use crate::huffman::{byte_frequencies, CodeTable, HuffmanTree};
use crate::Result;

/// Result of decoding a container: the original bytes plus the file name
/// recorded in the header (used to derive the output path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompressed {
    /// The reconstructed original bytes
    pub data: Vec<u8>,

    /// Original file name from the header, no directory component
    pub original_name: String,
}

/// Compress `data` into a complete `.cpm` container.
///
/// `original_name` is the input's file name (no directory); it is stored
/// in the header so decompression can derive an output name.
///
/// # Errors
/// Fails with [`crate::HuffmanError::EmptyFrequencyTable`] when `data` is
/// empty; there is nothing to build a tree from.
pub fn compress(data: &[u8], original_name: &str) -> Result<Vec<u8>> {
    let freqs = byte_frequencies(data);
    let tree = HuffmanTree::from_frequencies(&freqs)?;
    let codes = CodeTable::from_tree(&tree);

    let mut bits = String::with_capacity(data.len() * 2);
    for &byte in data {
        // Every input byte has a nonzero frequency, hence a code.
        bits.push_str(codes.get(byte).unwrap_or_default());
    }

    let (payload, padded_bits) = pack_bits(&bits);

    let container = Container {
        padded_bits: padded_bits as i32,
        codes,
        original_size: data.len() as u64,
        original_name: original_name.to_string(),
        payload,
    };

    Ok(container.serialize())
}

/// Decode a `.cpm` container back into the original bytes.
///
/// Decoding walks the payload bit sequence left to right, matching the
/// accumulated bits against the header's code table. The recorded
/// original size bounds the output: decoding stops once that many bytes
/// are emitted, so trailing garbage in the payload cannot inflate the
/// result.
///
/// # Errors
/// Fails with a [`crate::ContainerError`] if the header is malformed.
pub fn decompress(container_bytes: &[u8]) -> Result<Decompressed> {
    let container = Container::deserialize(container_bytes)?;

    let mut bits = unpack_bits(&container.payload);

    // Strip the recorded padding. An out-of-range count is treated as
    // zero bits removed rather than an error.
    let padded = container.padded_bits;
    if padded > 0 && (padded as usize) <= bits.len() {
        bits.truncate(bits.len() - padded as usize);
    }

    let decode_map: HashMap<&str, u8> = container
        .codes
        .entries()
        .map(|(byte, code)| (code, byte))
        .collect();

    let original_size = container.original_size as usize;
    let mut data = Vec::with_capacity(original_size);
    let mut current = String::new();

    for symbol in bits.chars() {
        current.push(symbol);
        if let Some(&byte) = decode_map.get(current.as_str()) {
            data.push(byte);
            current.clear();
            if original_size > 0 && data.len() >= original_size {
                break;
            }
        }
    }

    if original_size > 0 && data.len() > original_size {
        data.truncate(original_size);
    }

    Ok(Decompressed {
        data,
        original_name: container.original_name,
    })
}
