//! huffpack-core: Huffman compression with a self-describing container format
//!
//! This library provides the codec behind the `huffpack` tool:
//! - Builds an optimal prefix code from byte frequencies
//! - Packs the encoded bit sequence into bytes
//! - Wraps payload and code table in a `.cpm` container that decodes
//!   without external metadata
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `huffman`: frequency counting, tree construction, code tables
//! - `bitio`: bit sequence packing/unpacking
//! - `container`: `.cpm` header and payload serialization
//! - `codec`: compress/decompress orchestration over byte buffers
//!
//! File I/O, path derivation, and the interactive menu live in the app
//! crate; the core is pure and fully testable on in-memory buffers.
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Bounds-checked parsing**: a malformed container is an error value,
//!   never an out-of-bounds read
//! - **Format stability**: the container layout is bit-exact across
//!   versions

pub mod bitio;
pub mod codec;
pub mod container;
pub mod error;
pub mod huffman;

// Re-export commonly used types
pub use codec::{compress, decompress, Decompressed};
pub use error::{ContainerError, Error, HuffmanError, Result};
