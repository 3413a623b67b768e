//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! A failed compress or decompress is terminal for that operation and
//! leaves no partial output behind.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: tree or code table construction failures
/// - Container: malformed `.cpm` header or payload framing
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman codec error (e.g., nothing to encode)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Container format error (e.g., truncated header)
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file exists but holds zero bytes
    #[error("file is empty: {}", .path.display())]
    EmptyFile { path: PathBuf },
}

/// Huffman codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: cannot build huffman tree")]
    EmptyFrequencyTable,
}

/// Container format errors.
///
/// Every variant maps to a bounds or consistency violation found while
/// parsing a `.cpm` header. Parsing aborts at the first violation.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Buffer is smaller than the fixed leading header fields
    #[error("container too short: need at least {required} bytes, got {actual}")]
    HeaderTooShort { required: usize, actual: usize },

    /// A declared length field would read past the end of the buffer
    #[error("truncated {field}: need {required} more bytes, {available} available")]
    TruncatedField {
        field: &'static str,
        required: usize,
        available: usize,
    },

    /// A stored code contains a byte other than ASCII '0' or '1'
    #[error("invalid code byte {byte:#04x} in code for symbol {symbol}")]
    InvalidCodeByte { symbol: u8, byte: u8 },

    /// The recorded original file name is not valid UTF-8
    #[error("original file name is not valid UTF-8")]
    InvalidName,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
