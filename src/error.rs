//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The frequency table contains no symbols, so no tree can be built.
    #[error("empty alphabet: no symbols to build a tree from")]
    EmptyAlphabet,

    /// The encoder met a symbol with no entry in the code table.
    #[error("symbol {0:#04x} has no code table entry")]
    UnknownSymbol(u8),

    /// The decoder accumulated a bit sequence that can never match a code.
    #[error("bit sequence matches no code in the table")]
    UnknownCode,

    /// The bit stream ended in the middle of a codeword.
    #[error("input ended mid-codeword with {0} unmatched bits")]
    TruncatedInput(usize),

    /// A serialized code table failed validation.
    #[error("malformed code table: {0}")]
    MalformedTable(&'static str),

    /// An I/O error occurred while reading or writing a table.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
