//! Error types for prefix coding.

use thiserror::Error;

/// Error variants for tree construction and coding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The frequency table has no symbol with a positive count, so there
    /// is nothing to build a tree from.
    #[error("empty input: no symbol with a positive count")]
    EmptyInput,

    /// A symbol in the text has no entry in the code table.
    #[error("unknown symbol: byte {0:#04x} has no assigned code")]
    UnknownSymbol(u8),

    /// The bit stream ended in the middle of a code path.
    #[error("truncated input: bit stream ends between code boundaries")]
    TruncatedInput,
}

/// A specialized Result type for prefix coding operations.
pub type Result<T> = std::result::Result<T, Error>;
