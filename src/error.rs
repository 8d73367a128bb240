use thiserror::Error;

use crate::Symbol;

/// Errors raised while building, encoding, decoding or (de)serializing a codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// There are no symbols at all, so no tree can be built.
    #[error("empty frequency table: cannot build a tree")]
    EmptyFrequencyTable,

    /// The text being encoded contains a symbol the code table doesn't know.
    #[error("symbol {symbol:?} at position {position} has no code")]
    MissingCode { symbol: Symbol, position: usize },

    /// The encoded stream contains something other than '0' or '1'.
    #[error("invalid bit {found:?} at stream position {position}")]
    InvalidBit { position: usize, found: char },

    /// The encoded stream ended while inside an internal node.
    #[error("encoded stream truncated at position {position}")]
    TruncatedStream { position: usize },

    /// A single-leaf tree has zero-length codes and can't consume any bit.
    #[error("single-symbol tree ({symbol:?}) cannot decode a stream of {stream_len} bits")]
    DegenerateTree { symbol: Symbol, stream_len: usize },

    /// The text a single-symbol tree expands to is too big to be held in memory.
    #[error("cannot allocate {count} repetitions of {symbol:?}")]
    OversizedOutput { symbol: Symbol, count: usize },

    /// The artifact text doesn't follow the line format.
    #[error("malformed artifact at line {line}: {reason}")]
    MalformedArtifact { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
