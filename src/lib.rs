//! # stack_huffman
//!
//! Derives a variable-length binary code from the symbol frequencies of a text, encodes the text
//! with it and rebuilds the text from the encoded stream plus the frequency table.
//!
//! ```rust
//! use stack_huffman::{Artifact, HuffmanCodec};
//!
//! let codec = HuffmanCodec::from_text("abracadabra")?;
//! let stored = Artifact::from(&codec).to_string();
//!
//! let artifact = Artifact::parse(&stored)?;
//! let restored = HuffmanCodec::from_artifact(artifact.stream, artifact.frequencies)?;
//! assert_eq!(restored.decoded(), "abracadabra");
//! # Ok::<(), stack_huffman::CodecError>(())
//! ```

pub mod artifact;
pub mod error;
pub mod huffman;
pub mod shell;

pub use artifact::Artifact;
pub use error::{CodecError, Result};
pub use huffman::{CodeTable, EncodedStream, HuffmanCodec, MergeTree};

/// The type representing a symbol of the text.
pub type Symbol = char;

/// The type representing how many times a symbol occurs.
pub type Freq = usize;

/// A symbol together with its number of occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyEntry {
    pub symbol: Symbol,
    pub count: Freq,
}

impl FrequencyEntry {
    pub fn new(symbol: Symbol, count: Freq) -> Self {
        Self { symbol, count }
    }
}
