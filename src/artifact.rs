//! The line-oriented text format used to store an encoded text.
//!
//! ```text
//! 01110001011010100111000     <- encoded stream, one character per bit
//! 5                           <- number of frequency entries
//! a-5                         <- <symbol>-<count>, in table order
//! b-2
//! r-2
//! c-1
//! d-1
//!                             <- terminating blank line
//! ```
//!
//! A newline symbol is written as the two characters `\n` so that every entry stays on one line.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{CodecError, Result};
use crate::huffman::{EncodedStream, HuffmanCodec};
use crate::{Freq, FrequencyEntry};

/// How a newline symbol is written in a frequency entry.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Separates a symbol from its count in a frequency entry.
const SEPARATOR: char = '-';

/// An encoded stream together with the frequency table needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub stream: EncodedStream,
    pub frequencies: Vec<FrequencyEntry>,
}

impl Artifact {
    pub fn new(stream: EncodedStream, frequencies: Vec<FrequencyEntry>) -> Self {
        Self {
            stream,
            frequencies,
        }
    }

    /// Parses the text produced by the [`Display`](fmt::Display) implementation.
    ///
    /// Lines are split on `'\n'` only, and whatever follows the last frequency entry is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.split('\n').enumerate().map(|(index, line)| (index + 1, line));

        let (_, stream) = lines.next().ok_or_else(|| malformed(1, "missing encoded stream"))?;

        let (number, count_line) = lines.next().ok_or_else(|| malformed(2, "missing entry count"))?;
        let entries = count_line
            .trim()
            .parse::<usize>()
            .map_err(|e| malformed(number, format!("invalid entry count {count_line:?}: {e}")))?;

        let mut frequencies = Vec::with_capacity(entries);
        for expected in 0..entries {
            let (number, line) = lines.next().ok_or_else(|| {
                malformed(
                    expected + 3,
                    format!("expected {entries} entries, found {expected}"),
                )
            })?;
            frequencies.push(parse_entry(number, line)?);
        }

        debug!("parsed artifact with {} bits and {} entries", stream.len(), entries);

        Ok(Self::new(EncodedStream::from(stream), frequencies))
    }

    /// Reads and parses the artifact stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Stores the artifact at `path`, replacing any existing file.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

fn parse_entry(number: usize, line: &str) -> Result<FrequencyEntry> {
    let (symbol, rest) = match line.strip_prefix(ESCAPED_NEWLINE) {
        Some(rest) => ('\n', rest),
        None => {
            let mut chars = line.chars();
            let symbol = chars
                .next()
                .ok_or_else(|| malformed(number, "empty frequency entry"))?;
            (symbol, chars.as_str())
        }
    };

    let count = rest
        .strip_prefix(SEPARATOR)
        .ok_or_else(|| malformed(number, format!("expected '{SEPARATOR}' after {symbol:?}")))?;
    let count = count
        .trim()
        .parse::<Freq>()
        .map_err(|e| malformed(number, format!("invalid count {count:?}: {e}")))?;

    Ok(FrequencyEntry::new(symbol, count))
}

fn malformed(line: usize, reason: impl Into<String>) -> CodecError {
    CodecError::MalformedArtifact {
        line,
        reason: reason.into(),
    }
}

impl From<&HuffmanCodec> for Artifact {
    fn from(codec: &HuffmanCodec) -> Self {
        Self::new(codec.encoded().clone(), codec.frequencies().to_vec())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.stream)?;
        writeln!(f, "{}", self.frequencies.len())?;

        for entry in &self.frequencies {
            match entry.symbol {
                '\n' => f.write_str(ESCAPED_NEWLINE)?,
                symbol => write!(f, "{symbol}")?,
            }
            writeln!(f, "{SEPARATOR}{}", entry.count)?;
        }

        writeln!(f)
    }
}
