use std::fmt;

use itertools::Itertools;

use crate::error::{CodecError, Result};
use crate::huffman::code_table::CodeTable;

/// The encoded form of a text: one character, '0' or '1', per bit.
///
/// Nothing is packed, so the stream is usually longer than the text it encodes. The content is
/// validated only when decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStream(String);

impl EncodedStream {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits, i.e. of characters, in the stream.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Packs every group of 8 bits into a byte, most significant bit first. The last group may
    /// be shorter and is read as a shorter binary number.
    pub fn packed(&self) -> Vec<u8> {
        self.0
            .as_bytes()
            .chunks(8)
            .map(|group| {
                group
                    .iter()
                    .fold(0_u8, |byte, bit| (byte << 1) | u8::from(*bit == b'1'))
            })
            .collect()
    }

    /// The packed bytes rendered as space-separated decimal numbers. Debug view only, this is not
    /// how streams are stored.
    pub fn debug_view(&self) -> String {
        self.packed().iter().join(" ")
    }
}

impl From<String> for EncodedStream {
    fn from(bits: String) -> Self {
        Self(bits)
    }
}

impl From<&str> for EncodedStream {
    fn from(bits: &str) -> Self {
        Self(bits.to_owned())
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replaces every symbol of `text` with its code.
///
/// Fails on the first symbol that has no entry in `table`, which means the table was built from
/// another text.
pub fn encode(text: &str, table: &CodeTable) -> Result<EncodedStream> {
    let mut bits = String::with_capacity(text.len());

    for (position, symbol) in text.chars().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(CodecError::MissingCode { symbol, position })?;
        bits.push_str(code);
    }

    Ok(EncodedStream(bits))
}
