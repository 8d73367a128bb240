use log::info;

use crate::error::Result;
use crate::huffman::code_table::CodeTable;
use crate::huffman::decoder::decode;
use crate::huffman::encoder::{encode, EncodedStream};
use crate::huffman::frequency::frequency_table;
use crate::huffman::tree::MergeTree;
use crate::FrequencyEntry;

/// A text together with everything derived from it: frequency table, tree, code table, encoded
/// stream and decoded text. Everything is computed once, when the codec is created.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    /// The source text. Unknown when the codec is rebuilt from an artifact.
    text: Option<String>,

    frequencies: Vec<FrequencyEntry>,

    tree: MergeTree,

    codes: CodeTable,

    encoded: EncodedStream,

    decoded: String,
}

impl HuffmanCodec {
    /// Analyzes and encodes `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        let frequencies = frequency_table(text);
        let tree = MergeTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        let encoded = encode(text, &codes)?;

        info!(
            "encoded {} symbols ({} distinct) into {} bits",
            text.chars().count(),
            frequencies.len(),
            encoded.len()
        );

        Ok(Self {
            text: Some(text.to_owned()),
            frequencies,
            tree,
            codes,
            encoded,
            decoded: text.to_owned(),
        })
    }

    /// Rebuilds the codec from a stored stream and the frequency table it was encoded with. The
    /// table is used in the given order, so that the very same tree is built again.
    pub fn from_artifact(encoded: EncodedStream, frequencies: Vec<FrequencyEntry>) -> Result<Self> {
        let tree = MergeTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        let decoded = decode(&encoded, &tree)?;

        info!(
            "decoded {} bits into {} symbols ({} distinct)",
            encoded.len(),
            decoded.chars().count(),
            frequencies.len()
        );

        Ok(Self {
            text: None,
            frequencies,
            tree,
            codes,
            encoded,
            decoded,
        })
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn encoded(&self) -> &EncodedStream {
        &self.encoded
    }

    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    pub fn frequencies(&self) -> &[FrequencyEntry] {
        &self.frequencies
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn tree(&self) -> &MergeTree {
        &self.tree
    }

    /// Space-separated decimal values of the encoded stream packed 8 bits at a time.
    pub fn debug_view(&self) -> String {
        self.encoded.debug_view()
    }

    /// How many bits of the decoded text (8 per symbol) each bit of the stream accounts for.
    ///
    /// The quotient is computed on integers, so it is truncated. Returns `None` when the stream is
    /// empty, which happens for texts made of a single distinct symbol.
    pub fn ratio(&self) -> Option<f64> {
        let bits = self.encoded.len();
        if bits == 0 {
            return None;
        }
        Some(((self.decoded.chars().count() * 8) / bits) as f64)
    }
}
