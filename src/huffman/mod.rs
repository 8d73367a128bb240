pub mod code_table;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use code_table::CodeTable;
pub use codec::HuffmanCodec;
pub use encoder::EncodedStream;
pub use tree::{HuffNode, MergeTree};
