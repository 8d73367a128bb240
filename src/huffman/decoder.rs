use crate::error::{CodecError, Result};
use crate::huffman::encoder::EncodedStream;
use crate::huffman::tree::{HuffNode, MergeTree};
use crate::Symbol;

/// Decodes the whole stream by walking `tree` bit by bit: '0' goes left, '1' goes right and every
/// leaf reached emits its symbol and restarts the walk from the root.
///
/// # Degenerate trees
/// When the tree is a single leaf every code is empty, so walking it would never consume a bit.
/// In that case the empty stream decodes to the symbol repeated as many times as its frequency,
/// while a non-empty stream is rejected with [`CodecError::DegenerateTree`]. The frequency comes
/// from the stored table, so a count that doesn't fit in memory fails with
/// [`CodecError::OversizedOutput`] instead of aborting.
pub fn decode(stream: &EncodedStream, tree: &MergeTree) -> Result<String> {
    if let HuffNode::Leaf { symbol, freq } = tree.root() {
        return match stream.is_empty() {
            true => repeat_symbol(*symbol, *freq),
            false => Err(CodecError::DegenerateTree {
                symbol: *symbol,
                stream_len: stream.len(),
            }),
        };
    }

    let mut decoded = String::new();
    let mut bits = stream.as_str().chars().enumerate().peekable();

    while bits.peek().is_some() {
        let mut node = tree.root();

        // walk down until a leaf is reached
        loop {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    decoded.push(*symbol);
                    break;
                }
                HuffNode::Internal { left, right, .. } => {
                    node = match bits.next() {
                        Some((_, '0')) => left.as_ref(),
                        Some((_, '1')) => right.as_ref(),
                        Some((position, found)) => {
                            return Err(CodecError::InvalidBit { position, found })
                        }
                        None => {
                            return Err(CodecError::TruncatedStream {
                                position: stream.len(),
                            })
                        }
                    };
                }
            }
        }
    }

    Ok(decoded)
}

fn repeat_symbol(symbol: Symbol, count: usize) -> Result<String> {
    let oversized = || CodecError::OversizedOutput { symbol, count };

    let bytes = count.checked_mul(symbol.len_utf8()).ok_or_else(oversized)?;
    let mut decoded = String::new();
    decoded.try_reserve_exact(bytes).map_err(|_| oversized())?;

    decoded.extend(std::iter::repeat(symbol).take(count));
    Ok(decoded)
}
