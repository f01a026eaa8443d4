//! Prefix-code derivation, encoding, and decoding.
//!
//! Codes are derived by walking the tree root-to-leaf: taking the left child
//! appends '0', the right child appends '1'. Because every code corresponds
//! to a distinct leaf of a binary tree, no code is a prefix of another, and
//! decoding by longest-buffer match is unambiguous.
//!
//! Encode and decode accept the code table as an explicit argument: the
//! table is the serialized contract between the two sides, and at decode
//! time it arrives from a persisted payload that may be tampered with or
//! mismatched. Both operations therefore validate it rather than trusting
//! construction invariants.

use std::collections::HashMap;

use crate::error::{CodecError, Result};
use crate::tree::Node;

/// Mapping from symbol to its '0'/'1' code string.
///
/// A BTreeMap keeps iteration and serialization order deterministic.
pub type CodeTable = std::collections::BTreeMap<u8, String>;

/// Upper bound on code length for a byte alphabet.
///
/// A sound tree over at most 256 leaves cannot produce a path longer than
/// 255 edges; anything deeper means the tree value is malformed or cyclic.
pub const MAX_CODE_LEN: usize = 256;

/// Derive the code table from a Huffman tree.
///
/// Iterative depth-first traversal with an explicit stack; a fresh table is
/// allocated on every call. A lone leaf at the root receives the one-bit
/// code "0" so that single-distinct-symbol inputs still get a decodable,
/// non-empty code.
///
/// # Errors
/// Returns `CodecError::MalformedTree` if any path exceeds [`MAX_CODE_LEN`]
/// bits.
pub fn derive_codes(root: &Node) -> Result<CodeTable> {
    let mut codes = CodeTable::new();
    let mut stack: Vec<(&Node, String)> = vec![(root, String::new())];

    while let Some((node, path)) = stack.pop() {
        if path.len() > MAX_CODE_LEN {
            return Err(CodecError::MalformedTree {
                depth: path.len(),
                max: MAX_CODE_LEN,
            }
            .into());
        }

        match node {
            Node::Leaf { symbol, .. } => {
                let code = if path.is_empty() {
                    "0".to_string()
                } else {
                    path
                };
                codes.insert(*symbol, code);
            }
            Node::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push('0');
                let mut right_path = path;
                right_path.push('1');
                stack.push((right, right_path));
                stack.push((left, left_path));
            }
        }
    }

    Ok(codes)
}

/// Encode a byte stream into a '0'/'1' bit string under the given codes.
///
/// # Errors
/// Returns `CodecError::UnknownSymbol` if a byte in `data` has no entry in
/// `codes`. This cannot happen when the table was derived from a tree built
/// over the same stream, but the table may come from an external source.
pub fn encode(data: &[u8], codes: &CodeTable) -> Result<String> {
    let mut bits = String::new();
    for &byte in data {
        match codes.get(&byte) {
            Some(code) => bits.push_str(code),
            None => return Err(CodecError::UnknownSymbol { symbol: byte }.into()),
        }
    }
    Ok(bits)
}

/// Decode a '0'/'1' bit string back into the original byte stream.
///
/// Inverts the code table, then scans the bits left to right accumulating a
/// buffer; whenever the buffer exactly matches a code, the corresponding
/// symbol is emitted and the buffer resets.
///
/// # Errors
/// - `CodecError::AmbiguousCode` if two symbols share a code string (cannot
///   happen for a table produced by [`derive_codes`], but external tables
///   must be validated)
/// - `CodecError::InvalidBit` if `bits` contains a non-'0'/'1' character
/// - `CodecError::TruncatedStream` if the stream ends mid-code: the trailing
///   fragment is surfaced rather than silently dropped
pub fn decode(bits: &str, codes: &CodeTable) -> Result<Vec<u8>> {
    let mut inverse: HashMap<&str, u8> = HashMap::with_capacity(codes.len());
    for (&symbol, code) in codes {
        if inverse.insert(code.as_str(), symbol).is_some() {
            return Err(CodecError::AmbiguousCode { code: code.clone() }.into());
        }
    }

    let mut decoded = Vec::new();
    let mut buffer = String::new();
    for (position, bit) in bits.chars().enumerate() {
        if bit != '0' && bit != '1' {
            return Err(CodecError::InvalidBit {
                found: bit,
                position,
            }
            .into());
        }
        buffer.push(bit);
        if let Some(&symbol) = inverse.get(buffer.as_str()) {
            decoded.push(symbol);
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        return Err(CodecError::TruncatedStream { leftover: buffer }.into());
    }

    Ok(decoded)
}
