//! huffpack-core: lossless Huffman entropy coding
//!
//! This library builds a prefix-free variable-length code from observed
//! symbol frequencies, encodes a byte stream into a bit sequence under that
//! code, and losslessly reconstructs the stream from the bits plus the code
//! table.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `tree`: frequency counting and bottom-up tree construction
//! - `code`: code derivation, encoding, and decoding
//! - `payload`: the persisted artifact (code table + bit string, JSON)
//! - `bitio`: packing between the logical bit string and packed bytes
//! - `framing`: compact CRC-protected binary container
//!
//! The code table is the serialized contract between encode and decode;
//! the tree itself is never persisted.
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and propagated to the caller
//! - **Pure transformations**: no shared state across calls; independent
//!   payloads may be processed concurrently without coordination
//! - **Deterministic**: tie-breaks are stable, so re-encoding the same
//!   input always produces identical codes and bits
//!
//! # Example
//!
//! ```
//! use huffpack_core::{compress, Payload};
//!
//! let payload = compress(b"abracadabra").unwrap();
//! let json = payload.to_json().unwrap();
//!
//! let restored = Payload::from_json(&json).unwrap();
//! assert_eq!(restored.decompress().unwrap(), b"abracadabra");
//! ```

pub mod bitio;
pub mod code;
pub mod error;
pub mod framing;
pub mod payload;
pub mod tree;

// Re-export commonly used types
pub use code::{decode, derive_codes, encode, CodeTable};
pub use error::{Error, Result};
pub use payload::{compress, Payload};
pub use tree::{build_tree, count_frequencies, Node};
