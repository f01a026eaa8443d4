//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is deterministic given the same inputs: the codec is pure
//! and synchronous, so nothing here is transient or worth retrying.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a failure domain:
/// - Tree: frequency-tree construction from an input stream
/// - Codec: code derivation, encoding, and decoding
/// - Payload: persisted-artifact serialization and framing
/// - CRC: data corruption detected in a binary frame
/// - I/O: file system operations at the boundary
#[derive(Debug, Error)]
pub enum Error {
    /// Tree construction failed (e.g., empty input stream)
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Codec error (e.g., unknown symbol, truncated bit stream)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Persisted payload error (e.g., malformed JSON, bad frame header)
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// CRC validation failed, indicating frame corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Frequency-tree construction errors.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Input stream contained no symbols, so there is nothing to build from
    #[error("empty input: no symbols to build a tree from")]
    EmptyInput,
}

/// Code derivation, encoding, and decoding errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Tree traversal exceeded the maximum depth possible for a byte
    /// alphabet, indicating a malformed or cyclic tree value
    #[error("malformed tree: traversal depth {depth} exceeds maximum {max}")]
    MalformedTree { depth: usize, max: usize },

    /// A symbol in the input stream has no entry in the code table
    #[error("unknown symbol {symbol:#04x}: no code assigned")]
    UnknownSymbol { symbol: u8 },

    /// Two symbols in an external code table map to the same code string
    #[error("ambiguous code table: code {code:?} assigned to multiple symbols")]
    AmbiguousCode { code: String },

    /// The bit stream ended with a fragment that matches no code,
    /// indicating a corrupt or incomplete payload
    #[error("truncated bit stream: trailing fragment {leftover:?} matches no code")]
    TruncatedStream { leftover: String },

    /// The bit stream contained a character other than '0' or '1'
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },
}

/// Persisted-artifact errors.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid magic number in a binary frame header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Frame is too short to contain the declared contents
    #[error("frame too short: need at least {required} bytes, got {actual}")]
    FrameTooShort { required: usize, actual: usize },

    /// Declared bit length does not fit in the packed payload bytes
    #[error("bit length mismatch: header declares {declared} bits, payload holds at most {capacity}")]
    BitLenMismatch { declared: u64, capacity: u64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
