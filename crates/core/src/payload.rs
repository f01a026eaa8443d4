//! Persisted payload: the code table plus the encoded bit string.
//!
//! The payload is the durable artifact the boundary writes and reads; the
//! frequency table and tree exist only while codes are being built. The
//! on-disk shape is a self-describing JSON document with two fields:
//!
//! ```json
//! { "codes": { "97": "1", "98": "0" }, "encoded": "110" }
//! ```
//!
//! Symbol keys are byte values rendered as decimal strings, so control
//! characters, whitespace, and non-text bytes survive a write/read cycle
//! without loss of identity. For a compact on-disk form see
//! [`framing`](crate::framing), which packs the bits eight to a byte.

use serde::{Deserialize, Serialize};

use crate::code::{decode, derive_codes, encode, CodeTable};
use crate::error::{PayloadError, Result};
use crate::tree::build_tree;

/// A complete encoded payload: everything needed to reconstruct the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Symbol-to-code mapping used to encode the stream
    pub codes: CodeTable,
    /// Concatenated codes in original stream order, as '0'/'1' characters
    pub encoded: String,
}

impl Payload {
    /// Serialize to the JSON document form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PayloadError::Json(e).into())
    }

    /// Deserialize from the JSON document form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PayloadError::Json(e).into())
    }

    /// Reconstruct the original byte stream from this payload.
    ///
    /// The code table is treated as untrusted: ambiguous tables, invalid
    /// bit characters, and truncated streams all surface as errors.
    pub fn decompress(&self) -> Result<Vec<u8>> {
        decode(&self.encoded, &self.codes)
    }
}

/// Compress a byte stream into a payload.
///
/// Builds a fresh tree and code table over `data`, then encodes it.
///
/// # Errors
/// Returns `TreeError::EmptyInput` for an empty stream.
pub fn compress(data: &[u8]) -> Result<Payload> {
    let root = build_tree(data)?;
    let codes = derive_codes(&root)?;
    let encoded = encode(data, &codes)?;
    Ok(Payload { codes, encoded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, Error};

    #[test]
    fn test_compress_decompress_round_trip() {
        let data = b"hello world! hello huffman!";
        let payload = compress(data).unwrap();
        assert_eq!(payload.decompress().unwrap(), data.to_vec());
    }

    #[test]
    fn test_json_round_trip() {
        let data = b"some text with\nnewlines\tand tabs";
        let payload = compress(data).unwrap();
        let json = payload.to_json().unwrap();
        let restored = Payload::from_json(&json).unwrap();
        assert_eq!(restored, payload);
        assert_eq!(restored.decompress().unwrap(), data.to_vec());
    }

    #[test]
    fn test_json_preserves_binary_symbols() {
        // Every byte value, including NUL and high bytes
        let data: Vec<u8> = (0..=255).collect();
        let payload = compress(&data).unwrap();
        let json = payload.to_json().unwrap();
        let restored = Payload::from_json(&json).unwrap();
        assert_eq!(restored.decompress().unwrap(), data);
    }

    #[test]
    fn test_json_field_names() {
        let payload = compress(b"aab").unwrap();
        let json = payload.to_json().unwrap();
        assert!(json.contains("\"codes\""));
        assert!(json.contains("\"encoded\""));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Payload::from_json("{\"codes\": {}");
        assert!(matches!(result, Err(Error::Payload(_))));
    }

    #[test]
    fn test_tampered_table_rejected() {
        let data = b"aab";
        let mut payload = compress(data).unwrap();
        // Drop one symbol's entry: its bits no longer resolve
        payload.codes.remove(&b'b');
        assert!(matches!(
            payload.decompress(),
            Err(Error::Codec(CodecError::TruncatedStream { .. }))
        ));
    }

    #[test]
    fn test_determinism_across_builds() {
        let data = b"determinism determinism determinism";
        let first = compress(data).unwrap();
        let second = compress(data).unwrap();
        assert_eq!(first.codes, second.codes);
        assert_eq!(first.encoded, second.encoded);
    }
}
