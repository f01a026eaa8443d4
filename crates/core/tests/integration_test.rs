//! Integration tests for the full huffpack pipeline.
//!
//! These tests verify end-to-end behavior: input -> tree -> codes ->
//! encode -> persist -> reparse -> decode -> output, with verification
//! that output matches input.

use huffpack_core::{
    build_tree, compress, decode, derive_codes, encode,
    framing::{read_frame, write_frame},
    Payload,
};

/// The four core operations composed by hand round-trip exactly.
#[test]
fn test_full_pipeline_explicit_operations() {
    let input = b"hello world! this is a test of the full pipeline with some repetition: aaaaaaaaaa bbbbbbbbbb cccccccccc";

    let root = build_tree(input).expect("tree construction failed");
    let codes = derive_codes(&root).expect("code derivation failed");
    let bits = encode(input, &codes).expect("encoding failed");
    let output = decode(&bits, &codes).expect("decoding failed");

    assert_eq!(output, input, "output doesn't match input");
}

/// Persisting through the JSON document loses nothing.
#[test]
fn test_json_persistence_round_trip() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(100);

    let payload = compress(&input).expect("compression failed");
    let json = payload.to_json().expect("serialization failed");

    // Simulate the boundary: what was written is all the reader gets
    let restored = Payload::from_json(&json).expect("deserialization failed");
    let output = restored.decompress().expect("decompression failed");

    assert_eq!(output, input, "output doesn't match input");
}

/// Persisting through the binary frame loses nothing either.
#[test]
fn test_frame_persistence_round_trip() {
    let input = b"framed payloads pack bits eight to a byte";

    let payload = compress(input).expect("compression failed");
    let frame = write_frame(&payload).expect("framing failed");

    let restored = read_frame(&frame).expect("frame parsing failed");
    let output = restored.decompress().expect("decompression failed");

    assert_eq!(output, input.to_vec());
}

/// Test with all symbols present (full 256-byte alphabet).
#[test]
fn test_all_symbols() {
    let input: Vec<u8> = (0..=255).collect();

    let payload = compress(&input).expect("compression failed");
    assert_eq!(payload.codes.len(), 256);

    let json = payload.to_json().expect("serialization failed");
    let restored = Payload::from_json(&json).expect("deserialization failed");
    assert_eq!(restored.decompress().expect("decompression failed"), input);
}

/// Test with large single-symbol data.
#[test]
fn test_large_single_symbol() {
    let input = vec![b'X'; 128 * 1024];

    let payload = compress(&input).expect("compression failed");

    // One distinct symbol still gets a 1-bit code
    assert_eq!(payload.codes.len(), 1);
    assert_eq!(payload.codes[&b'X'], "0");
    assert_eq!(payload.encoded.len(), input.len());

    // The packed frame should realize the 8x reduction
    let frame = write_frame(&payload).expect("framing failed");
    assert!(frame.len() < input.len() / 2);

    let restored = read_frame(&frame).expect("frame parsing failed");
    assert_eq!(restored.decompress().expect("decompression failed"), input);
}

/// Skewed frequencies give the most common symbol the shortest code.
#[test]
fn test_common_symbol_gets_short_code() {
    let mut input = vec![b'a'; 1000];
    input.extend_from_slice(b"bcd");

    let payload = compress(&input).expect("compression failed");

    let a_len = payload.codes[&b'a'].len();
    for (&symbol, code) in &payload.codes {
        if symbol != b'a' {
            assert!(
                code.len() >= a_len,
                "rare symbol {symbol} has a shorter code than the dominant one"
            );
        }
    }
}

/// A payload decoded against a table from a different input is rejected,
/// not silently mis-decoded into garbage of the wrong shape.
#[test]
fn test_mismatched_table_surfaces_error_or_differs() {
    let payload = compress(b"abcabcabc").expect("compression failed");
    let other = compress(b"xyz").expect("compression failed");

    let swapped = Payload {
        codes: other.codes,
        encoded: payload.encoded,
    };

    match swapped.decompress() {
        Ok(decoded) => assert_ne!(decoded, b"abcabcabc".to_vec()),
        Err(_) => {}
    }
}
