use huffpack_core::{build_tree, compress, decode, derive_codes, encode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_round_trip(input in prop::collection::vec(any::<u8>(), 1..2000)) {
        let root = build_tree(&input).unwrap();
        let codes = derive_codes(&root).unwrap();
        let bits = encode(&input, &codes).unwrap();
        let output = decode(&bits, &codes).unwrap();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let codes = derive_codes(&build_tree(&input).unwrap()).unwrap();
        let all: Vec<&String> = codes.values().collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_minimum_code_length(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let codes = derive_codes(&build_tree(&input).unwrap()).unwrap();
        prop_assert!(codes.values().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_length_conservation(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let codes = derive_codes(&build_tree(&input).unwrap()).unwrap();
        let bits = encode(&input, &codes).unwrap();
        let expected: usize = input.iter().map(|b| codes[b].len()).sum();
        prop_assert_eq!(bits.len(), expected);
    }

    #[test]
    fn test_determinism(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let first = compress(&input).unwrap();
        let second = compress(&input).unwrap();
        prop_assert_eq!(first.codes, second.codes);
        prop_assert_eq!(first.encoded, second.encoded);
    }

    #[test]
    fn test_json_round_trip(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let payload = compress(&input).unwrap();
        let restored = huffpack_core::Payload::from_json(&payload.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored.decompress().unwrap(), input);
    }

    #[test]
    fn test_frame_round_trip(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let payload = compress(&input).unwrap();
        let frame = huffpack_core::framing::write_frame(&payload).unwrap();
        let restored = huffpack_core::framing::read_frame(&frame).unwrap();
        prop_assert_eq!(restored.decompress().unwrap(), input);
    }
}
