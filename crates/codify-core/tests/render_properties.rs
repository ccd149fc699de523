use codify_core::{generate, sanitize, Pack, Resource};
use proptest::prelude::*;

/// Parses the hex literals back out of a generated array definition.
fn parse_array_bytes(source: &str, name: &str) -> Vec<u8> {
    let prefix = format!("uint8_t {name}[] = {{");
    let line = source
        .lines()
        .find(|l| l.starts_with(&prefix))
        .expect("array definition missing from source");
    let open = line.find('{').unwrap();
    let close = line.rfind('}').unwrap();
    line[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| u8::from_str_radix(t.trim_start_matches("0x"), 16).expect("bad hex literal"))
        .collect()
}

proptest! {
    #[test]
    fn size_constant_and_literal_count_match_byte_count(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let pack = Pack::new("pack", vec![Resource::new("blob.bin", bytes.clone())], "");
        let (header, source) = generate(&pack).unwrap();

        prop_assert!(
            header.contains(&format!("const size_t blob_bin_size={};", bytes.len())),
            "size constant missing from header"
        );
        prop_assert_eq!(parse_array_bytes(&source, "blob_bin").len(), bytes.len());
    }

    #[test]
    fn hex_literals_round_trip(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let pack = Pack::new("pack", vec![Resource::new("blob.bin", bytes.clone())], "");
        let (_, source) = generate(&pack).unwrap();

        prop_assert_eq!(parse_array_bytes(&source, "blob_bin"), bytes);
    }

    #[test]
    fn sanitize_is_idempotent(name in "[a-zA-Z0-9._-]{1,32}") {
        let once = sanitize(&name);
        prop_assert_eq!(sanitize(&once), once.clone());
    }
}
