//! Property tests: arbitrary codewords never panic or read out of bounds,
//! and every failure is one of the documented reasons.

use proptest::prelude::*;
use qr_payload::tools::BitWriter;
use qr_payload::{DecodeError, DecodeErrorKind, decode, decode_segments};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn random_codewords_never_panic(
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
        version in 1u8..=40,
    ) {
        match decode(&bytes, version) {
            Ok(payload) => prop_assert!(payload.len() <= bytes.len()),
            Err(err) => prop_assert_ne!(err.kind(), DecodeErrorKind::InvalidVersion),
        }
    }

    #[test]
    fn segments_agree_with_decode(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        version in 1u8..=40,
    ) {
        let payload = decode(&bytes, version);
        let segments = decode_segments(&bytes, version);
        match (payload, segments) {
            (Ok(payload), Ok(segments)) => {
                let joined: Vec<u8> = segments
                    .iter()
                    .flat_map(|s| s.payload_bytes().iter().copied())
                    .collect();
                prop_assert_eq!(payload.as_bytes(), &joined[..]);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "decode {:?} vs segments {:?}", a, b),
        }
    }

    #[test]
    fn out_of_range_version_always_rejected(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        version in prop_oneof![Just(0u8), 41u8..=255],
    ) {
        prop_assert_eq!(decode(&bytes, version), Err(DecodeError::InvalidVersion { version: i64::from(version) }));
    }

    #[test]
    fn byte_segment_roundtrip(
        data in proptest::collection::vec(any::<u8>(), 0..=255),
        version in 1u8..=40,
        pad in proptest::collection::vec(any::<u8>(), 0..8),
    ) {
        let mut w = BitWriter::new();
        w.push_byte_segment(&data, version);
        w.push_terminator();
        let mut bytes = w.into_bytes();
        bytes.extend_from_slice(&pad);
        let payload = decode(&bytes, version).unwrap();
        prop_assert_eq!(payload.as_bytes(), &data[..]);
    }
}
