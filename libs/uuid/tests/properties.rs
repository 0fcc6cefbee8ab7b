//! Property tests for parsing and generation.

use proptest::prelude::*;
use proptest::sample::select;
use randid_uuid::{
    is_valid, parse, UuidV4, HYPHEN_OFFSETS, UUID_LEN, VARIANT_OFFSET, VERSION_OFFSET,
};

const VALID_PATTERN: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}";

/// Bytes that must be rejected at `offset`.
fn wrong_bytes_at(offset: usize) -> &'static [u8] {
    if HYPHEN_OFFSETS.contains(&offset) {
        b"0aF_ x"
    } else if offset == VERSION_OFFSET {
        b"0123567cdefABCDEF-"
    } else if offset == VARIANT_OFFSET {
        b"01234567cdefCDEF-"
    } else {
        b"gGzZ- _"
    }
}

fn mutated() -> impl Strategy<Value = String> {
    (VALID_PATTERN, 0..UUID_LEN).prop_flat_map(|(valid, offset)| {
        select(wrong_bytes_at(offset).to_vec()).prop_map(move |b| {
            let mut bytes = valid.clone().into_bytes();
            bytes[offset] = b;
            String::from_utf8(bytes).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn generated_uuids_have_layout(_round in 0..256u32) {
        let id = randid_uuid::generate().unwrap();
        let s = id.as_str();
        prop_assert!(is_valid(s));
        prop_assert_eq!(s.len(), 36);
        prop_assert_eq!(s.as_bytes()[14], b'4');
        prop_assert!(b"89abAB".contains(&s.as_bytes()[19]));
    }

    #[test]
    fn generated_uuids_roundtrip(_round in 0..256u32) {
        let id = randid_uuid::generate_or_abort();
        let parsed = parse(id.as_str()).unwrap();
        prop_assert_eq!(parsed.as_str(), id.as_str());
    }

    #[test]
    fn pattern_matches_are_accepted_verbatim(s in VALID_PATTERN) {
        prop_assert!(is_valid(&s));
        let id = parse(&s).unwrap();
        prop_assert_eq!(id.as_str(), s.as_str());
    }

    #[test]
    fn case_is_irrelevant_for_validity(s in VALID_PATTERN) {
        let lower = parse(&s.to_ascii_lowercase()).unwrap();
        let upper = parse(&s.to_ascii_uppercase()).unwrap();
        prop_assert!(lower.eq_ignore_case(&upper));
    }

    #[test]
    fn single_wrong_byte_is_rejected(s in mutated()) {
        prop_assert!(!is_valid(&s));
        let err = parse(&s).unwrap_err();
        prop_assert!(err.is_invalid_format());
        prop_assert_eq!(err.input(), Some(s.as_str()));
    }

    #[test]
    fn predicate_agrees_with_parse(s in "\\PC{0,40}") {
        prop_assert_eq!(is_valid(&s), parse(&s).is_ok());
    }

    #[test]
    fn wrong_length_is_rejected(s in VALID_PATTERN, cut in 1..36usize, extra in "[0-9a-f]{1,4}") {
        let short = &s[..UUID_LEN - cut];
        prop_assert!(!is_valid(short));
        prop_assert!(parse(short).is_err());

        let long = format!("{s}{extra}");
        prop_assert!(!is_valid(&long));
        prop_assert!(parse(&long).is_err());
    }

    #[test]
    fn json_roundtrip(s in VALID_PATTERN) {
        let id = UuidV4::parse(&s).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let back: UuidV4 = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, id);
    }
}
