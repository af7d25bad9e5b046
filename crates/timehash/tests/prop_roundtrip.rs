/// Property-based tests for the time hash codec.
///
/// Uses `proptest` to check the codec's laws over random timestamps,
/// precisions, and hash strings:
///
/// - decoding an encoded timestamp lands within the reported error
/// - encoding is monotonic in the timestamp
/// - hash length equals the requested precision
/// - neighbours decode strictly before/after and undo each other
/// - `shift` agrees with repeated single steps
///
/// The round-trip bound is exact in real arithmetic. Past ~11 characters the
/// interval endpoints no longer fit in an f64 mantissa, so the check allows a
/// few ulps at domain scale.
use proptest::prelude::*;
use timehash::{
    after, before, decode, decode_exactly, encode, error_for_precision, shift, validate,
    DOMAIN_END,
};

const ULP_SLACK: f64 = 4.0 * f64::EPSILON * DOMAIN_END;

// ============================================================================
// Strategies
// ============================================================================

fn arb_timestamp() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0..DOMAIN_END,
        1 => (0u64..4_039_372_800u64).prop_map(|s| s as f64),
        1 => Just(0.0),
    ]
}

/// A hash that is neither all-`0` nor all-`f`.
fn arb_interior_hash(max_len: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[01abcdef]{{1,{max_len}}}"))
        .unwrap()
        .prop_filter("must have a predecessor and a successor", |h| {
            h.chars().any(|c| c != '0') && h.chars().any(|c| c != 'f')
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn roundtrip_within_error(t in arb_timestamp(), p in 1usize..=20) {
        let hash = encode(t, p).unwrap();
        let (center, error) = decode_exactly(&hash).unwrap();
        prop_assert_eq!(error, error_for_precision(p));
        prop_assert!(
            (center - t).abs() <= error + ULP_SLACK,
            "t={} p={} hash={} center={} error={}", t, p, hash, center, error
        );
    }

    #[test]
    fn encode_is_monotonic(a in arb_timestamp(), b in arb_timestamp(), p in 1usize..=20) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(encode(lo, p).unwrap() <= encode(hi, p).unwrap());
    }

    #[test]
    fn length_equals_precision(t in arb_timestamp(), p in 1usize..=32) {
        let hash = encode(t, p).unwrap();
        prop_assert_eq!(hash.len(), p);
        prop_assert!(validate(&hash));
    }

    #[test]
    fn neighbours_decode_in_order(hash in arb_interior_hash(12)) {
        let prev = before(&hash).unwrap();
        let next = after(&hash).unwrap();
        prop_assert!(decode(&prev).unwrap() < decode(&hash).unwrap());
        prop_assert!(decode(&hash).unwrap() < decode(&next).unwrap());
        prop_assert!(prev < hash && hash < next);
        prop_assert_eq!(prev.len(), hash.len());
        prop_assert_eq!(next.len(), hash.len());
    }

    #[test]
    fn neighbours_are_inverse(hash in arb_interior_hash(24)) {
        prop_assert_eq!(&after(&before(&hash).unwrap()).unwrap(), &hash);
        prop_assert_eq!(&before(&after(&hash).unwrap()).unwrap(), &hash);
    }

    #[test]
    fn shift_equals_repeated_after(hash in arb_interior_hash(12), k in 0i64..40) {
        let mut stepped = Ok(hash.clone());
        for _ in 0..k {
            stepped = stepped.and_then(|h| after(&h));
        }
        prop_assert_eq!(shift(&hash, k).ok(), stepped.ok());
    }

    #[test]
    fn shift_is_reversible(hash in arb_interior_hash(20), k in -1_000_000i64..1_000_000) {
        if let Ok(moved) = shift(&hash, k) {
            prop_assert_eq!(shift(&moved, -k).unwrap(), hash.clone());
        }
    }

    #[test]
    fn validate_agrees_with_decode(s in "[0-9a-z]{0,12}") {
        prop_assert_eq!(validate(&s), decode_exactly(&s).is_ok());
    }
}
