use timehash::{encode, encode_datetime, TimeHashError, DOMAIN_END};

use chrono::{TimeZone, Utc};

#[test]
fn epoch_zero_is_all_zeros() {
    assert_eq!(encode(0.0, 4).unwrap(), "0000");
}

#[test]
fn domain_end_is_all_fs() {
    assert_eq!(encode(DOMAIN_END, 4).unwrap(), "ffff");
}

#[test]
fn known_timestamps() {
    assert_eq!(encode(1_700_000_000.0, 10).unwrap(), "bafbed1fe1");
    assert_eq!(encode(1_700_000_000.0, 6).unwrap(), "bafbed");
    assert_eq!(encode(1_234_567_890.0, 8).unwrap(), "abcbf000");
}

#[test]
fn shorter_hash_is_prefix_of_longer() {
    let long = encode(1_700_000_000.0, 12).unwrap();
    for p in 1..12 {
        assert_eq!(encode(1_700_000_000.0, p).unwrap(), long[..p]);
    }
}

#[test]
fn midpoint_tie_goes_to_lower_half() {
    let mid = DOMAIN_END / 2.0;
    assert_eq!(encode(mid, 1).unwrap(), "b");
    assert_eq!(encode(mid, 3).unwrap(), "bff");
    assert_eq!(encode(mid + 1.0, 3).unwrap(), "c00");
}

#[test]
fn out_of_domain_clamps_to_edges() {
    assert_eq!(encode(-5.0, 3).unwrap(), "000");
    assert_eq!(encode(DOMAIN_END + 100.0, 3).unwrap(), "fff");
    assert_eq!(encode(f64::NEG_INFINITY, 2).unwrap(), "00");
    assert_eq!(encode(f64::INFINITY, 2).unwrap(), "ff");
}

#[test]
fn length_matches_precision() {
    for p in 1..=24 {
        assert_eq!(encode(1_600_000_000.5, p).unwrap().len(), p);
    }
}

#[test]
fn zero_precision_rejected() {
    assert_eq!(encode(0.0, 0), Err(TimeHashError::InvalidPrecision(0)));
}

#[test]
fn nan_rejected() {
    assert!(matches!(
        encode(f64::NAN, 4),
        Err(TimeHashError::InvalidTimestamp(_))
    ));
}

#[test]
fn datetime_matches_epoch_seconds() {
    let dt = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    assert_eq!(dt.timestamp(), 1_700_000_000);
    assert_eq!(encode_datetime(&dt, 10).unwrap(), "bafbed1fe1");
}

#[test]
fn datetime_keeps_subsecond_part() {
    let base = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    let later = base + chrono::Duration::milliseconds(500);
    assert_eq!(
        encode_datetime(&later, 14).unwrap(),
        encode(1_700_000_000.5, 14).unwrap()
    );
}
