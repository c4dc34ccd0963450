use proptest::prelude::*;
use shortcode::scramble::params::{GROUP_ORDER, MODULUS};
use shortcode::{ShortCodeError, deshort_code, init, short_code};

#[test]
fn reference_vectors() {
    assert_eq!(short_code(0), "GCWB5");
    assert_eq!(short_code(1), "CR54K");
    assert_eq!(short_code(123), "K8$PN");

    assert_eq!(deshort_code("GCWB5"), Ok(0));
    assert_eq!(deshort_code("CR54K"), Ok(1));
    assert_eq!(deshort_code("K8$PN"), Ok(123));
}

#[test]
fn round_trip_of_early_counters() {
    for i in 0..10_000 {
        assert_eq!(deshort_code(&short_code(i)), Ok(i as u32));
    }
}

#[test]
fn round_trip_strided_over_full_period() {
    // Prime stride, ~160 counters spread across the whole domain.
    let mut i = 0u64;
    while i < u64::from(GROUP_ORDER) {
        assert_eq!(deshort_code(&short_code(i)), Ok(i as u32));
        i += 104_729;
    }
}

#[test]
fn codes_are_periodic_in_the_group_order() {
    for i in [0u64, 1, 123, 999_983] {
        assert_eq!(short_code(i), short_code(i + u64::from(GROUP_ORDER)));
    }
}

#[test]
fn consecutive_counters_share_no_code_prefix() {
    // The point of the scheme: neighbouring counters should not produce
    // visually similar codes.
    for i in 0..100 {
        let a = short_code(i);
        let b = short_code(i + 1);
        assert_ne!(a[..2], b[..2], "counters {i} and {} collide", i + 1);
    }
}

#[test]
fn decoding_is_case_insensitive() {
    assert_eq!(deshort_code("k8$pn"), Ok(123));
    assert_eq!(deshort_code("gcwb5"), Ok(0));
}

#[test]
fn malformed_codes_are_rejected() {
    assert_eq!(deshort_code("K8$P"), Err(ShortCodeError::InvalidLength(4)));
    assert_eq!(
        deshort_code("AAAAA"),
        Err(ShortCodeError::InvalidCharacter('A'))
    );
}

#[test]
fn unreachable_values_are_rejected() {
    // "BBBBB" decodes to 0, which the scrambler can never produce.
    assert_eq!(deshort_code("BBBBB"), Err(ShortCodeError::InvalidCode));

    // "$$$$$" decodes to 2^25 - 1, which is past the modulus.
    assert!(u64::from(MODULUS) < 1 << 25);
    assert_eq!(deshort_code("$$$$$"), Err(ShortCodeError::InvalidCode));
}

#[test]
fn init_is_idempotent() {
    init();
    init();
    assert_eq!(deshort_code(&short_code(42)), Ok(42));
}

proptest! {
    #[test]
    fn round_trip(i in 0u64..u64::from(GROUP_ORDER)) {
        prop_assert_eq!(deshort_code(&short_code(i)), Ok(i as u32));
    }
}
