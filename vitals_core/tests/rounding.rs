use rstest::rstest;
use vitals_core::util::round_dp;

#[rstest]
#[case(2.675, 2, 2.67)]
#[case(0.15, 1, 0.1)]
#[case(1.005, 2, 1.0)]
#[case(20.449, 1, 20.4)]
#[case(72.26, 1, 72.3)]
#[case(-1.005, 2, -1.0)]
#[case(0.6000000000000001, 2, 0.6)]
fn rounds_the_stored_binary_value(#[case] x: f64, #[case] places: usize, #[case] expected: f64) {
    assert_eq!(round_dp(x, places), expected);
}

#[test]
fn non_finite_passes_through() {
    assert!(round_dp(f64::NAN, 1).is_nan());
    assert_eq!(round_dp(f64::INFINITY, 2), f64::INFINITY);
}
