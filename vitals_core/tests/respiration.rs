use rstest::rstest;
use vitals_core::respiration::{
    adjust_confidence, interpret_respiration, validate_and_interpret, validate_rate,
};
use vitals_core::{
    EstimateError, RangeReason, RespirationBand, RespirationCfg, RespirationInput,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn too_low_and_too_high_are_distinct_rejections() {
    let cfg = RespirationCfg::default();
    let low = validate_rate(&cfg, 3.0).unwrap_err();
    let high = validate_rate(&cfg, 61.0).unwrap_err();
    assert_eq!(
        low,
        EstimateError::OutOfRange(RangeReason::RespirationTooLow { min: 4.0 })
    );
    assert_eq!(
        high,
        EstimateError::OutOfRange(RangeReason::RespirationTooHigh { max: 60.0 })
    );
    assert_ne!(low.to_string(), high.to_string());
    assert!(low.to_string().contains("insufficient signal"));
    assert!(high.to_string().contains("noise"));
}

#[rstest]
#[case(4.0)]
#[case(16.0)]
#[case(60.0)]
fn range_edges_are_accepted(#[case] rate: f64) {
    validate_rate(&RespirationCfg::default(), rate).expect("inside accepted range");
}

#[test]
fn nan_rate_is_rejected() {
    assert!(validate_rate(&RespirationCfg::default(), f64::NAN).is_err());
}

#[rstest]
#[case(None, None, 0.5)]
#[case(Some(20.0), Some(0.8), 0.8)]
#[case(Some(30.0), Some(0.8), 0.8)]
#[case(Some(50.0), Some(0.8), 0.6)]
#[case(Some(100.0), Some(0.3), 0.1)]
#[case(Some(0.0), Some(0.0), 0.5)]
#[case(Some(50.0), Some(0.0), 0.3)]
#[case(None, Some(1.5), 1.0)]
#[case(Some(70.0), None, 0.1)]
#[case(None, Some(f64::NAN), 0.5)]
fn noise_penalty_and_floor(
    #[case] noise: Option<f64>,
    #[case] confidence: Option<f64>,
    #[case] expected: f64,
) {
    let got = adjust_confidence(&RespirationCfg::default(), noise, confidence);
    assert!(close(got, expected), "got {got}, expected {expected}");
}

#[test]
fn estimate_rounds_rate_but_bands_unrounded() {
    let cfg = RespirationCfg::default();
    let est = validate_and_interpret(
        &cfg,
        &RespirationInput {
            respiration_rate: 20.4,
            noise_level: Some(40.0),
            confidence: Some(0.9),
            ..RespirationInput::default()
        },
    )
    .unwrap();
    assert_eq!(est.respiration_rate, 20);
    assert_eq!(est.band, RespirationBand::MildlyElevated);
    assert!(close(est.confidence, 0.8));
    assert_eq!(est.interpretation(), RespirationBand::MildlyElevated.description());
}

#[test]
fn half_breaths_round_to_even() {
    let cfg = RespirationCfg::default();
    let at = |r: f64| {
        validate_and_interpret(&cfg, &RespirationInput::new(r))
            .unwrap()
            .respiration_rate
    };
    assert_eq!(at(15.6), 16);
    assert_eq!(at(16.5), 16);
    assert_eq!(at(17.5), 18);
}

#[test]
fn auxiliary_fields_do_not_change_the_result() {
    let cfg = RespirationCfg::default();
    let bare = validate_and_interpret(&cfg, &RespirationInput::new(14.0)).unwrap();
    let full = validate_and_interpret(
        &cfg,
        &RespirationInput {
            respiration_rate: 14.0,
            peaks_count: Some(7),
            duration: Some(30.0),
            ..RespirationInput::default()
        },
    )
    .unwrap();
    assert_eq!(bare, full);
}

#[test]
fn rejected_rate_yields_no_estimate() {
    let err = validate_and_interpret(&RespirationCfg::default(), &RespirationInput::new(75.0))
        .unwrap_err();
    assert!(matches!(
        err,
        EstimateError::OutOfRange(RangeReason::RespirationTooHigh { .. })
    ));
}

#[rstest]
#[case(11.9, RespirationBand::Bradypnea)]
#[case(12.0, RespirationBand::Normal)]
#[case(20.0, RespirationBand::Normal)]
#[case(20.1, RespirationBand::MildlyElevated)]
#[case(30.0, RespirationBand::MildlyElevated)]
#[case(30.1, RespirationBand::MildTachypnea)]
#[case(40.0, RespirationBand::MildTachypnea)]
#[case(40.1, RespirationBand::SevereTachypnea)]
fn respiration_band_boundaries(#[case] rate: f64, #[case] band: RespirationBand) {
    assert_eq!(interpret_respiration(rate), band);
}
