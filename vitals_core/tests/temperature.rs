use rstest::rstest;
use vitals_core::temperature::{estimate, estimate_body_temperature, interpret_temperature};
use vitals_core::{TemperatureBand, TemperatureInput, TemperatureModel};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_reading_saturates_and_scores_085() {
    let model = TemperatureModel::default();
    let (temp, confidence) = estimate(&model, 36.0, 90, 25.0);
    // ΔT = 11 °C drives the regression past the upper clamp.
    assert!(close(temp, 42.5), "temp = {temp}");
    // 0.35 + 0.40·0.75 + 0.20·1.0
    assert!(close(confidence, 0.85), "confidence = {confidence}");
}

#[test]
fn in_range_regression_is_not_clamped() {
    let model = TemperatureModel::default();
    // 1.15·6 + 0.52·36 + 0.65·ln(120) + 8.4 = 37.13
    let (temp, confidence) = estimate(&model, 36.0, 120, 30.0);
    assert!(close(temp, 37.1), "temp = {temp}");
    assert!(close(confidence, 0.90), "capped confidence = {confidence}");
    assert_eq!(interpret_temperature(temp), TemperatureBand::Normal);
}

#[test]
fn longer_contact_raises_confidence() {
    let model = TemperatureModel::default();
    let (_, low) = estimate(&model, 36.0, 10, 25.0);
    let (_, high) = estimate(&model, 36.0, 180, 25.0);
    assert!(high > low, "{high} should exceed {low}");
    assert!(close(low, 0.58));
}

#[test]
fn cooling_contact_earns_no_heat_credit() {
    let model = TemperatureModel::default();
    // Battery colder than ambient: heat term is zero, time term at 60/120.
    let (temp, confidence) = estimate(&model, 20.0, 60, 25.0);
    assert!(close(temp, 34.5));
    assert!(close(confidence, 0.55), "confidence = {confidence}");
}

#[test]
fn zero_contact_time_uses_one_second_floor() {
    let model = TemperatureModel::default();
    let (temp, confidence) = estimate(&model, 35.0, 0, 30.0);
    assert!(temp.is_finite());
    assert!((34.5..=42.5).contains(&temp));
    // Time term contributes nothing at t = 0.
    assert!(close(confidence, 0.55), "confidence = {confidence}");
}

#[test]
fn default_ambient_comes_from_model() {
    let model = TemperatureModel::default();
    let implicit = estimate_body_temperature(&model, &TemperatureInput::new(36.0, 90));
    let explicit =
        estimate_body_temperature(&model, &TemperatureInput::new(36.0, 90).with_ambient(25.0));
    assert_eq!(implicit, explicit);
    assert_eq!(implicit.band, TemperatureBand::SevereFever);
    assert_eq!(implicit.interpretation(), TemperatureBand::SevereFever.description());
}

#[test]
fn explicit_zero_ambient_is_not_defaulted() {
    let model = TemperatureModel::default();
    let cold_room =
        estimate_body_temperature(&model, &TemperatureInput::new(30.0, 90).with_ambient(0.0));
    let defaulted = estimate_body_temperature(&model, &TemperatureInput::new(30.0, 90));
    // 30 °C above a 0 °C room saturates the regression; against 25 °C it bottoms out.
    assert_eq!(cold_room.estimated_temp, 42.5);
    assert_eq!(cold_room.band, TemperatureBand::SevereFever);
    assert_eq!(defaulted.estimated_temp, 34.5);
    assert_eq!(defaulted.band, TemperatureBand::HypothermiaPossible);
}

#[test]
fn recalibration_changes_estimate_without_code_change() {
    let flat = TemperatureModel {
        alpha: 0.0,
        beta: 0.0,
        gamma: 0.0,
        delta: 36.6,
        ..TemperatureModel::default()
    };
    let (temp, _) = estimate(&flat, 50.0, 300, 10.0);
    assert!(close(temp, 36.6));
}

#[test]
fn nan_reading_stays_inside_clamp() {
    let model = TemperatureModel::default();
    let (temp, confidence) = estimate(&model, f64::NAN, 60, 25.0);
    assert!((34.5..=42.5).contains(&temp));
    assert!((0.0..=0.9).contains(&confidence));
}

#[rstest]
#[case(35.99, TemperatureBand::HypothermiaPossible)]
#[case(36.0, TemperatureBand::Normal)]
#[case(37.49, TemperatureBand::Normal)]
#[case(37.5, TemperatureBand::SlightlyElevated)]
#[case(37.99, TemperatureBand::SlightlyElevated)]
#[case(38.0, TemperatureBand::MildFever)]
#[case(38.99, TemperatureBand::MildFever)]
#[case(39.0, TemperatureBand::ModerateFever)]
#[case(39.99, TemperatureBand::ModerateFever)]
#[case(40.0, TemperatureBand::SevereFever)]
#[case(42.5, TemperatureBand::SevereFever)]
fn temperature_band_boundaries(#[case] temp: f64, #[case] band: TemperatureBand) {
    assert_eq!(interpret_temperature(temp), band);
}

#[test]
fn band_texts_are_distinct() {
    let bands = [
        TemperatureBand::HypothermiaPossible,
        TemperatureBand::Normal,
        TemperatureBand::SlightlyElevated,
        TemperatureBand::MildFever,
        TemperatureBand::ModerateFever,
        TemperatureBand::SevereFever,
    ];
    for (i, a) in bands.iter().enumerate() {
        for b in &bands[i + 1..] {
            assert_ne!(a.description(), b.description());
            assert_ne!(a.code(), b.code());
        }
    }
}
