#![no_main]
use libfuzzer_sys::fuzz_target;
use vitals_core::{Engine, HrvSampleSet};

fuzz_target!(|input: (Vec<f64>, bool)| {
    let (samples, is_rr) = input;
    let engine = Engine::default();
    if let Ok(est) = engine.hrv(&HrvSampleSet::new(samples, is_rr)) {
        let m = est.metrics;
        assert!(m.hrv_sdnn >= 0.0 && m.hrv_sdnn.is_finite());
        assert!(m.hrv_rmssd >= 0.0 && m.hrv_rmssd.is_finite());
        assert!(m.mean_hr.is_finite());
    }
});
