#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parse errors and validation errors are fine; panics are not.
    if let Ok(cfg) = toml::from_str::<vitals_config::Config>(data)
        && cfg.validate().is_ok()
    {
        // A validated config must always produce an engine.
        assert!(vitals_core::Engine::from_config(&cfg).is_ok());
    }
});
