use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_config(dir: &tempfile::TempDir, toml: &str) -> PathBuf {
    let path = dir.path().join("vitals.toml");
    fs::write(&path, toml).unwrap();
    path
}

#[rstest]
#[case(&["--help"], 0, "Usage:", "stdout")]
#[case(&["temperature", "--battery-temp", "36", "--contact-time", "90", "--ambient-temp", "25"], 0, "42.5", "stdout")]
#[case(&["temperature", "--battery-temp", "36", "--contact-time", "120", "--ambient-temp", "30"], 0, "Normal temperature", "stdout")]
#[case(&["temperature", "--battery-temp", "36", "--contact-time", "5"], 1, "contact_time", "stderr")]
#[case(&["temperature", "--battery-temp", "70", "--contact-time", "60"], 1, "battery_temp", "stderr")]
#[case(&["temperature"], 2, "required", "stderr")]
#[case(&["hrv", "--samples", "72,74,70,73,75,71,72,68,74,73"], 0, "72.2", "stdout")]
#[case(&["hrv", "--samples", "800,810,790", "--rr"], 0, "RMSSD: 15.8 ms", "stdout")]
#[case(&["hrv", "--samples", "72"], 4, "Not enough samples", "stderr")]
#[case(&["hrv", "--samples", "10,300,72"], 3, "40–200 bpm", "stderr")]
#[case(&["respiration", "--rate", "16"], 0, "Normal rate", "stdout")]
#[case(&["respiration", "--rate", "3"], 3, "insufficient signal", "stderr")]
#[case(&["respiration", "--rate", "61"], 3, "probable noise", "stderr")]
#[case(&["respiration", "--rate", "90"], 1, "invalid input", "stderr")]
#[case(&["respiration", "--rate", "16", "--noise-level", "150"], 1, "noise_level", "stderr")]
#[case(&["units"], 0, "resp/min", "stdout")]
#[case(&["self-check"], 0, "self-check ok", "stdout")]
fn cli_table_cases(
    #[case] args: &[&str],
    #[case] code: i32,
    #[case] needle: &str,
    #[case] stream: &str,
) {
    let mut cmd = Command::cargo_bin("vitals").unwrap();
    let assert = cmd.args(args).assert().code(code);
    match stream {
        "stdout" => {
            assert.stdout(predicate::str::contains(needle));
        }
        _ => {
            assert.stderr(predicate::str::contains(needle));
        }
    }
}

#[test]
fn text_output_carries_disclaimer() {
    let mut cmd = Command::cargo_bin("vitals").unwrap();
    cmd.args(["respiration", "--rate", "25", "--noise-level", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a certified medical device"))
        .stdout(predicate::str::contains("confidence 0.20"));
}

#[test]
fn config_file_recalibrates_temperature() {
    let dir = tempdir().unwrap();
    let cfg = write_config(
        &dir,
        r#"
[temperature]
alpha = 0.0
beta = 0.0
gamma = 0.0
delta = 36.6
"#,
    );
    let mut cmd = Command::cargo_bin("vitals").unwrap();
    cmd.arg("--config")
        .arg(&cfg)
        .args(["temperature", "--battery-temp", "40", "--contact-time", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("36.6"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let cfg = write_config(&dir, "[hrv]\nhr_min_bpm = 300.0\n");
    let mut cmd = Command::cargo_bin("vitals").unwrap();
    cmd.arg("--config")
        .arg(&cfg)
        .arg("self-check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn missing_config_is_reported() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("vitals").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("units")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not be loaded"));
}

#[test]
fn file_logging_writes_json_lines() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("vitals.log");
    let cfg = write_config(
        &dir,
        &format!(
            "[logging]\nfile = '{}'\nlevel = \"info\"\nrotation = \"never\"\n",
            log_path.display()
        ),
    );
    let mut cmd = Command::cargo_bin("vitals").unwrap();
    cmd.arg("--config")
        .arg(&cfg)
        .args(["respiration", "--rate", "14"])
        .assert()
        .success();

    let contents = fs::read_to_string(&log_path).expect("log file written");
    let line = contents
        .lines()
        .find(|l| l.contains("respiration estimate"))
        .expect("respiration event logged");
    let v: serde_json::Value = serde_json::from_str(line).expect("JSON log line");
    assert_eq!(v["level"], "INFO");
    assert_eq!(v["fields"]["rate"], 14);
}
