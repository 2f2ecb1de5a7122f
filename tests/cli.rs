use std::path::Path;
use std::process::{Command, Output};

use interval::config::Settings;
use interval::Unit;

fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_interval"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn check_reports_valid_phrase() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&dir.path().join("config.json"), &["check", "2 days"]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "valid");
}

#[test]
fn check_fails_on_invalid_phrase() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    for phrase in ["soon", "0 days"] {
        let out = run(&config, &["check", phrase]);
        assert_eq!(out.status.code(), Some(1), "{phrase}");
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "invalid", "{phrase}");
    }
}

#[test]
fn init_writes_effective_settings() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nested").join("config.json");

    let out = run(&config, &["--default-unit", "hours", "--default-amount", "-3", "init"]);
    assert!(out.status.success());

    let saved = Settings::load(config.to_str()).unwrap();
    assert_eq!(saved.default_unit, Unit::Hours);
    assert_eq!(saved.default_amount, -3);

    // Later runs pick the saved defaults up
    let out = run(&config, &["normalize", "null"]);
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["seconds"], -3 * 3600);
}
