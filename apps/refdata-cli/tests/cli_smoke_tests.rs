#![allow(clippy::unwrap_used, clippy::expect_used, clippy::non_ascii_literal)]

//! CLI smoke tests for the `refdata` binary.
//!
//! Every test gets its own SQLite file in a temporary directory and drives the
//! built binary end to end.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn run_refdata(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_refdata"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute refdata")
}

/// Runs `args` against the SQLite file under `dir`.
fn run_with_store(dir: &TempDir, args: &[&str]) -> Output {
    let dsn = sqlite_dsn(dir.path());
    let mut full = vec!["--dsn", dsn.as_str()];
    full.extend_from_slice(args);
    run_refdata(&full)
}

fn sqlite_dsn(dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", dir.join("refdata.db").display())
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn seeded_store() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_with_store(&dir, &["seed"]);
    assert!(
        output.status.success(),
        "seed failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    dir
}

#[test]
fn test_cli_help_command() {
    let output = run_refdata(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let out = stdout(&output);
    assert!(out.contains("Usage:"), "Should contain usage information");
    for command in ["migrate", "reset", "seed", "localize", "show", "check"] {
        assert!(out.contains(command), "Should list '{command}'");
    }
    assert!(out.contains("--config"), "Should mention config option");
    assert!(out.contains("--dsn"), "Should mention dsn option");
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_refdata(&["--config", "/definitely/not/here.yaml", "check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"), "{stderr}");
}

#[test]
fn test_cli_print_config_is_yaml() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("refdata.yaml");
    std::fs::write(
        &config_path,
        "reference_data:\n  seed_actor: nightly-job\nlogging:\n  level: info\n",
    )
    .unwrap();

    let output = run_refdata(&[
        "--config",
        config_path.to_str().unwrap(),
        "--dsn",
        "sqlite://override.db?mode=rwc",
        "--print-config",
    ]);
    assert!(output.status.success());

    let out = stdout(&output);
    let parsed: serde_json::Value = serde_saphyr::from_str(&out).expect("valid YAML");
    assert_eq!(parsed["reference_data"]["seed_actor"], "nightly-job");
    assert_eq!(
        parsed["reference_data"]["database"]["dsn"],
        "sqlite://override.db?mode=rwc"
    );
    assert_eq!(parsed["logging"]["level"], "info");
}

#[test]
fn test_cli_env_layer() {
    let output = Command::new(env!("CARGO_BIN_EXE_refdata"))
        .args(["--print-config"])
        .env("REFDATA__REFERENCE_DATA__CANONICAL_LOCALE", "en")
        .env("REFDATA__LOGGING__FORMAT", "json")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("format: json"));
}

#[test]
fn test_cli_check_validates_catalog() {
    let dir = TempDir::new().unwrap();
    let output = run_with_store(&dir, &["check"]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let out = stdout(&output);
    assert!(out.contains("Built-in catalog is valid"));
    assert!(out.contains("Configuration is valid"));
}

#[test]
fn test_cli_migrate_then_nothing_pending() {
    let dir = TempDir::new().unwrap();
    let first = run_with_store(&dir, &["migrate"]);
    assert!(first.status.success());
    assert!(!stdout(&first).contains("Applied 0 migration"));

    let second = run_with_store(&dir, &["migrate"]);
    assert!(second.status.success());
    assert!(stdout(&second).contains("Applied 0 migration"));

    let check = run_with_store(&dir, &["check"]);
    assert!(stdout(&check).contains("0 pending migration"));
}

#[test]
fn test_cli_seed_is_idempotent() {
    let dir = seeded_store();

    let output = run_with_store(&dir, &["seed"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let total = out
        .lines()
        .find(|l| l.trim_start().starts_with("total"))
        .expect("report has a total line");
    let numbers: Vec<&str> = total.split_whitespace().collect();
    assert_eq!(numbers[1], "0", "second run inserts nothing: {total}");
    assert_ne!(numbers[2], "0", "second run skips every row: {total}");
}

#[test]
fn test_cli_seed_bundle_file() {
    let dir = seeded_store();
    let bundle_path = dir.path().join("extra.json");
    std::fs::write(
        &bundle_path,
        serde_json::json!({
            "labels": [{
                "entity": "currency",
                "code": "XAG",
                "locale_code": "de",
                "name": "Silber"
            }]
        })
        .to_string(),
    )
    .unwrap();

    let output = run_with_store(
        &dir,
        &[
            "seed",
            "--skip-builtin",
            "--actor",
            "ops",
            "--bundle",
            bundle_path.to_str().unwrap(),
        ],
    );
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let out = stdout(&output);
    assert!(!out.contains("built-in catalog"));
    let label_row = out
        .lines()
        .find(|l| l.trim_start().starts_with("label"))
        .expect("report lists the label table");
    assert_eq!(label_row.split_whitespace().nth(1), Some("1"));

    let localized = run_with_store(&dir, &["localize", "currency", "XAG", "de-AT"]);
    assert_eq!(stdout(&localized).trim(), "Silber");
}

#[test]
fn test_cli_seed_rejects_malformed_bundle() {
    let dir = TempDir::new().unwrap();
    let bundle_path = dir.path().join("broken.json");
    std::fs::write(&bundle_path, r#"{ "planets": [] }"#).unwrap();

    let output = run_with_store(&dir, &["seed", "--bundle", bundle_path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid seed bundle"), "{stderr}");
}

#[test]
fn test_cli_localize() {
    let dir = seeded_store();

    let exact = run_with_store(&dir, &["localize", "country", "SA", "ar-SA"]);
    assert!(exact.status.success());
    assert_eq!(stdout(&exact).trim(), "المملكة العربية السعودية");

    let fallback = run_with_store(&dir, &["localize", "country", "SA", "ar-EG"]);
    assert_eq!(stdout(&fallback).trim(), "السعودية");

    let missing = run_with_store(&dir, &["localize", "country", "SA", "xx"]);
    assert!(!missing.status.success());
    assert!(stdout(&missing).is_empty());

    let canonical = run_with_store(
        &dir,
        &["localize", "country", "SA", "xx", "--canonical-fallback"],
    );
    assert!(canonical.status.success());
    assert_eq!(stdout(&canonical).trim(), "Saudi Arabia");
}

#[test]
fn test_cli_show_rows() {
    let dir = seeded_store();

    let gold = run_with_store(&dir, &["show", "currency", "XAU"]);
    assert!(gold.status.success());
    let row: serde_json::Value = serde_json::from_str(&stdout(&gold)).unwrap();
    assert_eq!(row["numeric3"], "959");
    assert!(row["minor_units"].is_null());

    let naics = run_with_store(&dir, &["show", "industry_code", "naics:541511"]);
    assert!(naics.status.success());
    let row: serde_json::Value = serde_json::from_str(&stdout(&naics)).unwrap();
    assert_eq!(row["parent_code"], "54151");
    assert_eq!(row["level"], 5);

    let domain = run_with_store(&dir, &["show", "commodity_domain", "hs"]);
    assert!(domain.status.success());

    let unknown = run_with_store(&dir, &["show", "country", "ZZ"]);
    assert!(!unknown.status.success());

    let bad_entity = run_with_store(&dir, &["show", "planet", "X"]);
    assert!(!bad_entity.status.success());
}

#[test]
fn test_cli_reset_empties_store() {
    let dir = seeded_store();

    let reset = run_with_store(&dir, &["reset"]);
    assert!(reset.status.success());

    let after = run_with_store(&dir, &["show", "country", "SA"]);
    assert!(!after.status.success());
}
