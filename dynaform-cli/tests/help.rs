use assert_cmd::cargo::{self};
use predicates::str::contains;

fn sample_config() -> String {
    format!("{}/../config/formConfig.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("dynaform");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("dynaform"))
        .stdout(contains("--config"));
}

#[test]
fn lists_companies_from_sample_config() {
    let config = sample_config();
    let mut cmd = cargo::cargo_bin_cmd!("dynaform");
    cmd.args(["--config", config.as_str(), "--list-companies"])
        .assert()
        .success()
        .stdout(contains("Acme"))
        .stdout(contains("Globex"))
        .stdout(contains("Initech"));
}

#[test]
fn accepts_inline_config() {
    let mut cmd = cargo::cargo_bin_cmd!("dynaform");
    cmd.args([
        "--config",
        r#"{"companies":[{"name":"Solo","fields":[]}]}"#,
        "--list-companies",
    ])
    .assert()
    .success()
    .stdout(contains("Solo"));
}

#[test]
fn rejects_malformed_config() {
    let mut cmd = cargo::cargo_bin_cmd!("dynaform");
    cmd.args(["--config", "{companies", "--list-companies"])
        .assert()
        .failure()
        .stderr(contains("input (config)"));
}

#[test]
fn help_mentions_format_flag() {
    let mut cmd = cargo::cargo_bin_cmd!("dynaform");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("--format"));
}

#[test]
fn rejects_unknown_output_format() {
    let config = sample_config();
    let mut cmd = cargo::cargo_bin_cmd!("dynaform");
    cmd.args(["--config", config.as_str(), "--format", "ini", "--list-companies"])
        .assert()
        .failure()
        .stderr(contains("ini"));
}

#[test]
fn accepts_explicit_json_format() {
    let config = sample_config();
    let mut cmd = cargo::cargo_bin_cmd!("dynaform");
    cmd.args(["--config", config.as_str(), "--format", "json", "--list-companies"])
        .assert()
        .success()
        .stdout(contains("Acme"));
}
