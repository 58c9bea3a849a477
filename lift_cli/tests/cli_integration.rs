use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::tempdir;

// Build a minimal valid TOML config pointing persistence into the tempdir
fn write_valid_config(dir: &tempfile::TempDir) -> PathBuf {
    let toml = format!(
        r#"
[pins]
lift_up = 23
lift_down = 24

[loop]
tick_hz = 500

[persist]
threshold_path = "{}"
"#,
        dir.path().join("threshold.cal").display()
    );
    let path = dir.path().join("cfg.toml");
    fs::write(&path, toml).unwrap();
    path
}

#[rstest]
#[case(&["--help"], 0, "Usage:", "stdout")]
#[case(&["self-check"], 0, "self-check ok", "stdout")]
fn cli_table_cases(
    #[case] args: &[&str],
    #[case] exit_code: i32,
    #[case] needle: &str,
    #[case] stream: &str,
) {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("liftctl").unwrap();
    cmd.arg("--config").arg(&cfg);
    for a in args {
        cmd.arg(a);
    }

    let assert = cmd.assert().code(exit_code);
    match stream {
        "stdout" => {
            assert.stdout(predicate::str::contains(needle));
        }
        "stderr" => {
            assert.stderr(predicate::str::contains(needle));
        }
        other => panic!("unknown stream: {other}"),
    }
}

#[rstest]
fn invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(
        &path,
        r#"
[pins]
lift_up = 23
lift_down = 23
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("liftctl").unwrap();
    cmd.arg("--config").arg(&path).arg("self-check");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is invalid"));
}

#[rstest]
fn json_flag_formats_errors_as_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(
        &path,
        r#"
[pins]
lift_up = 23
lift_down = 23
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("liftctl").unwrap();
    cmd.arg("--json").arg("--config").arg(&path).arg("self-check");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(r#""reason""#))
        .stderr(predicate::str::contains(r#""message""#));
}

#[rstest]
fn missing_config_is_reported() {
    let mut cmd = Command::cargo_bin("liftctl").unwrap();
    cmd.arg("--config").arg("/nonexistent/liftctl.toml");
    cmd.arg("self-check");
    cmd.assert().failure();
}

#[rstest]
fn run_emits_startup_banner_and_bootstrapped_threshold() {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("liftctl").unwrap();
    cmd.arg("--config")
        .arg(&cfg)
        .arg("run")
        .arg("--ticks")
        .arg("50")
        .stdin(Stdio::null());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Lift table controller v1.0"))
        .stdout(predicate::str::contains("Threshold is: 120"));
}

#[rstest]
fn run_persists_a_threshold_command() {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = assert_cmd::Command::cargo_bin("liftctl").unwrap();
    let assert = cmd
        .arg("--config")
        .arg(&cfg)
        .arg("run")
        .arg("--ticks")
        .arg("200")
        .write_stdin("t200\n")
        .assert();

    assert
        .success()
        .stdout(predicate::str::contains("New Threshold: 200"));
    assert_eq!(fs::read(dir.path().join("threshold.cal")).unwrap(), [200]);
}
