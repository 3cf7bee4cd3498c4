use assert_cmd::Command;
use predicates::prelude::*;

const DECLINE_GITHUB: &str = "\n\n\n\n\n\n\nn\n";

#[test]
fn writes_document_to_stdout() {
    let mut cmd = Command::cargo_bin("backstage-config-wizard").unwrap();

    cmd.write_stdin(DECLINE_GITHUB)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter application title [TeraSky OSS Backstage]: "))
        .stdout(predicate::str::contains(
            "app:\n  title: TeraSky OSS Backstage\n  baseUrl: http://localhost:3000\n",
        ))
        .stdout(predicate::str::contains("permission:\n  enabled: false\n\n"))
        .stdout(predicate::str::ends_with("\n\n"));
}

#[test]
fn writes_document_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app-config.yaml");

    let mut cmd = Command::cargo_bin("backstage-config-wizard").unwrap();
    cmd.arg("--output")
        .arg(&path)
        .write_stdin(DECLINE_GITHUB)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Configuration written to {}",
            path.display()
        )))
        .stdout(predicate::str::contains("app:\n").not());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("app:\n  title: TeraSky OSS Backstage\n"));
    assert!(written.ends_with("permission:\n  enabled: false\n"));
}

#[test]
fn short_output_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.yaml");

    let mut cmd = Command::cargo_bin("backstage-config-wizard").unwrap();
    cmd.arg("-o").arg(&path).write_stdin("").assert().success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("- host: github.com\n"));
    assert!(written.contains("token: ''\n"));
}

#[test]
fn missing_directory_fails_with_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("app-config.yaml");

    let mut cmd = Command::cargo_bin("backstage-config-wizard").unwrap();
    cmd.arg("--output")
        .arg(&path)
        .write_stdin(DECLINE_GITHUB)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error writing file"));

    assert!(!path.exists());
}

#[test]
fn help_mentions_output_option() {
    let mut cmd = Command::cargo_bin("backstage-config-wizard").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("prompt-style").not());
}

#[test]
fn version_flag_is_rejected() {
    let mut cmd = Command::cargo_bin("backstage-config-wizard").unwrap();

    cmd.arg("--version").assert().failure();
}
