use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("BLCA Tumor.csv"),
        "Gene Symbol,PCC\nTP53,0.82\nMYC,0.44\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("kira-tumornet").unwrap();
    cmd.arg("validate").arg("--data").arg(tmp.path());
    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("kira-tumornet validate ok"));
    assert!(stdout.contains("tumors: 1"));
    assert!(stdout.contains("BLCA Tumor\t1/2 rows kept"));
}

#[test]
fn validate_rejects_bad_threshold() {
    let tmp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("kira-tumornet").unwrap();
    cmd.arg("validate")
        .arg("--data")
        .arg(tmp.path())
        .arg("--min-correlation")
        .arg("1.0");
    cmd.assert().failure();
}
