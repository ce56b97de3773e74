use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn run_command_writes_outputs() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("data");
    let out_dir = tmp.path().join("out");
    fs::create_dir(&data_dir).unwrap();
    fs::write(
        data_dir.join("Alpha Tumor.csv"),
        "Gene Symbol,PCC\nTP53,0.82\nKRAS,0.61\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("kira-tumornet").unwrap();
    cmd.arg("run")
        .arg("--data")
        .arg(&data_dir)
        .arg("--out")
        .arg(&out_dir)
        .arg("--tsv");
    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("kira-tumornet v"));
    assert!(stdout.contains("Genes: 2 total, 2 tumor-specific, 0 cross-tumor"));

    assert!(out_dir.join("network.json").exists());
    assert!(out_dir.join("nodes.tsv").exists());
    assert!(out_dir.join("edges.tsv").exists());
}

#[test]
fn run_command_rejects_degenerate_threshold() {
    let tmp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("kira-tumornet").unwrap();
    cmd.arg("run")
        .arg("--data")
        .arg(tmp.path())
        .arg("--out")
        .arg(tmp.path().join("out"))
        .arg("--min-correlation")
        .arg("1.0");
    cmd.assert().failure();
}
