use std::fs;

use kira_tumornet::io::tables::discover_tables;
use tempfile::TempDir;

#[test]
fn discovery_sorts_by_tumor_id_and_ignores_other_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("STAD Tumor.csv"), "Gene Symbol,PCC\n").unwrap();
    fs::write(tmp.path().join("BLCA Tumor.csv"), "Gene Symbol,PCC\n").unwrap();
    fs::write(tmp.path().join("notes.txt"), "not a table").unwrap();
    fs::create_dir(tmp.path().join("nested.csv")).unwrap();

    let discovered = discover_tables(tmp.path()).unwrap();
    let ids: Vec<&str> = discovered.iter().map(|t| t.tumor_id.as_str()).collect();
    assert_eq!(ids, vec!["BLCA Tumor", "STAD Tumor"]);
}

#[test]
fn empty_directory_discovers_nothing() {
    let tmp = TempDir::new().unwrap();
    let discovered = discover_tables(tmp.path()).unwrap();
    assert!(discovered.is_empty());
}

#[test]
fn missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("absent");
    assert!(discover_tables(&missing).is_err());
}
