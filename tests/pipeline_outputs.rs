use std::fs;

use kira_tumornet::config::NetworkConfig;
use kira_tumornet::ctx::Ctx;
use kira_tumornet::pipeline::Pipeline;
use kira_tumornet::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_tumornet::pipeline::stage1_discover::Stage1Discover;
use kira_tumornet::pipeline::stage2_load::Stage2Load;
use kira_tumornet::pipeline::stage3_classify::Stage3Classify;
use kira_tumornet::pipeline::stage4_layout::Stage4Layout;
use kira_tumornet::pipeline::stage5_assemble::Stage5Assemble;
use kira_tumornet::pipeline::stage6_output::Stage6Output;
use serde_json::Value;
use tempfile::TempDir;

fn full_pipeline() -> Pipeline {
    Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Discover::new()),
        Box::new(Stage2Load::new()),
        Box::new(Stage3Classify::new()),
        Box::new(Stage4Layout::new()),
        Box::new(Stage5Assemble::new()),
        Box::new(Stage6Output::new()),
    ])
}

#[test]
fn full_run_writes_network_json_and_tsv() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("data");
    let out_dir = tmp.path().join("out");
    fs::create_dir(&data_dir).unwrap();
    fs::write(
        data_dir.join("Alpha Tumor.csv"),
        "Gene Symbol,PCC\nTP53,0.82\nKRAS,0.61\n",
    )
    .unwrap();
    fs::write(
        data_dir.join("Beta Tumor.csv"),
        "Gene Symbol,PCC\nTP53,0.90\nMYC,0.55\n",
    )
    .unwrap();
    fs::write(data_dir.join("Broken Tumor.csv"), "Gene,Score\nTP53,0.8\n").unwrap();

    let mut ctx = Ctx::new(
        data_dir,
        out_dir.clone(),
        NetworkConfig::default(),
        None,
        true,
        true,
    );
    full_pipeline().run(&mut ctx).unwrap();

    assert_eq!(ctx.tables.len(), 2);
    assert_eq!(ctx.skipped_tumors, 1);
    assert!(ctx.warnings.iter().any(|w| w.contains("Broken Tumor")));

    let json: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("network.json")).unwrap()).unwrap();
    assert_eq!(json["input_meta"]["tumors_loaded"], 2);
    assert_eq!(json["input_meta"]["tumors_skipped"], 1);
    assert_eq!(json["stats"]["cross_tumor"], 1);

    // GCH1 + two tumors + KRAS + MYC + cross TP53.
    assert_eq!(json["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(json["edges"].as_array().unwrap().len(), 6);

    let nodes_tsv = fs::read_to_string(out_dir.join("nodes.tsv")).unwrap();
    assert!(nodes_tsv.starts_with("id\tlabel\tkind\tx\ty\tsize\tcolor\ttooltip\n"));
    assert_eq!(nodes_tsv.lines().count(), 7);

    let edges_tsv = fs::read_to_string(out_dir.join("edges.tsv")).unwrap();
    assert!(edges_tsv.starts_with("from\tto\twidth\ttooltip\n"));
    assert_eq!(edges_tsv.lines().count(), 7);
}

#[test]
fn empty_data_dir_still_produces_a_report() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("data");
    let out_dir = tmp.path().join("out");
    fs::create_dir(&data_dir).unwrap();

    let mut ctx = Ctx::new(
        data_dir,
        out_dir.clone(),
        NetworkConfig::default(),
        None,
        true,
        false,
    );
    full_pipeline().run(&mut ctx).unwrap();

    let json: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("network.json")).unwrap()).unwrap();
    assert_eq!(json["input_meta"]["tumors_loaded"], 0);
    assert_eq!(json["stats"]["total_genes"], 0);
    // Only the central gene remains.
    assert_eq!(json["nodes"].as_array().unwrap().len(), 1);
    assert!(json["edges"].as_array().unwrap().is_empty());
    assert!(ctx.warnings.iter().any(|w| w.contains("no .csv tables")));
}
