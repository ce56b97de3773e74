use std::path::PathBuf;

use kira_tumornet::config::NetworkConfig;
use kira_tumornet::ctx::Ctx;
use kira_tumornet::graph::GeneStats;
use kira_tumornet::io::summary::format_summary;

#[test]
fn summary_format() {
    let mut ctx = Ctx::new(
        PathBuf::from("data"),
        PathBuf::from("out"),
        NetworkConfig::default(),
        None,
        true,
        false,
    );
    let mut stats = GeneStats {
        total_genes: 12,
        tumor_specific: 9,
        cross_tumor: 3,
        ..GeneStats::default()
    };
    stats.per_tumor.insert("BLCA Tumor".to_string(), 7);
    stats.per_tumor.insert("STAD Tumor".to_string(), 5);
    ctx.stats = Some(stats);

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("kira-tumornet v"));
    assert!(s.contains("central gene GCH1"));
    assert!(s.contains("Genes: 12 total, 9 tumor-specific, 3 cross-tumor"));
    assert!(s.contains("  BLCA Tumor: 7 genes"));
    assert!(s.contains("  STAD Tumor: 5 genes"));
}

#[test]
fn summary_requires_stats() {
    let ctx = Ctx::new(
        PathBuf::from("data"),
        PathBuf::from("out"),
        NetworkConfig::default(),
        None,
        true,
        false,
    );
    assert!(format_summary(&ctx).is_err());
}
