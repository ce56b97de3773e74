use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::graph::NodeKind;
use crate::schema::v1::{
    EdgeV1, InputMeta, NetworkV1, NodeKindV1, NodeV1, StatsV1, TumorGeneCount,
};

pub fn build_report(ctx: &Ctx) -> Result<NetworkV1> {
    let stats = ctx.stats.as_ref().context("network stats missing")?;

    let nodes = ctx
        .nodes
        .iter()
        .map(|n| NodeV1 {
            id: n.id.clone(),
            label: n.label.clone(),
            kind: kind_v1(n.kind),
            x: n.x,
            y: n.y,
            size: n.size,
            color: n.color.clone(),
            tooltip: n.tooltip.clone(),
        })
        .collect();

    let edges = ctx
        .edges
        .iter()
        .map(|e| EdgeV1 {
            from: e.from.clone(),
            to: e.to.clone(),
            width: e.width,
            tooltip: e.tooltip.clone(),
        })
        .collect();

    Ok(NetworkV1 {
        tool: "kira-tumornet".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta: InputMeta {
            data_dir: ctx.data_dir.display().to_string(),
            tumors_loaded: ctx.tables.len() as u64,
            tumors_skipped: ctx.skipped_tumors as u64,
            central_gene: ctx.config.central_gene.clone(),
            min_correlation: ctx.config.min_correlation,
            max_genes_per_tumor: ctx.config.max_genes_per_tumor as u64,
        },
        stats: StatsV1 {
            total_genes: stats.total_genes as u64,
            tumor_specific: stats.tumor_specific as u64,
            cross_tumor: stats.cross_tumor as u64,
            per_tumor: stats
                .per_tumor
                .iter()
                .map(|(tumor, genes)| TumorGeneCount {
                    tumor: tumor.clone(),
                    genes: *genes as u64,
                })
                .collect(),
        },
        nodes,
        edges,
    })
}

pub fn write_json(path: &Path, report: &NetworkV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

fn kind_v1(kind: NodeKind) -> NodeKindV1 {
    match kind {
        NodeKind::Central => NodeKindV1::Central,
        NodeKind::Tumor => NodeKindV1::Tumor,
        NodeKind::GeneSpecific => NodeKindV1::GeneSpecific,
        NodeKind::GeneCross => NodeKindV1::GeneCross,
    }
}
