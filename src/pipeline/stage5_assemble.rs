use anyhow::{Context, Result};
use tracing::info;

use crate::config::{
    CENTRAL_NODE_COLOR, CENTRAL_NODE_SIZE, CROSS_GENE_COLOR, CROSS_GENE_SIZE_BONUS,
    HUB_EDGE_WIDTH, TUMOR_NODE_SIZE,
};
use crate::ctx::Ctx;
use crate::graph::classify;
use crate::graph::{EdgeRecord, GeneStats, NodeKind, NodeRecord, layout, visual};
use crate::io::colors;
use crate::pipeline::Stage;

pub struct Stage5Assemble;

impl Stage5Assemble {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Assemble {
    fn name(&self) -> &'static str {
        "stage5_assemble"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let classification = ctx
            .classification
            .as_ref()
            .context("classification missing")?;
        let config = &ctx.config;

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut stats = GeneStats::default();

        nodes.push(NodeRecord {
            id: config.central_gene.clone(),
            label: config.central_gene.clone(),
            kind: NodeKind::Central,
            x: 0.0,
            y: 0.0,
            size: CENTRAL_NODE_SIZE,
            color: CENTRAL_NODE_COLOR.to_string(),
            tooltip: format!("{} (Central Gene)", config.central_gene),
        });

        for table in &ctx.tables {
            let position = ctx
                .tumor_positions
                .get(&table.tumor_id)
                .copied()
                .context("tumor position missing")?;
            let color = colors::tumor_color(&ctx.palette, &table.tumor_id);
            nodes.push(NodeRecord {
                id: table.tumor_id.clone(),
                label: table.tumor_id.clone(),
                kind: NodeKind::Tumor,
                x: position.x,
                y: position.y,
                size: TUMOR_NODE_SIZE,
                color: color.to_string(),
                tooltip: table.tumor_id.clone(),
            });
            edges.push(EdgeRecord {
                from: config.central_gene.clone(),
                to: table.tumor_id.clone(),
                width: HUB_EDGE_WIDTH,
                tooltip: None,
            });
            stats.per_tumor.insert(table.tumor_id.clone(), 0);
        }

        // Tumor-specific genes spiral out from their tumor in PCC order.
        for table in &ctx.tables {
            let center = ctx
                .tumor_positions
                .get(&table.tumor_id)
                .copied()
                .context("tumor position missing")?;
            let color = colors::tumor_color(&ctx.palette, &table.tumor_id);
            let mut rank = 0usize;
            for row in &table.rows {
                if classification.is_cross(&row.gene) {
                    continue;
                }
                let position = layout::spiral_position(center, rank);
                nodes.push(NodeRecord {
                    id: row.gene.clone(),
                    label: row.gene.clone(),
                    kind: NodeKind::GeneSpecific,
                    x: position.x,
                    y: position.y,
                    size: visual::node_size(row.pcc, config),
                    color: color.to_string(),
                    tooltip: format!(
                        "{}<br>PCC: {:.3}<br>Tumor: {}",
                        row.gene, row.pcc, table.tumor_id
                    ),
                });
                edges.push(EdgeRecord {
                    from: table.tumor_id.clone(),
                    to: row.gene.clone(),
                    width: visual::edge_width(row.pcc, config),
                    tooltip: Some(format!("PCC: {:.3}", row.pcc)),
                });
                *stats.per_tumor.entry(table.tumor_id.clone()).or_insert(0) += 1;
                rank += 1;
            }
        }

        // Cross-tumor genes sit between the ring and the central gene, one
        // edge per associated tumor.
        for (gene, tumors) in classification.cross_genes() {
            let (primary_tumor, primary_pcc) =
                classify::primary_tumor(tumors).context("cross gene with no tumors")?;
            let primary_position = ctx
                .tumor_positions
                .get(primary_tumor)
                .copied()
                .context("primary tumor position missing")?;
            let position = layout::cross_position(primary_position);

            let tumor_list = tumors.keys().cloned().collect::<Vec<_>>().join(", ");
            let mut tooltip = format!(
                "{}<br>Cross-tumor gene<br>Present in: {}",
                gene, tumor_list
            );
            for (tumor, pcc) in tumors {
                tooltip.push_str(&format!("<br>{}: PCC={:.3}", tumor, pcc));
            }

            nodes.push(NodeRecord {
                id: gene.clone(),
                label: gene.clone(),
                kind: NodeKind::GeneCross,
                x: position.x,
                y: position.y,
                size: visual::node_size(primary_pcc, config) + CROSS_GENE_SIZE_BONUS,
                color: CROSS_GENE_COLOR.to_string(),
                tooltip,
            });

            for (tumor, pcc) in tumors {
                edges.push(EdgeRecord {
                    from: tumor.clone(),
                    to: gene.clone(),
                    width: visual::edge_width(*pcc, config),
                    tooltip: Some(format!("{} - {}: PCC={:.3}", tumor, gene, pcc)),
                });
                *stats.per_tumor.entry(tumor.clone()).or_insert(0) += 1;
            }
        }

        stats.total_genes = classification.len();
        let (tumor_specific, cross_tumor) = classification.partition_counts();
        stats.tumor_specific = tumor_specific;
        stats.cross_tumor = cross_tumor;

        info!(nodes = nodes.len(), edges = edges.len(), "network_assembled");
        ctx.nodes = nodes;
        ctx.edges = edges;
        ctx.stats = Some(stats);
        Ok(())
    }
}
