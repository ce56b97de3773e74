use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let stats = ctx
        .stats
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("network stats missing"))?;

    let mut out = String::new();
    out.push_str(&format!("kira-tumornet v{}\n", env!("CARGO_PKG_VERSION")));
    out.push_str(&format!(
        "Input: {} tumor tables ({} skipped), central gene {}\n",
        ctx.tables.len(),
        ctx.skipped_tumors,
        ctx.config.central_gene
    ));
    out.push_str(&format!(
        "Genes: {} total, {} tumor-specific, {} cross-tumor\n",
        stats.total_genes, stats.tumor_specific, stats.cross_tumor
    ));
    for (tumor, count) in &stats.per_tumor {
        out.push_str(&format!("  {}: {} genes\n", tumor, count));
    }
    out.push_str(&format!(
        "Network: {} nodes, {} edges\n",
        ctx.nodes.len(),
        ctx.edges.len()
    ));

    Ok(out)
}
