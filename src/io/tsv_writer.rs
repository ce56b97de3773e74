use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn write_nodes_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "id\tlabel\tkind\tx\ty\tsize\tcolor\ttooltip")?;
    for node in &ctx.nodes {
        writeln!(
            w,
            "{}\t{}\t{}\t{:.3}\t{:.3}\t{:.3}\t{}\t{}",
            node.id,
            node.label,
            node.kind.label(),
            node.x,
            node.y,
            node.size,
            node.color,
            node.tooltip
        )?;
    }
    Ok(())
}

pub fn write_edges_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "from\tto\twidth\ttooltip")?;
    for edge in &ctx.edges {
        writeln!(
            w,
            "{}\t{}\t{:.3}\t{}",
            edge.from,
            edge.to,
            edge.width,
            edge.tooltip.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}
