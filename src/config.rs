use anyhow::{Result, bail};

pub const DEFAULT_CENTRAL_GENE: &str = "GCH1";
pub const DEFAULT_MIN_CORRELATION: f64 = 0.5;

pub const CENTRAL_NODE_COLOR: &str = "#FF4136";
pub const DEFAULT_TUMOR_COLOR: &str = "#FF9800";
pub const CROSS_GENE_COLOR: &str = "#FF9800";

pub const CENTRAL_NODE_SIZE: f64 = 25.0;
pub const TUMOR_NODE_SIZE: f64 = 15.0;
pub const HUB_EDGE_WIDTH: f64 = 2.0;
pub const CROSS_GENE_SIZE_BONUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualRange {
    pub min: f64,
    pub max: f64,
}

impl VisualRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub central_gene: String,
    pub min_correlation: f64,
    /// 0 means unlimited.
    pub max_genes_per_tumor: usize,
    pub node_size: VisualRange,
    pub edge_width: VisualRange,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            central_gene: DEFAULT_CENTRAL_GENE.to_string(),
            min_correlation: DEFAULT_MIN_CORRELATION,
            max_genes_per_tumor: 0,
            node_size: VisualRange::new(5.0, 12.0),
            edge_width: VisualRange::new(0.3, 2.0),
        }
    }
}

impl NetworkConfig {
    /// Rejects degenerate configurations before any table is read.
    pub fn validate(&self) -> Result<()> {
        if self.central_gene.trim().is_empty() {
            bail!("central gene symbol must not be empty");
        }
        if !self.min_correlation.is_finite() || !(-1.0..=1.0).contains(&self.min_correlation) {
            bail!(
                "min_correlation {} outside [-1, 1]",
                self.min_correlation
            );
        }
        if self.min_correlation == 1.0 {
            bail!("min_correlation 1.0 makes the size interpolation undefined");
        }
        validate_range(&self.node_size, "node size")?;
        validate_range(&self.edge_width, "edge width")?;
        Ok(())
    }
}

fn validate_range(range: &VisualRange, name: &str) -> Result<()> {
    if !range.min.is_finite() || !range.max.is_finite() {
        bail!("{} range must be finite", name);
    }
    if range.min > range.max {
        bail!("{} range inverted: {} > {}", name, range.min, range.max);
    }
    Ok(())
}
