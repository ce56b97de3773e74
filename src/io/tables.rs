use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::NetworkConfig;
use crate::graph::{CorrelationRow, TumorTable};

pub const GENE_COLUMN: &str = "Gene Symbol";
pub const PCC_COLUMN: &str = "PCC";

#[derive(Debug, Clone)]
pub struct DiscoveredTable {
    pub tumor_id: String,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct LoadedTable {
    pub table: TumorTable,
    pub warnings: Vec<String>,
}

/// Tumor identity is the CSV file stem. Directory iteration order is
/// platform-dependent, so tables are sorted by tumor id.
pub fn discover_tables(data_dir: &Path) -> Result<Vec<DiscoveredTable>> {
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("failed to read data directory {}", data_dir.display()))?;

    let mut tables = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("csv") {
            continue;
        }
        let tumor_id = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => continue,
        };
        tables.push(DiscoveredTable { tumor_id, path });
    }
    tables.sort_by(|a, b| a.tumor_id.cmp(&b.tumor_id));
    Ok(tables)
}

/// Read one tumor table, keeping only rows at or above the correlation
/// threshold. Rows naming the central gene are dropped (it is defined
/// externally, never as a correlate of itself). Duplicate genes within one
/// table keep the last-seen value, with a diagnostic. The kept rows come
/// back sorted by PCC descending and capped per configuration.
pub fn load_table(discovered: &DiscoveredTable, config: &NetworkConfig) -> Result<LoadedTable> {
    let path = &discovered.path;
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    let gene_col = find_column(&headers, GENE_COLUMN, path)?;
    let pcc_col = find_column(&headers, PCC_COLUMN, path)?;

    let mut warnings = Vec::new();
    let mut total_rows = 0usize;
    let mut kept: Vec<CorrelationRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (idx, record) in reader.records().enumerate() {
        let line_no = idx + 2;
        let record =
            record.with_context(|| format!("{}:{} malformed CSV row", path.display(), line_no))?;

        let gene = record.get(gene_col).unwrap_or("").trim();
        if gene.is_empty() {
            bail!("{}:{} empty gene symbol", path.display(), line_no);
        }
        let pcc_str = record.get(pcc_col).unwrap_or("").trim();
        let pcc: f64 = pcc_str.parse().with_context(|| {
            format!(
                "{}:{} PCC '{}' is not a number",
                path.display(),
                line_no,
                pcc_str
            )
        })?;
        if !pcc.is_finite() || !(-1.0..=1.0).contains(&pcc) {
            bail!(
                "{}:{} PCC {} outside [-1, 1]",
                path.display(),
                line_no,
                pcc_str
            );
        }
        total_rows += 1;

        if gene == config.central_gene {
            warnings.push(format!(
                "{}: row {} names the central gene {}; dropped",
                discovered.tumor_id, line_no, gene
            ));
            continue;
        }
        if pcc < config.min_correlation {
            continue;
        }

        if let Some(prev) = index.get(gene) {
            warnings.push(format!(
                "{}: duplicate gene '{}' at row {} (kept last value)",
                discovered.tumor_id, gene, line_no
            ));
            kept[*prev].pcc = pcc;
        } else {
            index.insert(gene.to_string(), kept.len());
            kept.push(CorrelationRow {
                gene: gene.to_string(),
                pcc,
            });
        }
    }

    kept.sort_by(|a, b| {
        b.pcc
            .partial_cmp(&a.pcc)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.gene.cmp(&b.gene))
    });
    if config.max_genes_per_tumor > 0 {
        kept.truncate(config.max_genes_per_tumor);
    }

    Ok(LoadedTable {
        table: TumorTable {
            tumor_id: discovered.tumor_id.clone(),
            path: path.clone(),
            rows: kept,
            total_rows,
        },
        warnings,
    })
}

fn find_column(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| {
            anyhow::anyhow!("{}: missing required column '{}'", path.display(), name)
        })
}
