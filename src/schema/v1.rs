use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKindV1 {
    Central,
    Tumor,
    GeneSpecific,
    GeneCross,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeV1 {
    pub id: String,
    pub label: String,
    pub kind: NodeKindV1,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeV1 {
    pub from: String,
    pub to: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TumorGeneCount {
    pub tumor: String,
    pub genes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsV1 {
    pub total_genes: u64,
    pub tumor_specific: u64,
    pub cross_tumor: u64,
    pub per_tumor: Vec<TumorGeneCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub data_dir: String,
    pub tumors_loaded: u64,
    pub tumors_skipped: u64,
    pub central_gene: String,
    pub min_correlation: f64,
    pub max_genes_per_tumor: u64,
}

/// The handoff document for the external graph renderer: ordered node and
/// edge records with initial coordinates, sizes and colors already resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub stats: StatsV1,
    pub nodes: Vec<NodeV1>,
    pub edges: Vec<EdgeV1>,
}
