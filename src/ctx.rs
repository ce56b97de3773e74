use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::NetworkConfig;
use crate::graph::classify::Classification;
use crate::graph::{EdgeRecord, GeneStats, NodeRecord, Point, TumorTable};
use crate::io::tables::DiscoveredTable;
use crate::schema::v1::NetworkV1;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub nodes_tsv_path: PathBuf,
    pub edges_tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub data_dir: PathBuf,
    pub config: NetworkConfig,
    pub palette_override: Option<PathBuf>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub tables_discovered: Vec<DiscoveredTable>,
    pub tables: Vec<TumorTable>,
    pub skipped_tumors: usize,
    pub palette: BTreeMap<String, String>,
    pub classification: Option<Classification>,
    pub tumor_positions: BTreeMap<String, Point>,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub stats: Option<GeneStats>,
    pub report: Option<NetworkV1>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        data_dir: PathBuf,
        out_dir: PathBuf,
        config: NetworkConfig,
        palette_override: Option<PathBuf>,
        write_json: bool,
        write_tsv: bool,
    ) -> Self {
        let json_path = out_dir.join("network.json");
        let nodes_tsv_path = out_dir.join("nodes.tsv");
        let edges_tsv_path = out_dir.join("edges.tsv");
        Self {
            data_dir,
            config,
            palette_override,
            write_json,
            write_tsv,
            tables_discovered: Vec::new(),
            tables: Vec::new(),
            skipped_tumors: 0,
            palette: BTreeMap::new(),
            classification: None,
            tumor_positions: BTreeMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            stats: None,
            report: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                nodes_tsv_path,
                edges_tsv_path,
            },
        }
    }
}
