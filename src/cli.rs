use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kira-tumornet", version, about = "Multi-tumor gene correlation network CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Directory of per-tumor correlation tables (one CSV per tumor)")]
    pub data: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value = "GCH1")]
    pub central_gene: String,

    #[arg(long, default_value_t = 0.5)]
    pub min_correlation: f64,

    #[arg(long, default_value_t = 0, help = "Cap on genes per tumor (0 = unlimited)")]
    pub max_genes_per_tumor: usize,

    #[arg(long, help = "Tumor color palette TSV overlaying the built-in palette")]
    pub colors: Option<PathBuf>,

    #[arg(long, default_value_t = 5.0)]
    pub node_size_min: f64,

    #[arg(long, default_value_t = 12.0)]
    pub node_size_max: f64,

    #[arg(long, default_value_t = 0.3)]
    pub edge_width_min: f64,

    #[arg(long, default_value_t = 2.0)]
    pub edge_width_max: f64,

    #[arg(long, default_value_t = false, help = "Skip writing network.json")]
    pub no_json: bool,

    #[arg(long, default_value_t = false, help = "Also write nodes.tsv and edges.tsv")]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Directory of per-tumor correlation tables")]
    pub data: PathBuf,

    #[arg(long, default_value = "GCH1")]
    pub central_gene: String,

    #[arg(long, default_value_t = 0.5)]
    pub min_correlation: f64,
}
