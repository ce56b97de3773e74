use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage6Output;

impl Stage6Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Output {
    fn name(&self) -> &'static str {
        "stage6_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, &report)?;
            info!(path = %ctx.output.json_path.display(), "network_json_written");
        }
        if ctx.write_tsv {
            tsv_writer::write_nodes_tsv(&ctx.output.nodes_tsv_path, ctx)?;
            tsv_writer::write_edges_tsv(&ctx.output.edges_tsv_path, ctx)?;
            info!(
                nodes = %ctx.output.nodes_tsv_path.display(),
                edges = %ctx.output.edges_tsv_path.display(),
                "network_tsv_written"
            );
        }

        ctx.report = Some(report);
        info!("output_ready");
        Ok(())
    }
}
