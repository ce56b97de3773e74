use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::tables;
use crate::pipeline::Stage;

pub struct Stage2Load;

impl Stage2Load {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Load {
    fn name(&self) -> &'static str {
        "stage2_load"
    }

    // Per-tumor failures are recorded and skipped; remaining tumors still load.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let discovered = ctx.tables_discovered.clone();
        for table in &discovered {
            match tables::load_table(table, &ctx.config) {
                Ok(loaded) => {
                    info!(
                        tumor = %table.tumor_id,
                        kept = loaded.table.rows.len(),
                        total = loaded.table.total_rows,
                        min_correlation = ctx.config.min_correlation,
                        "tumor_table_loaded"
                    );
                    ctx.warnings.extend(loaded.warnings);
                    ctx.tables.push(loaded.table);
                }
                Err(err) => {
                    warn!(tumor = %table.tumor_id, error = %err, "tumor_table_skipped");
                    ctx.skipped_tumors += 1;
                    ctx.warnings
                        .push(format!("skipped {}: {:#}", table.tumor_id, err));
                }
            }
        }
        if ctx.tables.is_empty() {
            warn!("no tumor tables loaded");
        }
        Ok(())
    }
}
