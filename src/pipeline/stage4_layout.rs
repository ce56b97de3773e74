use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::graph::layout;
use crate::pipeline::Stage;

pub struct Stage4Layout;

impl Stage4Layout {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Layout {
    fn name(&self) -> &'static str {
        "stage4_layout"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let tumor_ids: Vec<String> = ctx.tables.iter().map(|t| t.tumor_id.clone()).collect();
        ctx.tumor_positions = layout::assign_tumor_positions(&tumor_ids);
        info!(tumors = tumor_ids.len(), "tumor_ring_assigned");
        Ok(())
    }
}
