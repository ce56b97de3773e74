use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::graph::classify;
use crate::pipeline::Stage;

pub struct Stage3Classify;

impl Stage3Classify {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Classify {
    fn name(&self) -> &'static str {
        "stage3_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let classification = classify::classify(&ctx.tables);
        let (tumor_specific, cross_tumor) = classification.partition_counts();
        info!(
            genes = classification.len(),
            tumor_specific,
            cross_tumor,
            "genes_classified"
        );
        ctx.classification = Some(classification);
        Ok(())
    }
}
