use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{colors, tables};
use crate::pipeline::Stage;

pub struct Stage1Discover;

impl Stage1Discover {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Discover {
    fn name(&self) -> &'static str {
        "stage1_discover"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let discovered = tables::discover_tables(&ctx.data_dir)?;
        if discovered.is_empty() {
            ctx.warnings.push(format!(
                "no .csv tables found in {}",
                ctx.data_dir.display()
            ));
        }
        for table in &discovered {
            info!(
                tumor = %table.tumor_id,
                path = %table.path.display(),
                "tumor_table_discovered"
            );
        }
        ctx.tables_discovered = discovered;

        let mut palette = colors::load_builtin_palette()?;
        if let Some(path) = &ctx.palette_override {
            let user = colors::load_user_palette(path)?;
            info!(path = %path.display(), entries = user.len(), "user_palette_loaded");
            palette = colors::merge_palettes(palette, user);
        }
        ctx.palette = palette;

        Ok(())
    }
}
