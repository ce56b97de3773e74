use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_tumornet::cli::{Cli, Commands};
use kira_tumornet::config::{NetworkConfig, VisualRange};
use kira_tumornet::ctx::Ctx;
use kira_tumornet::io;
use kira_tumornet::pipeline::Pipeline;
use kira_tumornet::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_tumornet::pipeline::stage1_discover::Stage1Discover;
use kira_tumornet::pipeline::stage2_load::Stage2Load;
use kira_tumornet::pipeline::stage3_classify::Stage3Classify;
use kira_tumornet::pipeline::stage4_layout::Stage4Layout;
use kira_tumornet::pipeline::stage5_assemble::Stage5Assemble;
use kira_tumornet::pipeline::stage6_output::Stage6Output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = NetworkConfig {
                central_gene: args.central_gene,
                min_correlation: args.min_correlation,
                max_genes_per_tumor: args.max_genes_per_tumor,
                node_size: VisualRange::new(args.node_size_min, args.node_size_max),
                edge_width: VisualRange::new(args.edge_width_min, args.edge_width_max),
            };
            config.validate()?;

            let mut ctx = Ctx::new(
                args.data,
                args.out,
                config,
                args.colors,
                !args.no_json,
                args.tsv,
            );
            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Discover::new()),
                Box::new(Stage2Load::new()),
                Box::new(Stage3Classify::new()),
                Box::new(Stage4Layout::new()),
                Box::new(Stage5Assemble::new()),
                Box::new(Stage6Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let config = NetworkConfig {
                central_gene: args.central_gene,
                min_correlation: args.min_correlation,
                ..NetworkConfig::default()
            };
            config.validate()?;

            let mut ctx = Ctx::new(args.data, PathBuf::from("."), config, None, false, false);
            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Discover::new()),
                Box::new(Stage2Load::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-tumornet validate ok");
    println!("tumors: {}", ctx.tables.len());
    println!("skipped: {}", ctx.skipped_tumors);
    for table in &ctx.tables {
        println!(
            "{}\t{}/{} rows kept",
            table.tumor_id,
            table.rows.len(),
            table.total_rows
        );
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
