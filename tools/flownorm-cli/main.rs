use anyhow::{Context, Result};
use clap::Parser;
use flownorm::prelude::*;
use flownorm::store::normalize_files;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Normalize msg.action / msg.group across flow files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Flow JSON files to normalize, processed in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Optional JSON config overriding tables, marker and router actions
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Do not append the examples container
    #[arg(long)]
    no_examples: bool,

    /// Seed for generated record ids
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\nError: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let total_start = Instant::now();

    let mut config = match &cli.config {
        Some(path) => NormalizerConfig::from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => NormalizerConfig::default(),
    };
    if cli.no_examples {
        config.generate_subgraph = false;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let normalizer = Normalizer::new(config).context("Invalid normalizer config")?;

    println!("{}", "=".repeat(70));
    println!("FLOWNORM - consistent msg.action / msg.group");
    if cli.dry_run {
        println!("(dry run, no files will be written)");
    }
    println!("{}", "=".repeat(70));

    info!(files = cli.files.len(), "starting batch");
    let options = BatchOptions {
        dry_run: cli.dry_run,
    };
    let summary = normalize_files(&normalizer, &cli.files, options);

    for (path, outcome) in &summary.files {
        println!("\n{}", path.display());
        match outcome {
            FileOutcome::Normalized { report, written } => {
                println!("{}", report);
                if *written {
                    println!("  -> Saved");
                } else if report.is_noop() {
                    println!("  -> Already normalized");
                } else {
                    println!("  -> Not written (dry run)");
                }
            }
            FileOutcome::Skipped => println!("  -> Not found, skipped"),
            FileOutcome::Failed(e) => println!("  -> Failed: {}", e),
        }
    }

    println!("\n{}", "=".repeat(70));
    println!(
        "Done! {} nodes modified in total ({} files skipped, {} failed) in {:?}",
        summary.total_modified(),
        summary.skipped_count(),
        summary.failed_count(),
        total_start.elapsed()
    );
    println!("{}", "=".repeat(70));

    Ok(if summary.all_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
