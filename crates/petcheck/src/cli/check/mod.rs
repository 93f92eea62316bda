//! The `petcheck check` command: classify a directory and score the classifier.

mod report;
mod setup;
pub mod types;

pub use types::{Arch, Backend, MatchModeArg, OutputFormat};

use anyhow::Context;
use clap::Args;
use petcheck_core::{report_rows, Config, ResultBuilder, ResultsStats};
use std::path::PathBuf;
use std::time::Instant;

use report::{create_progress_bar, print_misses, print_summary, write_rows};
use setup::setup_check;

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory with the images to check (overrides config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Model architecture to classify with
    #[arg(short, long, value_enum)]
    pub arch: Option<Arch>,

    /// File with known dog names, one per line
    #[arg(long, conflicts_with = "no_dogfile")]
    pub dogfile: Option<PathBuf>,

    /// Skip dog / not-dog statistics
    #[arg(long)]
    pub no_dogfile: bool,

    /// Output file for per-image results (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Number of concurrent classifier calls
    #[arg(short, long)]
    pub parallel: Option<usize>,

    /// Continue past images the classifier fails on
    #[arg(long)]
    pub skip_failures: bool,

    /// Classifier backend
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// How labels are matched
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    /// List misclassified images on stderr after the run
    #[arg(long)]
    pub print_misses: bool,
}

/// Execute the check command.
pub async fn execute(args: CheckArgs, config: Config) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let ctx = setup_check(&args, config)?;

    if ctx.labels.is_empty() {
        tracing::warn!("No image files found in {:?}", ctx.image_dir);
        return Ok(());
    }
    tracing::info!(
        "Checking {} image(s) in {:?} with {}",
        ctx.labels.len(),
        ctx.image_dir,
        ctx.config.general.arch
    );

    let progress = create_progress_bar(ctx.labels.len() as u64);
    let outcome = ResultBuilder::from_config(&ctx.config)
        .build(
            &ctx.image_dir,
            &ctx.labels.labels,
            ctx.classifier.as_ref(),
            |_| progress.inc(1),
        )
        .await;
    progress.finish_and_clear();
    let outcome = outcome.context(
        "Classification failed. Use --skip-failures to continue past unreadable images.",
    )?;

    let rows = report_rows(&outcome.results, ctx.dog_names.as_ref());
    write_rows(&rows, args.output.as_deref(), ctx.output_format, ctx.config.output.pretty)?;

    if args.print_misses {
        print_misses(&rows);
    }

    let stats = ResultsStats::compute(&outcome.results, ctx.dog_names.as_ref());
    print_summary(
        &ctx.config,
        &stats,
        outcome.failures.len(),
        ctx.labels.duplicates.len(),
        start_time.elapsed(),
    );

    Ok(())
}
