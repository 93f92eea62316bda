//! The `petcheck labels` command: show the labels extracted from file names.

use anyhow::Context;
use clap::Args;
use petcheck_core::{Config, FileDiscovery, LabelSet};
use std::path::PathBuf;

/// Arguments for the `labels` command.
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Directory with the images (overrides config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Number of entries to print
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Execute the labels command.
pub async fn execute(args: LabelsArgs, config: Config) -> anyhow::Result<()> {
    let dir = args.dir.unwrap_or_else(|| config.image_dir());
    let file_names = FileDiscovery::new(config.processing.clone())
        .discover(&dir)
        .with_context(|| format!("Failed to list {:?}", dir))?;
    let set = LabelSet::from_file_names(&file_names);

    for line in format_labels(&set, args.limit) {
        println!("{line}");
    }
    Ok(())
}

/// Printable lines: a header, then up to `limit` numbered entries.
fn format_labels(set: &LabelSet, limit: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "{} file(s), {} duplicate(s). Showing {}:",
        set.len(),
        set.duplicates.len(),
        limit.min(set.len())
    )];
    lines.extend(
        set.labels
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, (file_name, label))| {
                format!("{:>3} file: {:<30} label: {}", i + 1, file_name, label)
            }),
    );
    lines
}
