//! Reporting for a check run: progress bar, result rows, summary.

use petcheck_core::{
    format_elapsed, Config, OutputFormat as CoreOutputFormat, OutputWriter, ReportRow,
    ResultsStats,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

/// Write result rows to a file, or to stdout when no file is given.
pub fn write_rows(
    rows: &[ReportRow],
    output: Option<&Path>,
    format: CoreOutputFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = OutputWriter::new(BufWriter::new(file), format, pretty);
            writer.write_all(rows)?;
            writer.flush()?;
            tracing::info!("Wrote {} row(s) to {:?}", writer.rows_written(), path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = OutputWriter::new(stdout.lock(), format, pretty);
            writer.write_all(rows)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Create a progress bar for classification.
pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec}",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

/// List misclassified images on stderr.
///
/// With dog names loaded, dog / not-dog disagreements and wrong breeds are
/// listed separately; otherwise every non-match is listed.
pub fn print_misses(rows: &[ReportRow]) {
    let has_dog_flags = rows.iter().any(|r| r.ground_truth_is_dog.is_some());

    if !has_dog_flags {
        eprintln!();
        eprintln!("  Misclassified images:");
        for row in rows.iter().filter(|r| !r.is_match) {
            print_row(row);
        }
        return;
    }

    eprintln!();
    eprintln!("  Misclassified dogs:");
    for row in rows
        .iter()
        .filter(|r| r.ground_truth_is_dog != r.classifier_is_dog)
    {
        print_row(row);
    }

    eprintln!();
    eprintln!("  Misclassified breeds:");
    for row in rows.iter().filter(|r| {
        r.ground_truth_is_dog == Some(true) && r.classifier_is_dog == Some(true) && !r.is_match
    }) {
        print_row(row);
    }
}

fn print_row(row: &ReportRow) {
    eprintln!(
        "    {:<30} truth: {:<26} classifier: {}",
        row.file_name, row.ground_truth_label, row.classifier_label
    );
}

/// Print a formatted summary table after a check run.
pub fn print_summary(
    config: &Config,
    stats: &ResultsStats,
    failed: usize,
    duplicates: usize,
    elapsed: Duration,
) {
    eprintln!();
    eprintln!("  ====================================");
    eprintln!("          Summary ({})", config.general.arch);
    eprintln!("  ====================================");
    eprintln!("    Images:        {:>8}", stats.n_images);
    eprintln!("    Matches:       {:>8}", stats.n_match);
    eprintln!("    % Match:       {:>7.1}%", stats.pct_match);
    if let Some(dogs) = &stats.dogs {
        eprintln!("  ------------------------------------");
        eprintln!("    Dog images:    {:>8}", dogs.n_dogs_img);
        eprintln!("    Not-dogs:      {:>8}", dogs.n_notdogs_img);
        eprintln!("    % Dogs:        {:>7.1}%", dogs.pct_correct_dogs);
        eprintln!("    % Breed:       {:>7.1}%", dogs.pct_correct_breed);
        eprintln!("    % Not-dogs:    {:>7.1}%", dogs.pct_correct_notdogs);
    }
    if failed > 0 || duplicates > 0 {
        eprintln!("  ------------------------------------");
    }
    if failed > 0 {
        eprintln!("    Failed:        {:>8}", failed);
    }
    if duplicates > 0 {
        eprintln!("    Duplicates:    {:>8}", duplicates);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Runtime:       {:>8}", format_elapsed(elapsed));
    eprintln!("  ====================================");
}
