//! petcheck CLI - score an image classifier against labels encoded in file names.
//!
//! Image files named like `Boston_terrier_02259.jpg` carry their true label.
//! petcheck classifies each image once with an external classifier and
//! reports how often the classifier's answer contains that label.
//!
//! # Usage
//!
//! ```bash
//! # Check a directory with the VGG model
//! petcheck check --dir pet_images/ --arch vgg --dogfile dognames.txt
//!
//! # Show the labels extracted from file names
//! petcheck labels --dir pet_images/
//!
//! # View configuration
//! petcheck config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// petcheck - score an image classifier against file-name labels.
#[derive(Parser, Debug)]
#[command(name = "petcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a directory of images and score the classifier
    Check(cli::check::CheckArgs),

    /// Show the ground-truth labels extracted from file names
    Labels(cli::labels::LabelsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match petcheck_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `petcheck config path`."
            );
            petcheck_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("petcheck v{}", petcheck_core::VERSION);

    match cli.command {
        Commands::Check(args) => cli::check::execute(args, config).await,
        Commands::Labels(args) => cli::labels::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args, config).await,
    }
}
