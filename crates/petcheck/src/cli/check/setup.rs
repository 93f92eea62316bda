//! Check setup: config overrides, discovery, labels, dog names, classifier.

use anyhow::Context;
use petcheck_core::{
    Classifier, ClassifierFactory, Config, DogNames, FailurePolicy, FileDiscovery, LabelSet,
    OutputFormat as CoreOutputFormat,
};
use std::path::PathBuf;

use super::types::OutputFormat;
use super::CheckArgs;

/// Everything a check run needs, assembled by [`setup_check`].
pub(crate) struct CheckContext {
    pub config: Config,
    pub image_dir: PathBuf,
    pub labels: LabelSet,
    pub dog_names: Option<DogNames>,
    pub classifier: Box<dyn Classifier>,
    pub output_format: CoreOutputFormat,
}

/// Apply CLI overrides on top of the loaded config.
pub(crate) fn apply_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(dir) = &args.dir {
        config.general.image_dir = dir.display().to_string();
    }
    if let Some(arch) = args.arch {
        config.general.arch = arch.into();
    }
    if let Some(dogfile) = &args.dogfile {
        config.general.dogfile = Some(dogfile.display().to_string());
    }
    if args.no_dogfile {
        config.general.dogfile = None;
    }
    if let Some(format) = args.format {
        config.output.format = format.to_string();
    }
    if args.pretty {
        config.output.pretty = true;
    }
    if let Some(parallel) = args.parallel {
        config.processing.parallel_workers = parallel;
    }
    if args.skip_failures {
        config.processing.on_failure = FailurePolicy::Skip;
    }
    if let Some(backend) = args.backend {
        config.classifier.backend = backend.into();
    }
    if let Some(mode) = args.match_mode {
        config.matching.mode = mode.into();
    }
}

/// Validate overrides, list images, extract labels, and create the classifier.
pub(crate) fn setup_check(args: &CheckArgs, mut config: Config) -> anyhow::Result<CheckContext> {
    apply_overrides(&mut config, args);
    config.validate()?;

    let image_dir = config.image_dir();
    if !image_dir.is_dir() {
        anyhow::bail!(
            "Image directory does not exist: {:?}\n\n  Hint: pass --dir or set general.image_dir in the config.",
            image_dir
        );
    }

    let file_names = FileDiscovery::new(config.processing.clone())
        .discover(&image_dir)
        .with_context(|| format!("Failed to list {:?}", image_dir))?;
    let labels = LabelSet::from_file_names(&file_names);
    if !labels.duplicates.is_empty() {
        tracing::warn!(
            "{} duplicate file name(s) ignored",
            labels.duplicates.len()
        );
    }

    let dog_names = load_dog_names(&config)?;

    let classifier = ClassifierFactory::create(&config)
        .context("Failed to set up classifier")?;

    let output_format = match args.format {
        Some(OutputFormat::Jsonl) => CoreOutputFormat::JsonLines,
        Some(OutputFormat::Json) => CoreOutputFormat::Json,
        None => CoreOutputFormat::parse(&config.output.format).unwrap_or(CoreOutputFormat::Json),
    };

    Ok(CheckContext {
        config,
        image_dir,
        labels,
        dog_names,
        classifier,
        output_format,
    })
}

/// Load the dog names file if one is configured.
///
/// A configured but missing file only disables the dog statistics.
fn load_dog_names(config: &Config) -> anyhow::Result<Option<DogNames>> {
    let Some(path) = config.dogfile() else {
        return Ok(None);
    };
    if !path.exists() {
        tracing::warn!(
            "Dog names file not found at {:?}; dog statistics disabled",
            path
        );
        return Ok(None);
    }
    let names = DogNames::load(&path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(Some(names))
}
