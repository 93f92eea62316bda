//! CLI enum types for the check command: architecture, output format, backend, match mode.

use clap::ValueEnum;
use petcheck_core::{Architecture, ClassifierBackend, MatchMode};

/// Model architecture passed to the classifier.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Arch {
    Vgg,
    Alexnet,
    Resnet,
}

impl From<Arch> for Architecture {
    fn from(arch: Arch) -> Self {
        match arch {
            Arch::Vgg => Architecture::Vgg,
            Arch::Alexnet => Architecture::Alexnet,
            Arch::Resnet => Architecture::Resnet,
        }
    }
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON array
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Classifier backends.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Backend {
    /// External program, label on stdout
    Command,
    /// HTTP classification service
    Http,
    /// Precomputed label table
    Table,
}

impl From<Backend> for ClassifierBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Command => ClassifierBackend::Command,
            Backend::Http => ClassifierBackend::Http,
            Backend::Table => ClassifierBackend::Table,
        }
    }
}

/// How ground truth is compared against classifier synonyms.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MatchModeArg {
    /// Ground truth must equal a whole synonym
    Exact,
    /// Ground truth may appear inside a synonym on word boundaries
    WordBoundary,
}

impl From<MatchModeArg> for MatchMode {
    fn from(mode: MatchModeArg) -> Self {
        match mode {
            MatchModeArg::Exact => MatchMode::Exact,
            MatchModeArg::WordBoundary => MatchMode::WordBoundary,
        }
    }
}
