//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

use crate::labels::MatchMode;
use crate::types::Architecture;

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding the images to check
    pub image_dir: String,

    /// Model architecture passed to the classifier
    pub arch: Architecture,

    /// Dog names file; enables dog / not-dog statistics when set
    pub dogfile: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            image_dir: "pet_images/".to_string(),
            arch: Architecture::Vgg,
            dogfile: Some("dognames.txt".to_string()),
        }
    }
}

/// What the batch driver does when the classifier fails on one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the run at the first failure
    #[default]
    Abort,
    /// Log the failure, leave the image out of the results and continue
    Skip,
}

/// Processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of concurrent classifier calls (1 = sequential)
    pub parallel_workers: usize,

    /// Failure handling policy
    pub on_failure: FailurePolicy,

    /// Accepted file extensions; empty accepts every non-hidden file
    pub extensions: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel_workers: 1,
            on_failure: FailurePolicy::Abort,
            extensions: Vec::new(),
        }
    }
}

/// Label matching settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Exact synonym match, or whole-word match inside a synonym
    pub mode: MatchMode,
}

/// Which classifier backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// External program, label on stdout
    #[default]
    Command,
    /// HTTP classification service
    Http,
    /// Precomputed label table
    Table,
}

/// Classifier settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Active backend
    pub backend: ClassifierBackend,

    /// Per-image timeout in milliseconds (command and http backends)
    pub timeout_ms: u64,

    /// External program settings
    pub command: CommandConfig,

    /// HTTP service settings
    pub http: HttpConfig,

    /// Label table settings
    pub table: TableConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::Command,
            timeout_ms: 60000,
            command: CommandConfig::default(),
            http: HttpConfig::default(),
            table: TableConfig::default(),
        }
    }
}

/// External classifier program.
///
/// `{image}` and `{arch}` in `args` are replaced per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            program: "classify-image".to_string(),
            args: vec![
                "--arch".to_string(),
                "{arch}".to_string(),
                "{image}".to_string(),
            ],
        }
    }
}

/// HTTP classification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL; requests go to `<endpoint>/classify`
    pub endpoint: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
        }
    }
}

/// Precomputed `file_name<TAB>label` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Table path; `{arch}` is replaced with the architecture name
    pub path: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: "labels_{arch}.tsv".to_string(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("json" or "jsonl")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
