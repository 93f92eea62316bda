//! Configuration management for petcheck.
//!
//! Configuration is loaded from the platform config directory
//! (`~/.petcheck/config.toml` as a fallback). Every section has defaults, so
//! a missing file or a partial file is fine.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for petcheck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Processing settings
    pub processing: ProcessingConfig,

    /// Label matching settings
    pub matching: MatchingConfig,

    /// Classifier backend settings
    pub classifier: ClassifierConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.petcheck.petcheck/config.toml
    /// - Linux: ~/.config/petcheck/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\petcheck\config\config.toml
    ///
    /// Falls back to ~/.petcheck/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "petcheck", "petcheck")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".petcheck").join("config.toml")
            })
    }

    /// Resolved image directory (with ~ expansion).
    pub fn image_dir(&self) -> PathBuf {
        expand_path(&self.general.image_dir)
    }

    /// Resolved dog names file (with ~ expansion), if configured.
    pub fn dogfile(&self) -> Option<PathBuf> {
        self.general.dogfile.as_deref().map(expand_path)
    }

    /// Resolved label table path for the configured architecture.
    pub fn table_path(&self) -> PathBuf {
        let path = self
            .classifier
            .table
            .path
            .replace("{arch}", self.general.arch.as_str());
        expand_path(&path)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::MatchMode;
    use crate::types::Architecture;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.processing.parallel_workers, 1);
        assert_eq!(config.processing.on_failure, FailurePolicy::Abort);
        assert_eq!(config.general.arch, Architecture::Vgg);
        assert_eq!(config.matching.mode, MatchMode::Exact);
        assert_eq!(config.classifier.backend, ClassifierBackend::Command);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[classifier.command]"));
        assert!(toml.contains("arch = \"vgg\""));
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[general]\narch = \"resnet\"\n\n[matching]\nmode = \"word_boundary\"\n\n[classifier]\nbackend = \"table\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.general.arch, Architecture::Resnet);
        assert_eq!(config.matching.mode, MatchMode::WordBoundary);
        assert_eq!(config.classifier.backend, ClassifierBackend::Table);
        assert_eq!(config.general.image_dir, "pet_images/");
        assert_eq!(config.classifier.timeout_ms, 60000);
    }

    #[test]
    fn test_load_rejects_unknown_architecture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\narch = \"inception\"").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_runs_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[processing]\nparallel_workers = 0").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("parallel_workers"));
    }

    #[test]
    fn test_table_path_substitutes_arch() {
        let mut config = Config::default();
        config.general.arch = Architecture::Alexnet;
        config.classifier.table.path = "out/labels_{arch}.tsv".to_string();
        assert_eq!(config.table_path(), PathBuf::from("out/labels_alexnet.tsv"));
    }

    #[test]
    fn test_dogfile_optional() {
        let mut config = Config::default();
        assert_eq!(config.dogfile(), Some(PathBuf::from("dognames.txt")));
        config.general.dogfile = None;
        assert!(config.dogfile().is_none());
    }
}
