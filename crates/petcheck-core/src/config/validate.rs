//! Configuration validation.

use crate::error::ConfigError;
use crate::output::OutputFormat;

use super::{ClassifierBackend, Config};

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.parallel_workers == 0 {
            return Err(ConfigError::ValidationError(
                "processing.parallel_workers must be > 0".into(),
            ));
        }
        if self.classifier.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "classifier.timeout_ms must be > 0".into(),
            ));
        }
        match self.classifier.backend {
            ClassifierBackend::Command if self.classifier.command.program.trim().is_empty() => {
                return Err(ConfigError::ValidationError(
                    "classifier.command.program must not be empty".into(),
                ));
            }
            ClassifierBackend::Http if self.classifier.http.endpoint.trim().is_empty() => {
                return Err(ConfigError::ValidationError(
                    "classifier.http.endpoint must not be empty".into(),
                ));
            }
            ClassifierBackend::Table if self.classifier.table.path.trim().is_empty() => {
                return Err(ConfigError::ValidationError(
                    "classifier.table.path must not be empty".into(),
                ));
            }
            _ => {}
        }
        if OutputFormat::parse(&self.output.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be \"json\" or \"jsonl\", got \"{}\"",
                self.output.format
            )));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }
}
