//! Classifier trait and the factory that builds a backend from config.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use super::{CommandClassifier, HttpClassifier, TableClassifier};
use crate::config::{ClassifierBackend, Config};
use crate::error::ClassifyError;
use crate::types::Architecture;

/// An external image classifier.
///
/// Returns the raw label text for one image, possibly several
/// comma-separated synonyms. Implementations make exactly one attempt per
/// call; retries and skip policies belong to the caller.
///
/// Uses `async_trait` so backends can be held as `Box<dyn Classifier>`.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Backend name for logging (e.g., "command", "http").
    fn name(&self) -> &str;

    /// Classify one image with the given model architecture.
    async fn classify(&self, image: &Path, arch: Architecture) -> Result<String, ClassifyError>;
}

/// Factory that creates the configured classifier backend.
pub struct ClassifierFactory;

impl ClassifierFactory {
    /// Create the backend selected by `config.classifier.backend`.
    ///
    /// The table backend loads its table eagerly, so a missing table fails
    /// here rather than on the first image.
    pub fn create(config: &Config) -> Result<Box<dyn Classifier>, ClassifyError> {
        let timeout = Duration::from_millis(config.classifier.timeout_ms);

        let classifier: Box<dyn Classifier> = match config.classifier.backend {
            ClassifierBackend::Command => {
                Box::new(CommandClassifier::new(&config.classifier.command, timeout))
            }
            ClassifierBackend::Http => {
                Box::new(HttpClassifier::new(&config.classifier.http.endpoint, timeout))
            }
            ClassifierBackend::Table => Box::new(TableClassifier::load(&config.table_path())?),
        };

        tracing::debug!("Using {} classifier", classifier.name());
        Ok(classifier)
    }
}
