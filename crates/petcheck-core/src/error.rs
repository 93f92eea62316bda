//! Error types for petcheck.
//!
//! Classification failures always carry the image path so the batch driver
//! can report which file failed and why.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for petcheck operations.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Classifier invocation errors
    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// The external classifier could not produce a label for an image.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Image file does not exist
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    /// External classifier program failed
    #[error("Classifier command failed for {path}: {message}")]
    Command { path: PathBuf, message: String },

    /// Classifier service request failed
    #[error("Classifier request failed for {path}: {message}")]
    Http { path: PathBuf, message: String },

    /// Classifier did not answer in time
    #[error("Classifier timed out for {path} after {timeout_ms}ms")]
    Timeout { path: PathBuf, timeout_ms: u64 },

    /// Classifier answered with nothing usable
    #[error("Classifier returned no label for {path}")]
    NoLabel { path: PathBuf },

    /// Precomputed label table could not be read
    #[error("Label table error for {path}: {message}")]
    Table { path: PathBuf, message: String },
}

impl ClassifyError {
    /// Path of the image (or table) the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ImageNotFound(path) => path,
            Self::Command { path, .. }
            | Self::Http { path, .. }
            | Self::Timeout { path, .. }
            | Self::NoLabel { path }
            | Self::Table { path, .. } => path,
        }
    }
}

/// Convenience type alias for petcheck results.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error_carries_path() {
        let err = ClassifyError::Timeout {
            path: PathBuf::from("pets/beagle_01.jpg"),
            timeout_ms: 500,
        };
        assert_eq!(err.path(), std::path::Path::new("pets/beagle_01.jpg"));
        assert!(err.to_string().contains("beagle_01.jpg"));
        assert!(err.to_string().contains("500ms"));
    }

    #[test]
    fn test_classify_error_converts_to_check_error() {
        let err: CheckError = ClassifyError::NoLabel {
            path: PathBuf::from("cat_02.jpg"),
        }
        .into();
        assert!(err.to_string().starts_with("Classification error"));
    }
}
