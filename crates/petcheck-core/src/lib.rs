//! petcheck core - checking an image classifier against file-name labels.
//!
//! Image files are expected to carry their true label in the file name
//! (`Boston_terrier_02259.jpg` → `boston terrier`). petcheck extracts those
//! labels, asks an external classifier about every image once, and records
//! whether the classifier's answer contains the true label.
//!
//! # Architecture
//!
//! ```text
//! file names → extract_label → LabelMap → Classifier → ClassifierLabel::matches → ResultMap
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use petcheck_core::{build_results, Architecture, LabelSet, TableClassifier};
//!
//! #[tokio::main]
//! async fn main() -> petcheck_core::Result<()> {
//!     let set = LabelSet::from_file_names(["Beagle_01.jpg", "cat_02.jpg"]);
//!     let classifier = TableClassifier::from_entries([
//!         ("Beagle_01.jpg", "beagle"),
//!         ("cat_02.jpg", "tabby, tabby cat"),
//!     ]);
//!     let results = build_results("pets".as_ref(), &set.labels, &classifier, Architecture::Vgg).await?;
//!     for (file, record) in results.iter() {
//!         println!("{file}: {}", record.is_match);
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod classifier;
pub mod config;
pub mod error;
pub mod labels;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod types;

// Re-exports for convenient access
pub use classifier::{
    Classifier, ClassifierFactory, CommandClassifier, HttpClassifier, TableClassifier,
};
pub use config::{ClassifierBackend, Config, FailurePolicy};
pub use error::{CheckError, ClassifyError, ConfigError, Result};
pub use labels::{extract_label, ClassifierLabel, DogNames, LabelSet, MatchMode};
pub use output::{report_rows, OutputFormat, OutputWriter};
pub use pipeline::{build_results, BuildOutcome, FileDiscovery, ResultBuilder};
pub use stats::{format_elapsed, DogStats, ResultsStats};
pub use types::{Architecture, FileMap, LabelMap, ReportRow, ResultMap, ResultRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
