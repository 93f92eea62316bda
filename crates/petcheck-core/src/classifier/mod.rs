//! External classifier backends.
//!
//! The classifier is a collaborator, not part of petcheck: these backends only
//! forward an image path and architecture name to something that can label it.

pub mod command;
pub mod http;
pub mod provider;
pub mod table;

pub use command::CommandClassifier;
pub use http::HttpClassifier;
pub use provider::{Classifier, ClassifierFactory};
pub use table::TableClassifier;
