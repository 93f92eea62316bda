//! Ground-truth labels and classifier label matching.
//!
//! - **extract**: file name → canonical ground-truth label
//! - **matcher**: classifier output normalization and the match rule
//! - **dognames**: known dog labels for dog / not-dog statistics

pub mod dognames;
pub mod extract;
pub mod matcher;

pub use dognames::DogNames;
pub use extract::{extract_label, LabelSet};
pub use matcher::{ClassifierLabel, MatchMode};
