//! Known dog labels, used to split results into dog and not-dog images.
//!
//! The dog names file holds one entry per line, each entry being a label or
//! a comma-separated synonym list in classifier style
//! (`"dalmatian, coach dog, carriage dog"`).

use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;
use crate::labels::ClassifierLabel;

/// A set of labels that denote dogs.
#[derive(Debug, Clone, Default)]
pub struct DogNames {
    names: HashSet<String>,
}

impl DogNames {
    /// Load dog names from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let dog_names = Self::parse(&content);
        tracing::info!(
            "Loaded {} dog name(s) from {}",
            dog_names.len(),
            path.display()
        );
        Ok(dog_names)
    }

    /// Parse dog names from file content.
    ///
    /// Both the whole line and each of its synonyms are registered, so a
    /// multi-synonym classifier answer and a single ground-truth word are
    /// both recognized.
    pub fn parse(content: &str) -> Self {
        let mut names = HashSet::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let label = ClassifierLabel::parse(line);
            if label.is_empty() {
                continue;
            }
            names.insert(label.to_string());
            names.extend(label.synonyms().iter().cloned());
        }
        Self { names }
    }

    /// Whether a ground-truth label names a dog.
    pub fn is_dog(&self, label: &str) -> bool {
        let label = label.trim().to_lowercase();
        !label.is_empty() && self.names.contains(&label)
    }

    /// Whether a classifier answer names a dog.
    pub fn is_dog_label(&self, label: &ClassifierLabel) -> bool {
        !label.is_empty()
            && (self.names.contains(&label.to_string())
                || label.synonyms().iter().any(|s| self.names.contains(s)))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
