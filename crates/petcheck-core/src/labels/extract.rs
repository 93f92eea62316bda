//! Ground-truth label extraction from image file names.
//!
//! A file name like `Boston_terrier_02259.jpg` encodes its label in the
//! underscore-separated alphabetic tokens: `boston terrier`.

use crate::types::LabelMap;

/// Extract the ground-truth label from a file name.
///
/// Splits on `_`, keeps only tokens made entirely of alphabetic characters,
/// lowercases them and joins with single spaces. Numeric disambiguators and
/// the token carrying the extension are dropped. A name with no alphabetic
/// tokens yields an empty label.
pub fn extract_label(file_name: &str) -> String {
    file_name
        .split('_')
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Ground-truth labels for one directory pass.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    /// File name → label, in first-seen order
    pub labels: LabelMap,

    /// File names seen more than once, one entry per repeated occurrence
    pub duplicates: Vec<String>,
}

impl LabelSet {
    /// Build labels from a list of file names.
    ///
    /// Hidden files must already be filtered out. A file name that repeats
    /// is logged as a warning and the first occurrence is kept.
    pub fn from_file_names<I, S>(file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();

        for name in file_names {
            let name = name.as_ref();
            if set.labels.contains(name) {
                tracing::warn!("Duplicate file name in input, keeping first: {name}");
                set.duplicates.push(name.to_string());
                continue;
            }
            let label = extract_label(name);
            if label.is_empty() {
                tracing::debug!("No alphabetic tokens in {name}, label is empty");
            }
            set.labels.insert(name, label);
        }

        tracing::debug!(
            "Extracted {} label(s), {} duplicate(s)",
            set.labels.len(),
            set.duplicates.len()
        );
        set
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
