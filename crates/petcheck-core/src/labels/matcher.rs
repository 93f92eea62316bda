//! Classifier label normalization and matching.
//!
//! Classifiers answer with one label or several comma-separated synonyms,
//! e.g. `"Dalmatian, coach dog, carriage dog"`. The synonyms are kept as an
//! ordered list and only joined back with commas when serialized.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a ground-truth label is compared against classifier synonyms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Ground truth must equal a whole synonym.
    #[default]
    Exact,
    /// Ground truth may also appear inside a synonym on whole-word boundaries.
    WordBoundary,
}

/// Normalized classifier output: lowercase synonyms in classifier order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ClassifierLabel {
    synonyms: Vec<String>,
}

impl ClassifierLabel {
    /// Normalize raw classifier output.
    ///
    /// Each comma-separated segment is lowercased with its whitespace
    /// collapsed; empty segments are dropped.
    pub fn parse(raw: &str) -> Self {
        let synonyms = raw
            .split(',')
            .map(normalize_words)
            .filter(|s| !s.is_empty())
            .collect();
        Self { synonyms }
    }

    /// Synonyms in the order the classifier produced them.
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// The first (primary) synonym, if any.
    pub fn primary(&self) -> Option<&str> {
        self.synonyms.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Whether `ground_truth` is represented among the synonyms.
    ///
    /// An empty ground-truth label never matches.
    pub fn matches(&self, ground_truth: &str, mode: MatchMode) -> bool {
        let truth = normalize_words(ground_truth);
        if truth.is_empty() {
            return false;
        }

        match mode {
            MatchMode::Exact => self.synonyms.iter().any(|s| *s == truth),
            MatchMode::WordBoundary => {
                let truth_words: Vec<&str> = truth.split(' ').collect();
                self.synonyms.iter().any(|s| {
                    let words: Vec<&str> = s.split(' ').collect();
                    words
                        .windows(truth_words.len())
                        .any(|window| window == truth_words.as_slice())
                })
            }
        }
    }
}

/// Lowercase, trim and collapse internal whitespace to single spaces.
fn normalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for ClassifierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.synonyms.join(", "))
    }
}

impl From<ClassifierLabel> for String {
    fn from(label: ClassifierLabel) -> Self {
        label.to_string()
    }
}

impl From<String> for ClassifierLabel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_synonyms() {
        let label = ClassifierLabel::parse("  Dalmatian,  Coach   Dog ,carriage dog, ");
        assert_eq!(
            label.synonyms(),
            &["dalmatian", "coach dog", "carriage dog"]
        );
        assert_eq!(label.primary(), Some("dalmatian"));
        assert_eq!(label.to_string(), "dalmatian, coach dog, carriage dog");
    }

    #[test]
    fn test_parse_empty_output() {
        let label = ClassifierLabel::parse(" , ,");
        assert!(label.is_empty());
        assert_eq!(label.to_string(), "");
        assert!(!label.matches("dog", MatchMode::Exact));
    }

    #[test]
    fn test_match_synonym_in_list() {
        let label = ClassifierLabel::parse("dalmatian, coach dog, carriage dog");
        assert!(label.matches("dalmatian", MatchMode::Exact));
        assert!(label.matches("coach dog", MatchMode::Exact));
    }

    #[test]
    fn test_no_match_on_word_prefix() {
        let label = ClassifierLabel::parse("dogue de bordeaux");
        assert!(!label.matches("dog", MatchMode::Exact));
        assert!(!label.matches("dog", MatchMode::WordBoundary));
    }

    #[test]
    fn test_multi_word_exact_match() {
        let label = ClassifierLabel::parse("boston terrier, boston bull");
        assert!(label.matches("boston terrier", MatchMode::Exact));
        assert!(!label.matches("terrier", MatchMode::Exact));
        assert!(!label.matches("boston", MatchMode::Exact));
    }

    #[test]
    fn test_word_boundary_mode_allows_whole_words() {
        let label = ClassifierLabel::parse("boston terrier, boston bull");
        assert!(label.matches("terrier", MatchMode::WordBoundary));
        assert!(label.matches("boston bull", MatchMode::WordBoundary));
        assert!(!label.matches("terrier boston", MatchMode::WordBoundary));
        assert!(!label.matches("bul", MatchMode::WordBoundary));
    }

    #[test]
    fn test_match_ignores_case_and_spacing_of_ground_truth() {
        let label = ClassifierLabel::parse("Golden Retriever");
        assert!(label.matches(" golden  RETRIEVER ", MatchMode::Exact));
    }

    #[test]
    fn test_empty_ground_truth_never_matches() {
        let label = ClassifierLabel::parse("cat");
        assert!(!label.matches("", MatchMode::Exact));
        assert!(!label.matches("  ", MatchMode::WordBoundary));
    }

    #[test]
    fn test_serializes_as_comma_joined_string() {
        let label = ClassifierLabel::parse("tabby, Tabby Cat");
        assert_eq!(serde_json::to_string(&label).unwrap(), r#""tabby, tabby cat""#);
        let back: ClassifierLabel = serde_json::from_str(r#""tabby, tabby cat""#).unwrap();
        assert_eq!(back, label);
    }

    #[test]
    fn test_match_mode_deserialize() {
        let mode: MatchMode = serde_json::from_str(r#""word_boundary""#).unwrap();
        assert_eq!(mode, MatchMode::WordBoundary);
    }
}
