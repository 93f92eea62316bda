//! Core data types shared by the extractor, the result builder and reporting.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::labels::ClassifierLabel;

/// Model architectures the classifier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    #[default]
    Vgg,
    Alexnet,
    Resnet,
}

impl Architecture {
    /// All supported architectures.
    pub const ALL: [Architecture; 3] = [Self::Vgg, Self::Alexnet, Self::Resnet];

    /// Identifier passed to the classifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vgg => "vgg",
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vgg" => Ok(Self::Vgg),
            "alexnet" => Ok(Self::Alexnet),
            "resnet" => Ok(Self::Resnet),
            other => Err(format!(
                "unsupported architecture '{other}' (expected one of: vgg, alexnet, resnet)"
            )),
        }
    }
}

/// Insertion-ordered map keyed by file name.
///
/// The first insert for a key wins; later inserts of the same key are
/// rejected and leave the existing entry untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> FileMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a value. Returns `false` if the key was already present.
    pub fn insert(&mut self, file_name: impl Into<String>, value: V) -> bool {
        let file_name = file_name.into();
        if self.index.contains_key(&file_name) {
            return false;
        }
        self.index.insert(file_name.clone(), self.entries.len());
        self.entries.push((file_name, value));
        true
    }

    pub fn get(&self, file_name: &str) -> Option<&V> {
        self.index.get(file_name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.index.contains_key(file_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V> Default for FileMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for FileMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// File name → ground-truth label.
pub type LabelMap = FileMap<String>;

/// File name → result record.
pub type ResultMap = FileMap<ResultRecord>;

/// Outcome of classifying one image against its ground-truth label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Label extracted from the file name
    pub ground_truth_label: String,

    /// Normalized classifier output
    pub classifier_label: ClassifierLabel,

    /// Whether the ground-truth label is among the classifier's synonyms
    pub is_match: bool,
}

/// One output row of a check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub file_name: String,

    pub ground_truth_label: String,

    /// Comma-joined classifier synonyms
    pub classifier_label: String,

    pub is_match: bool,

    /// Ground-truth label is a known dog name (only with a dog names file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_truth_is_dog: Option<bool>,

    /// Classifier label is a known dog name (only with a dog names file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_is_dog: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_parse() {
        assert_eq!("vgg".parse::<Architecture>(), Ok(Architecture::Vgg));
        assert_eq!(" ResNet ".parse::<Architecture>(), Ok(Architecture::Resnet));
        assert_eq!("alexnet".parse::<Architecture>(), Ok(Architecture::Alexnet));
        let err = "inception".parse::<Architecture>().unwrap_err();
        assert!(err.contains("inception"));
    }

    #[test]
    fn test_architecture_display_roundtrip() {
        for arch in Architecture::ALL {
            assert_eq!(arch.to_string().parse::<Architecture>(), Ok(arch));
        }
    }

    #[test]
    fn test_file_map_first_insert_wins() {
        let mut map = FileMap::new();
        assert!(map.insert("a.jpg", 1));
        assert!(map.insert("b.jpg", 2));
        assert!(!map.insert("a.jpg", 3));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a.jpg"), Some(&1));
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_file_map_serializes_in_insertion_order() {
        let mut map = FileMap::new();
        map.insert("zebra_01.jpg", "zebra".to_string());
        map.insert("ant_01.jpg", "ant".to_string());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zebra_01.jpg":"zebra","ant_01.jpg":"ant"}"#);
    }

    #[test]
    fn test_report_row_omits_dog_flags_when_absent() {
        let row = ReportRow {
            file_name: "cat_01.jpg".to_string(),
            ground_truth_label: "cat".to_string(),
            classifier_label: "tabby, tabby cat".to_string(),
            is_match: false,
            ground_truth_is_dog: None,
            classifier_is_dog: None,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(!json.contains("is_dog"));
    }
}
