//! Classifier answers looked up from a precomputed table.
//!
//! Useful for re-scoring a run offline: the table holds one
//! `file_name<TAB>label` line per image, as produced by an earlier
//! classification pass. Lines starting with `#` are comments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use super::provider::Classifier;
use crate::error::ClassifyError;
use crate::types::Architecture;

pub struct TableClassifier {
    labels: HashMap<String, String>,
}

impl TableClassifier {
    /// Load a label table from disk.
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let content = std::fs::read_to_string(path).map_err(|e| ClassifyError::Table {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut labels = HashMap::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let Some((file_name, label)) = line.split_once('\t') else {
                return Err(ClassifyError::Table {
                    path: path.to_path_buf(),
                    message: format!("line {}: expected file_name<TAB>label", line_no + 1),
                });
            };
            labels.insert(file_name.trim().to_string(), label.trim().to_string());
        }

        tracing::info!("Loaded {} label(s) from {}", labels.len(), path.display());
        Ok(Self { labels })
    }

    /// Build a table from in-memory entries.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            labels: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[async_trait]
impl Classifier for TableClassifier {
    fn name(&self) -> &str {
        "table"
    }

    /// Looks the image up by file name; the table is already specific to
    /// one architecture.
    async fn classify(&self, image: &Path, _arch: Architecture) -> Result<String, ClassifyError> {
        image
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.labels.get(name))
            .filter(|label| !label.is_empty())
            .cloned()
            .ok_or_else(|| ClassifyError::NoLabel {
                path: image.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "# vgg run\nBeagle_01.jpg\tbeagle\ncat_02.jpg\ttabby, tabby cat\n\n"
        )
        .unwrap();

        let table = TableClassifier::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Beagle_01.jpg beagle").unwrap();

        let err = TableClassifier::load(file.path()).err().unwrap();
        assert!(err.to_string().contains("line 1"));
    }

    #[tokio::test]
    async fn test_classify_by_file_name() {
        let table = TableClassifier::from_entries([("cat_02.jpg", "tabby, tabby cat")]);
        let label = table
            .classify(Path::new("/some/dir/cat_02.jpg"), Architecture::Resnet)
            .await
            .unwrap();
        assert_eq!(label, "tabby, tabby cat");
    }

    #[tokio::test]
    async fn test_classify_unknown_file_is_no_label() {
        let table = TableClassifier::from_entries([("cat_02.jpg", "tabby")]);
        let err = table
            .classify(Path::new("dir/dog_01.jpg"), Architecture::Vgg)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifyError::NoLabel { .. }));
        assert_eq!(err.path(), Path::new("dir/dog_01.jpg"));
    }
}
