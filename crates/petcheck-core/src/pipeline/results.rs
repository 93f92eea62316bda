//! Classifying labeled images and building result records.
//!
//! Each file is classified exactly once. Results come back in the order of
//! the label map, also when several classifier calls run concurrently.

use futures_util::stream::{self, StreamExt};
use std::path::Path;

use crate::classifier::Classifier;
use crate::config::{Config, FailurePolicy};
use crate::error::ClassifyError;
use crate::labels::{ClassifierLabel, MatchMode};
use crate::types::{Architecture, LabelMap, ResultMap, ResultRecord};

/// Classify every labeled file and record whether the classifier agreed.
///
/// Sequential and fail-fast: the first classification failure is returned
/// and no record is written for that file.
pub async fn build_results(
    dir: &Path,
    labels: &LabelMap,
    classifier: &dyn Classifier,
    arch: Architecture,
) -> Result<ResultMap, ClassifyError> {
    let outcome = ResultBuilder::new(arch)
        .build(dir, labels, classifier, |_| {})
        .await?;
    Ok(outcome.results)
}

/// Classify one file and compare against its ground-truth label.
pub async fn classify_record(
    dir: &Path,
    file_name: &str,
    ground_truth: &str,
    classifier: &dyn Classifier,
    arch: Architecture,
    mode: MatchMode,
) -> Result<ResultRecord, ClassifyError> {
    let raw = classifier.classify(&dir.join(file_name), arch).await?;
    let classifier_label = ClassifierLabel::parse(&raw);
    let is_match = classifier_label.matches(ground_truth, mode);

    tracing::debug!(
        file = file_name,
        ground_truth,
        classifier = %classifier_label,
        is_match,
        "Classified"
    );

    Ok(ResultRecord {
        ground_truth_label: ground_truth.to_string(),
        classifier_label,
        is_match,
    })
}

/// Results of a batch plus the files that failed under [`FailurePolicy::Skip`].
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub results: ResultMap,
    pub failures: Vec<(String, ClassifyError)>,
}

/// Batch driver options for building results.
#[derive(Debug, Clone)]
pub struct ResultBuilder {
    arch: Architecture,
    mode: MatchMode,
    parallel: usize,
    on_failure: FailurePolicy,
}

impl ResultBuilder {
    /// Sequential, exact matching, abort on failure.
    pub fn new(arch: Architecture) -> Self {
        Self {
            arch,
            mode: MatchMode::Exact,
            parallel: 1,
            on_failure: FailurePolicy::Abort,
        }
    }

    /// Options from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.general.arch)
            .match_mode(config.matching.mode)
            .parallel(config.processing.parallel_workers)
            .on_failure(config.processing.on_failure)
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Maximum concurrent classifier calls (values below 1 mean 1).
    pub fn parallel(mut self, parallel: usize) -> Self {
        self.parallel = parallel.max(1);
        self
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Classify every file in `labels`.
    ///
    /// `on_done` is called once per file as it completes, in label order.
    /// Under [`FailurePolicy::Abort`] the first failure is returned and
    /// in-flight calls are dropped.
    pub async fn build<F>(
        &self,
        dir: &Path,
        labels: &LabelMap,
        classifier: &dyn Classifier,
        mut on_done: F,
    ) -> Result<BuildOutcome, ClassifyError>
    where
        F: FnMut(&str),
    {
        tracing::debug!(
            "Classifying {} file(s) with {} ({} worker(s), {:?} matching)",
            labels.len(),
            self.arch,
            self.parallel,
            self.mode
        );

        let mut pending = stream::iter(labels.iter())
            .map(|(file_name, label)| async move {
                let record =
                    classify_record(dir, file_name, label, classifier, self.arch, self.mode).await;
                (file_name, record)
            })
            .buffered(self.parallel);

        let mut outcome = BuildOutcome::default();
        while let Some((file_name, record)) = pending.next().await {
            on_done(file_name);
            match record {
                Ok(record) => {
                    outcome.results.insert(file_name, record);
                }
                Err(e) => match self.on_failure {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        tracing::warn!("Skipping {file_name}: {e}");
                        outcome.failures.push((file_name.to_string(), e));
                    }
                },
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::TableClassifier;
    use crate::labels::LabelSet;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn pet_table() -> TableClassifier {
        TableClassifier::from_entries([
            ("Dalmatian_04068.jpg", "Dalmatian, coach dog, carriage dog"),
            ("dog_02.jpg", "dogue de bordeaux"),
            ("Boston_terrier_02259.jpg", "Boston terrier, Boston bull"),
            ("terrier_01.jpg", "boston terrier, boston bull"),
        ])
    }

    /// Counts calls per path; optionally fails on one file name.
    struct RecordingClassifier {
        inner: TableClassifier,
        fail_on: Option<&'static str>,
        calls: Mutex<Vec<String>>,
        total: AtomicUsize,
    }

    impl RecordingClassifier {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                inner: pet_table(),
                fail_on,
                calls: Mutex::new(Vec::new()),
                total: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Classifier for RecordingClassifier {
        fn name(&self) -> &str {
            "recording"
        }

        async fn classify(
            &self,
            image: &Path,
            arch: Architecture,
        ) -> Result<String, ClassifyError> {
            self.total.fetch_add(1, Ordering::SeqCst);
            let name = image.file_name().unwrap().to_string_lossy().to_string();
            self.calls.lock().unwrap().push(name.clone());
            if self.fail_on == Some(name.as_str()) {
                return Err(ClassifyError::Command {
                    path: image.to_path_buf(),
                    message: "unreadable image".to_string(),
                });
            }
            self.inner.classify(image, arch).await
        }
    }

    /// Answers slower for earlier files, so completion order is reversed.
    struct SlowFirstClassifier;

    #[async_trait]
    impl Classifier for SlowFirstClassifier {
        fn name(&self) -> &str {
            "slow-first"
        }

        async fn classify(
            &self,
            image: &Path,
            _arch: Architecture,
        ) -> Result<String, ClassifyError> {
            let name = image.file_name().unwrap().to_string_lossy().to_string();
            let index: u64 = name
                .trim_start_matches("cat_")
                .trim_end_matches(".jpg")
                .parse()
                .unwrap();
            tokio::time::sleep(Duration::from_millis(60 - index * 10)).await;
            Ok("tabby cat".to_string())
        }
    }

    fn labels(names: &[&str]) -> LabelMap {
        LabelSet::from_file_names(names.iter().copied()).labels
    }

    #[tokio::test]
    async fn test_build_results_matching_rules() {
        let labels = labels(&[
            "Dalmatian_04068.jpg",
            "dog_02.jpg",
            "Boston_terrier_02259.jpg",
            "terrier_01.jpg",
        ]);
        let results = build_results(Path::new("pets"), &labels, &pet_table(), Architecture::Vgg)
            .await
            .unwrap();

        assert_eq!(results.len(), 4);
        assert!(results.get("Dalmatian_04068.jpg").unwrap().is_match);
        assert!(!results.get("dog_02.jpg").unwrap().is_match);
        assert!(results.get("Boston_terrier_02259.jpg").unwrap().is_match);
        assert!(!results.get("terrier_01.jpg").unwrap().is_match);

        let dalmatian = results.get("Dalmatian_04068.jpg").unwrap();
        assert_eq!(dalmatian.ground_truth_label, "dalmatian");
        assert_eq!(
            dalmatian.classifier_label.to_string(),
            "dalmatian, coach dog, carriage dog"
        );
    }

    #[tokio::test]
    async fn test_one_record_and_one_call_per_file() {
        let set = LabelSet::from_file_names([
            "Dalmatian_04068.jpg",
            "dog_02.jpg",
            "Dalmatian_04068.jpg",
            "terrier_01.jpg",
        ]);
        assert_eq!(set.duplicates.len(), 1);

        let classifier = RecordingClassifier::new(None);
        let results = build_results(Path::new("pets"), &set.labels, &classifier, Architecture::Vgg)
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(classifier.total.load(Ordering::SeqCst), 3);
        let calls = classifier.calls.lock().unwrap();
        let unique: HashSet<&String> = calls.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[tokio::test]
    async fn test_failure_propagates_without_record() {
        let classifier = RecordingClassifier::new(Some("dog_02.jpg"));
        let labels = labels(&["Dalmatian_04068.jpg", "dog_02.jpg", "terrier_01.jpg"]);
        let err = build_results(Path::new("pets"), &labels, &classifier, Architecture::Vgg)
            .await
            .unwrap_err();

        assert_eq!(err.path(), Path::new("pets/dog_02.jpg"));
        assert!(err.to_string().contains("unreadable image"));
    }

    #[tokio::test]
    async fn test_skip_policy_continues_past_failure() {
        let classifier = RecordingClassifier::new(Some("dog_02.jpg"));
        let labels = labels(&["Dalmatian_04068.jpg", "dog_02.jpg", "terrier_01.jpg"]);

        let mut completed = Vec::new();
        let outcome = ResultBuilder::new(Architecture::Vgg)
            .on_failure(FailurePolicy::Skip)
            .build(Path::new("pets"), &labels, &classifier, |name| {
                completed.push(name.to_string())
            })
            .await
            .unwrap();

        assert_eq!(outcome.results.len(), 2);
        assert!(!outcome.results.contains("dog_02.jpg"));
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, "dog_02.jpg");
        assert_eq!(completed.len(), 3);
    }

    #[tokio::test]
    async fn test_parallel_preserves_label_order() {
        let names = ["cat_1.jpg", "cat_2.jpg", "cat_3.jpg", "cat_4.jpg", "cat_5.jpg"];
        let labels = labels(&names);

        let mut completed = Vec::new();
        let outcome = ResultBuilder::new(Architecture::Alexnet)
            .parallel(4)
            .build(Path::new("pets"), &labels, &SlowFirstClassifier, |name| {
                completed.push(name.to_string())
            })
            .await
            .unwrap();

        let keys: Vec<&str> = outcome.results.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, names);
        assert_eq!(completed, names);
        assert!(outcome.results.values().all(|r| !r.is_match));
    }

    #[tokio::test]
    async fn test_word_boundary_mode_from_builder() {
        let labels = labels(&["terrier_01.jpg"]);
        let outcome = ResultBuilder::new(Architecture::Vgg)
            .match_mode(MatchMode::WordBoundary)
            .build(Path::new("pets"), &labels, &pet_table(), |_| {})
            .await
            .unwrap();
        assert!(outcome.results.get("terrier_01.jpg").unwrap().is_match);
    }

    #[test]
    fn test_builder_from_config() {
        let mut config = Config::default();
        config.processing.parallel_workers = 8;
        config.processing.on_failure = FailurePolicy::Skip;
        let builder = ResultBuilder::from_config(&config);
        assert_eq!(builder.parallel, 8);
        assert_eq!(builder.on_failure, FailurePolicy::Skip);
        assert_eq!(builder.arch, Architecture::Vgg);
    }

    #[test]
    fn test_parallel_zero_clamped() {
        let builder = ResultBuilder::new(Architecture::Vgg).parallel(0);
        assert_eq!(builder.parallel, 1);
    }
}
