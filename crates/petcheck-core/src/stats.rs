//! Aggregate statistics over a finished result map.

use serde::Serialize;
use std::time::Duration;

use crate::labels::DogNames;
use crate::types::ResultMap;

/// Match counts for a run, with dog / not-dog breakdown when dog names are known.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsStats {
    pub n_images: usize,
    pub n_match: usize,
    pub pct_match: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dogs: Option<DogStats>,
}

/// Dog / not-dog breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DogStats {
    /// Images whose ground truth is a dog
    pub n_dogs_img: usize,
    /// Images whose ground truth is not a dog
    pub n_notdogs_img: usize,
    /// Dog images the classifier also called a dog
    pub n_correct_dogs: usize,
    /// Not-dog images the classifier also called not a dog
    pub n_correct_notdogs: usize,
    /// Dog images with a matching label (correct breed)
    pub n_correct_breed: usize,

    pub pct_correct_dogs: f64,
    pub pct_correct_notdogs: f64,
    pub pct_correct_breed: f64,
}

impl ResultsStats {
    pub fn compute(results: &ResultMap, dog_names: Option<&DogNames>) -> Self {
        let n_images = results.len();
        let n_match = results.values().filter(|r| r.is_match).count();

        let dogs = dog_names.map(|names| {
            let mut stats = DogStats::default();
            for record in results.values() {
                let truth_is_dog = names.is_dog(&record.ground_truth_label);
                let classified_dog = names.is_dog_label(&record.classifier_label);

                if truth_is_dog {
                    stats.n_dogs_img += 1;
                    if classified_dog {
                        stats.n_correct_dogs += 1;
                    }
                    if record.is_match {
                        stats.n_correct_breed += 1;
                    }
                } else {
                    stats.n_notdogs_img += 1;
                    if !classified_dog {
                        stats.n_correct_notdogs += 1;
                    }
                }
            }
            stats.pct_correct_dogs = percent(stats.n_correct_dogs, stats.n_dogs_img);
            stats.pct_correct_notdogs = percent(stats.n_correct_notdogs, stats.n_notdogs_img);
            stats.pct_correct_breed = percent(stats.n_correct_breed, stats.n_dogs_img);
            stats
        });

        Self {
            n_images,
            n_match,
            pct_match: percent(n_match, n_images),
            dogs,
        }
    }
}

/// Percentage, 0.0 when there is nothing to divide by.
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Format a duration as `H:MM:SS`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
