//! Confusion matrix for filter accuracy measurement

use serde::{Deserialize, Serialize};

/// Four-way classification of approximate answers against an exact reference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Filter said maybe, reference confirms
    pub true_positives: u64,
    /// Filter said maybe, reference denies
    pub false_positives: u64,
    /// Filter said absent, reference confirms
    pub true_negatives: u64,
    /// Filter said absent, reference contradicts (a configuration bug)
    pub false_negatives: u64,
}

impl ConfusionMatrix {
    /// Empirical false positive rate: fp / (fp + tn).
    ///
    /// Defined as 0 when no negative-ground-truth queries were made.
    pub fn false_positive_rate(&self) -> f64 {
        let denominator = self.false_positives + self.true_negatives;
        if denominator == 0 {
            return 0.0;
        }
        self.false_positives as f64 / denominator as f64
    }

    /// Total number of classified queries
    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}
