//! Validation harness
//!
//! Re-queries a word sequence through a built filter, partitions the
//! answers into maybe-present and definitely-absent, and cross-checks each
//! partition against the exact reference to produce a confusion matrix.

use tracing::debug;

use super::confusion::ConfusionMatrix;
use super::reference::ReferenceIndex;
use crate::domain::MembershipFilter;
use crate::error::FilterError;

/// Drives accuracy measurement of a filter against an exact reference
pub struct ValidationHarness {
    reference: ReferenceIndex,
}

impl ValidationHarness {
    /// Build the harness, sorting `reference_words` into the exact index.
    pub fn new(reference_words: Vec<String>) -> Self {
        Self {
            reference: ReferenceIndex::new(reference_words),
        }
    }

    /// Get the exact reference index
    pub fn reference(&self) -> &ReferenceIndex {
        &self.reference
    }

    /// Measure the filter's accuracy over `query_words`.
    ///
    /// Each query word is classified by the filter, then checked against
    /// the reference: absent-but-found is a false negative (impossible when
    /// the reference equals the insertion set), maybe-but-missing is a
    /// false positive.
    pub fn validate(
        &self,
        filter: &MembershipFilter,
        query_words: &[String],
    ) -> Result<ConfusionMatrix, FilterError> {
        let mut maybe_present: Vec<&str> = Vec::new();
        let mut absent: Vec<&str> = Vec::new();

        for word in query_words {
            if filter.contains(word)? {
                maybe_present.push(word);
            } else {
                absent.push(word);
            }
        }

        // Sorted partitions keep the classification order deterministic;
        // the exact lookup itself does not depend on it.
        maybe_present.sort_unstable();
        absent.sort_unstable();

        let mut matrix = ConfusionMatrix::default();

        for word in absent {
            if self.reference.contains(word) {
                matrix.false_negatives += 1;
            } else {
                matrix.true_negatives += 1;
            }
        }

        for word in maybe_present {
            if self.reference.contains(word) {
                matrix.true_positives += 1;
            } else {
                matrix.false_positives += 1;
            }
        }

        debug!(
            true_positives = matrix.true_positives,
            false_positives = matrix.false_positives,
            true_negatives = matrix.true_negatives,
            false_negatives = matrix.false_negatives,
            rate = matrix.false_positive_rate(),
            "validation pass complete"
        );

        Ok(matrix)
    }
}
