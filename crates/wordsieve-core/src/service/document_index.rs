//! Document index service
//!
//! Orchestrates the domain layer: validates configuration, derives filter
//! parameters from the word count, bulk-inserts the document, and answers
//! queries together with the statistics block callers display.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{IndexConfig, MembershipFilter};
use crate::error::FilterError;

/// Outcome of an approximate membership query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The word is possibly in the document (may be a false positive)
    MaybePresent,
    /// The word is definitely not in the document
    DefinitelyAbsent,
}

/// Displayable statistics for a built index
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FilterStats {
    /// Number of words inserted (n)
    pub elements_added: usize,
    /// Size of the bit array (m)
    pub bit_array_size: usize,
    /// Target false positive rate (p)
    pub target_false_positive_rate: f64,
    /// Number of hash probes per word (k)
    pub hash_count: usize,
}

/// A membership filter built over one document's words
///
/// Construction is explicit: the caller supplies the word sequence and
/// configuration, and discards the index when the session ends. Nothing is
/// persisted and the filter is never resized.
pub struct DocumentIndex {
    filter: MembershipFilter,
    config: IndexConfig,
}

impl DocumentIndex {
    /// Build an index over `words`, sized for `config.target_fpr`.
    pub fn build(words: &[String], config: IndexConfig) -> Result<Self, FilterError> {
        config.validate()?;

        let mut filter = MembershipFilter::with_expected_elements(words.len(), config.target_fpr);
        for word in words {
            filter.insert(word)?;
        }

        debug!(
            elements = words.len(),
            bits = filter.capacity_bits(),
            hashes = filter.hash_count(),
            "document index built"
        );

        Ok(Self { filter, config })
    }

    /// Answer an approximate membership query for one word.
    pub fn query(&self, word: &str) -> Result<QueryOutcome, FilterError> {
        let outcome = if self.filter.contains(word)? {
            QueryOutcome::MaybePresent
        } else {
            QueryOutcome::DefinitelyAbsent
        };
        Ok(outcome)
    }

    /// Statistics block for display
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            elements_added: self.filter.elements_inserted(),
            bit_array_size: self.filter.capacity_bits(),
            target_false_positive_rate: self.config.target_fpr,
            hash_count: self.filter.hash_count(),
        }
    }

    /// Get the underlying filter, e.g. for the validation harness
    pub fn filter(&self) -> &MembershipFilter {
        &self.filter
    }

    /// Get the configuration the index was built with
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}
