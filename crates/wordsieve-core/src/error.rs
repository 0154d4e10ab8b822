//! Error types for the membership filter engine

use thiserror::Error;

/// Errors that can occur in the membership filter engine
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter configuration: a {capacity_bits}-bit array cannot be probed")]
    InvalidConfiguration { capacity_bits: usize },

    #[error("invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveRate { fpr: f64 },
}
