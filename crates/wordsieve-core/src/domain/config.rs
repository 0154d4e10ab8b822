//! Index configuration and validation

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Configuration for building a document index
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Target false positive rate, strictly between 0 and 1
    pub target_fpr: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { target_fpr: 0.01 }
    }
}

impl IndexConfig {
    /// Create a new configuration with validation
    pub fn new(target_fpr: f64) -> Result<Self, FilterError> {
        let config = Self { target_fpr };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configured rate
    ///
    /// The sizing formula takes ln(p), so p must lie strictly inside (0, 1).
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.target_fpr > 0.0 && self.target_fpr < 1.0) {
            return Err(FilterError::InvalidFalsePositiveRate {
                fpr: self.target_fpr,
            });
        }
        Ok(())
    }
}
