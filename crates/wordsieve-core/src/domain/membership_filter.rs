//! Core membership filter implementation
//!
//! INVARIANT: no false negatives - if a word was inserted, `contains`
//! must return true for it.

use bitvec::prelude::*;
use tracing::debug;

use super::hash_functions::probe_position;
use super::parameters::optimal_parameters;
use crate::error::FilterError;

/// Probabilistic set for approximate membership testing
///
/// Answers membership queries with possible false positives but no false
/// negatives. The bit array and probe count are fixed at construction;
/// there is no resizing and a set bit is never cleared.
#[derive(Clone, Debug)]
pub struct MembershipFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of probe positions per word (k)
    hash_count: usize,
    /// Size in bits (m)
    capacity_bits: usize,
    /// Number of words inserted (n)
    elements_inserted: usize,
    /// Target false positive rate the filter was sized for
    target_fpr: f64,
}

impl MembershipFilter {
    /// Create a filter with explicit parameters.
    ///
    /// A zero `capacity_bits` is representable but unusable: every probe
    /// call on such a filter fails with `InvalidConfiguration`.
    pub fn new(capacity_bits: usize, hash_count: usize, target_fpr: f64) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; capacity_bits],
            hash_count,
            capacity_bits,
            elements_inserted: 0,
            target_fpr,
        }
    }

    /// Create a filter sized for `expected_elements` words at `target_fpr`.
    ///
    /// Zero expected words falls back to a 1-bit array with a single probe
    /// rather than erroring.
    pub fn with_expected_elements(expected_elements: usize, target_fpr: f64) -> Self {
        let params = optimal_parameters(expected_elements, target_fpr);
        debug!(
            expected_elements,
            size_bits = params.size_bits,
            hash_count = params.hash_count,
            "derived filter parameters"
        );
        Self::new(params.size_bits, params.hash_count, target_fpr)
    }

    /// Insert a word into the filter.
    ///
    /// Sets the k probe positions for the word. Inserting the same word
    /// twice leaves the bit array in the same state as inserting it once.
    pub fn insert(&mut self, word: &str) -> Result<(), FilterError> {
        self.ensure_probeable()?;
        for probe in 0..self.hash_count {
            let index = probe_position(word, probe, self.capacity_bits);
            self.bits.set(index, true);
        }
        self.elements_inserted += 1;
        Ok(())
    }

    /// Test whether a word might be in the filter.
    ///
    /// Returns `false` as soon as any probe position is unset - the word is
    /// definitely absent. Returns `true` only when all k positions are set,
    /// which for a never-inserted word is a false positive.
    pub fn contains(&self, word: &str) -> Result<bool, FilterError> {
        self.ensure_probeable()?;
        for probe in 0..self.hash_count {
            let index = probe_position(word, probe, self.capacity_bits);
            if !self.bits[index] {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Modulo by the array size is only valid for a non-empty array.
    fn ensure_probeable(&self) -> Result<(), FilterError> {
        if self.capacity_bits == 0 {
            return Err(FilterError::InvalidConfiguration {
                capacity_bits: self.capacity_bits,
            });
        }
        Ok(())
    }

    /// Get the filter size in bits
    pub fn capacity_bits(&self) -> usize {
        self.capacity_bits
    }

    /// Get the number of probe positions per word
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Get the number of words inserted
    pub fn elements_inserted(&self) -> usize {
        self.elements_inserted
    }

    /// Get the target false positive rate the filter was sized for
    pub fn target_fpr(&self) -> f64 {
        self.target_fpr
    }

    /// Get the number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}
