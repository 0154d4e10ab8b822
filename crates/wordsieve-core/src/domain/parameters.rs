//! Optimal filter parameter calculation
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)         -- optimal probe count

use std::f64::consts::LN_2;

/// Derived filter parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of probe positions per word (k)
    pub hash_count: usize,
}

/// Calculate optimal filter parameters for the given constraints
///
/// # Arguments
/// * `num_elements` - Expected number of words to insert (n)
/// * `target_fpr` - Target false positive rate (p)
///
/// # Returns
/// Parameters (m, k) sized so the filter approaches `target_fpr` once
/// `num_elements` words are inserted.
pub fn optimal_parameters(num_elements: usize, target_fpr: f64) -> FilterParams {
    if num_elements == 0 {
        // 1-bit floor keeps lookups well defined without a division by zero
        return FilterParams {
            size_bits: 1,
            hash_count: 1,
        };
    }

    let n = num_elements as f64;
    let ln2_squared = LN_2 * LN_2;

    // Optimal number of bits: m = -n * ln(p) / (ln(2)^2)
    let m = (-n * target_fpr.ln() / ln2_squared).ceil() as usize;

    // Optimal number of probes: k = (m/n) * ln(2), at least one
    let k = ((m as f64 / n) * LN_2).round() as usize;
    let k = k.max(1);

    FilterParams {
        size_bits: m,
        hash_count: k,
    }
}
