//! # Wordsieve Core
//!
//! Approximate-membership word search: a probabilistic set answers "is this
//! word in the loaded document?" before any exact check, and a validation
//! harness measures how accurate those answers are.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `MembershipFilter`: fixed-capacity probabilistic set
//!   - `optimal_parameters`: bit-array sizing and probe-count derivation
//!   - `IndexConfig`: configuration with validation
//! - **Validation Layer** (`validation/`): Accuracy measurement
//!   - `ReferenceIndex`: sorted exact-membership ground truth
//!   - `ValidationHarness`: re-query, partition, cross-check
//!   - `ConfusionMatrix`: the four counters plus the empirical rate
//! - **Service Layer** (`service/`): Orchestration
//!   - `DocumentIndex`: build from a word sequence, query, report stats
//!
//! ## Invariants
//!
//! - No false negatives: an inserted word is always reported maybe-present,
//!   regardless of how many other words are inserted afterwards.
//! - The bit array never changes length after construction and a set bit is
//!   never cleared.
//! - Probe positions are deterministic per (word, probe index) pair, so
//!   results reproduce exactly across runs.
//!
//! ## Usage Example
//!
//! ```
//! use wordsieve_core::{DocumentIndex, IndexConfig, QueryOutcome, ValidationHarness};
//!
//! let words: Vec<String> = ["apple", "banana", "cherry"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//!
//! let index = DocumentIndex::build(&words, IndexConfig::default())?;
//! assert_eq!(index.query("apple")?, QueryOutcome::MaybePresent);
//!
//! let harness = ValidationHarness::new(words.clone());
//! let matrix = harness.validate(index.filter(), &words)?;
//! assert_eq!(matrix.false_negatives, 0);
//! # Ok::<(), wordsieve_core::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod service;
pub mod validation;

// Re-exports for convenience
pub use domain::{optimal_parameters, FilterParams, IndexConfig, MembershipFilter};
pub use error::FilterError;
pub use service::{DocumentIndex, FilterStats, QueryOutcome};
pub use validation::{ConfusionMatrix, ReferenceIndex, ValidationHarness};
