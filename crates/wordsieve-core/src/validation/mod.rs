//! Validation Layer - accuracy measurement against an exact reference
//!
//! This layer contains:
//! - `ReferenceIndex`: sorted exact-membership ground truth
//! - `ConfusionMatrix`: true/false positive/negative counters
//! - `ValidationHarness`: drives re-query and classification

pub mod confusion;
pub mod harness;
pub mod reference;

pub use confusion::ConfusionMatrix;
pub use harness::ValidationHarness;
pub use reference::ReferenceIndex;
