//! Service Layer - orchestration over the domain

pub mod document_index;

pub use document_index::{DocumentIndex, FilterStats, QueryOutcome};
