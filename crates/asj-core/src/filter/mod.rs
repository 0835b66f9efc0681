//! # Candidate-Pair Filtering (TDS Prefix Filter)
//!
//! Produces a small superset of candidate pairs that could possibly
//! satisfy a similarity threshold, by combining token-length-ordered
//! prefix signatures with a rule-expansion reachability test (spec
//! §4.5).

mod builder;
mod g_function;
mod signature;

pub use builder::PrefixFilterBuilder;
pub use signature::{prefix_signature, prefix_signature_length, sorted_tokens};
