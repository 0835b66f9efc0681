//! # Verification (pkduck)
//!
//! Computes the pkduck similarity between two strings — a Jaccard-like
//! measure that greedily applies abbreviation rules to maximise shared
//! tokens — and decides whether it exceeds a threshold (spec §4.6).

mod pkduck;

pub use pkduck::{pkduck_score, verify};
