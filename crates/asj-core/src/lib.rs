//! Algorithmic core of a Tao–Deng–Stonebraker-style approximate
//! string-join with abbreviations.
//!
//! Given two string collections and a dictionary of abbreviation rules,
//! the crate answers which pairs could denote the same underlying
//! string once rules are applied, at a caller-chosen similarity
//! threshold. Three independent services compose the public surface:
//!
//! - [`build_dictionary`] discovers abbreviation rules from a corpus of
//!   full forms and abbreviation forms.
//! - [`filter_candidates`] produces a superset of candidate row pairs
//!   cheaply, via a token-prefix-signature filter.
//! - [`verify`] computes the exact pkduck similarity between two
//!   strings and decides a match.
//!
//! The crate performs no I/O and holds no state across calls; see
//! [`dictionary`], [`filter`], and [`verify`] for the underlying
//! builders.
#![doc = document_features::document_features!()]

pub mod dictionary;
pub mod errors;
pub mod filter;
pub mod rules;
pub mod token;
pub mod trie;
pub mod types;
pub mod verify;

pub use dictionary::DictionaryBuilder;
pub use errors::{AsjError, AsjResult};
pub use filter::PrefixFilterBuilder;
pub use rules::Rule;
pub use verify::pkduck_score;

/// Discover every `(full, abbreviation)` pair where the abbreviation
/// occurs as a character subsequence of the full form (spec §4.4,
/// §6). Equivalent to `DictionaryBuilder::new().build(fulls, abbrs)`.
pub fn build_dictionary<F, Z>(
    fulls: F,
    abbrs: Z,
) -> AsjResult<Vec<(String, String)>>
where
    F: IntoIterator,
    F::Item: AsRef<str>,
    Z: IntoIterator,
    Z::Item: AsRef<str>,
{
    DictionaryBuilder::new().build(fulls, abbrs)
}

/// Produce a sorted, deduplicated superset of candidate `(index_a,
/// index_b)` pairs that could possibly satisfy `theta` (spec §4.5,
/// §6). Equivalent to `PrefixFilterBuilder::new(theta)?.filter(...)`.
pub fn filter_candidates<A, B, R, S1, S2>(
    a_rows: A,
    b_rows: B,
    rules: R,
    theta: f64,
) -> AsjResult<Vec<(usize, usize)>>
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
    R: IntoIterator<Item = (S1, S2)>,
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    PrefixFilterBuilder::new(theta)?.filter(a_rows, b_rows, rules)
}

/// `true` iff the pkduck similarity of `x` and `y` under `rules`
/// strictly exceeds `theta` (spec §4.6, §6). Null rule sides are
/// ignored.
pub fn verify<R, S1, S2>(
    x: &str,
    y: &str,
    rules: R,
    theta: f64,
) -> AsjResult<bool>
where
    R: IntoIterator<Item = (S1, S2)>,
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    let rules: Vec<Rule> = rules
        .into_iter()
        .filter_map(|(abbr, full)| {
            let abbr = abbr.as_ref();
            let full = full.as_ref();
            if abbr.is_empty() || full.is_empty() {
                None
            } else {
                Some(Rule::new(abbr, full))
            }
        })
        .collect();
    verify::verify(x, y, &rules, theta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_entry_points_match_spec_scenarios() {
        let _ = env_logger::builder().is_test(true).try_init();

        let dict = build_dictionary(
            ["international business machines"],
            ["ibm", "bm", "xyz"],
        )
        .unwrap();
        assert_eq!(dict.len(), 2);

        let pairs = filter_candidates(
            ["ibm"],
            ["international business machines"],
            [("ibm", "international business machines")],
            0.8,
        )
        .unwrap();
        assert_eq!(pairs, vec![(0, 0)]);

        assert!(verify(
            "new york",
            "ny",
            [("ny", "new york")],
            0.5
        )
        .unwrap());
        assert!(!verify("apple", "orange", Vec::<(&str, &str)>::new(), 0.1).unwrap());
    }
}
