//! `PrefixFilterBuilder` — spec §4.5.

use super::g_function::GContext;
use super::signature::{prefix_signature, prefix_signature_length, sorted_tokens};
use crate::errors::{AsjError, AsjResult};
use crate::rules::Rule;
use crate::token::tokenize_ws;
use crate::types::Interrupt;

/// Builds candidate `(index_a, index_b)` pairs that could possibly
/// satisfy the similarity threshold, given a rule set.
///
/// ## Example
///
/// ```rust
/// use asj_core::filter::PrefixFilterBuilder;
///
/// let pairs = PrefixFilterBuilder::new(0.5)
///     .unwrap()
///     .filter(["red car"], ["red car"], Vec::<(&str, &str)>::new())
///     .unwrap();
/// assert_eq!(pairs, vec![(0, 0)]);
/// ```
pub struct PrefixFilterBuilder<'a> {
    theta: f64,
    interrupt: Option<Interrupt<'a>>,
}

impl<'a> PrefixFilterBuilder<'a> {
    /// Validate `theta` eagerly and construct a builder.
    ///
    /// ## Errors
    /// [`AsjError::ExactnessOutOfRange`] if `theta` is outside `[0, 1]`.
    pub fn new(theta: f64) -> AsjResult<Self> {
        if !(0.0..=1.0).contains(&theta) {
            return Err(AsjError::ExactnessOutOfRange { value: theta });
        }
        Ok(Self {
            theta,
            interrupt: None,
        })
    }

    /// Supply a cooperative cancellation callback, polled between
    /// `(a, b)` row pairs.
    pub fn interrupt(
        mut self,
        cb: Interrupt<'a>,
    ) -> Self {
        self.interrupt = Some(cb);
        self
    }

    /// Run the filter. Null rows (modelled as empty strings) and null
    /// rule sides are ignored; the result is sorted and deduplicated by
    /// `(index_a, index_b)`.
    ///
    /// ## Errors
    /// [`AsjError::Interrupted`] if the interrupt callback fires.
    pub fn filter<A, B, R, S1, S2>(
        &self,
        a_rows: A,
        b_rows: B,
        rules: R,
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
        let a_rows: Vec<String> = a_rows.into_iter().map(|s| s.as_ref().to_string()).collect();
        let b_rows: Vec<String> = b_rows.into_iter().map(|s| s.as_ref().to_string()).collect();
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
        let longest_rule_full_len = rules.iter().map(|r| r.full.len()).max().unwrap_or(0);

        log::info!(
            "filtering {} x {} rows against {} rules",
            a_rows.len(),
            b_rows.len(),
            rules.len()
        );

        let a_sorted: Vec<Vec<String>> = a_rows
            .iter()
            .map(|row| sorted_tokens(tokenize_ws(row).as_slice()))
            .collect();
        let b_sorted: Vec<Vec<String>> = b_rows
            .iter()
            .map(|row| sorted_tokens(tokenize_ws(row).as_slice()))
            .collect();
        let a_sig: Vec<Vec<String>> = a_sorted
            .iter()
            .map(|s| prefix_signature(s, self.theta))
            .collect();
        let b_sig: Vec<Vec<String>> = b_sorted
            .iter()
            .map(|s| prefix_signature(s, self.theta))
            .collect();

        let mut hits: Vec<(usize, usize)> = Vec::new();
        let mut skipped_rows = 0usize;

        for (ia, a_row) in a_rows.iter().enumerate() {
            for (ib, b_row) in b_rows.iter().enumerate() {
                if let Some(cb) = self.interrupt {
                    if cb() {
                        return Err(AsjError::Interrupted);
                    }
                }
                if a_row.is_empty() || b_row.is_empty() {
                    skipped_rows += 1;
                    continue;
                }
                let a_probes_b = Self::reachable(
                    &a_sig[ia],
                    &b_sorted[ib],
                    &b_sig[ib],
                    &rules,
                    longest_rule_full_len,
                    self.theta,
                );
                let b_probes_a = a_probes_b
                    || Self::reachable(
                        &b_sig[ib],
                        &a_sorted[ia],
                        &a_sig[ia],
                        &rules,
                        longest_rule_full_len,
                        self.theta,
                    );
                if b_probes_a {
                    hits.push((ia, ib));
                }
            }
        }
        log::debug!("skipped {skipped_rows} null row pair(s)");

        let hits = dedup_candidate_pairs(hits);
        if hits.is_empty() {
            log::warn!("no candidate pairs after filtering");
        }
        Ok(hits)
    }

    /// True iff some probe token `t` drawn from `probe_signature` is
    /// reachable within threshold from `derive_source`, for some
    /// derived length `l` bounded by `derive_signature.len() + L`.
    fn reachable(
        probe_signature: &[String],
        derive_source: &[String],
        derive_signature: &[String],
        rules: &[Rule],
        longest_rule_full_len: usize,
        theta: f64,
    ) -> bool {
        if derive_source.is_empty() {
            return false;
        }
        let l_max = derive_signature.len() + longest_rule_full_len;
        for t in probe_signature {
            let mut ctx = GContext::new(derive_source, rules, t);
            let i = derive_source.len() as i64 - 1;
            for l in 1..=l_max as i64 {
                if let Some(g) = ctx.g(i, l) {
                    if g + 1 <= prefix_signature_length(l as usize, theta) as u32 {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Sort and drop adjacent duplicates (spec §11; grounded on
/// `calc_pairs.c`'s `_remove_duplicate_joins`, the sibling of
/// `dictionary::builder::dedup_pairs`).
fn dedup_candidate_pairs(mut hits: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    hits.sort_unstable();
    hits.dedup();
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_3_no_rules_exact_match() {
        let _ = env_logger::builder().is_test(true).try_init();

        let pairs = PrefixFilterBuilder::new(0.5)
            .unwrap()
            .filter(["red car"], ["red car"], Vec::<(&str, &str)>::new())
            .unwrap();
        assert_eq!(pairs, vec![(0, 0)]);
    }

    #[test]
    fn scenario_4_rule_expansion_match() {
        let pairs = PrefixFilterBuilder::new(0.8)
            .unwrap()
            .filter(
                ["ibm"],
                ["international business machines"],
                [("ibm", "international business machines")],
            )
            .unwrap();
        assert_eq!(pairs, vec![(0, 0)]);
    }

    #[test]
    fn theta_out_of_range_is_rejected() {
        assert!(PrefixFilterBuilder::new(1.5).is_err());
        assert!(PrefixFilterBuilder::new(-0.1).is_err());
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let pairs = PrefixFilterBuilder::new(0.1)
            .unwrap()
            .filter(
                ["alpha beta", "gamma delta"],
                ["alpha beta", "gamma delta"],
                Vec::<(&str, &str)>::new(),
            )
            .unwrap();
        let mut sorted_copy = pairs.clone();
        sorted_copy.sort_unstable();
        sorted_copy.dedup();
        assert_eq!(pairs, sorted_copy);
    }

    #[test]
    fn unrelated_strings_produce_no_candidates_at_low_theta() {
        let pairs = PrefixFilterBuilder::new(0.95)
            .unwrap()
            .filter(["apple"], ["orange"], Vec::<(&str, &str)>::new())
            .unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn dedup_candidate_pairs_sorts_and_drops_duplicates() {
        let hits = vec![(1, 0), (0, 1), (1, 0), (0, 0)];
        assert_eq!(dedup_candidate_pairs(hits), vec![(0, 0), (0, 1), (1, 0)]);
    }
}
