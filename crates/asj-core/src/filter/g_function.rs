//! The g-function — spec §4.5.
//!
//! `g(s, i, l, t)` is the minimum count of tokens strictly less than `t`
//! (under [`cmp_tokens`]) in any rule-derivation of `s[0..=i]` that
//! produces exactly `l` tokens and contains at least one token equal to
//! `t`.
//!
//! The spec's pseudocode threads a mutable "t was seen" flag through the
//! recursion; that isn't referentially transparent and doesn't memoise
//! cleanly by `(i, l, t)` alone. This implementation instead splits the
//! recursion into two memoized functions: [`GContext::cost`], the
//! minimum cost of a length-`l` derivation regardless of whether it
//! contains `t`, and [`GContext::g`], the same restricted to derivations
//! that do contain `t` — once a branch has locally satisfied "contains
//! `t`", its remaining continuation uses `cost` rather than recursing
//! into `g` again, since presence no longer needs proving.
//!
//! `s` here is the *full* sorted token sequence of the row being derived
//! from (see [`super::signature::sorted_tokens`]), not the
//! threshold-truncated prefix signature: a rule's full side can span
//! more tokens than a heavily-truncated signature retains, and deriving
//! from the untruncated sort is required for multi-token rule
//! expansions to be reachable at all (see DESIGN.md).

use core::cmp::Ordering;

use crate::rules::Rule;
use crate::token::cmp_tokens;
use crate::types::CommonHashMap;

fn better(
    current: Option<u32>,
    candidate: u32,
) -> Option<u32> {
    Some(match current {
        Some(c) => c.min(candidate),
        None => candidate,
    })
}

fn matches_seq(
    s: &[String],
    start: usize,
    end: usize,
    full: &[String],
) -> bool {
    end + 1 >= start
        && end + 1 - start == full.len()
        && s[start..=end].iter().zip(full.iter()).all(|(a, b)| a == b)
}

/// Memoised evaluation context for one `(s, rules, t)` triple.
pub struct GContext<'a> {
    s: &'a [String],
    rules: &'a [Rule],
    t: &'a str,
    cost_memo: CommonHashMap<(i64, i64), Option<u32>>,
    g_memo: CommonHashMap<(i64, i64), Option<u32>>,
}

impl<'a> GContext<'a> {
    pub fn new(
        s: &'a [String],
        rules: &'a [Rule],
        t: &'a str,
    ) -> Self {
        Self {
            s,
            rules,
            t,
            cost_memo: CommonHashMap::default(),
            g_memo: CommonHashMap::default(),
        }
    }

    /// Minimum count of tokens `< t` in a length-`l` derivation of
    /// `s[0..=i]`, regardless of whether it contains `t`. `None` means
    /// no such derivation exists.
    pub fn cost(
        &mut self,
        i: i64,
        l: i64,
    ) -> Option<u32> {
        if l == 0 {
            return Some(0);
        }
        if l < 0 || i < 0 {
            return None;
        }
        if let Some(&cached) = self.cost_memo.get(&(i, l)) {
            return cached;
        }

        let mut best: Option<u32> = None;
        let tok = self.s[i as usize].clone();

        // Case 1: s[i] stands alone.
        let contrib = match cmp_tokens(&tok, self.t) {
            Ordering::Less => 1,
            _ => 0,
        };
        if let Some(sub) = self.cost(i - 1, l - 1) {
            best = better(best, sub + contrib);
        }

        // Case 2, A->F: tok matches a single-token abbreviation side.
        for rule_idx in 0..self.rules.len() {
            let (is_abbr_match, f_len, f_less_count) = {
                let rule = &self.rules[rule_idx];
                match rule.abbr_as_single_token() {
                    Some(a) if a == tok => {
                        let cnt = rule
                            .full
                            .iter()
                            .filter(|x| cmp_tokens(x, self.t) == Ordering::Less)
                            .count() as u32;
                        (true, rule.full.len() as i64, cnt)
                    }
                    _ => (false, 0, 0),
                }
            };
            if is_abbr_match {
                if let Some(sub) = self.cost(i - 1, l - f_len) {
                    best = better(best, sub + f_less_count);
                }
            }
        }

        // Case 2, F->A: the f_len tokens ending at i equal the full side.
        for rule_idx in 0..self.rules.len() {
            let rule = &self.rules[rule_idx];
            let f_len = rule.full.len();
            if f_len == 0 {
                continue;
            }
            let f_len_i = f_len as i64;
            let start = i - f_len_i + 1;
            if start < 0 {
                continue;
            }
            if !matches_seq(self.s, start as usize, i as usize, &rule.full) {
                continue;
            }
            let Some(a) = rule.abbr_as_single_token() else {
                continue;
            };
            let contrib = match cmp_tokens(a, self.t) {
                Ordering::Less => 1,
                _ => 0,
            };
            if let Some(sub) = self.cost(start - 1, l - 1) {
                best = better(best, sub + contrib);
            }
        }

        self.cost_memo.insert((i, l), best);
        best
    }

    /// Minimum count of tokens `< t` in a length-`l` derivation of
    /// `s[0..=i]` that contains at least one token equal to `t`.
    pub fn g(
        &mut self,
        i: i64,
        l: i64,
    ) -> Option<u32> {
        if l <= 0 || i < 0 {
            return None;
        }
        if let Some(&cached) = self.g_memo.get(&(i, l)) {
            return cached;
        }
        // Guard re-entrancy: no cycle is possible since i and l are
        // strictly decreasing across every recursive call, but insert a
        // placeholder so a logic bug fails loudly instead of looping.
        self.g_memo.insert((i, l), None);

        let mut best: Option<u32> = None;
        let tok = self.s[i as usize].clone();

        // Case 1
        if tok == self.t {
            if let Some(sub) = self.cost(i - 1, l - 1) {
                best = better(best, sub);
            }
        } else {
            let contrib = match cmp_tokens(&tok, self.t) {
                Ordering::Less => 1,
                _ => 0,
            };
            if let Some(sub) = self.g(i - 1, l - 1) {
                best = better(best, sub + contrib);
            }
        }

        // Case 2, A->F
        for rule_idx in 0..self.rules.len() {
            let rule = &self.rules[rule_idx];
            let Some(a) = rule.abbr_as_single_token() else {
                continue;
            };
            if a != tok {
                continue;
            }
            let f_len = rule.full.len() as i64;
            let contains_t = rule.full.iter().any(|x| x == self.t);
            let less_count = rule
                .full
                .iter()
                .filter(|x| cmp_tokens(x, self.t) == Ordering::Less)
                .count() as u32;
            if contains_t {
                if let Some(sub) = self.cost(i - 1, l - f_len) {
                    best = better(best, sub + less_count);
                }
            } else if let Some(sub) = self.g(i - 1, l - f_len) {
                best = better(best, sub + less_count);
            }
        }

        // Case 2, F->A
        for rule_idx in 0..self.rules.len() {
            let rule = &self.rules[rule_idx];
            let f_len = rule.full.len();
            if f_len == 0 {
                continue;
            }
            let f_len_i = f_len as i64;
            let start = i - f_len_i + 1;
            if start < 0 {
                continue;
            }
            if !matches_seq(self.s, start as usize, i as usize, &rule.full) {
                continue;
            }
            let Some(a) = rule.abbr_as_single_token() else {
                continue;
            };
            if a == self.t {
                if let Some(sub) = self.cost(start - 1, l - 1) {
                    best = better(best, sub);
                }
            } else {
                let contrib = match cmp_tokens(a, self.t) {
                    Ordering::Less => 1,
                    _ => 0,
                };
                if let Some(sub) = self.g(start - 1, l - 1) {
                    best = better(best, sub + contrib);
                }
            }
        }

        self.g_memo.insert((i, l), best);
        best
    }
}
