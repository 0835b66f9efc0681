//! `DictionaryBuilder` — spec §4.4.

use crate::errors::{AsjError, AsjResult};
use crate::trie::Trie;
use crate::types::Interrupt;

/// Builds a deduplicated `(full, abbreviation)` dictionary by finding
/// every abbreviation that occurs as a character subsequence of a full
/// form.
///
/// ## Example
///
/// ```rust
/// use asj_core::dictionary::DictionaryBuilder;
///
/// let dict = DictionaryBuilder::new()
///     .build(
///         ["international business machines"],
///         ["ibm", "bm", "xyz"],
///     )
///     .unwrap();
///
/// assert_eq!(dict.len(), 2);
/// ```
#[derive(Default)]
pub struct DictionaryBuilder<'a> {
    interrupt: Option<Interrupt<'a>>,
}

impl<'a> DictionaryBuilder<'a> {
    /// A builder with default settings: no interrupt callback.
    pub fn new() -> Self {
        Self { interrupt: None }
    }

    /// Supply a cooperative cancellation callback, polled between full
    /// rows (spec §5, §10.4). Returning `true` aborts the build with
    /// [`AsjError::Interrupted`].
    pub fn interrupt(
        mut self,
        cb: Interrupt<'a>,
    ) -> Self {
        self.interrupt = Some(cb);
        self
    }

    /// Run the build. `fulls` and `abbrs` accept any iterable of
    /// `Option<&str>`-compatible strings; `None`/null entries (modelled
    /// here as empty-optional items via [`Option`]) are skipped.
    ///
    /// ## Errors
    /// [`AsjError::NoAbbreviations`] if `abbrs` is empty after
    /// null-filtering. [`AsjError::Interrupted`] if the interrupt
    /// callback fires.
    pub fn build<F, Z>(
        &self,
        fulls: F,
        abbrs: Z,
    ) -> AsjResult<Vec<(String, String)>>
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        Z: IntoIterator,
        Z::Item: AsRef<str>,
    {
        let mut trie: Trie<String> = Trie::new();
        let mut abbr_count = 0usize;
        for z in abbrs {
            let z = z.as_ref();
            if z.is_empty() {
                continue;
            }
            trie.insert(z, z.to_string());
            abbr_count += 1;
        }
        if abbr_count == 0 {
            return Err(AsjError::NoAbbreviations);
        }

        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut rows = 0usize;
        for f in fulls {
            let f = f.as_ref();
            rows += 1;
            if let Some(cb) = self.interrupt {
                if cb() {
                    return Err(AsjError::Interrupted);
                }
            }
            if f.is_empty() {
                continue;
            }
            let hits = trie.search_subsequences(f);
            log::debug!("full row {rows:?}: {} subsequence matches", hits.len());
            for z in hits {
                pairs.push((f.to_string(), z.clone()));
            }
        }
        log::info!("dictionary build processed {rows} full rows");

        if pairs.is_empty() {
            log::warn!("no subsequence matches found while building dictionary");
            return Ok(pairs);
        }

        Ok(dedup_pairs(pairs))
    }
}

/// Sort pairs under "abbreviation first, then full" and drop adjacent
/// duplicates (spec §4.4 step 3; grounded on `calc_dict.c`'s
/// `_remove_duplicate_pairs`, spec §11).
fn dedup_pairs(mut pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    pairs.sort_by(|(fa, za), (fb, zb)| za.cmp(zb).then_with(|| fa.cmp(fb)));
    pairs.dedup();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_1_basic_subsequence_dictionary() {
        let _ = env_logger::builder().is_test(true).try_init();

        let dict = DictionaryBuilder::new()
            .build(
                ["international business machines"],
                ["ibm", "bm", "xyz"],
            )
            .unwrap();
        let mut dict = dict;
        dict.sort();
        assert_eq!(
            dict,
            vec![
                (
                    "international business machines".to_string(),
                    "bm".to_string()
                ),
                (
                    "international business machines".to_string(),
                    "ibm".to_string()
                ),
            ]
        );
    }

    #[test]
    fn scenario_2_dedup_triplicate_alignment() {
        let dict = DictionaryBuilder::new().build(["a a a"], ["a"]).unwrap();
        assert_eq!(dict, vec![("a a a".to_string(), "a".to_string())]);
    }

    #[test]
    fn empty_abbreviations_is_an_error() {
        let err = DictionaryBuilder::new()
            .build(["anything"], Vec::<&str>::new())
            .unwrap_err();
        assert!(matches!(err, AsjError::NoAbbreviations));
    }

    #[test]
    fn empty_fulls_yields_empty_with_warning() {
        let dict = DictionaryBuilder::new()
            .build(Vec::<&str>::new(), ["ibm"])
            .unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn null_rows_are_skipped() {
        let dict = DictionaryBuilder::new()
            .build(["", "ibm corp"], ["ibm", ""])
            .unwrap();
        assert_eq!(dict, vec![("ibm corp".to_string(), "ibm".to_string())]);
    }

    #[test]
    fn interrupt_aborts_the_call() {
        let cb: Interrupt = &|| true;
        let err = DictionaryBuilder::new()
            .interrupt(cb)
            .build(["a", "b"], ["a"])
            .unwrap_err();
        assert!(matches!(err, AsjError::Interrupted));
    }

    #[test]
    fn idempotent_and_sorted_output() {
        let build = || {
            DictionaryBuilder::new()
                .build(["ibm corp", "xyz inc"], ["ibm", "xy", "c"])
                .unwrap()
        };
        assert_eq!(build(), build());
    }
}
