//! # Tokeniser and `TokenSequence`

use super::comparator::cmp_tokens;

/// An owned, ordered sequence of tokens.
///
/// Mutable: [`TokenSequence::remove`] supports removal at an index with
/// the expected `O(n)` shift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    /// Wrap an already-tokenised `Vec<String>`.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Number of tokens.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the sequence holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Borrow the tokens as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Remove and return the token at `i`, shifting later tokens down.
    ///
    /// ## Panics
    /// Panics if `i >= self.len()`, matching `Vec::remove`.
    pub fn remove(
        &mut self,
        i: usize,
    ) -> String {
        self.tokens.remove(i)
    }

    /// Sort the sequence in place using [`cmp_tokens`] (longer/rarer
    /// tokens first).
    pub fn sort_by_cmp_tokens(&mut self) {
        self.tokens.sort_by(|a, b| cmp_tokens(a, b));
    }

    /// Deduplicate adjacent equal tokens. Callers should sort first
    /// (e.g. via [`TokenSequence::sort_by_cmp_tokens`]) for this to
    /// remove all duplicates rather than only adjacent ones.
    pub fn dedup(&mut self) {
        self.tokens.dedup();
    }

    /// Consume the sequence, returning the underlying `Vec<String>`.
    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Split `s` on any byte found in `delim`, dropping empty tokens, matching
/// `strtok`-style semantics (spec §4.1).
///
/// Byte-oriented: invalid UTF-8 is never produced as a new boundary, since
/// splitting only occurs at the caller-supplied delimiter bytes, which are
/// expected to be ASCII (e.g. `b" "`).
///
/// ## Arguments
/// * `s` - The string to split.
/// * `delim` - The set of delimiter bytes (multi-byte delimiters are
///   treated as a set of single-byte separators).
///
/// ## Returns
/// The ordered, owning [`TokenSequence`] of non-empty tokens.
pub fn tokenize(
    s: &str,
    delim: &[u8],
) -> TokenSequence {
    let bytes = s.as_bytes();
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &b) in bytes.iter().enumerate() {
        if delim.contains(&b) {
            if let Some(st) = start.take() {
                tokens.push(s[st..i].to_string());
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(st) = start {
        tokens.push(s[st..].to_string());
    }

    TokenSequence::new(tokens)
}

/// Tokenise on the space character, the delimiter used throughout the
/// filter and verifier.
pub fn tokenize_ws(s: &str) -> TokenSequence {
    tokenize(s, b" ")
}
