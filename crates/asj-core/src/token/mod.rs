//! # Tokenisation
//!
//! ## Example
//!
//! ```rust
//! use asj_core::token::{tokenize_ws, cmp_tokens};
//!
//! let tokens = tokenize_ws("new york city");
//! let mut sorted = tokens.as_slice().to_vec();
//! sorted.sort_by(|a, b| cmp_tokens(a, b));
//! // 4-byte tokens ("city", "york") precede the 3-byte "new"; ties break
//! // lexicographically.
//! assert_eq!(sorted, vec!["city".to_string(), "york".to_string(), "new".to_string()]);
//! ```

mod comparator;
mod sequence;

pub use comparator::cmp_tokens;
pub use sequence::{tokenize, tokenize_ws, TokenSequence};
