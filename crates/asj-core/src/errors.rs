//! # Error Types

/// Errors from `asj-core` operations.
#[derive(Debug, thiserror::Error)]
pub enum AsjError {
    /// Exactness θ was outside the valid `[0, 1]` range.
    #[error("exactness must be in [0, 1], got {value}")]
    ExactnessOutOfRange {
        /// The value that was rejected.
        value: f64,
    },

    /// The abbreviation corpus was empty after null-filtering.
    #[error("no abbreviations found in given corpus")]
    NoAbbreviations,

    /// The call was aborted by the caller's interrupt callback.
    #[error("call interrupted by caller")]
    Interrupted,
}

/// Result type for `asj-core` operations.
pub type AsjResult<T> = Result<T, AsjError>;
