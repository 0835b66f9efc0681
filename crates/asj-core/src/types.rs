//! # Common Hash Map/Set Aliases

#[cfg(feature = "ahash")]
mod hash_types {
    /// Type alias for hash maps used internally by this crate.
    pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;
    /// Type alias for hash sets used internally by this crate.
    pub type CommonHashSet<V> = ahash::AHashSet<V>;
}
#[cfg(not(feature = "ahash"))]
mod hash_types {
    /// Type alias for hash maps used internally by this crate.
    pub type CommonHashMap<K, V> = std::collections::HashMap<K, V>;
    /// Type alias for hash sets used internally by this crate.
    pub type CommonHashSet<V> = std::collections::HashSet<V>;
}
pub use hash_types::*;

/// Callback an embedder can supply to cooperatively cancel a long-running
/// call; polled between top-level rows (spec §5).
pub type Interrupt<'a> = &'a dyn Fn() -> bool;
