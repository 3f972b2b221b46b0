//! Hash map and set aliases.
//!
//! Lookups only. Anything whose iteration order reaches a trace must use an
//! insertion-ordered map instead, since these iterate in hasher order.

/// Hash map keyed with `ahash`.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set keyed with `ahash`.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
