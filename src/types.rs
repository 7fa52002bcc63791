//! Shorthand for the collection types backing the index.
//! Both are persistent, so cloning an index shares structure instead of
//! copying every bucket.

/// A set of items, as returned from queries
pub type Set<T> = im::HashSet<T, fxhash::FxBuildHasher>;
/// A template-keyed map
pub type Map<K, V> = im::HashMap<K, V, fxhash::FxBuildHasher>;
