//! Insertion-ordered string-keyed mappings.

use indexmap::IndexMap;

/// Key/value collection with unique string keys, iterated in insertion order.
///
/// Replacing the value of an existing key keeps the key at its original
/// position, so merges never reorder keys the target already had.
pub type Mapping<V> = IndexMap<String, V>;

/// Build a mapping from `(key, value)` pairs, later pairs replacing earlier ones.
pub fn mapping_from<K, V, I>(pairs: I) -> Mapping<V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
