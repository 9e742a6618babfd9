//! `extend` and `defaults` over typed [`Mapping`]s

use tracing::trace;
use underbar_core::Mapping;

/// How a source key is written into the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MergeMode {
    /// Always assign, replacing any existing value
    Overwrite,
    /// Assign only when the target lacks the key at that moment
    FillMissing,
}

impl MergeMode {
    /// Whether a key should be written given the current target state
    pub(crate) fn should_assign(self, already_present: bool) -> bool {
        match self {
            MergeMode::Overwrite => true,
            MergeMode::FillMissing => !already_present,
        }
    }
}

/// Copy every key of every source into `target`, later sources winning.
///
/// Sources are visited in order and each source's keys in its own insertion
/// order. Keys the target already had keep their position; new keys are
/// appended. Returns the same target for chaining.
///
/// ```
/// use underbar_core::mapping_from;
/// use underbar_objects::extend;
///
/// let mut target = mapping_from([("a", 1)]);
/// extend(&mut target, [&mapping_from([("b", 2)]), &mapping_from([("a", 3)])]);
/// assert_eq!(target, mapping_from([("a", 3), ("b", 2)]));
/// ```
pub fn extend<'t, 's, V, I>(target: &'t mut Mapping<V>, sources: I) -> &'t mut Mapping<V>
where
    V: Clone + 's,
    I: IntoIterator<Item = &'s Mapping<V>>,
{
    merge_into(target, sources, MergeMode::Overwrite)
}

/// Like [`extend`], but never overwrites a key that already exists in `target`.
///
/// Presence is checked at each assignment, so an earlier source in the same
/// call claims a key before later sources are considered.
pub fn defaults<'t, 's, V, I>(target: &'t mut Mapping<V>, sources: I) -> &'t mut Mapping<V>
where
    V: Clone + 's,
    I: IntoIterator<Item = &'s Mapping<V>>,
{
    merge_into(target, sources, MergeMode::FillMissing)
}

fn merge_into<'t, 's, V, I>(
    target: &'t mut Mapping<V>,
    sources: I,
    mode: MergeMode,
) -> &'t mut Mapping<V>
where
    V: Clone + 's,
    I: IntoIterator<Item = &'s Mapping<V>>,
{
    let mut assigned = 0usize;
    for source in sources {
        for (key, value) in source {
            if mode.should_assign(target.contains_key(key)) {
                target.insert(key.clone(), value.clone());
                assigned += 1;
            }
        }
    }
    trace!(?mode, assigned, keys = target.len(), "merged mappings");
    target
}
