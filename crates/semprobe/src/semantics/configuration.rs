//! Per-node semantics property storage.

use super::key::{MergePolicy, SemanticsPropertyKey};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A value that can live in a [`SemanticsConfiguration`]
pub trait SemanticsValue: Any + fmt::Debug {
    /// Upcast for downcasting to the concrete type
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> SemanticsValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

type CombineFn = Rc<dyn Fn(&dyn Any, &dyn Any) -> Option<Rc<dyn SemanticsValue>>>;

#[derive(Clone)]
enum ErasedPolicy {
    ParentWins,
    NotMerged,
    Combine(CombineFn),
}

impl ErasedPolicy {
    fn from_key<T: Clone + fmt::Debug + 'static>(policy: MergePolicy<T>) -> Self {
        match policy {
            MergePolicy::ParentWins => Self::ParentWins,
            MergePolicy::NotMerged => Self::NotMerged,
            MergePolicy::Combine(merge) => Self::Combine(Rc::new(move |parent, child| {
                let parent = parent.downcast_ref::<T>()?;
                let child = child.downcast_ref::<T>()?;
                Some(Rc::new(merge(parent, child)) as Rc<dyn SemanticsValue>)
            })),
        }
    }
}

#[derive(Clone)]
struct Entry {
    value: Rc<dyn SemanticsValue>,
    policy: ErasedPolicy,
}

impl Entry {
    fn combined_with(&self, other: &Self) -> Option<Self> {
        match &self.policy {
            ErasedPolicy::Combine(merge) => {
                let value = merge(self.value.as_ref().as_any(), other.value.as_ref().as_any())?;
                Some(Self {
                    value,
                    policy: self.policy.clone(),
                })
            }
            ErasedPolicy::ParentWins | ErasedPolicy::NotMerged => None,
        }
    }
}

/// Semantics properties recorded for one node
#[derive(Clone, Default)]
pub struct SemanticsConfiguration {
    entries: BTreeMap<&'static str, Entry>,
    merges_descendants: bool,
}

impl SemanticsConfiguration {
    /// Empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    pub fn set<T: Clone + fmt::Debug + 'static>(&mut self, key: SemanticsPropertyKey<T>, value: T) {
        let _ = self.entries.insert(
            key.name(),
            Entry {
                value: Rc::new(value),
                policy: ErasedPolicy::from_key(key.policy()),
            },
        );
    }

    /// Read a property
    #[must_use]
    pub fn get<T: 'static>(&self, key: SemanticsPropertyKey<T>) -> Option<&T> {
        self.entries
            .get(key.name())
            .and_then(|entry| entry.value.as_ref().as_any().downcast_ref::<T>())
    }

    /// Read a property or fall back to a default
    pub fn get_or_else<T: Clone + 'static>(
        &self,
        key: SemanticsPropertyKey<T>,
        default: impl FnOnce() -> T,
    ) -> T {
        self.get(key).cloned().unwrap_or_else(default)
    }

    /// Whether the key has a value
    #[must_use]
    pub fn contains<T>(&self, key: SemanticsPropertyKey<T>) -> bool {
        self.entries.contains_key(key.name())
    }

    /// Remove a property
    pub fn remove<T>(&mut self, key: SemanticsPropertyKey<T>) -> bool {
        self.entries.remove(key.name()).is_some()
    }

    /// Names of the properties present, in name order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this node absorbs its descendants in the merged tree
    #[must_use]
    pub const fn merges_descendants(&self) -> bool {
        self.merges_descendants
    }

    /// Mark this node as absorbing its descendants in the merged tree
    pub fn set_merges_descendants(&mut self, merges: bool) {
        self.merges_descendants = merges;
    }

    /// Fold in a configuration recorded by another modifier on the same node.
    ///
    /// Properties already present stay unless their key combines values.
    pub fn collapse_peer(&mut self, peer: &Self) {
        self.merges_descendants |= peer.merges_descendants;
        for (name, incoming) in &peer.entries {
            self.absorb(name, incoming, true);
        }
    }

    /// Fold in a descendant's configuration according to each key's policy
    pub fn merge_child(&mut self, child: &Self) {
        for (name, incoming) in &child.entries {
            self.absorb(name, incoming, false);
        }
    }

    fn absorb(&mut self, name: &'static str, incoming: &Entry, same_node: bool) {
        match self.entries.get(name) {
            Some(existing) => {
                if let Some(combined) = existing.combined_with(incoming) {
                    let _ = self.entries.insert(name, combined);
                }
            }
            None => {
                if same_node || !matches!(incoming.policy, ErasedPolicy::NotMerged) {
                    let _ = self.entries.insert(name, incoming.clone());
                }
            }
        }
    }

    /// One `Name = value` line per property
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, entry)| format!("{name} = {:?}", entry.value))
            .collect()
    }
}

impl fmt::Debug for SemanticsConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, entry) in &self.entries {
            let _ = map.entry(name, &entry.value);
        }
        map.finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::semantics::key::concat;

    const LABEL: SemanticsPropertyKey<String> = SemanticsPropertyKey::new("Label");
    const TAG: SemanticsPropertyKey<String> =
        SemanticsPropertyKey::with_policy("Tag", MergePolicy::NotMerged);
    const ITEMS: SemanticsPropertyKey<Vec<String>> =
        SemanticsPropertyKey::with_policy("Items", MergePolicy::Combine(concat));
    const COUNT: SemanticsPropertyKey<u32> = SemanticsPropertyKey::new("Count");

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_set_and_get() {
        let mut config = SemanticsConfiguration::new();
        config.set(LABEL, "hello".to_string());
        config.set(COUNT, 3);
        assert_eq!(config.get(LABEL).unwrap(), "hello");
        assert_eq!(config.get(COUNT), Some(&3));
        assert!(config.contains(LABEL));
        assert!(!config.contains(TAG));
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_get_or_else() {
        let config = SemanticsConfiguration::new();
        assert_eq!(config.get_or_else(COUNT, || 9), 9);
    }

    #[test]
    fn test_mismatched_type_reads_none() {
        let mut config = SemanticsConfiguration::new();
        config.set(LABEL, "x".to_string());
        let same_name_other_type: SemanticsPropertyKey<u32> = SemanticsPropertyKey::new("Label");
        assert!(config.get(same_name_other_type).is_none());
    }

    #[test]
    fn test_remove() {
        let mut config = SemanticsConfiguration::new();
        config.set(COUNT, 1);
        assert!(config.remove(COUNT));
        assert!(!config.remove(COUNT));
        assert!(config.is_empty());
    }

    #[test]
    fn test_collapse_peer_first_value_wins() {
        let mut first = SemanticsConfiguration::new();
        first.set(LABEL, "outer".to_string());
        let mut second = SemanticsConfiguration::new();
        second.set(LABEL, "inner".to_string());
        second.set(TAG, "tag".to_string());
        second.set_merges_descendants(true);

        first.collapse_peer(&second);
        assert_eq!(first.get(LABEL).unwrap(), "outer");
        assert_eq!(first.get(TAG).unwrap(), "tag");
        assert!(first.merges_descendants());
    }

    #[test]
    fn test_collapse_peer_combines_lists() {
        let mut first = SemanticsConfiguration::new();
        first.set(ITEMS, items(&["a"]));
        let mut second = SemanticsConfiguration::new();
        second.set(ITEMS, items(&["b"]));
        first.collapse_peer(&second);
        assert_eq!(first.get(ITEMS).unwrap(), &items(&["a", "b"]));
    }

    #[test]
    fn test_merge_child_respects_policies() {
        let mut parent = SemanticsConfiguration::new();
        parent.set(ITEMS, items(&["parent"]));

        let mut child = SemanticsConfiguration::new();
        child.set(ITEMS, items(&["child"]));
        child.set(TAG, "child-tag".to_string());
        child.set(LABEL, "child-label".to_string());

        parent.merge_child(&child);
        assert_eq!(parent.get(ITEMS).unwrap(), &items(&["parent", "child"]));
        assert!(!parent.contains(TAG));
        assert_eq!(parent.get(LABEL).unwrap(), "child-label");
    }

    #[test]
    fn test_describe_and_debug() {
        let mut config = SemanticsConfiguration::new();
        config.set(COUNT, 2);
        config.set(LABEL, "x".to_string());
        assert_eq!(config.describe(), vec!["Count = 2", "Label = \"x\""]);
        assert_eq!(format!("{config:?}"), "{\"Count\": 2, \"Label\": \"x\"}");
        assert_eq!(config.names().collect::<Vec<_>>(), vec!["Count", "Label"]);
    }
}
