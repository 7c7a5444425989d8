//! Typed semantics property keys.

use std::fmt;
use std::marker::PhantomData;

/// How a child's value folds into a merging ancestor
pub enum MergePolicy<T> {
    /// Keep the ancestor's value; adopt the child's only if the ancestor has none
    ParentWins,
    /// The child's value never reaches the ancestor
    NotMerged,
    /// Combine ancestor and child values (ancestor first)
    Combine(fn(&T, &T) -> T),
}

impl<T> Clone for MergePolicy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MergePolicy<T> {}

impl<T> fmt::Debug for MergePolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentWins => f.write_str("ParentWins"),
            Self::NotMerged => f.write_str("NotMerged"),
            Self::Combine(_) => f.write_str("Combine"),
        }
    }
}

/// Name and value type of a semantics property.
///
/// The name is the identity of the slot: two keys with the same name address
/// the same entry of a [`super::SemanticsConfiguration`].
pub struct SemanticsPropertyKey<T> {
    name: &'static str,
    policy: MergePolicy<T>,
    _value: PhantomData<fn() -> T>,
}

impl<T> SemanticsPropertyKey<T> {
    /// Key with the default [`MergePolicy::ParentWins`] policy
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self::with_policy(name, MergePolicy::ParentWins)
    }

    /// Key with an explicit merge policy
    #[must_use]
    pub const fn with_policy(name: &'static str, policy: MergePolicy<T>) -> Self {
        Self {
            name,
            policy,
            _value: PhantomData,
        }
    }

    /// Stable key name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Merge policy
    #[must_use]
    pub const fn policy(&self) -> MergePolicy<T> {
        self.policy
    }
}

impl<T> Clone for SemanticsPropertyKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SemanticsPropertyKey<T> {}

impl<T> fmt::Debug for SemanticsPropertyKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemanticsPropertyKey({})", self.name)
    }
}

impl<T> PartialEq for SemanticsPropertyKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Merge policy for list-valued keys: append the child's items
#[allow(clippy::ptr_arg)]
pub fn concat<T: Clone>(parent: &Vec<T>, child: &Vec<T>) -> Vec<T> {
    let mut merged = parent.clone();
    merged.extend(child.iter().cloned());
    merged
}
