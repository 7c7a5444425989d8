//! Semantics model: typed property keys, per-node configuration and tree
//! snapshots with merged and unmerged views.

mod configuration;
mod key;
mod properties;
mod tree;

pub use configuration::{SemanticsConfiguration, SemanticsValue};
pub use key::{concat, MergePolicy, SemanticsPropertyKey};
pub use properties::{
    AccessibilityAction, ProgressBarRangeInfo, Role, SemanticsActions, SemanticsProperties,
    ToggleableState,
};
pub use tree::{NodeId, SemanticsNode, SemanticsTree};
