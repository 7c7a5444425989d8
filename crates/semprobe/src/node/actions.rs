//! Actions on a located node.

use super::assertion_type::ActionType;
use super::delegate::BaseNode;
use crate::interaction::SemanticsNodeInteraction;
use crate::result::SemprobeResult;
use crate::semantics::{AccessibilityAction, SemanticsPropertyKey};

/// Actions a test can perform on a node
pub trait NodeActions: BaseNode {
    /// Run the node's click action
    fn perform_click(&self) -> SemprobeResult<()> {
        self.delegate()
            .perform(ActionType::PerformClick, SemanticsNodeInteraction::perform_click)
    }

    /// Run the action stored under `key`
    fn perform_semantics_action(
        &self,
        key: SemanticsPropertyKey<AccessibilityAction>,
    ) -> SemprobeResult<()> {
        self.delegate().perform(ActionType::PerformSemanticsAction, |node| {
            node.perform_semantics_action(key)
        })
    }
}
