//! Lazy handles to a single semantics node.
//!
//! A [`SemanticsNodeInteraction`] stores only the host and a selector. Every
//! call waits for the host to go idle, takes a fresh snapshot and resolves
//! the selector again, so no check ever sees a stale tree.

use crate::host::SemanticsHost;
use crate::matcher::{self, MatchOptions, SemanticsMatcher};
use crate::result::{SemprobeError, SemprobeResult};
use crate::semantics::{
    AccessibilityAction, ProgressBarRangeInfo, SemanticsActions, SemanticsNode,
    SemanticsPropertyKey, SemanticsTree,
};
use std::fmt;
use std::rc::Rc;

/// Handle to the one node matching a selector
#[derive(Clone)]
pub struct SemanticsNodeInteraction {
    host: Rc<dyn SemanticsHost>,
    selector: SemanticsMatcher,
    use_unmerged_tree: bool,
}

impl SemanticsNodeInteraction {
    /// Handle resolving `selector` against `host`
    pub fn new(
        host: Rc<dyn SemanticsHost>,
        selector: SemanticsMatcher,
        use_unmerged_tree: bool,
    ) -> Self {
        Self {
            host,
            selector,
            use_unmerged_tree,
        }
    }

    /// Selector used to resolve the node
    #[must_use]
    pub const fn selector(&self) -> &SemanticsMatcher {
        &self.selector
    }

    /// Whether the node is resolved against the unmerged tree
    #[must_use]
    pub const fn uses_unmerged_tree(&self) -> bool {
        self.use_unmerged_tree
    }

    fn snapshot(&self) -> SemprobeResult<SemanticsTree> {
        self.host.wait_for_idle()?;
        Ok(self.host.semantics_tree(self.use_unmerged_tree))
    }

    fn matching<'t>(&self, tree: &'t SemanticsTree) -> SemprobeResult<Vec<SemanticsNode<'t>>> {
        let mut found = Vec::new();
        for node in tree.nodes() {
            if self.selector.matches(node)? {
                found.push(node);
            }
        }
        Ok(found)
    }

    fn too_many(&self, prefix: &str, nodes: &[SemanticsNode<'_>]) -> SemprobeError {
        let mut message = format!(
            "{prefix}\nReason: Expected exactly '1' node but found '{}' nodes \
             that satisfy: ({})\nNodes found:",
            nodes.len(),
            self.selector
        );
        for (index, node) in nodes.iter().enumerate() {
            message.push_str(&format!("\n{}) {}", index + 1, node.describe()));
        }
        SemprobeError::assertion(message)
    }

    /// Resolve the node and run `f` on it.
    ///
    /// Fails with `error_prefix` in the diagnostic unless exactly one node
    /// matches the selector.
    pub fn fetch_semantics_node<R>(
        &self,
        error_prefix: &str,
        f: impl FnOnce(SemanticsNode<'_>) -> SemprobeResult<R>,
    ) -> SemprobeResult<R> {
        let tree = self.snapshot()?;
        let found = self.matching(&tree)?;
        match found.as_slice() {
            [node] => f(*node),
            [] => Err(SemprobeError::assertion(format!(
                "{error_prefix}\nReason: Expected exactly '1' node but could not find any node \
                 that satisfies: ({})",
                self.selector
            ))),
            many => Err(self.too_many(error_prefix, many)),
        }
    }

    /// Printable semantics of the resolved node and its subtree
    pub fn print_to_string(&self) -> SemprobeResult<String> {
        self.fetch_semantics_node("Failed: printToString", |node| {
            let mut out = node.describe();
            for descendant in node.descendants() {
                out.push('\n');
                out.push_str(&descendant.describe());
            }
            Ok(out)
        })
    }

    // =========================================================================
    // GENERIC ASSERTIONS
    // =========================================================================

    /// Assert that the resolved node satisfies `matcher`
    pub fn assert(&self, matcher: &SemanticsMatcher) -> SemprobeResult<()> {
        let prefix = format!("Failed to assert the following: ({})", matcher.description());
        self.fetch_semantics_node(&prefix, |node| {
            if matcher.matches(node)? {
                Ok(())
            } else {
                Err(SemprobeError::assertion(format!(
                    "{prefix}\nSemantics of the node:\n{}\nSelector used: ({})",
                    node.describe(),
                    self.selector
                )))
            }
        })
    }

    /// Assert that exactly one node matches the selector
    pub fn assert_exists(&self) -> SemprobeResult<()> {
        self.fetch_semantics_node("Failed: assertExists.", |_| Ok(()))
    }

    /// Assert that no node matches the selector
    pub fn assert_does_not_exist(&self) -> SemprobeResult<()> {
        let tree = self.snapshot()?;
        let found = self.matching(&tree)?;
        if found.is_empty() {
            return Ok(());
        }
        let mut message = format!(
            "Failed: assertDoesNotExist.\nReason: Did not expect any node but found '{}' nodes \
             that satisfy: ({})\nNodes found:",
            found.len(),
            self.selector
        );
        for (index, node) in found.iter().enumerate() {
            message.push_str(&format!("\n{}) {}", index + 1, node.describe()));
        }
        Err(SemprobeError::assertion(message))
    }

    /// Assert that the node is placed and intersects the viewport
    pub fn assert_is_displayed(&self) -> SemprobeResult<()> {
        const FAILURE: &str = "Assert failed: The component is not displayed!";
        self.fetch_semantics_node(FAILURE, |node| {
            if node.is_displayed() {
                Ok(())
            } else {
                Err(SemprobeError::assertion(FAILURE))
            }
        })
    }

    /// Assert that the node exists but is not visible
    pub fn assert_is_not_displayed(&self) -> SemprobeResult<()> {
        self.fetch_semantics_node("Failed to perform isDisplayed check.", |node| {
            if node.is_displayed() {
                Err(SemprobeError::assertion(
                    "Assert failed: The component is displayed!",
                ))
            } else {
                Ok(())
            }
        })
    }

    // =========================================================================
    // PREDICATE ASSERTIONS
    // =========================================================================

    /// Assert that the node is not disabled
    pub fn assert_is_enabled(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_enabled())
    }

    /// Assert that the node is disabled
    pub fn assert_is_not_enabled(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_not_enabled())
    }

    /// Assert that the node is toggled on
    pub fn assert_is_on(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_on())
    }

    /// Assert that the node is toggled off
    pub fn assert_is_off(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_off())
    }

    /// Assert that the node is selected
    pub fn assert_is_selected(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_selected())
    }

    /// Assert that the node is selectable and not selected
    pub fn assert_is_not_selected(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_not_selected())
    }

    /// Assert that the node has a toggle state
    pub fn assert_is_toggleable(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_toggleable())
    }

    /// Assert that the node has a selection state
    pub fn assert_is_selectable(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_selectable())
    }

    /// Assert that the node has focus
    pub fn assert_is_focused(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_focused())
    }

    /// Assert that the node is focusable and unfocused
    pub fn assert_is_not_focused(&self) -> SemprobeResult<()> {
        self.assert(&matcher::is_not_focused())
    }

    /// Assert that the node has a click action
    pub fn assert_has_click_action(&self) -> SemprobeResult<()> {
        self.assert(&matcher::has_click_action())
    }

    /// Assert that the node has no click action
    pub fn assert_has_no_click_action(&self) -> SemprobeResult<()> {
        self.assert(&matcher::has_no_click_action())
    }

    // =========================================================================
    // VALUE ASSERTIONS
    // =========================================================================

    /// Assert that the text items are exactly `values`, in any order
    pub fn assert_text_equals(
        &self,
        values: &[&str],
        include_editable_text: bool,
    ) -> SemprobeResult<()> {
        self.assert(&matcher::has_text_exactly(values, include_editable_text))
    }

    /// Assert that some text item matches `value`
    pub fn assert_text_contains(&self, value: &str, options: MatchOptions) -> SemprobeResult<()> {
        self.assert(&matcher::has_text(value, options))
    }

    /// Assert that the content descriptions are exactly `values`, in any order
    pub fn assert_content_description_equals(&self, values: &[&str]) -> SemprobeResult<()> {
        self.assert(&matcher::has_content_description_exactly(values))
    }

    /// Assert that some content description matches `value`
    pub fn assert_content_description_contains(
        &self,
        value: &str,
        options: MatchOptions,
    ) -> SemprobeResult<()> {
        self.assert(&matcher::has_content_description(value, options))
    }

    /// Assert the state description
    pub fn assert_value_equals(&self, value: &str) -> SemprobeResult<()> {
        self.assert(&matcher::has_state_description(value))
    }

    /// Assert the progress range
    pub fn assert_range_info_equals(&self, info: &ProgressBarRangeInfo) -> SemprobeResult<()> {
        self.assert(&matcher::has_range_info(info.clone()))
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Invoke a semantics action of the node
    pub fn perform_semantics_action(
        &self,
        key: SemanticsPropertyKey<AccessibilityAction>,
    ) -> SemprobeResult<()> {
        let prefix = format!("Failed to perform {} action.", key.name());
        let action = self.fetch_semantics_node(&prefix, |node| {
            node.config().get(key).cloned().ok_or_else(|| {
                SemprobeError::assertion(format!(
                    "{prefix}\nReason: The node does not define {}\nSemantics of the node:\n{}",
                    key.name(),
                    node.describe()
                ))
            })
        })?;
        let handled = action.invoke();
        tracing::trace!(action = key.name(), handled, "performed semantics action");
        Ok(())
    }

    /// Click the node
    pub fn perform_click(&self) -> SemprobeResult<()> {
        self.perform_semantics_action(SemanticsActions::ON_CLICK)
    }
}

impl fmt::Debug for SemanticsNodeInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticsNodeInteraction")
            .field("selector", &self.selector)
            .field("use_unmerged_tree", &self.use_unmerged_tree)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::host::TestHost;
    use crate::matcher::has_test_tag;
    use crate::modifier::Modifier;
    use crate::ui::{button, text, UiNode};

    fn host_with(content: impl Fn() -> UiNode + 'static) -> Rc<TestHost> {
        let host = TestHost::default();
        host.set_content(content);
        Rc::new(host)
    }

    fn interaction(host: &Rc<TestHost>, tag: &str) -> SemanticsNodeInteraction {
        SemanticsNodeInteraction::new(host.clone(), has_test_tag(tag), false)
    }

    mod fetch_tests {
        use super::*;

        #[test]
        fn test_not_found_message() {
            let host = host_with(UiNode::default);
            let err = interaction(&host, "missing").assert_exists().unwrap_err();
            assert!(err.is_assertion_failure());
            let message = err.to_string();
            assert!(message.contains("Failed: assertExists."));
            assert!(message
                .contains("could not find any node that satisfies: (TestTag = '\"missing\"')"));
        }

        #[test]
        fn test_multiple_matches_message() {
            let host = host_with(|| {
                UiNode::default().children([
                    text("a", Modifier::empty().test_tag("dup")),
                    text("b", Modifier::empty().test_tag("dup")),
                ])
            });
            let err = interaction(&host, "dup").assert_exists().unwrap_err();
            let message = err.to_string();
            assert!(message.contains("but found '2' nodes"));
            assert!(message.contains("1) Node #2"));
        }

        #[test]
        fn test_does_not_exist() {
            let host = host_with(|| text("a", Modifier::empty().test_tag("here")));
            interaction(&host, "gone").assert_does_not_exist().unwrap();
            let err = interaction(&host, "here").assert_does_not_exist().unwrap_err();
            assert!(err.to_string().contains("Did not expect any node but found '1' nodes"));
        }

        #[test]
        fn test_print_to_string() {
            let host = host_with(|| text("a", Modifier::empty().test_tag("here")));
            let printed = interaction(&host, "here").print_to_string().unwrap();
            assert!(printed.contains("Tag: 'here'"));
        }
    }

    mod displayed_tests {
        use super::*;

        fn content() -> UiNode {
            UiNode::default().size(1080.0, 1920.0).children([
                text("shown", Modifier::empty().test_tag("shown")),
                text("hidden", Modifier::empty().test_tag("hidden")).placed(false),
            ])
        }

        #[test]
        fn test_displayed() {
            let host = host_with(content);
            interaction(&host, "shown").assert_is_displayed().unwrap();
            let err = interaction(&host, "hidden").assert_is_displayed().unwrap_err();
            assert_eq!(
                err.to_string(),
                "Assertion failed: Assert failed: The component is not displayed!"
            );
        }

        #[test]
        fn test_not_displayed_requires_the_node() {
            let host = host_with(content);
            interaction(&host, "hidden").assert_is_not_displayed().unwrap();
            assert!(interaction(&host, "shown").assert_is_not_displayed().is_err());
            let err = interaction(&host, "missing")
                .assert_is_not_displayed()
                .unwrap_err();
            assert!(err.is_assertion_failure());
            let message = err.to_string();
            assert!(message.starts_with("Assertion failed: Failed to perform isDisplayed check."));
            assert!(message.contains("Reason: Expected exactly '1' node"));
        }

        #[test]
        fn test_invisible_to_user_is_not_displayed() {
            let host = host_with(|| {
                text("secret", Modifier::empty().test_tag("secret").invisible_to_user())
            });
            let node = interaction(&host, "secret");
            assert!(node.assert_is_displayed().unwrap_err().is_assertion_failure());
            node.assert_is_not_displayed().unwrap();
        }
    }

    mod assert_tests {
        use super::*;

        #[test]
        fn test_assert_diagnostic() {
            let host = host_with(|| button("Save", Modifier::empty().test_tag("save"), || {}));
            let node = interaction(&host, "save");
            node.assert_has_click_action().unwrap();
            node.assert_text_equals(&["Save"], true).unwrap();
            let err = node.assert_is_not_enabled().unwrap_err();
            let message = err.to_string();
            assert!(message.contains("Failed to assert the following: (Disabled is defined)"));
            assert!(message.contains("Semantics of the node:\nNode #1"));
            assert!(message.contains("Selector used: (TestTag = '\"save\"')"));
        }

        #[test]
        fn test_fresh_snapshot_every_call() {
            let host = TestHost::default();
            let label = host.state("before".to_string());
            let shown = label.clone();
            host.set_content(move || text(shown.get(), Modifier::empty().test_tag("label")));
            let host = Rc::new(host);
            let node = interaction(&host, "label");
            node.assert_text_equals(&["before"], true).unwrap();
            label.set("after".to_string());
            node.assert_text_equals(&["after"], true).unwrap();
        }
    }

    mod action_tests {
        use super::*;

        #[test]
        fn test_click_updates_state() {
            let host = TestHost::default();
            let clicks = host.state(0_u32);
            let (shown, writer) = (clicks.clone(), clicks.clone());
            host.set_content(move || {
                let writer = writer.clone();
                UiNode::default().children([
                    button("Add", Modifier::empty().test_tag("add"), move || {
                        writer.update(|count| *count += 1);
                    }),
                    text(format!("{}", shown.get()), Modifier::empty().test_tag("count")),
                ])
            });
            let host = Rc::new(host);
            interaction(&host, "add").perform_click().unwrap();
            interaction(&host, "count").assert_text_equals(&["1"], true).unwrap();
            assert_eq!(clicks.get(), 1);
        }

        #[test]
        fn test_click_without_action_fails() {
            let host = host_with(|| text("plain", Modifier::empty().test_tag("plain")));
            let err = interaction(&host, "plain").perform_click().unwrap_err();
            assert!(err.is_assertion_failure());
            assert!(err.to_string().contains("Failed to perform OnClick action."));
        }
    }
}
