//! The assertion facade.
//!
//! [`NodeAssertions`] gives any [`BaseNode`] one method per check. Each
//! method is a tagged forward to the host's assertion primitive; the failure
//! text is the host's.

use super::assertion_type::AssertionType;
use super::delegate::BaseNode;
use crate::interaction::SemanticsNodeInteraction;
use crate::matcher::MatchOptions;
use crate::result::SemprobeResult;
use crate::semantics::ProgressBarRangeInfo;

/// Fluent assertions on a single located node
pub trait NodeAssertions: BaseNode {
    /// The node is placed and intersects the viewport
    fn assert_is_displayed(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsDisplayed,
            SemanticsNodeInteraction::assert_is_displayed,
        )
    }

    /// The node exists but is unplaced, hidden or outside the viewport
    fn assert_is_not_displayed(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsNotDisplayed,
            SemanticsNodeInteraction::assert_is_not_displayed,
        )
    }

    /// The node is not disabled
    fn assert_is_enabled(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsEnabled,
            SemanticsNodeInteraction::assert_is_enabled,
        )
    }

    /// The node is disabled
    fn assert_is_not_enabled(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsNotEnabled,
            SemanticsNodeInteraction::assert_is_not_enabled,
        )
    }

    /// The node is toggled on; fails when off, indeterminate or not toggleable
    fn assert_is_on(&self) -> SemprobeResult<()> {
        self.delegate()
            .check(AssertionType::AssertIsOn, SemanticsNodeInteraction::assert_is_on)
    }

    /// The node is toggled off; fails when on, indeterminate or not toggleable
    fn assert_is_off(&self) -> SemprobeResult<()> {
        self.delegate()
            .check(AssertionType::AssertIsOff, SemanticsNodeInteraction::assert_is_off)
    }

    /// The node is selected
    fn assert_is_selected(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsSelected,
            SemanticsNodeInteraction::assert_is_selected,
        )
    }

    /// The node is selectable and not selected
    fn assert_is_not_selected(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsNotSelected,
            SemanticsNodeInteraction::assert_is_not_selected,
        )
    }

    /// The node carries a toggle state
    fn assert_is_toggleable(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsToggleable,
            SemanticsNodeInteraction::assert_is_toggleable,
        )
    }

    /// The node carries a selected state
    fn assert_is_selectable(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsSelectable,
            SemanticsNodeInteraction::assert_is_selectable,
        )
    }

    /// The node has input focus
    fn assert_is_focused(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsFocused,
            SemanticsNodeInteraction::assert_is_focused,
        )
    }

    /// The node is focusable and does not have focus
    fn assert_is_not_focused(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertIsNotFocused,
            SemanticsNodeInteraction::assert_is_not_focused,
        )
    }

    /// The content descriptions are exactly `values`, in any order.
    ///
    /// In the merged tree the list includes descriptions merged up from
    /// descendants.
    fn assert_content_description_equals(&self, values: &[&str]) -> SemprobeResult<()> {
        self.delegate()
            .check(AssertionType::AssertContentDescriptionEquals, |node| {
                node.assert_content_description_equals(values)
            })
    }

    /// Some content description matches `value` under `options`
    fn assert_content_description_contains(
        &self,
        value: &str,
        options: MatchOptions,
    ) -> SemprobeResult<()> {
        self.delegate()
            .check(AssertionType::AssertContentDescriptionContains, |node| {
                node.assert_content_description_contains(value, options)
            })
    }

    /// The text items are exactly `values`, in any order.
    ///
    /// Editable text counts as one more item when `include_editable_text`
    /// is set.
    fn assert_text_equals(
        &self,
        values: &[&str],
        include_editable_text: bool,
    ) -> SemprobeResult<()> {
        self.delegate().check(AssertionType::AssertTextEquals, |node| {
            node.assert_text_equals(values, include_editable_text)
        })
    }

    /// Some text item (or the editable text) matches `value` under `options`
    fn assert_text_contains(&self, value: &str, options: MatchOptions) -> SemprobeResult<()> {
        self.delegate().check(AssertionType::AssertTextContains, |node| {
            node.assert_text_contains(value, options)
        })
    }

    /// The state description equals `value`
    fn assert_value_equals(&self, value: &str) -> SemprobeResult<()> {
        self.delegate()
            .check(AssertionType::AssertValueEquals, |node| node.assert_value_equals(value))
    }

    /// The progress range equals `info`
    fn assert_range_info_equals(&self, info: &ProgressBarRangeInfo) -> SemprobeResult<()> {
        self.delegate().check(AssertionType::AssertRangeInfoEquals, |node| {
            node.assert_range_info_equals(info)
        })
    }

    /// The node has a click action
    fn assert_has_click_action(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertHasClickAction,
            SemanticsNodeInteraction::assert_has_click_action,
        )
    }

    /// The node has no click action
    fn assert_has_no_click_action(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertHasNoClickAction,
            SemanticsNodeInteraction::assert_has_no_click_action,
        )
    }

    /// No node matches; re-fetches the tree
    fn assert_does_not_exist(&self) -> SemprobeResult<()> {
        self.delegate().check(
            AssertionType::AssertDoesNotExist,
            SemanticsNodeInteraction::assert_does_not_exist,
        )
    }

    /// Exactly one node matches; re-fetches the tree
    fn assert_exists(&self) -> SemprobeResult<()> {
        self.delegate()
            .check(AssertionType::AssertExists, SemanticsNodeInteraction::assert_exists)
    }
}
