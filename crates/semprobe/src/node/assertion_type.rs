//! Names of the checks and actions a node can run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assertion kinds, used to tag checks in interceptors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssertionType {
    /// Node is visible
    AssertIsDisplayed,
    /// Node is absent or not visible
    AssertIsNotDisplayed,
    /// Node is enabled
    AssertIsEnabled,
    /// Node is disabled
    AssertIsNotEnabled,
    /// Toggle is on
    AssertIsOn,
    /// Toggle is off
    AssertIsOff,
    /// Node is selected
    AssertIsSelected,
    /// Node is not selected
    AssertIsNotSelected,
    /// Node has a toggle state
    AssertIsToggleable,
    /// Node has a selection state
    AssertIsSelectable,
    /// Node is focused
    AssertIsFocused,
    /// Node is not focused
    AssertIsNotFocused,
    /// Exact content description set
    AssertContentDescriptionEquals,
    /// One matching content description
    AssertContentDescriptionContains,
    /// Exact text set
    AssertTextEquals,
    /// One matching text item
    AssertTextContains,
    /// State or slot value
    AssertValueEquals,
    /// Progress range
    AssertRangeInfoEquals,
    /// Node has a click action
    AssertHasClickAction,
    /// Node has no click action
    AssertHasNoClickAction,
    /// No node matches
    AssertDoesNotExist,
    /// Exactly one node matches
    AssertExists,
}

impl AssertionType {
    /// Every assertion kind
    pub const ALL: [Self; 22] = [
        Self::AssertIsDisplayed,
        Self::AssertIsNotDisplayed,
        Self::AssertIsEnabled,
        Self::AssertIsNotEnabled,
        Self::AssertIsOn,
        Self::AssertIsOff,
        Self::AssertIsSelected,
        Self::AssertIsNotSelected,
        Self::AssertIsToggleable,
        Self::AssertIsSelectable,
        Self::AssertIsFocused,
        Self::AssertIsNotFocused,
        Self::AssertContentDescriptionEquals,
        Self::AssertContentDescriptionContains,
        Self::AssertTextEquals,
        Self::AssertTextContains,
        Self::AssertValueEquals,
        Self::AssertRangeInfoEquals,
        Self::AssertHasClickAction,
        Self::AssertHasNoClickAction,
        Self::AssertDoesNotExist,
        Self::AssertExists,
    ];

    /// Method-style name, e.g. `assertIsDisplayed`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AssertIsDisplayed => "assertIsDisplayed",
            Self::AssertIsNotDisplayed => "assertIsNotDisplayed",
            Self::AssertIsEnabled => "assertIsEnabled",
            Self::AssertIsNotEnabled => "assertIsNotEnabled",
            Self::AssertIsOn => "assertIsOn",
            Self::AssertIsOff => "assertIsOff",
            Self::AssertIsSelected => "assertIsSelected",
            Self::AssertIsNotSelected => "assertIsNotSelected",
            Self::AssertIsToggleable => "assertIsToggleable",
            Self::AssertIsSelectable => "assertIsSelectable",
            Self::AssertIsFocused => "assertIsFocused",
            Self::AssertIsNotFocused => "assertIsNotFocused",
            Self::AssertContentDescriptionEquals => "assertContentDescriptionEquals",
            Self::AssertContentDescriptionContains => "assertContentDescriptionContains",
            Self::AssertTextEquals => "assertTextEquals",
            Self::AssertTextContains => "assertTextContains",
            Self::AssertValueEquals => "assertValueEquals",
            Self::AssertRangeInfoEquals => "assertRangeInfoEquals",
            Self::AssertHasClickAction => "assertHasClickAction",
            Self::AssertHasNoClickAction => "assertHasNoClickAction",
            Self::AssertDoesNotExist => "assertDoesNotExist",
            Self::AssertExists => "assertExists",
        }
    }
}

impl fmt::Display for AssertionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    /// Click through the node's click action
    PerformClick,
    /// Any other semantics action
    PerformSemanticsAction,
}

impl ActionType {
    /// Method-style name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PerformClick => "performClick",
            Self::PerformSemanticsAction => "performSemanticsAction",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for assertion in AssertionType::ALL {
            let json = serde_json::to_string(&assertion).unwrap();
            assert_eq!(json, format!("\"{}\"", assertion.as_str()));
        }
        assert_eq!(
            serde_json::to_string(&ActionType::PerformClick).unwrap(),
            "\"performClick\""
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AssertionType::AssertValueEquals.to_string(), "assertValueEquals");
        assert_eq!(ActionType::PerformSemanticsAction.to_string(), "performSemanticsAction");
    }
}
