//! Standard semantics properties and actions.

use super::key::{concat, MergePolicy, SemanticsPropertyKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Tri-state toggle value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleableState {
    /// Checked
    On,
    /// Unchecked
    Off,
    /// Neither, e.g. a parent checkbox with mixed children
    Indeterminate,
}

impl From<bool> for ToggleableState {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

/// Progress of a determinate indicator or slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBarRangeInfo {
    /// Current value
    pub current: f32,
    /// Allowed range
    pub range: RangeInclusive<f32>,
    /// Discrete steps between the ends, 0 for continuous
    pub steps: u32,
}

impl ProgressBarRangeInfo {
    /// Continuous range info
    #[must_use]
    pub const fn new(current: f32, range: RangeInclusive<f32>) -> Self {
        Self {
            current,
            range,
            steps: 0,
        }
    }

    /// Set the number of discrete steps
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Lower end of the range
    #[must_use]
    pub const fn min(&self) -> f32 {
        *self.range.start()
    }

    /// Upper end of the range
    #[must_use]
    pub const fn max(&self) -> f32 {
        *self.range.end()
    }
}

/// Kind of widget a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Push button
    Button,
    /// Checkbox
    Checkbox,
    /// Switch
    Switch,
}

/// Action a node can perform on request
#[derive(Clone)]
pub struct AccessibilityAction {
    /// Optional label announced for the action
    pub label: Option<String>,
    action: Rc<dyn Fn() -> bool>,
}

impl AccessibilityAction {
    /// Create an action; the closure returns whether it was handled
    pub fn new(label: Option<String>, action: impl Fn() -> bool + 'static) -> Self {
        Self {
            label,
            action: Rc::new(action),
        }
    }

    /// Run the action
    pub fn invoke(&self) -> bool {
        (self.action)()
    }
}

impl fmt::Debug for AccessibilityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessibilityAction(label={:?})", self.label)
    }
}

/// Well-known semantics properties
#[derive(Debug)]
pub struct SemanticsProperties;

impl SemanticsProperties {
    /// Descriptions announced instead of visual content
    pub const CONTENT_DESCRIPTION: SemanticsPropertyKey<Vec<String>> =
        SemanticsPropertyKey::with_policy("ContentDescription", MergePolicy::Combine(concat));
    /// Visible text
    pub const TEXT: SemanticsPropertyKey<Vec<String>> =
        SemanticsPropertyKey::with_policy("Text", MergePolicy::Combine(concat));
    /// Current content of an editable field
    pub const EDITABLE_TEXT: SemanticsPropertyKey<String> =
        SemanticsPropertyKey::new("EditableText");
    /// Human readable state ("50%", "Expanded")
    pub const STATE_DESCRIPTION: SemanticsPropertyKey<String> =
        SemanticsPropertyKey::new("StateDescription");
    /// Range of a progress indicator or slider
    pub const PROGRESS_BAR_RANGE_INFO: SemanticsPropertyKey<ProgressBarRangeInfo> =
        SemanticsPropertyKey::new("ProgressBarRangeInfo");
    /// Toggle state
    pub const TOGGLEABLE_STATE: SemanticsPropertyKey<ToggleableState> =
        SemanticsPropertyKey::new("ToggleableState");
    /// Selection state
    pub const SELECTED: SemanticsPropertyKey<bool> = SemanticsPropertyKey::new("Selected");
    /// Present when the node is disabled
    pub const DISABLED: SemanticsPropertyKey<()> = SemanticsPropertyKey::new("Disabled");
    /// Input focus state
    pub const FOCUSED: SemanticsPropertyKey<bool> = SemanticsPropertyKey::new("Focused");
    /// Identifier for tests
    pub const TEST_TAG: SemanticsPropertyKey<String> =
        SemanticsPropertyKey::with_policy("TestTag", MergePolicy::NotMerged);
    /// Widget role
    pub const ROLE: SemanticsPropertyKey<Role> =
        SemanticsPropertyKey::with_policy("Role", MergePolicy::NotMerged);
    /// Present when the node is hidden from the user; never displayed
    pub const INVISIBLE_TO_USER: SemanticsPropertyKey<()> =
        SemanticsPropertyKey::with_policy("InvisibleToUser", MergePolicy::NotMerged);
}

/// Well-known semantics actions
#[derive(Debug)]
pub struct SemanticsActions;

impl SemanticsActions {
    /// Click
    pub const ON_CLICK: SemanticsPropertyKey<AccessibilityAction> =
        SemanticsPropertyKey::new("OnClick");
    /// Long click
    pub const ON_LONG_CLICK: SemanticsPropertyKey<AccessibilityAction> =
        SemanticsPropertyKey::new("OnLongClick");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_toggleable_from_bool() {
        assert_eq!(ToggleableState::from(true), ToggleableState::On);
        assert_eq!(ToggleableState::from(false), ToggleableState::Off);
    }

    #[test]
    fn test_range_info() {
        let info = ProgressBarRangeInfo::new(0.5, 0.0..=1.0).with_steps(4);
        assert_eq!(info.min(), 0.0);
        assert_eq!(info.max(), 1.0);
        assert_eq!(info.steps, 4);
        assert_ne!(info, ProgressBarRangeInfo::new(0.5, 0.0..=1.0));
    }

    #[test]
    fn test_action_invoke() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let action = AccessibilityAction::new(None, move || {
            counter.set(counter.get() + 1);
            true
        });
        assert!(action.invoke());
        assert!(action.clone().invoke());
        assert_eq!(clicks.get(), 2);
        assert_eq!(format!("{action:?}"), "AccessibilityAction(label=None)");
    }

    #[test]
    fn test_key_names_are_stable() {
        assert_eq!(SemanticsProperties::TEXT.name(), "Text");
        assert_eq!(SemanticsProperties::CONTENT_DESCRIPTION.name(), "ContentDescription");
        assert_eq!(SemanticsActions::ON_CLICK.name(), "OnClick");
    }
}
