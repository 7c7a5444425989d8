//! Semantics matchers.
//!
//! A [`SemanticsMatcher`] is a described predicate over a [`SemanticsNode`].
//! Matchers select nodes for interactions and double as the checks behind
//! every assertion. Predicates are fallible so a check can distinguish
//! "property has the wrong value" (`Ok(false)`) from "property is missing"
//! (`Err(IllegalState)`).

use crate::result::SemprobeResult;
use crate::semantics::{
    ProgressBarRangeInfo, SemanticsActions, SemanticsNode, SemanticsProperties,
    SemanticsPropertyKey, ToggleableState,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

type Predicate = Rc<dyn Fn(SemanticsNode<'_>) -> SemprobeResult<bool>>;

/// String matching options for text and description checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Accept the value as a substring of an item
    pub substring: bool,
    /// Compare case-insensitively
    pub ignore_case: bool,
}

impl MatchOptions {
    /// Whole-item, case-sensitive match
    pub const EXACT: Self = Self {
        substring: false,
        ignore_case: false,
    };

    /// Enable substring matching
    #[must_use]
    pub const fn substring(mut self) -> Self {
        self.substring = true;
        self
    }

    /// Enable case-insensitive matching
    #[must_use]
    pub const fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Whether `item` satisfies `value` under these options
    #[must_use]
    pub fn matches(&self, item: &str, value: &str) -> bool {
        match (self.substring, self.ignore_case) {
            (true, false) => item.contains(value),
            (true, true) => item.to_lowercase().contains(&value.to_lowercase()),
            (false, false) => item == value,
            (false, true) => item.to_lowercase() == value.to_lowercase(),
        }
    }

    fn describe(&self, subject: &str, value: &str) -> String {
        let mut out = format!("{subject} contains '{value}' (ignoreCase: {})", self.ignore_case);
        if self.substring {
            out.push_str(" as substring");
        }
        out
    }
}

/// Described predicate over a semantics node
#[derive(Clone)]
pub struct SemanticsMatcher {
    description: String,
    predicate: Predicate,
}

impl SemanticsMatcher {
    /// Infallible matcher
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(SemanticsNode<'_>) -> bool + 'static,
    {
        Self {
            description: description.into(),
            predicate: Rc::new(move |node| Ok(predicate(node))),
        }
    }

    /// Matcher that may reject the node outright with an error
    pub fn fallible<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(SemanticsNode<'_>) -> SemprobeResult<bool> + 'static,
    {
        Self {
            description: description.into(),
            predicate: Rc::new(predicate),
        }
    }

    /// What the matcher checks
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluate against a node
    pub fn matches(&self, node: SemanticsNode<'_>) -> SemprobeResult<bool> {
        (self.predicate)(node)
    }

    /// Both matchers hold
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let description = format!("({}) && ({})", self.description, other.description);
        Self::fallible(description, move |node| {
            Ok(self.matches(node)? && other.matches(node)?)
        })
    }

    /// Either matcher holds
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let description = format!("({}) || ({})", self.description, other.description);
        Self::fallible(description, move |node| {
            Ok(self.matches(node)? || other.matches(node)?)
        })
    }

    /// Negation
    #[must_use]
    pub fn not(self) -> Self {
        let description = format!("NOT ({})", self.description);
        Self::fallible(description, move |node| Ok(!self.matches(node)?))
    }

    /// The key is present and equals `expected`
    pub fn expect_value<T>(key: SemanticsPropertyKey<T>, expected: T) -> Self
    where
        T: PartialEq + fmt::Debug + 'static,
    {
        let description = format!("{} = '{:?}'", key.name(), expected);
        Self::new(description, move |node| {
            node.config().get(key).is_some_and(|actual| *actual == expected)
        })
    }

    /// The key is present
    pub fn key_is_defined<T: 'static>(key: SemanticsPropertyKey<T>) -> Self {
        Self::new(format!("{} is defined", key.name()), move |node| {
            node.config().contains(key)
        })
    }

    /// The key is absent
    pub fn key_not_defined<T: 'static>(key: SemanticsPropertyKey<T>) -> Self {
        Self::new(format!("{} is NOT defined", key.name()), move |node| {
            !node.config().contains(key)
        })
    }
}

impl fmt::Debug for SemanticsMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemanticsMatcher({})", self.description)
    }
}

impl fmt::Display for SemanticsMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

// =============================================================================
// MATCHER CONSTRUCTORS
// =============================================================================

fn text_values(node: SemanticsNode<'_>, include_editable_text: bool) -> Vec<String> {
    let config = node.config();
    let mut values = config.get_or_else(SemanticsProperties::TEXT, Vec::new);
    if include_editable_text {
        if let Some(editable) = config.get(SemanticsProperties::EDITABLE_TEXT) {
            values.push(editable.clone());
        }
    }
    values
}

fn same_items(actual: &[String], expected: &[String]) -> bool {
    actual.iter().all(|item| expected.contains(item))
        && expected.iter().all(|item| actual.contains(item))
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Node carries the given test tag
pub fn has_test_tag(tag: impl Into<String>) -> SemanticsMatcher {
    let tag = tag.into();
    SemanticsMatcher::expect_value(SemanticsProperties::TEST_TAG, tag)
}

/// Text or editable text contains `value`
pub fn has_text(value: impl Into<String>, options: MatchOptions) -> SemanticsMatcher {
    let value = value.into();
    let description = options.describe("Text + EditableText", &value);
    SemanticsMatcher::new(description, move |node| {
        text_values(node, true)
            .iter()
            .any(|item| options.matches(item, &value))
    })
}

/// Text (and optionally editable text) is exactly the given set of values
pub fn has_text_exactly(values: &[&str], include_editable_text: bool) -> SemanticsMatcher {
    let expected = owned(values);
    let subject = if include_editable_text {
        "Text + EditableText"
    } else {
        "Text"
    };
    let description = format!("{subject} = {expected:?}");
    SemanticsMatcher::new(description, move |node| {
        same_items(&text_values(node, include_editable_text), &expected)
    })
}

/// Content description contains `value`
pub fn has_content_description(
    value: impl Into<String>,
    options: MatchOptions,
) -> SemanticsMatcher {
    let value = value.into();
    let description = options.describe(SemanticsProperties::CONTENT_DESCRIPTION.name(), &value);
    SemanticsMatcher::new(description, move |node| {
        node.config()
            .get(SemanticsProperties::CONTENT_DESCRIPTION)
            .is_some_and(|items| items.iter().any(|item| options.matches(item, &value)))
    })
}

/// Content description is exactly the given set of values
pub fn has_content_description_exactly(values: &[&str]) -> SemanticsMatcher {
    let expected = owned(values);
    let description = format!(
        "{} = {expected:?}",
        SemanticsProperties::CONTENT_DESCRIPTION.name()
    );
    SemanticsMatcher::new(description, move |node| {
        let actual = node
            .config()
            .get_or_else(SemanticsProperties::CONTENT_DESCRIPTION, Vec::new);
        same_items(&actual, &expected)
    })
}

/// Node is not disabled
pub fn is_enabled() -> SemanticsMatcher {
    SemanticsMatcher::key_not_defined(SemanticsProperties::DISABLED)
}

/// Node is disabled
pub fn is_not_enabled() -> SemanticsMatcher {
    SemanticsMatcher::key_is_defined(SemanticsProperties::DISABLED)
}

/// Toggle is on
pub fn is_on() -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::TOGGLEABLE_STATE, ToggleableState::On)
}

/// Toggle is off
pub fn is_off() -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::TOGGLEABLE_STATE, ToggleableState::Off)
}

/// Node is selected
pub fn is_selected() -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::SELECTED, true)
}

/// Node is selectable but not selected
pub fn is_not_selected() -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::SELECTED, false)
}

/// Node has a toggle state
pub fn is_toggleable() -> SemanticsMatcher {
    SemanticsMatcher::key_is_defined(SemanticsProperties::TOGGLEABLE_STATE)
}

/// Node has a selection state
pub fn is_selectable() -> SemanticsMatcher {
    SemanticsMatcher::key_is_defined(SemanticsProperties::SELECTED)
}

/// Node has input focus
pub fn is_focused() -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::FOCUSED, true)
}

/// Node is focusable but not focused
pub fn is_not_focused() -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::FOCUSED, false)
}

/// Node can be clicked
pub fn has_click_action() -> SemanticsMatcher {
    SemanticsMatcher::key_is_defined(SemanticsActions::ON_CLICK)
}

/// Node cannot be clicked
pub fn has_no_click_action() -> SemanticsMatcher {
    SemanticsMatcher::key_not_defined(SemanticsActions::ON_CLICK)
}

/// State description equals `value`
pub fn has_state_description(value: impl Into<String>) -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::STATE_DESCRIPTION, value.into())
}

/// Progress range equals `info`
pub fn has_range_info(info: ProgressBarRangeInfo) -> SemanticsMatcher {
    SemanticsMatcher::expect_value(SemanticsProperties::PROGRESS_BAR_RANGE_INFO, info)
}

/// Node is the tree root
pub fn is_root() -> SemanticsMatcher {
    SemanticsMatcher::new("isRoot", |node| node.is_root())
}

/// Direct parent satisfies `matcher`
pub fn has_parent(matcher: SemanticsMatcher) -> SemanticsMatcher {
    let description = format!("hasParent({})", matcher.description());
    SemanticsMatcher::fallible(description, move |node| match node.parent() {
        Some(parent) => matcher.matches(parent),
        None => Ok(false),
    })
}

/// Some ancestor satisfies `matcher`
pub fn has_any_ancestor(matcher: SemanticsMatcher) -> SemanticsMatcher {
    let description = format!("hasAnyAncestor({})", matcher.description());
    SemanticsMatcher::fallible(description, move |node| {
        for ancestor in node.ancestors() {
            if matcher.matches(ancestor)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

/// Some direct child satisfies `matcher`
pub fn has_any_child(matcher: SemanticsMatcher) -> SemanticsMatcher {
    let description = format!("hasAnyChild({})", matcher.description());
    SemanticsMatcher::fallible(description, move |node| {
        for child in node.children() {
            if matcher.matches(child)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

/// Some descendant satisfies `matcher`
pub fn has_any_descendant(matcher: SemanticsMatcher) -> SemanticsMatcher {
    let description = format!("hasAnyDescendant({})", matcher.description());
    SemanticsMatcher::fallible(description, move |node| {
        for descendant in node.descendants() {
            if matcher.matches(descendant)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graphics::Rect;
    use crate::modifier::Modifier;
    use crate::semantics::SemanticsTree;
    use crate::ui::{button, text, text_field, UiNode};
    use crate::SemprobeError;

    fn tree(root: &UiNode) -> SemanticsTree {
        SemanticsTree::from_root(root, Rect::from_size(0.0, 0.0, 1000.0, 1000.0))
    }

    fn find_one<'a>(tree: &'a SemanticsTree, matcher: &SemanticsMatcher) -> SemanticsNode<'a> {
        let found: Vec<_> = tree
            .nodes()
            .filter(|node| matcher.matches(*node).unwrap())
            .collect();
        assert_eq!(found.len(), 1, "{matcher}");
        found[0]
    }

    mod options_tests {
        use super::*;

        #[test]
        fn test_exact() {
            assert!(MatchOptions::EXACT.matches("Hello", "Hello"));
            assert!(!MatchOptions::EXACT.matches("Hello", "hello"));
            assert!(!MatchOptions::EXACT.matches("Hello!", "Hello"));
        }

        #[test]
        fn test_substring_and_case() {
            let options = MatchOptions::default().substring();
            assert!(options.matches("xaby", "ab"));
            assert!(!options.matches("xABy", "ab"));
            assert!(options.ignore_case().matches("xABy", "ab"));
            assert!(MatchOptions::default().ignore_case().matches("ABC", "abc"));
        }
    }

    mod text_tests {
        use super::*;

        fn pair() -> UiNode {
            UiNode::new(Modifier::empty().merged_semantics(|_| {}).test_tag("pair"))
                .children([text("a", Modifier::empty()), text("b", Modifier::empty())])
        }

        #[test]
        fn test_text_exactly_is_order_independent() {
            let merged = tree(&pair()).merged();
            let node = find_one(&merged, &has_test_tag("pair"));
            assert!(has_text_exactly(&["a", "b"], true).matches(node).unwrap());
            assert!(has_text_exactly(&["b", "a"], true).matches(node).unwrap());
        }

        #[test]
        fn test_text_exactly_rejects_subsets_and_supersets() {
            let merged = tree(&pair()).merged();
            let node = find_one(&merged, &has_test_tag("pair"));
            assert!(!has_text_exactly(&["a"], true).matches(node).unwrap());
            assert!(!has_text_exactly(&["a", "b", "c"], true).matches(node).unwrap());
            assert!(!has_text_exactly(&[], true).matches(node).unwrap());
        }

        #[test]
        fn test_editable_text_inclusion() {
            let field = text_field("typed", Some("Label"), Modifier::empty().test_tag("f"));
            let root = UiNode::default().child(field);
            let tree = tree(&root);
            let node = find_one(&tree, &has_test_tag("f"));
            assert!(has_text_exactly(&["Label", "typed"], true).matches(node).unwrap());
            assert!(has_text_exactly(&["Label"], false).matches(node).unwrap());
            assert!(has_text("typed", MatchOptions::EXACT).matches(node).unwrap());
        }

        #[test]
        fn test_has_text_substring() {
            let root = UiNode::default().child(text("Count: 3", Modifier::empty()));
            let tree = tree(&root);
            let loose = MatchOptions::EXACT.substring().ignore_case();
            let _ = find_one(&tree, &has_text("count", loose));
            let strict = has_text("count", MatchOptions::EXACT.substring());
            assert!(tree.nodes().all(|node| !strict.matches(node).unwrap()));
        }
    }

    mod description_tests {
        use super::*;

        #[test]
        fn test_content_description_contains() {
            let root =
                UiNode::default().child(UiNode::new(Modifier::empty().content_description("xaby")));
            let tree = tree(&root);
            let node = tree.root().unwrap().children()[0];
            assert!(has_content_description("ab", MatchOptions::EXACT.substring())
                .matches(node)
                .unwrap());
            assert!(!has_content_description("ab", MatchOptions::EXACT).matches(node).unwrap());
        }

        #[test]
        fn test_content_description_exactly_missing_key() {
            let root = UiNode::default();
            let tree = tree(&root);
            let node = tree.root().unwrap();
            assert!(has_content_description_exactly(&[]).matches(node).unwrap());
            assert!(!has_content_description_exactly(&["a"]).matches(node).unwrap());
        }
    }

    mod state_tests {
        use super::*;
        use crate::semantics::Role;

        #[test]
        fn test_toggle_matchers() {
            let root = UiNode::default().children([
                UiNode::new(Modifier::empty().test_tag("on").toggleable(true, Role::Switch, || {})),
                UiNode::new(Modifier::empty().test_tag("plain")),
            ]);
            let tree = tree(&root);
            let on = find_one(&tree, &has_test_tag("on"));
            let plain = find_one(&tree, &has_test_tag("plain"));
            assert!(is_on().matches(on).unwrap());
            assert!(!is_off().matches(on).unwrap());
            assert!(is_toggleable().matches(on).unwrap());
            assert!(!is_on().matches(plain).unwrap());
            assert!(!is_off().matches(plain).unwrap());
            assert!(!is_toggleable().matches(plain).unwrap());
        }

        #[test]
        fn test_enabled_and_click() {
            let root = UiNode::default().children([
                button("ok", Modifier::empty().test_tag("ok"), || {}),
                UiNode::new(Modifier::empty().test_tag("off").clickable_with(false, || {})),
            ]);
            let tree = tree(&root);
            let ok = find_one(&tree, &has_test_tag("ok"));
            let off = find_one(&tree, &has_test_tag("off"));
            assert!(is_enabled().matches(ok).unwrap());
            assert!(is_not_enabled().matches(off).unwrap());
            assert!(has_click_action().matches(off).unwrap());
            assert!(has_no_click_action().matches(tree.root().unwrap()).unwrap());
        }
    }

    mod combinator_tests {
        use super::*;

        #[test]
        fn test_descriptions() {
            let matcher = has_test_tag("a").and(is_enabled().not());
            assert_eq!(
                matcher.description(),
                "(TestTag = '\"a\"') && (NOT (Disabled is NOT defined))"
            );
            assert_eq!(
                has_test_tag("a").or(has_test_tag("b")).to_string(),
                "(TestTag = '\"a\"') || (TestTag = '\"b\"')"
            );
        }

        #[test]
        fn test_hierarchy_matchers() {
            let root = UiNode::new(Modifier::empty().test_tag("list")).child(
                UiNode::new(Modifier::empty().test_tag("row"))
                    .child(text("cell", Modifier::empty())),
            );
            let tree = tree(&root);
            let cell = find_one(&tree, &has_text("cell", MatchOptions::EXACT));
            assert!(has_parent(has_test_tag("row")).matches(cell).unwrap());
            assert!(!has_parent(has_test_tag("list")).matches(cell).unwrap());
            assert!(has_any_ancestor(has_test_tag("list")).matches(cell).unwrap());
            let list = find_one(&tree, &has_test_tag("list"));
            assert!(has_any_child(has_test_tag("row")).matches(list).unwrap());
            assert!(has_any_descendant(has_text("cell", MatchOptions::EXACT))
                .matches(list)
                .unwrap());
            assert!(is_root().matches(list).unwrap());
        }

        #[test]
        fn test_fallible_errors_propagate() {
            let failing = SemanticsMatcher::fallible("boom", |_| {
                Err(SemprobeError::illegal_state("no slot"))
            });
            let root = UiNode::default();
            let tree = tree(&root);
            let node = tree.root().unwrap();
            let err = is_root().and(failing).matches(node).unwrap_err();
            assert!(err.is_illegal_state());
        }
    }
}
