//! Selector builder for [`super::TestNode`].

use crate::matcher::{self, MatchOptions, SemanticsMatcher};
use crate::result::{SemprobeError, SemprobeResult};

/// Built selector: the combined matcher plus the tree to resolve it in
#[derive(Debug, Clone)]
pub struct NodeMatcher {
    /// All conditions joined with `and`
    pub matcher: SemanticsMatcher,
    /// Tree override; `None` keeps the screen's default
    pub use_unmerged_tree: Option<bool>,
}

/// Collects the conditions a node must satisfy
#[derive(Debug, Clone, Default)]
pub struct NodeMatcherBuilder {
    matchers: Vec<SemanticsMatcher>,
    use_unmerged_tree: Option<bool>,
}

impl NodeMatcherBuilder {
    /// Builder with no conditions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary condition
    #[must_use]
    pub fn add_matcher(mut self, matcher: SemanticsMatcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Test tag equals `tag`
    #[must_use]
    pub fn has_test_tag(self, tag: impl Into<String>) -> Self {
        self.add_matcher(matcher::has_test_tag(tag))
    }

    /// Exact text item (or editable text)
    #[must_use]
    pub fn has_text(self, text: impl Into<String>) -> Self {
        self.add_matcher(matcher::has_text(text, MatchOptions::EXACT))
    }

    /// Text item (or editable text) matching under `options`
    #[must_use]
    pub fn has_text_with(self, text: impl Into<String>, options: MatchOptions) -> Self {
        self.add_matcher(matcher::has_text(text, options))
    }

    /// Exact content description item
    #[must_use]
    pub fn has_content_description(self, description: impl Into<String>) -> Self {
        self.add_matcher(matcher::has_content_description(description, MatchOptions::EXACT))
    }

    /// Content description item matching under `options`
    #[must_use]
    pub fn has_content_description_with(
        self,
        description: impl Into<String>,
        options: MatchOptions,
    ) -> Self {
        self.add_matcher(matcher::has_content_description(description, options))
    }

    /// Has a click action
    #[must_use]
    pub fn has_click_action(self) -> Self {
        self.add_matcher(matcher::has_click_action())
    }

    /// Has no click action
    #[must_use]
    pub fn has_no_click_action(self) -> Self {
        self.add_matcher(matcher::has_no_click_action())
    }

    /// Not disabled
    #[must_use]
    pub fn is_enabled(self) -> Self {
        self.add_matcher(matcher::is_enabled())
    }

    /// Disabled
    #[must_use]
    pub fn is_not_enabled(self) -> Self {
        self.add_matcher(matcher::is_not_enabled())
    }

    /// Selected
    #[must_use]
    pub fn is_selected(self) -> Self {
        self.add_matcher(matcher::is_selected())
    }

    /// Carries a toggle state
    #[must_use]
    pub fn is_toggleable(self) -> Self {
        self.add_matcher(matcher::is_toggleable())
    }

    /// Has input focus
    #[must_use]
    pub fn is_focused(self) -> Self {
        self.add_matcher(matcher::is_focused())
    }

    /// Direct parent satisfies `parent`
    #[must_use]
    pub fn has_parent(self, parent: SemanticsMatcher) -> Self {
        self.add_matcher(matcher::has_parent(parent))
    }

    /// Resolve in the unmerged (`true`) or merged (`false`) tree
    #[must_use]
    pub const fn use_unmerged_tree(mut self, unmerged: bool) -> Self {
        self.use_unmerged_tree = Some(unmerged);
        self
    }

    /// Number of conditions added so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether no condition was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Join the conditions; at least one is required
    pub fn build(self) -> SemprobeResult<NodeMatcher> {
        let mut matchers = self.matchers.into_iter();
        let first = matchers.next().ok_or_else(|| {
            SemprobeError::illegal_argument("At least one matcher must be specified for a node")
        })?;
        let matcher = matchers.fold(first, SemanticsMatcher::and);
        Ok(NodeMatcher {
            matcher,
            use_unmerged_tree: self.use_unmerged_tree,
        })
    }
}
