//! Located node with the full assertion and action facade.

use super::actions::NodeActions;
use super::assertions::NodeAssertions;
use super::builder::{NodeMatcher, NodeMatcherBuilder};
use super::delegate::{BaseNode, NodeDelegate};
use super::screen::Screen;
use crate::matcher::{has_any_ancestor, SemanticsMatcher};
use crate::result::SemprobeResult;

/// A node of a [`Screen`], resolved afresh on every call
#[derive(Debug, Clone)]
pub struct TestNode {
    screen: Screen,
    matcher: NodeMatcher,
    delegate: NodeDelegate,
}

impl TestNode {
    pub(crate) fn new(screen: Screen, matcher: NodeMatcher) -> Self {
        let delegate = screen.delegate_for(&matcher);
        Self {
            screen,
            matcher,
            delegate,
        }
    }

    /// Selector of this node
    #[must_use]
    pub const fn matcher(&self) -> &SemanticsMatcher {
        &self.matcher.matcher
    }

    /// Node nested somewhere below this one.
    ///
    /// The child inherits the screen and this node's tree choice unless
    /// `build` sets its own.
    pub fn child<F>(&self, build: F) -> SemprobeResult<Self>
    where
        F: FnOnce(NodeMatcherBuilder) -> NodeMatcherBuilder,
    {
        let built = build(NodeMatcherBuilder::new()).build()?;
        let matcher = NodeMatcher {
            matcher: built.matcher.and(has_any_ancestor(self.matcher.matcher.clone())),
            use_unmerged_tree: built.use_unmerged_tree.or(self.matcher.use_unmerged_tree),
        };
        Ok(Self::new(self.screen.clone(), matcher))
    }
}

impl BaseNode for TestNode {
    fn delegate(&self) -> &NodeDelegate {
        &self.delegate
    }
}

impl NodeAssertions for TestNode {}

impl NodeActions for TestNode {}
