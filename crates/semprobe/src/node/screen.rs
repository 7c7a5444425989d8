//! Page-object entry point.

use super::builder::{NodeMatcher, NodeMatcherBuilder};
use super::delegate::NodeDelegate;
use super::interceptor::CheckInterceptor;
use super::test_node::TestNode;
use crate::config::SemprobeConfig;
use crate::host::{SemanticsHost, TestHost};
use crate::interaction::SemanticsNodeInteraction;
use crate::result::SemprobeResult;
use std::fmt;
use std::rc::Rc;

/// Host, configuration and interceptors shared by the nodes of one screen.
///
/// ```ignore
/// let screen = Screen::for_host(&host);
/// let save = screen.node(|n| n.has_test_tag("save"))?;
/// save.assert_is_enabled()?;
/// save.perform_click()?;
/// ```
#[derive(Clone)]
pub struct Screen {
    host: Rc<dyn SemanticsHost>,
    config: SemprobeConfig,
    interceptors: Vec<Rc<dyn CheckInterceptor>>,
}

impl Screen {
    /// Screen over any host
    pub fn new(host: impl SemanticsHost + 'static, config: SemprobeConfig) -> Self {
        Self {
            host: Rc::new(host),
            config,
            interceptors: Vec::new(),
        }
    }

    /// Screen over a [`TestHost`], sharing its configuration
    #[must_use]
    pub fn for_host(host: &TestHost) -> Self {
        Self::new(host.clone(), host.config().clone())
    }

    /// Register an interceptor for every node created afterwards
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl CheckInterceptor + 'static) -> Self {
        self.interceptors.push(Rc::new(interceptor));
        self
    }

    /// Configuration
    #[must_use]
    pub const fn config(&self) -> &SemprobeConfig {
        &self.config
    }

    /// Host
    #[must_use]
    pub fn host(&self) -> Rc<dyn SemanticsHost> {
        Rc::clone(&self.host)
    }

    /// Node matching the conditions set in `build`
    pub fn node<F>(&self, build: F) -> SemprobeResult<TestNode>
    where
        F: FnOnce(NodeMatcherBuilder) -> NodeMatcherBuilder,
    {
        let matcher = build(NodeMatcherBuilder::new()).build()?;
        Ok(TestNode::new(self.clone(), matcher))
    }

    pub(crate) fn delegate_for(&self, matcher: &NodeMatcher) -> NodeDelegate {
        let use_unmerged_tree = matcher
            .use_unmerged_tree
            .unwrap_or(self.config.use_unmerged_tree);
        let interaction = SemanticsNodeInteraction::new(
            Rc::clone(&self.host),
            matcher.matcher.clone(),
            use_unmerged_tree,
        );
        NodeDelegate::new(interaction)
            .with_interceptors(self.interceptors.iter().cloned())
            .with_log_checks(self.config.log_checks)
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("config", &self.config)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::modifier::Modifier;
    use crate::node::{BaseNode, CheckRecorder, NodeAssertions};
    use crate::ui::text;

    fn host() -> TestHost {
        let host = TestHost::new(SemprobeConfig::default().with_unmerged_tree(true));
        host.set_content(|| text("hi", Modifier::empty().test_tag("greeting")));
        host
    }

    #[test]
    fn test_node_requires_a_matcher() {
        let screen = Screen::for_host(&host());
        assert!(screen.node(|n| n).unwrap_err().is_illegal_argument());
    }

    #[test]
    fn test_tree_choice_follows_config_unless_overridden() {
        let screen = Screen::for_host(&host());
        assert!(screen.config().use_unmerged_tree);
        let default = screen.node(|n| n.has_test_tag("greeting")).unwrap();
        assert!(default.delegate().interaction().uses_unmerged_tree());
        let merged = screen
            .node(|n| n.has_test_tag("greeting").use_unmerged_tree(false))
            .unwrap();
        assert!(!merged.delegate().interaction().uses_unmerged_tree());
    }

    #[test]
    fn test_interceptors_reach_nodes() {
        let recorder = CheckRecorder::new();
        let screen = Screen::for_host(&host()).with_interceptor(recorder.clone());
        let node = screen.node(|n| n.has_test_tag("greeting")).unwrap();
        node.assert_exists().unwrap();
        node.assert_text_equals(&["hi"], true).unwrap();
        assert_eq!(recorder.len(), 2);
        recorder.verify().unwrap();
    }
}
