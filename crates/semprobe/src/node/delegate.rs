//! Runs node operations through the interceptor chain.

use super::assertion_type::{ActionType, AssertionType};
use super::interceptor::{CheckInfo, CheckInterceptor, Operation};
use crate::interaction::SemanticsNodeInteraction;
use crate::result::SemprobeResult;
use std::fmt;
use std::rc::Rc;

/// Owns a node's interaction and wraps every call to it
#[derive(Clone)]
pub struct NodeDelegate {
    interaction: SemanticsNodeInteraction,
    interceptors: Vec<Rc<dyn CheckInterceptor>>,
    log_checks: bool,
}

impl NodeDelegate {
    /// Delegate without interceptors
    #[must_use]
    pub fn new(interaction: SemanticsNodeInteraction) -> Self {
        Self {
            interaction,
            interceptors: Vec::new(),
            log_checks: true,
        }
    }

    /// Append an interceptor
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Rc<dyn CheckInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Append several interceptors
    #[must_use]
    pub fn with_interceptors(
        mut self,
        interceptors: impl IntoIterator<Item = Rc<dyn CheckInterceptor>>,
    ) -> Self {
        self.interceptors.extend(interceptors);
        self
    }

    /// Toggle the per-operation `tracing` events
    #[must_use]
    pub const fn with_log_checks(mut self, log_checks: bool) -> Self {
        self.log_checks = log_checks;
        self
    }

    /// Underlying interaction
    #[must_use]
    pub const fn interaction(&self) -> &SemanticsNodeInteraction {
        &self.interaction
    }

    /// Number of registered interceptors
    #[must_use]
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Run an assertion
    pub fn check<F>(&self, assertion: AssertionType, f: F) -> SemprobeResult<()>
    where
        F: FnOnce(&SemanticsNodeInteraction) -> SemprobeResult<()>,
    {
        self.run(Operation::Check(assertion), f)
    }

    /// Run an action
    pub fn perform<F>(&self, action: ActionType, f: F) -> SemprobeResult<()>
    where
        F: FnOnce(&SemanticsNodeInteraction) -> SemprobeResult<()>,
    {
        self.run(Operation::Perform(action), f)
    }

    fn run<F>(&self, operation: Operation, f: F) -> SemprobeResult<()>
    where
        F: FnOnce(&SemanticsNodeInteraction) -> SemprobeResult<()>,
    {
        let selector = self.interaction.selector().description();
        let info = CheckInfo {
            operation,
            selector,
        };
        for interceptor in &self.interceptors {
            interceptor.before(&info);
        }

        let result = f(&self.interaction);

        if self.log_checks {
            match &result {
                Ok(()) => tracing::debug!(%operation, selector, "passed"),
                Err(err) => tracing::debug!(%operation, selector, error = %err, "failed"),
            }
        }
        for interceptor in &self.interceptors {
            interceptor.after(&info, &result);
        }
        result
    }
}

/// Anything backed by a [`NodeDelegate`]; the facade traits build on it
pub trait BaseNode {
    /// Delegate every check and action goes through
    fn delegate(&self) -> &NodeDelegate;
}

impl fmt::Debug for NodeDelegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDelegate")
            .field("interaction", &self.interaction)
            .field("interceptors", &self.interceptors.len())
            .field("log_checks", &self.log_checks)
            .finish()
    }
}
