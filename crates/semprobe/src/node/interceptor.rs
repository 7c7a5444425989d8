//! Hooks around node checks and actions.
//!
//! Every check and action of a [`super::TestNode`] runs through its
//! interceptor chain: `before` in registration order, the host call, then
//! `after` with the outcome. [`CheckRecorder`] is the built-in interceptor
//! that keeps a log of everything a test did.

use super::assertion_type::{ActionType, AssertionType};
use crate::result::{SemprobeError, SemprobeResult};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A check or an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum Operation {
    /// Assertion on the node
    Check(AssertionType),
    /// Action performed on the node
    Perform(ActionType),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check(assertion) => write!(f, "check {assertion}"),
            Self::Perform(action) => write!(f, "perform {action}"),
        }
    }
}

/// What an interceptor is told about an operation
#[derive(Debug, Clone, Copy)]
pub struct CheckInfo<'a> {
    /// Operation being run
    pub operation: Operation,
    /// Description of the node's selector
    pub selector: &'a str,
}

/// Hook wrapped around every check and action of a node
pub trait CheckInterceptor {
    /// Called before the host is queried
    fn before(&self, _info: &CheckInfo<'_>) {}

    /// Called with the outcome
    fn after(&self, _info: &CheckInfo<'_>, _result: &SemprobeResult<()>) {}
}

// =============================================================================
// CHECK RECORDER
// =============================================================================

/// One recorded operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Operation that ran
    pub operation: Operation,
    /// Selector of the node
    pub selector: String,
    /// Whether it succeeded
    pub passed: bool,
    /// Error message on failure
    pub error: Option<String>,
}

/// Interceptor recording every operation with its outcome.
///
/// Clones share the same log, so keep one handle and register another.
#[derive(Debug, Clone, Default)]
pub struct CheckRecorder {
    records: Rc<RefCell<Vec<CheckRecord>>>,
}

impl CheckRecorder {
    /// Empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records so far
    #[must_use]
    pub fn records(&self) -> Vec<CheckRecord> {
        self.records.borrow().clone()
    }

    /// Records of failed operations
    #[must_use]
    pub fn failures(&self) -> Vec<CheckRecord> {
        self.records
            .borrow()
            .iter()
            .filter(|record| !record.passed)
            .cloned()
            .collect()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Forget all records
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    /// Fail with every recorded failure, or succeed when there is none
    pub fn verify(&self) -> SemprobeResult<()> {
        let failures = self.failures();
        if failures.is_empty() {
            return Ok(());
        }
        let mut message = format!("{} of {} operations failed:", failures.len(), self.len());
        for record in &failures {
            message.push_str(&format!(
                "\n  {} on ({}): {}",
                record.operation,
                record.selector,
                record.error.as_deref().unwrap_or("")
            ));
        }
        Err(SemprobeError::assertion(message))
    }

    /// Records as pretty JSON
    pub fn to_json(&self) -> SemprobeResult<String> {
        Ok(serde_json::to_string_pretty(&*self.records.borrow())?)
    }
}

impl CheckInterceptor for CheckRecorder {
    fn after(&self, info: &CheckInfo<'_>, result: &SemprobeResult<()>) {
        self.records.borrow_mut().push(CheckRecord {
            operation: info.operation,
            selector: info.selector.to_string(),
            passed: result.is_ok(),
            error: result.as_ref().err().map(ToString::to_string),
        });
    }
}
