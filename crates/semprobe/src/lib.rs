//! Semprobe: fluent semantics-tree assertions for declarative UI tests.
//!
//! Tests locate a node of the rendered UI through its semantics and make
//! readable, chained assertions about it. Components can tag themselves with
//! custom semantics properties that tests read back later.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌────────────────────┐   ┌────────────┐
//! │ TestNode     │──►│ NodeDelegate │──►│ SemanticsNode-     │──►│ Semantics- │
//! │ (assertions, │   │ (interceptors│   │ Interaction        │   │ Host       │
//! │  actions)    │   │  + tracing)  │   │ (fetch + matcher)  │   │ (TestHost) │
//! └──────────────┘   └──────────────┘   └────────────────────┘   └────────────┘
//! ```
//!
//! Every call waits for the host to go idle and resolves the node against a
//! fresh snapshot. Nothing is cached between calls.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Packed colors, geometry, shapes and brushes
pub mod graphics;

/// Matchers selecting and checking semantics nodes
#[allow(clippy::must_use_candidate, clippy::needless_pass_by_value)]
pub mod matcher;

/// Semantics keys, configurations and tree snapshots
pub mod semantics;

/// Composed UI nodes and basic widgets
pub mod ui;

/// `tracing` subscriber setup for tests
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

mod config;
mod draw;
#[allow(clippy::missing_errors_doc)]
mod host;
#[allow(clippy::missing_errors_doc)]
mod interaction;
mod modifier;
#[allow(clippy::missing_errors_doc, clippy::doc_markdown)]
mod node;
mod result;

pub use config::{SemprobeConfig, DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_MAX_RECOMPOSITIONS};
pub use draw::{render, DrawCommand};
pub use graphics::{Brush, Color, CornerSize, Corners, Offset, Rect, Shape, TileMode};
pub use host::{
    MutableState, SemanticsHost, TestHost, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
pub use interaction::SemanticsNodeInteraction;
pub use matcher::{MatchOptions, SemanticsMatcher};
pub use modifier::{BackgroundElement, Fill, Modifier, ModifierElement, SemanticsElement};
pub use node::{
    ActionType, AssertionType, BaseNode, CheckInfo, CheckInterceptor, CheckRecord, CheckRecorder,
    NodeActions, NodeAssertions, NodeDelegate, NodeMatcher, NodeMatcherBuilder, Operation, Screen,
    TestNode,
};
pub use result::{SemprobeError, SemprobeResult};
pub use semantics::{
    AccessibilityAction, MergePolicy, NodeId, ProgressBarRangeInfo, Role, SemanticsActions,
    SemanticsConfiguration, SemanticsNode, SemanticsProperties, SemanticsPropertyKey,
    SemanticsTree, ToggleableState,
};
pub use ui::UiNode;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::graphics::{Brush, Color, Shape};
    pub use super::host::{MutableState, SemanticsHost, TestHost};
    pub use super::matcher::{MatchOptions, SemanticsMatcher};
    pub use super::modifier::Modifier;
    pub use super::node::{
        BaseNode, CheckInterceptor, CheckRecorder, NodeActions, NodeAssertions, Screen, TestNode,
    };
    pub use super::result::{SemprobeError, SemprobeResult};
    pub use super::semantics::{ProgressBarRangeInfo, Role, ToggleableState};
    pub use super::ui::{button, checkbox, progress_indicator, text, text_field, UiNode};
}
