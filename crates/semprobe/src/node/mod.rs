//! Fluent node facade.
//!
//! A [`Screen`] creates [`TestNode`]s from selector builders. Each node
//! exposes [`NodeAssertions`] and [`NodeActions`]; every call runs through
//! its [`NodeDelegate`], which wraps the host call in the screen's
//! interceptors and logs the outcome.

mod actions;
mod assertion_type;
mod assertions;
mod builder;
mod delegate;
mod interceptor;
mod screen;
mod test_node;

pub use actions::NodeActions;
pub use assertion_type::{ActionType, AssertionType};
pub use assertions::NodeAssertions;
pub use builder::{NodeMatcher, NodeMatcherBuilder};
pub use delegate::{BaseNode, NodeDelegate};
pub use interceptor::{CheckInfo, CheckInterceptor, CheckRecord, CheckRecorder, Operation};
pub use screen::Screen;
pub use test_node::TestNode;
