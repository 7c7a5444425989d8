//! Composed UI nodes and a handful of basic widgets.
//!
//! A [`UiNode`] is the output of one composition pass: a modifier chain,
//! bounds relative to the parent, a placed flag and children. Layout is not
//! computed; widgets get [`DEFAULT_NODE_WIDTH`] x [`DEFAULT_NODE_HEIGHT`]
//! unless told otherwise.

use crate::graphics::{Offset, Rect};
use crate::modifier::Modifier;
use crate::semantics::{ProgressBarRangeInfo, Role, SemanticsProperties};

/// Default node width in pixels
pub const DEFAULT_NODE_WIDTH: f32 = 100.0;

/// Default node height in pixels
pub const DEFAULT_NODE_HEIGHT: f32 = 40.0;

/// A composed UI element
#[derive(Debug, Clone)]
pub struct UiNode {
    modifier: Modifier,
    bounds: Rect,
    placed: bool,
    children: Vec<UiNode>,
}

impl Default for UiNode {
    fn default() -> Self {
        Self::new(Modifier::empty())
    }
}

impl UiNode {
    /// Node at the parent's origin with the default size
    #[must_use]
    pub fn new(modifier: Modifier) -> Self {
        Self {
            modifier,
            bounds: Rect::from_size(0.0, 0.0, DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT),
            placed: true,
            children: Vec::new(),
        }
    }

    /// Set bounds relative to the parent
    #[must_use]
    pub const fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Move to `(x, y)` keeping the size
    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        let (width, height) = (self.bounds.width(), self.bounds.height());
        self.bounds = Rect::from_size(x, y, width, height);
        self
    }

    /// Resize keeping the origin
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.bounds = Rect::from_size(self.bounds.left, self.bounds.top, width, height);
        self
    }

    /// Whether layout placed this node; unplaced subtrees are never displayed
    #[must_use]
    pub const fn placed(mut self, placed: bool) -> Self {
        self.placed = placed;
        self
    }

    /// Append a child
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Modifier chain
    #[must_use]
    pub const fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    /// Bounds relative to the parent
    #[must_use]
    pub const fn local_bounds(&self) -> Rect {
        self.bounds
    }

    /// Placed flag of this node alone
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.placed
    }

    /// Children in order
    #[must_use]
    pub fn child_nodes(&self) -> &[Self] {
        &self.children
    }

    /// Pre-order walk yielding each node with its absolute bounds and
    /// whether it and all its ancestors are placed
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Self, Rect, bool),
    {
        self.walk_from(Offset::ZERO, true, visit);
    }

    fn walk_from<F>(&self, origin: Offset, parent_placed: bool, visit: &mut F)
    where
        F: FnMut(&Self, Rect, bool),
    {
        let absolute = self.bounds.translate(origin);
        let placed = parent_placed && self.placed;
        visit(self, absolute, placed);
        for child in &self.children {
            child.walk_from(absolute.origin(), placed, visit);
        }
    }
}

// =============================================================================
// WIDGETS
// =============================================================================

/// Static text
#[must_use]
pub fn text(value: impl Into<String>, modifier: Modifier) -> UiNode {
    let value = value.into();
    UiNode::new(modifier.semantics(move |config| {
        config.set(SemanticsProperties::TEXT, vec![value.clone()]);
    }))
}

/// Editable text field with an optional label
#[must_use]
pub fn text_field(value: impl Into<String>, label: Option<&str>, modifier: Modifier) -> UiNode {
    let value = value.into();
    let label = label.map(str::to_string);
    UiNode::new(modifier.merged_semantics(move |config| {
        config.set(SemanticsProperties::EDITABLE_TEXT, value.clone());
        if let Some(label) = &label {
            config.set(SemanticsProperties::TEXT, vec![label.clone()]);
        }
    }))
}

/// Clickable button whose label merges into it
#[must_use]
pub fn button(
    label: impl Into<String>,
    modifier: Modifier,
    on_click: impl Fn() + 'static,
) -> UiNode {
    UiNode::new(modifier.clickable(on_click)).child(text(label, Modifier::empty()))
}

/// Checkbox
#[must_use]
pub fn checkbox(checked: bool, modifier: Modifier, on_toggle: impl Fn() + 'static) -> UiNode {
    UiNode::new(modifier.toggleable(checked, Role::Checkbox, on_toggle)).size(24.0, 24.0)
}

/// Determinate progress indicator
#[must_use]
pub fn progress_indicator(progress: f32, modifier: Modifier) -> UiNode {
    let info = ProgressBarRangeInfo::new(progress, 0.0..=1.0);
    let percent = format!("{}%", (progress.clamp(0.0, 1.0) * 100.0).round() as u32);
    UiNode::new(modifier.progress(info).state_description(percent))
}
