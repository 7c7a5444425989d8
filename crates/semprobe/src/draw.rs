//! Draw-command recording.
//!
//! Stands in for the rendering pipeline: walking a composed tree yields the
//! background fills a renderer would paint, in paint order.

use crate::graphics::{Rect, Shape};
use crate::modifier::Fill;
use crate::ui::UiNode;

/// A single recorded paint operation
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Absolute bounds of the painted area
    pub bounds: Rect,
    /// Paint
    pub fill: Fill,
    /// Clip outline
    pub shape: Shape,
    /// Opacity in `0.0..=1.0`
    pub alpha: f32,
}

/// Record the backgrounds of every placed node, parents before children
#[must_use]
pub fn render(root: &UiNode) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    root.walk(&mut |node, bounds, placed| {
        if !placed {
            return;
        }
        for background in node.modifier().backgrounds() {
            commands.push(DrawCommand {
                bounds,
                fill: background.fill.clone(),
                shape: background.shape,
                alpha: background.alpha.clamp(0.0, 1.0),
            });
        }
    });
    commands
}
