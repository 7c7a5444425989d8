//! Background helpers that also tag the node.

use crate::keys::BackgroundSemantics;
use semprobe::{Brush, Color, Modifier, Shape};

/// Alpha the brush helper uses when the caller has no opinion
pub const DEFAULT_BACKGROUND_ALPHA: f32 = 1.0;

/// Paints a background and records it in the node's semantics.
///
/// Each slot is stamped by its own semantics element, so a node that
/// receives two helpers keeps the values of the first one.
pub trait BackgroundModifierExt {
    /// Solid color background; stamps color and shape
    #[must_use]
    fn semantic_background(self, color: Color, shape: Shape) -> Self;

    /// Brush background; stamps brush, shape and alpha.
    ///
    /// `alpha` is recorded as given and clamped to `0.0..=1.0` when drawn.
    #[must_use]
    fn semantic_background_brush(self, brush: Brush, shape: Shape, alpha: f32) -> Self;
}

impl BackgroundModifierExt for Modifier {
    fn semantic_background(self, color: Color, shape: Shape) -> Self {
        self.background(color, shape)
            .semantics(move |config| config.set_background_color(color))
            .semantics(move |config| config.set_background_shape(shape))
    }

    fn semantic_background_brush(self, brush: Brush, shape: Shape, alpha: f32) -> Self {
        let stamped = brush.clone();
        self.background_brush(brush, shape, alpha)
            .semantics(move |config| config.set_background_brush(stamped.clone()))
            .semantics(move |config| config.set_background_shape(shape))
            .semantics(move |config| config.set_background_alpha(alpha))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use semprobe::{render, Fill, UiNode};

    #[test]
    fn test_color_helper_draws_and_stamps() {
        let modifier = Modifier::empty().semantic_background(Color::RED, Shape::CIRCLE);
        let config = modifier.semantics_configuration().unwrap();
        assert_eq!(config.background_color(), Some(Color::RED));
        assert_eq!(config.background_shape(), Some(Shape::CIRCLE));
        assert!(config.background_brush().is_none());
        assert!(config.background_alpha().is_none());

        let commands = render(&UiNode::new(modifier));
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].fill, Fill::Color(Color::RED));
        assert_eq!(commands[0].shape, Shape::CIRCLE);
    }

    #[test]
    fn test_brush_helper_draws_and_stamps() {
        let brush = Brush::vertical_gradient(vec![Color::RED, Color::BLUE]);
        let modifier =
            Modifier::empty().semantic_background_brush(brush.clone(), Shape::cut(4.0), 0.5);
        let config = modifier.semantics_configuration().unwrap();
        assert_eq!(config.background_brush(), Some(&brush));
        assert_eq!(config.background_shape(), Some(Shape::cut(4.0)));
        assert_eq!(config.background_alpha(), Some(0.5));
        assert!(config.background_color().is_none());

        let commands = render(&UiNode::new(modifier));
        assert_eq!(commands[0].fill, Fill::Brush(brush));
        assert_eq!(commands[0].alpha, 0.5);
    }

    #[test]
    fn test_first_stamp_wins() {
        let modifier = Modifier::empty()
            .semantic_background(Color::RED, Shape::Rectangle)
            .semantic_background(Color::GREEN, Shape::CIRCLE);
        let config = modifier.semantics_configuration().unwrap();
        assert_eq!(config.background_color(), Some(Color::RED));
        assert_eq!(config.background_shape(), Some(Shape::Rectangle));
        // both backgrounds are still painted
        assert_eq!(modifier.backgrounds().count(), 2);
    }

    #[test]
    fn test_alpha_is_recorded_unclamped() {
        let modifier = Modifier::empty().semantic_background_brush(
            Brush::solid(Color::BLACK),
            Shape::Rectangle,
            1.5,
        );
        let config = modifier.semantics_configuration().unwrap();
        assert_eq!(config.background_alpha(), Some(1.5));
        assert_eq!(render(&UiNode::new(modifier))[0].alpha, 1.0);
    }
}
