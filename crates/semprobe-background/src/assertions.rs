//! Read-back assertions for the background slots.
//!
//! Each check is an `assertValueEquals` on the node's delegate, so it runs
//! through the node's interceptors like any built-in assertion. A node that
//! never got the matching helper fails with `IllegalState`; a wrong value
//! fails with `AssertionFailed`.
//!
//! The `has_background_*` matchers are plain selectors: a node without the
//! slot simply does not match, so they are safe to use while locating nodes.

use crate::keys::{BACKGROUND_ALPHA, BACKGROUND_BRUSH, BACKGROUND_COLOR, BACKGROUND_SHAPE};
use semprobe::{
    AssertionType, Brush, Color, NodeAssertions, SemanticsMatcher, SemanticsPropertyKey,
    SemprobeError, SemprobeResult, Shape,
};
use std::fmt;

// =============================================================================
// COLOR INPUT
// =============================================================================

/// The forms a caller may pass an expected color in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// Already a color
    Typed(Color),
    /// `#RRGGBB`, `#AARRGGBB` or a color name
    Text(String),
    /// Packed `0xAARRGGBB`
    Packed(u32),
}

impl ColorInput {
    /// Normalize to a [`Color`]; malformed text is `IllegalArgument`
    pub fn resolve(&self) -> SemprobeResult<Color> {
        match self {
            Self::Typed(color) => Ok(*color),
            Self::Text(text) => Color::parse(text),
            Self::Packed(argb) => Ok(Color::from_argb(*argb)),
        }
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        Self::Typed(color)
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<u32> for ColorInput {
    fn from(argb: u32) -> Self {
        Self::Packed(argb)
    }
}

// =============================================================================
// SELECTORS
// =============================================================================

/// Nodes whose stamped background color is `color`
pub fn has_background_color(color: Color) -> SemanticsMatcher {
    SemanticsMatcher::expect_value(BACKGROUND_COLOR, color)
}

/// Nodes whose stamped background shape is `shape`
pub fn has_background_shape(shape: Shape) -> SemanticsMatcher {
    SemanticsMatcher::expect_value(BACKGROUND_SHAPE, shape)
}

/// Nodes whose stamped background brush is `brush`
pub fn has_background_brush(brush: Brush) -> SemanticsMatcher {
    SemanticsMatcher::expect_value(BACKGROUND_BRUSH, brush)
}

/// Nodes whose stamped background alpha is exactly `alpha`
pub fn has_background_alpha(alpha: f32) -> SemanticsMatcher {
    SemanticsMatcher::expect_value(BACKGROUND_ALPHA, alpha)
}

// =============================================================================
// SLOT CHECK
// =============================================================================

/// The resolved node defines `key` with value `expected`; a missing key is an
/// error, not a mismatch
fn expect_background_property<T>(
    key: SemanticsPropertyKey<T>,
    expected: T,
    label: &'static str,
) -> SemanticsMatcher
where
    T: PartialEq + fmt::Debug + 'static,
{
    let description = format!("{} = '{expected:?}'", key.name());
    SemanticsMatcher::fallible(description, move |node| match node.config().get(key) {
        Some(actual) => {
            tracing::trace!(
                slot = key.name(),
                ?actual,
                ?expected,
                "comparing background {}",
                label
            );
            Ok(*actual == expected)
        }
        None => Err(SemprobeError::illegal_state(format!(
            "Node {} does not define {}: no background {label} was applied to it",
            node.id(),
            key.name()
        ))),
    })
}

fn check_slot<N>(node: &N, matcher: SemanticsMatcher) -> SemprobeResult<()>
where
    N: NodeAssertions + ?Sized,
{
    node.delegate()
        .check(AssertionType::AssertValueEquals, |interaction| {
            interaction.assert(&matcher)
        })
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// The node's stamped background color equals `color`.
///
/// A malformed color string fails with `IllegalArgument` before the node is
/// looked up.
pub fn assert_background_color_equals<N>(
    node: &N,
    color: impl Into<ColorInput>,
) -> SemprobeResult<()>
where
    N: NodeAssertions + ?Sized,
{
    let expected = color.into().resolve()?;
    check_slot(
        node,
        expect_background_property(BACKGROUND_COLOR, expected, "color"),
    )
}

/// The node's stamped background shape equals `shape`
pub fn assert_background_shape_equals<N>(node: &N, shape: Shape) -> SemprobeResult<()>
where
    N: NodeAssertions + ?Sized,
{
    check_slot(
        node,
        expect_background_property(BACKGROUND_SHAPE, shape, "shape"),
    )
}

/// The node's stamped background brush equals `brush`
pub fn assert_background_brush_equals<N>(node: &N, brush: &Brush) -> SemprobeResult<()>
where
    N: NodeAssertions + ?Sized,
{
    check_slot(
        node,
        expect_background_property(BACKGROUND_BRUSH, brush.clone(), "brush"),
    )
}

/// The node's stamped background alpha equals `alpha` exactly
pub fn assert_background_alpha_equals<N>(node: &N, alpha: f32) -> SemprobeResult<()>
where
    N: NodeAssertions + ?Sized,
{
    check_slot(
        node,
        expect_background_property(BACKGROUND_ALPHA, alpha, "alpha"),
    )
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Background assertions on every node with the assertion facade
pub trait BackgroundAssertions: NodeAssertions {
    /// See [`assert_background_color_equals`]
    fn assert_background_color_equals(
        &self,
        color: impl Into<ColorInput>,
    ) -> SemprobeResult<()> {
        assert_background_color_equals(self, color)
    }

    /// See [`assert_background_shape_equals`]
    fn assert_background_shape_equals(&self, shape: Shape) -> SemprobeResult<()> {
        assert_background_shape_equals(self, shape)
    }

    /// See [`assert_background_brush_equals`]
    fn assert_background_brush_equals(&self, brush: &Brush) -> SemprobeResult<()> {
        assert_background_brush_equals(self, brush)
    }

    /// See [`assert_background_alpha_equals`]
    fn assert_background_alpha_equals(&self, alpha: f32) -> SemprobeResult<()> {
        assert_background_alpha_equals(self, alpha)
    }
}

impl<N: NodeAssertions + ?Sized> BackgroundAssertions for N {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::keys::BackgroundSemantics;
    use semprobe::{Modifier, Rect, SemanticsTree, UiNode};

    fn tree(modifier: Modifier) -> SemanticsTree {
        SemanticsTree::from_root(
            &UiNode::new(modifier),
            Rect::from_size(0.0, 0.0, 500.0, 500.0),
        )
    }

    mod color_input_tests {
        use super::*;

        #[test]
        fn test_forms_resolve_to_the_same_color() {
            let typed = ColorInput::from(Color::RED).resolve().unwrap();
            let text = ColorInput::from("#FF0000").resolve().unwrap();
            let named = ColorInput::from("Red".to_string()).resolve().unwrap();
            let packed = ColorInput::from(0xFFFF_0000_u32).resolve().unwrap();
            assert_eq!(typed, text);
            assert_eq!(typed, named);
            assert_eq!(typed, packed);
        }

        #[test]
        fn test_malformed_text_is_illegal_argument() {
            let err = ColorInput::from("not-a-color").resolve().unwrap_err();
            assert!(err.is_illegal_argument());
        }
    }

    mod selector_tests {
        use super::*;

        #[test]
        fn test_missing_slot_does_not_match() {
            let tree = tree(Modifier::empty().test_tag("plain"));
            let node = tree.root().unwrap();
            assert!(!has_background_color(Color::RED).matches(node).unwrap());
            assert!(!has_background_alpha(1.0).matches(node).unwrap());
        }

        #[test]
        fn test_stamped_slot_matches() {
            let tree = tree(Modifier::empty().semantics(|config| {
                config.set_background_shape(Shape::CIRCLE);
                config.set_background_brush(Brush::solid(Color::BLUE));
            }));
            let node = tree.root().unwrap();
            assert!(has_background_shape(Shape::CIRCLE).matches(node).unwrap());
            assert!(!has_background_shape(Shape::Rectangle).matches(node).unwrap());
            assert!(has_background_brush(Brush::solid(Color::BLUE))
                .matches(node)
                .unwrap());
        }

        #[test]
        fn test_description() {
            assert_eq!(
                has_background_shape(Shape::Rectangle).description(),
                "BackgroundShape = 'Rectangle'"
            );
        }
    }

    mod slot_check_tests {
        use super::*;

        #[test]
        fn test_value_comparison() {
            let tree =
                tree(Modifier::empty().semantics(|config| config.set_background_alpha(0.5)));
            let node = tree.root().unwrap();
            assert!(expect_background_property(BACKGROUND_ALPHA, 0.5, "alpha")
                .matches(node)
                .unwrap());
            assert!(!expect_background_property(BACKGROUND_ALPHA, 0.25, "alpha")
                .matches(node)
                .unwrap());
        }

        #[test]
        fn test_missing_slot_is_illegal_state() {
            let tree = tree(Modifier::empty().test_tag("plain"));
            let err = expect_background_property(BACKGROUND_COLOR, Color::RED, "color")
                .matches(tree.root().unwrap())
                .unwrap_err();
            assert!(err.is_illegal_state());
            assert!(err.to_string().contains("does not define BackgroundColor"));
        }

        #[test]
        fn test_description_matches_selector() {
            let check = expect_background_property(BACKGROUND_SHAPE, Shape::Rectangle, "shape");
            assert_eq!(
                check.description(),
                has_background_shape(Shape::Rectangle).description()
            );
        }
    }
}
