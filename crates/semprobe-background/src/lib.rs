//! Background semantics for semprobe.
//!
//! UI code paints backgrounds with [`BackgroundModifierExt`], which draws
//! through the host's native background element and stamps the node with
//! typed semantics slots in the same call. Tests read the slots back with
//! [`BackgroundAssertions`]:
//!
//! ```ignore
//! use semprobe::prelude::*;
//! use semprobe_background::prelude::*;
//!
//! host.set_content(|| UiNode::new(
//!     Modifier::empty().test_tag("card").semantic_background(Color::RED, Shape::CIRCLE),
//! ));
//! let card = Screen::for_host(&host).node(|n| n.has_test_tag("card"))?;
//! card.assert_background_color_equals("#FF0000")?;
//! card.assert_background_shape_equals(Shape::CIRCLE)?;
//! ```

#![warn(missing_docs)]

mod assertions;
mod keys;
mod modifier;

pub use assertions::{
    assert_background_alpha_equals, assert_background_brush_equals,
    assert_background_color_equals, assert_background_shape_equals, has_background_alpha,
    has_background_brush, has_background_color, has_background_shape, BackgroundAssertions,
    ColorInput,
};
pub use keys::{
    slot, stamped_slots, BackgroundSemantics, BackgroundSlot, BackgroundValue, BACKGROUND_ALPHA,
    BACKGROUND_BRUSH, BACKGROUND_COLOR, BACKGROUND_SHAPE, BACKGROUND_SLOTS,
};
pub use modifier::{BackgroundModifierExt, DEFAULT_BACKGROUND_ALPHA};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::assertions::{BackgroundAssertions, ColorInput};
    pub use super::keys::BackgroundSemantics;
    pub use super::modifier::BackgroundModifierExt;
}
