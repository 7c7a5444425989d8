//! Background semantics slots.
//!
//! Four typed keys record how a node's background was painted. They are
//! single-node properties: a merging ancestor never picks them up.

use semprobe::{Brush, Color, MergePolicy, SemanticsConfiguration, SemanticsPropertyKey, Shape};
use std::fmt;

/// Background color set by the color helper
pub const BACKGROUND_COLOR: SemanticsPropertyKey<Color> =
    SemanticsPropertyKey::with_policy("BackgroundColor", MergePolicy::NotMerged);

/// Background outline set by either helper
pub const BACKGROUND_SHAPE: SemanticsPropertyKey<Shape> =
    SemanticsPropertyKey::with_policy("BackgroundShape", MergePolicy::NotMerged);

/// Background brush set by the brush helper
pub const BACKGROUND_BRUSH: SemanticsPropertyKey<Brush> =
    SemanticsPropertyKey::with_policy("BackgroundBrush", MergePolicy::NotMerged);

/// Background opacity set by the brush helper
pub const BACKGROUND_ALPHA: SemanticsPropertyKey<f32> =
    SemanticsPropertyKey::with_policy("BackgroundAlpha", MergePolicy::NotMerged);

// =============================================================================
// TYPED ACCESSORS
// =============================================================================

/// Typed getters and setters for the background slots
pub trait BackgroundSemantics {
    /// Stamped background color
    fn background_color(&self) -> Option<Color>;
    /// Stamp the background color
    fn set_background_color(&mut self, color: Color);
    /// Stamped background shape
    fn background_shape(&self) -> Option<Shape>;
    /// Stamp the background shape
    fn set_background_shape(&mut self, shape: Shape);
    /// Stamped background brush
    fn background_brush(&self) -> Option<&Brush>;
    /// Stamp the background brush
    fn set_background_brush(&mut self, brush: Brush);
    /// Stamped background alpha, unclamped
    fn background_alpha(&self) -> Option<f32>;
    /// Stamp the background alpha as given
    fn set_background_alpha(&mut self, alpha: f32);
}

impl BackgroundSemantics for SemanticsConfiguration {
    fn background_color(&self) -> Option<Color> {
        self.get(BACKGROUND_COLOR).copied()
    }

    fn set_background_color(&mut self, color: Color) {
        self.set(BACKGROUND_COLOR, color);
    }

    fn background_shape(&self) -> Option<Shape> {
        self.get(BACKGROUND_SHAPE).copied()
    }

    fn set_background_shape(&mut self, shape: Shape) {
        self.set(BACKGROUND_SHAPE, shape);
    }

    fn background_brush(&self) -> Option<&Brush> {
        self.get(BACKGROUND_BRUSH)
    }

    fn set_background_brush(&mut self, brush: Brush) {
        self.set(BACKGROUND_BRUSH, brush);
    }

    fn background_alpha(&self) -> Option<f32> {
        self.get(BACKGROUND_ALPHA).copied()
    }

    fn set_background_alpha(&mut self, alpha: f32) {
        self.set(BACKGROUND_ALPHA, alpha);
    }
}

// =============================================================================
// SLOT TABLE
// =============================================================================

/// Value of any background slot
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundValue {
    /// `BackgroundColor`
    Color(Color),
    /// `BackgroundShape`
    Shape(Shape),
    /// `BackgroundBrush`
    Brush(Brush),
    /// `BackgroundAlpha`
    Alpha(f32),
}

impl fmt::Display for BackgroundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color:?}"),
            Self::Shape(shape) => write!(f, "{shape:?}"),
            Self::Brush(brush) => write!(f, "{brush:?}"),
            Self::Alpha(alpha) => write!(f, "{alpha}"),
        }
    }
}

/// Name-addressed accessor pair for one slot
#[derive(Debug, Clone, Copy)]
pub struct BackgroundSlot {
    /// Stable key name
    pub name: &'static str,
    /// Read the slot
    pub get: fn(&SemanticsConfiguration) -> Option<BackgroundValue>,
    /// Write the slot; `false` when the value belongs to another slot
    pub set: fn(&mut SemanticsConfiguration, BackgroundValue) -> bool,
}

/// All background slots
pub const BACKGROUND_SLOTS: [BackgroundSlot; 4] = [
    BackgroundSlot {
        name: BACKGROUND_COLOR.name(),
        get: |config| config.background_color().map(BackgroundValue::Color),
        set: |config, value| match value {
            BackgroundValue::Color(color) => {
                config.set_background_color(color);
                true
            }
            _ => false,
        },
    },
    BackgroundSlot {
        name: BACKGROUND_SHAPE.name(),
        get: |config| config.background_shape().map(BackgroundValue::Shape),
        set: |config, value| match value {
            BackgroundValue::Shape(shape) => {
                config.set_background_shape(shape);
                true
            }
            _ => false,
        },
    },
    BackgroundSlot {
        name: BACKGROUND_BRUSH.name(),
        get: |config| config.background_brush().cloned().map(BackgroundValue::Brush),
        set: |config, value| match value {
            BackgroundValue::Brush(brush) => {
                config.set_background_brush(brush);
                true
            }
            _ => false,
        },
    },
    BackgroundSlot {
        name: BACKGROUND_ALPHA.name(),
        get: |config| config.background_alpha().map(BackgroundValue::Alpha),
        set: |config, value| match value {
            BackgroundValue::Alpha(alpha) => {
                config.set_background_alpha(alpha);
                true
            }
            _ => false,
        },
    },
];

/// Look up a slot by its key name
#[must_use]
pub fn slot(name: &str) -> Option<&'static BackgroundSlot> {
    BACKGROUND_SLOTS.iter().find(|slot| slot.name == name)
}

/// Every background slot present in `config`, in table order
#[must_use]
pub fn stamped_slots(config: &SemanticsConfiguration) -> Vec<(&'static str, BackgroundValue)> {
    BACKGROUND_SLOTS
        .iter()
        .filter_map(|slot| (slot.get)(config).map(|value| (slot.name, value)))
        .collect()
}
