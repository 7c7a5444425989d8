//! Graphics value types used by modifiers and semantics.
//!
//! Colors are stored as packed ARGB so every construction path (channels,
//! strings, raw integers) lands on the same representation and compares
//! with plain `==`.

use crate::result::{SemprobeError, SemprobeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// COLOR
// =============================================================================

/// An sRGB color packed as `0xAARRGGBB`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque red
    pub const RED: Self = Self(0xFFFF_0000);
    /// Opaque green
    pub const GREEN: Self = Self(0xFF00_FF00);
    /// Opaque blue
    pub const BLUE: Self = Self(0xFF00_00FF);
    /// Opaque yellow
    pub const YELLOW: Self = Self(0xFFFF_FF00);
    /// Opaque cyan
    pub const CYAN: Self = Self(0xFF00_FFFF);
    /// Opaque magenta
    pub const MAGENTA: Self = Self(0xFFFF_00FF);
    /// Opaque gray
    pub const GRAY: Self = Self(0xFF88_8888);
    /// Opaque light gray
    pub const LIGHT_GRAY: Self = Self(0xFFCC_CCCC);
    /// Opaque dark gray
    pub const DARK_GRAY: Self = Self(0xFF44_4444);

    /// Create from a packed `0xAARRGGBB` value
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create from 8-bit channels
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(
            ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32,
        )
    }

    /// Create an opaque color from 8-bit channels
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0xFF)
    }

    /// Create from float channels in `0.0..=1.0`, quantized to 8 bits
    #[must_use]
    pub fn from_rgba_f32(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(q(red), q(green), q(blue), q(alpha))
    }

    /// Parse `#RRGGBB`, `#AARRGGBB` or a color name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SemprobeError::IllegalArgument`] for anything else.
    pub fn parse(input: &str) -> SemprobeResult<Self> {
        if let Some(hex) = input.strip_prefix('#') {
            let valid = hex.chars().all(|c| c.is_ascii_hexdigit());
            let value = if valid {
                u32::from_str_radix(hex, 16).ok()
            } else {
                None
            };
            return match (hex.len(), value) {
                (6, Some(rgb)) => Ok(Self(0xFF00_0000 | rgb)),
                (8, Some(argb)) => Ok(Self(argb)),
                _ => Err(SemprobeError::illegal_argument(format!(
                    "Unknown color '{input}'"
                ))),
            };
        }
        named_color(&input.to_ascii_lowercase())
            .ok_or_else(|| SemprobeError::illegal_argument(format!("Unknown color '{input}'")))
    }

    /// Packed `0xAARRGGBB` value
    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Alpha channel
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with a different alpha channel
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }
}

fn named_color(name: &str) -> Option<Color> {
    let argb = match name {
        "black" => 0xFF00_0000,
        "darkgray" | "darkgrey" => 0xFF44_4444,
        "gray" | "grey" => 0xFF88_8888,
        "lightgray" | "lightgrey" => 0xFFCC_CCCC,
        "white" => 0xFFFF_FFFF,
        "red" => 0xFFFF_0000,
        "green" | "lime" => 0xFF00_FF00,
        "blue" => 0xFF00_00FF,
        "yellow" => 0xFFFF_FF00,
        "cyan" | "aqua" => 0xFF00_FFFF,
        "magenta" | "fuchsia" => 0xFFFF_00FF,
        "maroon" => 0xFF80_0000,
        "navy" => 0xFF00_0080,
        "olive" => 0xFF80_8000,
        "purple" => 0xFF80_0080,
        "silver" => 0xFFC0_C0C0,
        "teal" => 0xFF00_8080,
        _ => return None,
    };
    Some(Color(argb))
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// A 2D offset in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Offset {
    /// Origin
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// Stands for "the far edge of whatever is being drawn"
    pub const INFINITE: Self = Self {
        x: f32::INFINITY,
        y: f32::INFINITY,
    };

    /// Create a new offset
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl Rect {
    /// Create from edges
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create from origin and size
    #[must_use]
    pub fn from_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Width, never negative
    #[must_use]
    pub fn width(&self) -> f32 {
        (self.right - self.left).max(0.0)
    }

    /// Height, never negative
    #[must_use]
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether the rectangle covers no area
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Move by an offset
    #[must_use]
    pub fn translate(&self, by: Offset) -> Self {
        Self::new(
            self.left + by.x,
            self.top + by.y,
            self.right + by.x,
            self.bottom + by.y,
        )
    }

    /// Overlap of two rectangles (may be empty)
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Top-left corner
    #[must_use]
    pub const fn origin(&self) -> Offset {
        Offset::new(self.left, self.top)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})px",
            self.left, self.top, self.right, self.bottom
        )
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// Size of a single corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CornerSize {
    /// Absolute size in pixels
    Px(f32),
    /// Percentage of the shorter side (0..=100)
    Percent(u8),
}

/// Corner sizes in start/end order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    /// Top-start corner
    pub top_start: CornerSize,
    /// Top-end corner
    pub top_end: CornerSize,
    /// Bottom-end corner
    pub bottom_end: CornerSize,
    /// Bottom-start corner
    pub bottom_start: CornerSize,
}

impl Corners {
    /// Same size on every corner
    #[must_use]
    pub const fn all(size: CornerSize) -> Self {
        Self {
            top_start: size,
            top_end: size,
            bottom_end: size,
            bottom_start: size,
        }
    }
}

/// Outline used to clip a background
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Shape {
    /// Plain rectangle
    #[default]
    Rectangle,
    /// Rectangle with rounded corners
    RoundedCorner(Corners),
    /// Rectangle with cut corners
    CutCorner(Corners),
}

impl Shape {
    /// Circle (rounded corners at 50%)
    pub const CIRCLE: Self = Self::RoundedCorner(Corners::all(CornerSize::Percent(50)));

    /// Rounded corners of equal pixel radius
    #[must_use]
    pub const fn rounded(radius: f32) -> Self {
        Self::RoundedCorner(Corners::all(CornerSize::Px(radius)))
    }

    /// Rounded corners of equal percentage
    #[must_use]
    pub const fn rounded_percent(percent: u8) -> Self {
        Self::RoundedCorner(Corners::all(CornerSize::Percent(percent)))
    }

    /// Cut corners of equal pixel size
    #[must_use]
    pub const fn cut(size: f32) -> Self {
        Self::CutCorner(Corners::all(CornerSize::Px(size)))
    }
}

// =============================================================================
// BRUSH
// =============================================================================

/// How a gradient fills the area outside its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileMode {
    /// Extend the edge colors
    #[default]
    Clamp,
    /// Repeat the gradient
    Repeated,
    /// Repeat, mirroring every other tile
    Mirror,
    /// Leave the outside transparent
    Decal,
}

/// Paint source for a background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    /// Single solid color
    Solid(Color),
    /// Linear gradient between two points
    LinearGradient {
        /// Gradient colors
        colors: Vec<Color>,
        /// Optional color stops in `0.0..=1.0`, one per color
        stops: Option<Vec<f32>>,
        /// Start point
        start: Offset,
        /// End point
        end: Offset,
        /// Tile mode
        tile_mode: TileMode,
    },
    /// Radial gradient around a center
    RadialGradient {
        /// Gradient colors
        colors: Vec<Color>,
        /// Center, [`Offset::INFINITE`] for the draw area center
        center: Offset,
        /// Radius, infinite for half the shorter side
        radius: f32,
        /// Tile mode
        tile_mode: TileMode,
    },
    /// Sweep gradient around a center
    SweepGradient {
        /// Gradient colors
        colors: Vec<Color>,
        /// Center, [`Offset::INFINITE`] for the draw area center
        center: Offset,
    },
}

impl Brush {
    /// Solid color brush
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Linear gradient between two points
    #[must_use]
    pub fn linear_gradient(colors: Vec<Color>, start: Offset, end: Offset) -> Self {
        Self::LinearGradient {
            colors,
            stops: None,
            start,
            end,
            tile_mode: TileMode::Clamp,
        }
    }

    /// Left-to-right gradient across the whole draw area
    #[must_use]
    pub fn horizontal_gradient(colors: Vec<Color>) -> Self {
        Self::linear_gradient(colors, Offset::ZERO, Offset::new(f32::INFINITY, 0.0))
    }

    /// Top-to-bottom gradient across the whole draw area
    #[must_use]
    pub fn vertical_gradient(colors: Vec<Color>) -> Self {
        Self::linear_gradient(colors, Offset::ZERO, Offset::new(0.0, f32::INFINITY))
    }

    /// Radial gradient centered in the draw area
    #[must_use]
    pub fn radial_gradient(colors: Vec<Color>) -> Self {
        Self::RadialGradient {
            colors,
            center: Offset::INFINITE,
            radius: f32::INFINITY,
            tile_mode: TileMode::Clamp,
        }
    }

    /// Sweep gradient centered in the draw area
    #[must_use]
    pub fn sweep_gradient(colors: Vec<Color>) -> Self {
        Self::SweepGradient {
            colors,
            center: Offset::INFINITE,
        }
    }

    /// Attach color stops to a linear gradient; other brushes are unchanged
    #[must_use]
    pub fn with_stops(self, new_stops: Vec<f32>) -> Self {
        match self {
            Self::LinearGradient {
                colors,
                start,
                end,
                tile_mode,
                ..
            } => Self::LinearGradient {
                colors,
                stops: Some(new_stops),
                start,
                end,
                tile_mode,
            },
            other => other,
        }
    }

    /// Set how a linear or radial gradient fills outside its bounds; other
    /// brushes are unchanged
    #[must_use]
    pub fn with_tile_mode(self, mode: TileMode) -> Self {
        match self {
            Self::LinearGradient {
                colors,
                stops,
                start,
                end,
                ..
            } => Self::LinearGradient {
                colors,
                stops,
                start,
                end,
                tile_mode: mode,
            },
            Self::RadialGradient {
                colors,
                center,
                radius,
                ..
            } => Self::RadialGradient {
                colors,
                center,
                radius,
                tile_mode: mode,
            },
            other => other,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod color_tests {
        use super::*;

        #[test]
        fn test_channels() {
            let color = Color::new(0x12, 0x34, 0x56, 0x78);
            assert_eq!(color.argb(), 0x7812_3456);
            assert_eq!(color.red(), 0x12);
            assert_eq!(color.green(), 0x34);
            assert_eq!(color.blue(), 0x56);
            assert_eq!(color.alpha(), 0x78);
        }

        #[test]
        fn test_parse_rgb_is_opaque() {
            assert_eq!(Color::parse("#FF0000").unwrap(), Color::RED);
            assert_eq!(Color::parse("#00ff00").unwrap(), Color::GREEN);
        }

        #[test]
        fn test_parse_argb() {
            assert_eq!(
                Color::parse("#80112233").unwrap(),
                Color::new(0x11, 0x22, 0x33, 0x80)
            );
        }

        #[test]
        fn test_parse_names_case_insensitive() {
            assert_eq!(Color::parse("Red").unwrap(), Color::RED);
            assert_eq!(Color::parse("LIGHTGREY").unwrap(), Color::LIGHT_GRAY);
            assert_eq!(Color::parse("teal").unwrap(), Color::from_argb(0xFF00_8080));
        }

        #[test]
        fn test_parse_rejects_garbage() {
            for input in ["not-a-color", "", "#", "#12345", "#1234567", "#GG0000", "#+12345"] {
                let err = Color::parse(input).unwrap_err();
                assert!(err.is_illegal_argument(), "{input}");
            }
        }

        #[test]
        fn test_from_f32_quantizes() {
            assert_eq!(Color::from_rgba_f32(1.0, 0.0, 0.0, 1.0), Color::RED);
            assert_eq!(Color::from_rgba_f32(2.0, -1.0, 0.0, 1.0), Color::RED);
        }

        #[test]
        fn test_with_alpha() {
            assert_eq!(Color::RED.with_alpha(0).argb(), 0x00FF_0000);
        }

        #[test]
        fn test_debug_format() {
            assert_eq!(format!("{:?}", Color::BLUE), "Color(#FF0000FF)");
        }
    }

    mod rect_tests {
        use super::*;

        #[test]
        fn test_intersect() {
            let a = Rect::from_size(0.0, 0.0, 100.0, 100.0);
            let b = Rect::from_size(50.0, 50.0, 100.0, 100.0);
            assert_eq!(a.intersect(&b), Rect::new(50.0, 50.0, 100.0, 100.0));
        }

        #[test]
        fn test_disjoint_intersection_is_empty() {
            let a = Rect::from_size(0.0, 0.0, 10.0, 10.0);
            let b = Rect::from_size(20.0, 20.0, 10.0, 10.0);
            assert!(a.intersect(&b).is_empty());
        }

        #[test]
        fn test_translate() {
            let rect = Rect::from_size(1.0, 2.0, 3.0, 4.0).translate(Offset::new(10.0, 10.0));
            assert_eq!(rect, Rect::new(11.0, 12.0, 14.0, 16.0));
        }
    }

    mod shape_brush_tests {
        use super::*;

        #[test]
        fn test_shape_value_equality() {
            assert_eq!(Shape::rounded(8.0), Shape::rounded(8.0));
            assert_ne!(Shape::rounded(8.0), Shape::cut(8.0));
            assert_eq!(Shape::CIRCLE, Shape::rounded_percent(50));
            assert_eq!(Shape::default(), Shape::Rectangle);
        }

        #[test]
        fn test_brush_value_equality() {
            let a = Brush::horizontal_gradient(vec![Color::RED, Color::BLUE]);
            let b = Brush::horizontal_gradient(vec![Color::RED, Color::BLUE]);
            let c = Brush::vertical_gradient(vec![Color::RED, Color::BLUE]);
            assert_eq!(a, b);
            assert_ne!(a, c);
        }

        #[test]
        fn test_with_stops() {
            let brush = Brush::horizontal_gradient(vec![Color::RED, Color::BLUE])
                .with_stops(vec![0.0, 1.0]);
            assert!(matches!(brush, Brush::LinearGradient { stops: Some(_), .. }));
            assert_eq!(
                Brush::solid(Color::RED).with_stops(vec![0.5]),
                Brush::Solid(Color::RED)
            );
        }

        #[test]
        fn test_tile_mode_is_part_of_equality() {
            let colors = vec![Color::RED, Color::BLUE];
            let clamped = Brush::radial_gradient(colors.clone());
            for mode in [TileMode::Repeated, TileMode::Mirror, TileMode::Decal] {
                let tiled = Brush::radial_gradient(colors.clone()).with_tile_mode(mode);
                assert_ne!(clamped, tiled);
                assert_eq!(tiled.clone().with_tile_mode(TileMode::Clamp), clamped);
            }
            let linear = Brush::horizontal_gradient(colors)
                .with_stops(vec![0.0, 1.0])
                .with_tile_mode(TileMode::Mirror);
            assert!(matches!(
                linear,
                Brush::LinearGradient {
                    stops: Some(_),
                    tile_mode: TileMode::Mirror,
                    ..
                }
            ));
            assert_eq!(
                Brush::sweep_gradient(vec![Color::RED]).with_tile_mode(TileMode::Decal),
                Brush::sweep_gradient(vec![Color::RED])
            );
        }
    }
}
