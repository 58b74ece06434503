//! Visual value types attached to scene nodes: colors, paints, effects.

use serde::{Deserialize, Serialize};

fn one() -> f32 {
    1.0
}

fn yes() -> bool {
    true
}

/// A color value with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "one")]
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to 8-bit ARGB components, scaling alpha by an extra opacity.
    pub fn to_argb8(&self, opacity: f32) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.a * opacity),
            channel(self.r),
            channel(self.g),
            channel(self.b),
        ]
    }
}

/// A 2D point, used for offsets and gradient handles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A color stop inside a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Color,
        #[serde(default = "one")]
        opacity: f32,
        #[serde(default = "yes")]
        visible: bool,
    },
    GradientLinear {
        #[serde(rename = "gradientStops")]
        stops: Vec<ColorStop>,
        /// Start and end handles in node-relative unit coordinates.
        #[serde(default, rename = "gradientHandlePositions")]
        handles: Vec<Point>,
        #[serde(default = "one")]
        opacity: f32,
        #[serde(default = "yes")]
        visible: bool,
    },
    Image {
        #[serde(default, rename = "imageHash")]
        image_hash: Option<String>,
        #[serde(default = "one")]
        opacity: f32,
        #[serde(default = "yes")]
        visible: bool,
    },
    /// Any paint type the generator has no mapping for (radial gradients, video, ...).
    #[serde(other)]
    Unsupported,
}

impl Paint {
    /// Opaque solid paint.
    pub fn solid(color: Color) -> Self {
        Paint::Solid {
            color,
            opacity: 1.0,
            visible: true,
        }
    }

    /// Visible image paint without a resolved image.
    pub fn image() -> Self {
        Paint::Image {
            image_hash: None,
            opacity: 1.0,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid { visible, .. }
            | Paint::GradientLinear { visible, .. }
            | Paint::Image { visible, .. } => *visible,
            Paint::Unsupported => false,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Paint::Image { .. })
    }
}

/// Return the topmost visible paint. Paint lists are ordered bottom to top.
pub fn top_paint(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().rev().find(|p| p.is_visible())
}

/// Where a stroke sits relative to the node outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Center,
    Outside,
}

/// Per-corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadius {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadius {
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_left == self.bottom_right
            && self.top_left == self.bottom_left
    }

    pub fn is_zero(&self) -> bool {
        self.is_uniform() && self.top_left == 0.0
    }
}

/// A visual effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    /// Blurs and anything else without a widget mapping.
    #[serde(other)]
    Other,
}

/// Shadow parameters shared by drop and inner shadows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    #[serde(default)]
    pub offset: Point,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub spread: f64,
    #[serde(default = "yes")]
    pub visible: bool,
}
