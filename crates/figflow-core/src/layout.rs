//! Auto-layout properties of frame-like nodes.

use serde::{Deserialize, Serialize};

/// Direction of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// Children are freely positioned
    #[default]
    None,
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// Distribution of children along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Alignment of children on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    Baseline,
}

/// How a node sizes itself along one axis inside an auto-layout parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizing {
    #[default]
    Fixed,
    Hug,
    Fill,
}

/// Whether a child participates in its parent's auto-layout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioning {
    #[default]
    Auto,
    Absolute,
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Create uniform padding.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric padding.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// An auto-layout configuration, either set explicitly on a frame or
/// inferred from the placement of its children.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    /// Gap between consecutive children
    pub item_spacing: f64,
    pub primary_axis_align_items: PrimaryAxisAlign,
    pub counter_axis_align_items: CounterAxisAlign,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
}

impl AutoLayout {
    /// Create a horizontal layout with the given gap.
    pub fn horizontal(item_spacing: f64) -> Self {
        Self {
            layout_mode: LayoutMode::Horizontal,
            item_spacing,
            ..Default::default()
        }
    }

    /// Create a vertical layout with the given gap.
    pub fn vertical(item_spacing: f64) -> Self {
        Self {
            layout_mode: LayoutMode::Vertical,
            item_spacing,
            ..Default::default()
        }
    }

    /// Set main and cross axis alignment.
    pub fn with_alignment(mut self, primary: PrimaryAxisAlign, counter: CounterAxisAlign) -> Self {
        self.primary_axis_align_items = primary;
        self.counter_axis_align_items = counter;
        self
    }

    /// Set padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding_top = padding.top;
        self.padding_right = padding.right;
        self.padding_bottom = padding.bottom;
        self.padding_left = padding.left;
        self
    }

    /// Whether children flow in a direction (anything but [`LayoutMode::None`]).
    pub fn is_directional(&self) -> bool {
        self.layout_mode != LayoutMode::None
    }

    pub fn padding(&self) -> Padding {
        Padding {
            top: self.padding_top,
            right: self.padding_right,
            bottom: self.padding_bottom,
            left: self.padding_left,
        }
    }
}
