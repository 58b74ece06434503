//! Typography properties of text nodes.

use serde::{Deserialize, Serialize};

/// Line height of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels { value: f64 },
    Percent { value: f64 },
}

/// Letter spacing of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacing {
    Pixels { value: f64 },
    /// Percentage of the font size
    Percent { value: f64 },
}

impl Default for LetterSpacing {
    fn default() -> Self {
        LetterSpacing::Pixels { value: 0.0 }
    }
}

impl LetterSpacing {
    /// Resolve to logical pixels for the given font size.
    pub fn to_px(&self, font_size: f64) -> f64 {
        match self {
            LetterSpacing::Pixels { value } => *value,
            LetterSpacing::Percent { value } => font_size * value / 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
}

/// How a text box grows with its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    /// Fixed width and height
    #[default]
    None,
    /// Fixed width, height follows content
    Height,
    /// Both axes follow content
    WidthAndHeight,
    /// Fixed box, overflowing text is truncated
    Truncate,
}

/// Font family and style name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl Default for FontName {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            style: "Regular".to_string(),
        }
    }
}

/// Properties carried by text nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub characters: String,
    pub font_name: FontName,
    pub font_size: f64,
    pub font_weight: u16,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
    pub decoration: TextDecoration,
    pub align: TextAlign,
    pub text_case: TextCase,
    pub auto_resize: TextAutoResize,
}

impl TextProps {
    /// Create text properties with default typography.
    pub fn new(characters: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            font_name: FontName::default(),
            font_size: 14.0,
            font_weight: 400,
            line_height: LineHeight::Auto,
            letter_spacing: LetterSpacing::default(),
            decoration: TextDecoration::None,
            align: TextAlign::Left,
            text_case: TextCase::Original,
            auto_resize: TextAutoResize::WidthAndHeight,
        }
    }

    pub fn is_italic(&self) -> bool {
        self.font_name.style.to_lowercase().contains("italic")
    }
}
