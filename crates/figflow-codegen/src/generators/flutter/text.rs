//! Text widgets.

use figflow_core::{
    LineHeight, SceneNode, TextAlign, TextAutoResize, TextCase, TextDecoration, TextProps,
};

use super::builder::FlutterBuilder;
use super::style;
use crate::format::{num_to_fixed, WidgetCall};

impl FlutterBuilder {
    /// Build the bare `Text` widget with its `TextStyle`.
    pub fn create_text(self, node: &SceneNode) -> Self {
        let Some(props) = node.text.as_ref() else {
            return Self::new(WidgetCall::new("Text").positional("''").render());
        };

        let content = escape(&apply_case(&props.characters, props.text_case));
        let align = match props.align {
            TextAlign::Left => None,
            TextAlign::Center => Some("TextAlign.center"),
            TextAlign::Right => Some("TextAlign.right"),
            TextAlign::Justified => Some("TextAlign.justify"),
        };

        Self::new(
            WidgetCall::new("Text")
                .positional(format!("'{}'", content))
                .arg_opt("textAlign", align.map(str::to_string))
                .arg("style", text_style(node, props))
                .render(),
        )
    }

    /// Fix the text box size according to its auto-resize mode.
    pub fn text_auto_size(mut self, node: &SceneNode) -> Self {
        let Some(props) = node.text.as_ref() else {
            return self;
        };

        let (width, height) = match props.auto_resize {
            TextAutoResize::None | TextAutoResize::Truncate => {
                (Some(num_to_fixed(node.width)), Some(num_to_fixed(node.height)))
            }
            TextAutoResize::Height => (Some(num_to_fixed(node.width)), None),
            TextAutoResize::WidthAndHeight => return self,
        };

        self = Self::new(
            WidgetCall::new("SizedBox")
                .arg_opt("width", width)
                .arg_opt("height", height)
                .arg("child", self.into_child())
                .render(),
        );
        self
    }
}

fn text_style(node: &SceneNode, props: &TextProps) -> String {
    let height = match props.line_height {
        LineHeight::Auto => None,
        LineHeight::Pixels { value } if props.font_size > 0.0 => {
            Some(num_to_fixed(value / props.font_size))
        }
        LineHeight::Pixels { .. } => None,
        LineHeight::Percent { value } => Some(num_to_fixed(value / 100.0)),
    };
    let letter_spacing = props.letter_spacing.to_px(props.font_size);
    let decoration = match props.decoration {
        TextDecoration::None => None,
        TextDecoration::Underline => Some("TextDecoration.underline"),
        TextDecoration::Strikethrough => Some("TextDecoration.lineThrough"),
    };

    WidgetCall::new("TextStyle")
        .arg_opt("color", style::solid_color(&node.fills))
        .arg("fontSize", num_to_fixed(props.font_size))
        .arg("fontFamily", format!("'{}'", props.font_name.family))
        .arg("fontWeight", format!("FontWeight.w{}", font_weight(props.font_weight)))
        .arg_opt("fontStyle", props.is_italic().then(|| "FontStyle.italic".to_string()))
        .arg_opt("height", height)
        .arg_opt(
            "letterSpacing",
            (letter_spacing != 0.0).then(|| num_to_fixed(letter_spacing)),
        )
        .arg_opt("decoration", decoration.map(str::to_string))
        .render()
}

/// Snap to the nearest weight Flutter defines (w100..w900).
fn font_weight(weight: u16) -> u16 {
    let snapped = ((weight as f64) / 100.0).round() as u16 * 100;
    snapped.clamp(100, 900)
}

fn apply_case(text: &str, case: TextCase) -> String {
    match case {
        TextCase::Original => text.to_string(),
        TextCase::Upper => text.to_uppercase(),
        TextCase::Lower => text.to_lowercase(),
        TextCase::Title => text
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" "),
    }
}

/// Escape characters for a single-quoted Dart string literal.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "\\$")
        .replace('\n', "\\n")
}
