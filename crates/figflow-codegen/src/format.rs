//! Widget call formatting and small text helpers.

use convert_case::{Case, Casing};

/// A named argument of a widget call.
#[derive(Debug, Clone)]
enum Arg {
    Value(String),
    List(Vec<String>),
}

/// A widget constructor call, rendered as indented Dart source.
///
/// ```
/// use figflow_codegen::format::WidgetCall;
///
/// let code = WidgetCall::new("SizedBox").arg("width", "8").render();
/// assert_eq!(code, "SizedBox(\n  width: 8,\n)");
/// ```
#[derive(Debug, Clone)]
pub struct WidgetCall {
    name: String,
    positional: Vec<String>,
    named: Vec<(String, Arg)>,
}

impl WidgetCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Add a positional argument. Rendered before named arguments.
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named argument. Empty values are dropped on render.
    pub fn arg(mut self, key: &str, value: impl Into<String>) -> Self {
        self.named.push((key.to_string(), Arg::Value(value.into())));
        self
    }

    /// Add a named argument only when a value is present.
    pub fn arg_opt(self, key: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.arg(key, value),
            None => self,
        }
    }

    /// Add a named list argument. Empty items are dropped, and the whole
    /// argument is omitted when nothing remains.
    pub fn list(mut self, key: &str, items: Vec<String>) -> Self {
        self.named.push((key.to_string(), Arg::List(items)));
        self
    }

    /// Render the call.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();

        for value in &self.positional {
            if !value.is_empty() {
                parts.push(format!("{},", value));
            }
        }

        for (key, arg) in &self.named {
            match arg {
                Arg::Value(value) if value.is_empty() => {}
                Arg::Value(value) => parts.push(format!("{}: {},", key, value)),
                Arg::List(items) => {
                    let items: Vec<&str> = items
                        .iter()
                        .map(String::as_str)
                        .filter(|item| !item.is_empty())
                        .collect();
                    if !items.is_empty() {
                        parts.push(format!(
                            "{}: [\n{},\n],",
                            key,
                            indent_string(&items.join(",\n"), 4)
                        ));
                    }
                }
            }
        }

        if parts.is_empty() {
            format!("{}()", self.name)
        } else {
            format!("{}(\n{}\n)", self.name, indent_string(&parts.join("\n"), 2))
        }
    }
}

/// Indent every non-blank line by `spaces`.
pub fn indent_string(text: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a number with at most two decimals and no trailing zeros.
pub fn num_to_fixed(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 || !rounded.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Derive a Dart class name from a node's display name.
pub fn class_name(name: &str) -> String {
    let words = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let class = words.to_case(Case::Pascal);

    if class.is_empty() {
        "Widget".to_string()
    } else if class.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", class)
    } else {
        class
    }
}
