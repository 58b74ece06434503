//! Textual touch-ups applied to the assembled snippet.
//!
//! The screen-width rewrite of a top-level `Container` keeps the indentation
//! of the `width:` line it replaces instead of emitting the bare property, so
//! the result lines up with the rest of the widget.

const SCREEN_WIDTH: &str = "width: MediaQuery.of(context).size.width,";

/// Clean up a generated snippet.
///
/// Lines that are only a comma are blanked, legacy property names are
/// renamed, a top-level `Container` stretches to the screen width, and the
/// result always ends with a comma.
pub fn clean(code: &str) -> String {
    let mut lines: Vec<String> = code.trim().split('\n').map(clean_line).collect();

    if lines.len() >= 2 && lines[0].contains("Container") && lines[1].contains("width:") {
        let indent_len = lines[1].len() - lines[1].trim_start().len();
        let indent = lines[1][..indent_len].to_string();
        lines[1] = format!("{}{}", indent, SCREEN_WIDTH);
    }

    let mut result = lines.join("\n").trim().to_string();
    if !result.ends_with(',') {
        result.push(',');
    }
    result
}

/// Per-line substitutions. Applying them twice changes nothing.
pub fn clean_line(line: &str) -> String {
    if line.trim() == "," {
        return String::new();
    }
    line.replace("textDecoration:", "decoration:")
        .replace("Border.only(", "Border(")
}
