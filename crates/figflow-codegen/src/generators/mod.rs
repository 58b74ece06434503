//! Code generators for UI frameworks.

#[cfg(feature = "flutter")]
mod flutter;

mod templates;

#[cfg(feature = "flutter")]
pub use flutter::{cleanup, FlutterGenerator};

pub use templates::TemplateEngine;

use figflow_core::{NodeId, SceneGraph};

use crate::error::Result;

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Generate code for the selected top-level nodes, in order.
    fn generate(&self, graph: &SceneGraph, selection: &[NodeId]) -> Result<Generation>;
}

/// Output of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    /// Generated source, wrapped according to the generation mode.
    pub code: String,
    /// Raw text widgets collected from text nodes.
    pub text_styles: Vec<String>,
    /// Non-fatal conversion warnings, de-duplicated.
    pub warnings: Vec<String>,
}

impl Generation {
    /// Render the collected text styles as a single report.
    pub fn text_styles_report(&self) -> String {
        if self.text_styles.is_empty() {
            return "// No text styles in this selection".to_string();
        }
        self.text_styles.join("\n// ---\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_styles_report() {
        let generation = Generation::default();
        assert_eq!(
            generation.text_styles_report(),
            "// No text styles in this selection"
        );
    }

    #[test]
    fn test_text_styles_report_joins_entries() {
        let generation = Generation {
            text_styles: vec!["Text('a')".to_string(), "Text('b')".to_string()],
            ..Default::default()
        };
        assert_eq!(
            generation.text_styles_report(),
            "Text('a')\n// ---\nText('b')"
        );
    }
}
