//! Generation settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the generated widget tree is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationMode {
    /// Bare widget expression
    #[default]
    Snippet,
    /// A single `StatelessWidget` class
    Stateless,
    /// A runnable application with a themed host shell
    FullApp,
}

/// Settings for one generation pass. Read-only while the pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(alias = "flutterGenerationMode")]
    pub generation_mode: GenerationMode,
    /// Use inferred auto-layout for frames without an explicit one.
    pub optimize_layout: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation_mode: GenerationMode::Snippet,
            optimize_layout: true,
        }
    }
}

impl Settings {
    pub fn new(generation_mode: GenerationMode, optimize_layout: bool) -> Self {
        Self {
            generation_mode,
            optimize_layout,
        }
    }

    /// Parse settings from the plugin's JSON settings object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
