//! WebAssembly bindings for the figflow Flutter code generator.
//!
//! This crate exposes generation to the JavaScript side of a design-tool
//! plugin, which serializes the current selection and hands it over.
//!
//! ## Example
//!
//! ```js
//! import { FlutterCodegen } from 'figflow';
//!
//! const codegen = new FlutterCodegen();
//! codegen.setSettings({ flutterGenerationMode: 'stateless', optimizeLayout: true });
//!
//! const code = codegen.generate([
//!   { type: 'FRAME', name: 'Card', width: 320, height: 200, children: [] },
//! ]);
//! const styles = codegen.textStyles();
//! const warnings = codegen.warnings();
//! ```

use figflow_codegen::{CodeGenerator, FlutterGenerator, Generation, Settings};
use figflow_core::{NodeDescription, SceneGraph};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Output of a pass in the shape the plugin UI consumes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationJs<'a> {
    code: &'a str,
    text_styles: String,
    warnings: &'a [String],
}

/// The Flutter generator interface for JavaScript.
///
/// Keeps the output of the last pass so the plugin can query text styles
/// and warnings after generating.
#[wasm_bindgen]
pub struct FlutterCodegen {
    settings: Settings,
    last: Option<Generation>,
}

#[wasm_bindgen]
impl FlutterCodegen {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            last: None,
        }
    }

    /// Get the version of the generator.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Replace the settings used by subsequent passes.
    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&mut self, settings: JsValue) -> Result<(), JsError> {
        self.settings = serde_wasm_bindgen::from_value(settings)
            .map_err(|e| JsError::new(&format!("Invalid settings: {}", e)))?;
        Ok(())
    }

    /// Generate code for an array of node descriptions.
    #[wasm_bindgen]
    pub fn generate(&mut self, nodes: JsValue) -> Result<String, JsError> {
        let descriptions: Vec<NodeDescription> = serde_wasm_bindgen::from_value(nodes)
            .map_err(|e| JsError::new(&format!("Invalid nodes: {}", e)))?;
        let graph = SceneGraph::from_descriptions(&descriptions)
            .map_err(|e| JsError::new(&format!("Scene error: {}", e)))?;

        self.run(&graph)
            .map_err(|e| JsError::new(&format!("Generation error: {}", e)))
    }

    /// Generate code from a JSON string holding one node description or an array of them.
    #[wasm_bindgen(js_name = generateFromString)]
    pub fn generate_from_string(&mut self, json: &str) -> Result<String, JsError> {
        let graph = SceneGraph::from_json(json)
            .map_err(|e| JsError::new(&format!("Invalid JSON: {}", e)))?;

        self.run(&graph)
            .map_err(|e| JsError::new(&format!("Generation error: {}", e)))
    }

    /// Text styles collected by the last pass.
    #[wasm_bindgen(js_name = textStyles)]
    pub fn text_styles(&self) -> String {
        self.last
            .as_ref()
            .map(Generation::text_styles_report)
            .unwrap_or_else(|| Generation::default().text_styles_report())
    }

    /// Warnings raised by the last pass.
    #[wasm_bindgen]
    pub fn warnings(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.warning_list())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Code, text styles and warnings of the last pass as one object.
    #[wasm_bindgen(js_name = lastResult)]
    pub fn last_result(&self) -> Result<JsValue, JsError> {
        let last = self
            .last
            .as_ref()
            .ok_or_else(|| JsError::new("Nothing generated yet. Call generate() first."))?;

        let result = GenerationJs {
            code: &last.code,
            text_styles: last.text_styles_report(),
            warnings: &last.warnings,
        };
        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

impl FlutterCodegen {
    fn run(&mut self, graph: &SceneGraph) -> figflow_codegen::Result<String> {
        let generator = FlutterGenerator::new(self.settings)?;
        let generation = generator.generate(graph, graph.roots())?;
        let code = generation.code.clone();
        self.last = Some(generation);
        Ok(code)
    }

    fn warning_list(&self) -> Vec<String> {
        self.last
            .as_ref()
            .map(|last| last.warnings.clone())
            .unwrap_or_default()
    }
}

impl Default for FlutterCodegen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figflow_codegen::GenerationMode;

    #[test]
    fn test_codegen_new() {
        let codegen = FlutterCodegen::new();
        assert!(codegen.last.is_none());
        assert_eq!(codegen.text_styles(), "// No text styles in this selection");
    }

    #[test]
    fn test_version() {
        let version = FlutterCodegen::version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_run_keeps_last_generation() {
        let graph = SceneGraph::from_json(
            r#"[
                {"type": "TEXT", "name": "title", "characters": "Hello", "fontSize": 18},
                {"type": "VECTOR", "name": "icon"}
            ]"#,
        )
        .unwrap();

        let mut codegen = FlutterCodegen::new();
        codegen.settings = Settings::new(GenerationMode::Stateless, true);
        let code = codegen.run(&graph).unwrap();

        assert!(code.starts_with("class Title extends StatelessWidget {"));
        assert!(codegen.text_styles().starts_with("Text(\n  'Hello',"));
        assert_eq!(
            codegen.warning_list(),
            vec!["VectorNodes are not supported in Flutter".to_string()]
        );
    }
}
