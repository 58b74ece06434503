//! Flutter code generator.
//!
//! Each visible node becomes one widget expression: shapes and sections a
//! `Container`, groups and free frames a `Stack`, auto-layout frames a `Row`
//! or `Column`, text a `Text`. The snippet is cleaned up and then wrapped
//! according to [`GenerationMode`].

mod auto_layout;
mod builder;
pub mod cleanup;
mod style;
mod text;
mod widgets;

use figflow_core::{NodeId, SceneGraph};
use tracing::debug;

use super::templates::TemplateEngine;
use super::{CodeGenerator, Generation};
use crate::context::GenerationContext;
use crate::error::{CodegenError, Result};
use crate::format::{class_name, WidgetCall};
use crate::settings::{GenerationMode, Settings};

/// Flutter code generator.
pub struct FlutterGenerator<'a> {
    settings: Settings,
    engine: TemplateEngine<'a>,
}

impl<'a> FlutterGenerator<'a> {
    /// Create a new Flutter generator.
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            settings,
            engine: TemplateEngine::new()?,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generate code for every root of a JSON scene description.
    pub fn generate_from_json(&self, json: &str) -> Result<Generation> {
        let graph = SceneGraph::from_json(json)?;
        let selection = graph.roots().to_vec();
        self.generate(&graph, &selection)
    }

    /// Wrap the cleaned snippet according to the generation mode.
    fn wrap(&self, graph: &SceneGraph, selection: &[NodeId], snippet: String) -> Result<String> {
        let name = selection
            .first()
            .and_then(|id| graph.get(*id))
            .map(|node| class_name(&node.name))
            .unwrap_or_else(|| class_name(""));

        match self.settings.generation_mode {
            GenerationMode::Snippet => Ok(snippet),
            GenerationMode::Stateless => self.engine.stateless(&name, &column(&snippet)),
            GenerationMode::FullApp => self.engine.full_app(&name, &column(&snippet)),
        }
    }
}

impl CodeGenerator for FlutterGenerator<'_> {
    fn framework_name(&self) -> &'static str {
        "Flutter"
    }

    fn generate(&self, graph: &SceneGraph, selection: &[NodeId]) -> Result<Generation> {
        if let Some(missing) = selection.iter().find(|id| !graph.contains(**id)) {
            return Err(CodegenError::UnknownNode(*missing));
        }

        debug!(
            nodes = selection.len(),
            mode = ?self.settings.generation_mode,
            "generating flutter widgets"
        );

        let mut ctx = GenerationContext::new(graph, &self.settings, selection);
        let snippet = cleanup::clean(&widgets::widget_generator(&mut ctx, selection));
        let code = self.wrap(graph, selection, snippet)?;

        debug!(
            text_styles = ctx.text_styles.len(),
            warnings = ctx.warnings.len(),
            "flutter generation finished"
        );

        Ok(Generation {
            code,
            text_styles: ctx.text_styles,
            warnings: ctx.warnings.into_vec(),
        })
    }
}

/// `Column` hosting the snippet. The snippet's trailing comma is dropped
/// since the list adds its own.
fn column(snippet: &str) -> String {
    WidgetCall::new("Column")
        .list("children", vec![snippet.trim_end_matches(',').to_string()])
        .render()
}
