//! Error types for code generation.

use figflow_core::{NodeId, SceneError};
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur around a generation pass.
///
/// The traversal itself never fails: unsupported nodes are skipped or
/// reported as warnings. These errors cover invalid input handed to the
/// generator and template rendering.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Selected node is not part of the scene graph.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// Scene description could not be loaded.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
