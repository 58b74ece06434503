//! Error types for scene construction.

use crate::scene::NodeId;
use thiserror::Error;

/// Errors while building a scene graph.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Parent node {0} does not exist")]
    MissingParent(NodeId),

    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),
}
