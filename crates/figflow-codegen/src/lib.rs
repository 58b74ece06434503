//! Code generation from design scene graphs to Flutter widget trees.
//!
//! The generator walks the selected nodes of a [`SceneGraph`] and emits one
//! widget expression per visible node. Unsupported input never fails a pass:
//! it is either omitted or reported through [`Generation::warnings`].
//!
//! # Features
//!
//! - `flutter` - Generate Flutter (Dart) widget code (default)
//!
//! # Example
//!
//! ```
//! use figflow_codegen::{CodeGenerator, FlutterGenerator, Settings};
//! use figflow_core::{NodeKind, SceneGraph, SceneNode};
//!
//! let mut graph = SceneGraph::new();
//! let id = graph.add_root(SceneNode::new(NodeKind::Rectangle).with_size(24.0, 24.0));
//!
//! let generator = FlutterGenerator::new(Settings::default())?;
//! let generation = generator.generate(&graph, &[id])?;
//! assert!(generation.code.starts_with("Container("));
//! # Ok::<(), figflow_codegen::CodegenError>(())
//! ```
//!
//! [`SceneGraph`]: figflow_core::SceneGraph

pub mod context;
pub mod error;
pub mod format;
pub mod generators;
pub mod settings;
pub mod warnings;

pub use context::GenerationContext;
pub use error::{CodegenError, Result};
pub use format::{class_name, indent_string, num_to_fixed, WidgetCall};
pub use generators::{CodeGenerator, Generation, TemplateEngine};
pub use settings::{GenerationMode, Settings};
pub use warnings::Warnings;

#[cfg(feature = "flutter")]
pub use generators::{cleanup, FlutterGenerator};
