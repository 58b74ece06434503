//! Scene model for the figflow code generator.
//!
//! This crate provides the read-only input side of code generation:
//! - A node table ([`SceneGraph`]) with top-down ownership and parent ids
//! - Node kinds, paints, effects, auto-layout and typography properties
//! - Loading of nested, Figma-shaped JSON scene descriptions
//! - Error types

pub mod description;
pub mod errors;
pub mod layout;
pub mod scene;
pub mod text;
pub mod types;

pub use description::NodeDescription;
pub use errors::*;
pub use layout::*;
pub use scene::*;
pub use text::*;
pub use types::*;
