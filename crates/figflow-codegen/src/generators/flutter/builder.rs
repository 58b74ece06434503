//! Attribute builder chain for node widgets.

use std::f64::consts::PI;

use figflow_core::{top_paint, LayoutPositioning, LayoutSizing, NodeKind, Paint, SceneNode};

use super::style;
use crate::context::GenerationContext;
use crate::format::{num_to_fixed, WidgetCall};

/// Wraps a child expression step by step: shape, then blend, then position.
#[derive(Debug, Clone, Default)]
pub struct FlutterBuilder {
    child: String,
}

impl FlutterBuilder {
    pub fn new(child: impl Into<String>) -> Self {
        Self {
            child: child.into(),
        }
    }

    pub fn child(&self) -> &str {
        &self.child
    }

    pub fn into_child(self) -> String {
        self.child
    }

    /// Wrap the child in a `Container` carrying size, padding and decoration.
    pub fn create_container(mut self, ctx: &mut GenerationContext<'_>, node: &SceneNode) -> Self {
        let width = size(node.sizing.horizontal, node.width);
        let height = size(node.sizing.vertical, node.height);
        let padding = ctx
            .effective_layout(node)
            .and_then(|layout| style::padding(&layout.padding()));
        let decoration = decoration(ctx, node);
        let clip = (node.clips_content && decoration.is_some()).then(|| "Clip.antiAlias".to_string());

        if width.is_none() && height.is_none() && padding.is_none() && decoration.is_none() {
            if self.child.is_empty() {
                self.child = WidgetCall::new("Container").render();
            }
            return self;
        }

        self.child = WidgetCall::new("Container")
            .arg_opt("width", width)
            .arg_opt("height", height)
            .arg_opt("padding", padding)
            .arg_opt("clipBehavior", clip)
            .arg_opt("decoration", decoration)
            .arg("child", std::mem::take(&mut self.child))
            .render();
        self
    }

    /// Apply rotation and opacity.
    pub fn blend_attr(mut self, node: &SceneNode) -> Self {
        if self.child.is_empty() {
            return self;
        }

        if node.rotation.round() != 0.0 {
            let radians = node.rotation * (-PI / 180.0);
            self.child = WidgetCall::new("Transform")
                .arg(
                    "transform",
                    format!(
                        "Matrix4.identity()..translate(0.0, 0.0)..rotateZ({})",
                        num_to_fixed(radians)
                    ),
                )
                .arg("child", std::mem::take(&mut self.child))
                .render();
        }

        if node.opacity < 1.0 {
            self.child = WidgetCall::new("Opacity")
                .arg("opacity", num_to_fixed(node.opacity))
                .arg("child", std::mem::take(&mut self.child))
                .render();
        }

        self
    }

    /// Wrap in `Positioned` when the node is placed freely inside a `Stack`.
    pub fn position(mut self, ctx: &GenerationContext<'_>, node: &SceneNode) -> Self {
        if is_absolute(ctx, node) {
            self.child = WidgetCall::new("Positioned")
                .arg("left", num_to_fixed(node.x))
                .arg("top", num_to_fixed(node.y))
                .arg("child", std::mem::take(&mut self.child))
                .render();
        }
        self
    }
}

fn size(sizing: LayoutSizing, value: f64) -> Option<String> {
    match sizing {
        LayoutSizing::Fill => Some("double.infinity".to_string()),
        LayoutSizing::Hug => None,
        LayoutSizing::Fixed => Some(num_to_fixed(value)),
    }
}

/// `ShapeDecoration` for the node's top fill, outline and shadows.
fn decoration(ctx: &mut GenerationContext<'_>, node: &SceneNode) -> Option<String> {
    let mut color = None;
    let mut gradient = None;
    let mut image = None;

    match top_paint(&node.fills) {
        Some(Paint::Solid { .. }) => color = style::solid_color(&node.fills),
        Some(Paint::GradientLinear {
            stops,
            handles,
            opacity,
            ..
        }) => gradient = Some(style::linear_gradient(stops, handles, *opacity)),
        Some(Paint::Image { .. }) => {
            ctx.warnings.add("Image fills are replaced with placeholders");
            image = Some(image_placeholder(node));
        }
        Some(Paint::Unsupported) | None => {}
    }

    let shape = style::shape(node);
    let shadows = style::shadows(node);

    if color.is_none() && gradient.is_none() && image.is_none() && shape.is_none() && shadows.is_empty() {
        return None;
    }

    Some(
        WidgetCall::new("ShapeDecoration")
            .arg_opt("color", color)
            .arg_opt("gradient", gradient)
            .arg_opt("image", image)
            .arg_opt("shape", shape)
            .list("shadows", shadows)
            .render(),
    )
}

fn image_placeholder(node: &SceneNode) -> String {
    let url = format!(
        "https://placehold.co/{}x{}",
        node.width.round() as i64,
        node.height.round() as i64
    );
    WidgetCall::new("DecorationImage")
        .arg("image", format!("NetworkImage(\"{}\")", url))
        .arg("fit", "BoxFit.fill")
        .render()
}

/// A child is absolutely placed when it opts out of its parent's flow, or
/// when the parent is a group or a frame without an effective auto-layout.
/// Selected top-level nodes are never positioned.
fn is_absolute(ctx: &GenerationContext<'_>, node: &SceneNode) -> bool {
    if ctx.is_top_level(node.id) {
        return false;
    }
    let Some(parent) = ctx.graph.parent(node.id) else {
        return false;
    };

    if node.positioning == LayoutPositioning::Absolute || parent.kind == NodeKind::Group {
        return true;
    }
    parent.kind.is_frame_like() && ctx.effective_layout(parent).is_none()
}
