//! Traversal: one widget fragment per visible node.

use figflow_core::{LayoutMode, NodeId, NodeKind, SceneNode};
use tracing::debug;

use super::auto_layout::{ordered_children, row_column};
use super::builder::FlutterBuilder;
use crate::context::GenerationContext;
use crate::format::{num_to_fixed, WidgetCall};

/// Generate sibling fragments joined with `,\n`.
///
/// Invisible nodes are dropped before dispatch. Between two emitted siblings
/// a spacer is inserted when their parent lays children out with a gap.
pub fn widget_generator(ctx: &mut GenerationContext<'_>, ids: &[NodeId]) -> String {
    let graph = ctx.graph;
    let mut fragments: Vec<String> = Vec::new();
    let mut previous: Option<&SceneNode> = None;

    for node in ids
        .iter()
        .filter_map(|id| graph.get(*id))
        .filter(|node| node.visible)
    {
        let Some(fragment) = widget(ctx, node) else {
            continue;
        };

        if let Some(spacer) = previous.and_then(|prev| spacing(ctx, prev)) {
            fragments.push(spacer);
        }
        fragments.push(fragment);
        previous = Some(node);
    }

    fragments.join(",\n")
}

fn widget(ctx: &mut GenerationContext<'_>, node: &SceneNode) -> Option<String> {
    match node.kind {
        NodeKind::Rectangle
        | NodeKind::Ellipse
        | NodeKind::Star
        | NodeKind::Polygon
        | NodeKind::Line
        | NodeKind::Section => Some(container(ctx, node, String::new())),
        NodeKind::Group => Some(group(ctx, node)),
        NodeKind::Frame | NodeKind::Instance | NodeKind::Component | NodeKind::ComponentSet => {
            Some(frame(ctx, node))
        }
        NodeKind::Text => Some(text(ctx, node)),
        NodeKind::Vector => {
            ctx.warnings.add("VectorNodes are not supported in Flutter");
            None
        }
        NodeKind::Other => {
            debug!(node = %node.id, name = %node.name, "skipping unsupported node kind");
            None
        }
    }
}

fn container(ctx: &mut GenerationContext<'_>, node: &SceneNode, child: String) -> String {
    FlutterBuilder::new(child)
        .create_container(ctx, node)
        .blend_attr(node)
        .position(ctx, node)
        .into_child()
}

fn group(ctx: &mut GenerationContext<'_>, node: &SceneNode) -> String {
    let children = widget_generator(ctx, &node.children);
    container(ctx, node, stack(children))
}

fn frame(ctx: &mut GenerationContext<'_>, node: &SceneNode) -> String {
    let children = ordered_children(ctx, node);

    if let Some(layout) = ctx.effective_layout(node).copied() {
        let widgets = widget_generator(ctx, &children);
        return container(ctx, node, row_column(&layout, widgets));
    }

    if node.is_asset {
        return container(ctx, node, WidgetCall::new("FlutterLogo").render());
    }

    let widgets = widget_generator(ctx, &children);
    container(ctx, node, stack(widgets))
}

fn text(ctx: &mut GenerationContext<'_>, node: &SceneNode) -> String {
    let builder = FlutterBuilder::default().create_text(node);
    ctx.text_styles.push(builder.child().to_string());

    builder
        .blend_attr(node)
        .text_auto_size(node)
        .position(ctx, node)
        .into_child()
}

fn stack(children: String) -> String {
    WidgetCall::new("Stack")
        .list("children", vec![children])
        .render()
}

/// Spacer following `node` when its parent frame arranges children with a gap.
///
/// Instances and components lay out as `Row`/`Column` too, but their
/// children never get spacers.
fn spacing(ctx: &GenerationContext<'_>, node: &SceneNode) -> Option<String> {
    let parent = ctx.graph.parent(node.id)?;
    if parent.kind != NodeKind::Frame {
        return None;
    }
    let layout = ctx.effective_layout(parent)?;
    if layout.item_spacing <= 0.0 {
        return None;
    }

    let gap = num_to_fixed(layout.item_spacing);
    let spacer = WidgetCall::new("const SizedBox");
    let spacer = match layout.layout_mode {
        LayoutMode::Horizontal => spacer.arg("width", gap),
        LayoutMode::Vertical => spacer.arg("height", gap),
        LayoutMode::None => return None,
    };
    Some(spacer.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::settings::GenerationMode;
    use figflow_core::{AutoLayout, SceneGraph, TextProps};

    struct Output {
        code: String,
        text_styles: Vec<String>,
        warnings: Vec<String>,
    }

    fn generate(graph: &SceneGraph, ids: &[NodeId]) -> Output {
        generate_with(graph, ids, &Settings::default())
    }

    fn generate_with(graph: &SceneGraph, ids: &[NodeId], settings: &Settings) -> Output {
        let mut ctx = GenerationContext::new(graph, settings, ids);
        let code = widget_generator(&mut ctx, ids);
        Output {
            code,
            text_styles: ctx.text_styles,
            warnings: ctx.warnings.into_vec(),
        }
    }

    #[test]
    fn test_invisible_nodes_are_skipped() {
        let mut graph = SceneGraph::new();
        let hidden = graph.add_root(SceneNode::new(NodeKind::Rectangle).hidden());
        let out = generate(&graph, &[hidden]);
        assert!(out.code.is_empty());
    }

    #[test]
    fn test_spacing_between_emitted_siblings() {
        let mut graph = SceneGraph::new();
        let row = graph.add_root(
            SceneNode::new(NodeKind::Frame)
                .with_size(200.0, 40.0)
                .with_auto_layout(AutoLayout::horizontal(8.0)),
        );
        let a = SceneNode::new(NodeKind::Rectangle).with_size(20.0, 20.0);
        graph.add_child(row, a.clone()).unwrap();
        graph.add_child(row, SceneNode::new(NodeKind::Vector)).unwrap();
        graph.add_child(row, a.clone().hidden()).unwrap();
        graph.add_child(row, a).unwrap();

        let out = generate(&graph, &[row]);
        assert_eq!(out.code.matches("const SizedBox(").count(), 1);
        assert!(out.code.contains("width: 8,"));
        assert_eq!(out.warnings, vec!["VectorNodes are not supported in Flutter"]);
    }

    #[test]
    fn test_free_frame_becomes_stack() {
        let mut graph = SceneGraph::new();
        let frame = graph.add_root(SceneNode::new(NodeKind::Frame).with_size(100.0, 100.0));
        graph
            .add_child(
                frame,
                SceneNode::new(NodeKind::Ellipse)
                    .with_size(10.0, 10.0)
                    .with_position(5.0, 5.0),
            )
            .unwrap();

        let out = generate(&graph, &[frame]);
        assert!(out
            .code
            .starts_with("Container(\n  width: 100,\n  height: 100,\n  child: Stack("));
        assert!(out.code.contains("Positioned("));
        assert!(out.code.contains("OvalBorder()"));
    }

    #[test]
    fn test_empty_group_and_asset_frame() {
        let mut graph = SceneGraph::new();
        let group = graph.add_root(SceneNode::new(NodeKind::Group).with_size(10.0, 10.0));
        let asset = graph.add_root(
            SceneNode::new(NodeKind::Frame)
                .with_size(24.0, 24.0)
                .asset(),
        );
        graph
            .add_child(asset, SceneNode::new(NodeKind::Rectangle))
            .unwrap();

        let out = generate(&graph, &[group, asset]);
        assert!(out.code.contains("child: Stack(),"));
        assert!(out.code.contains("child: FlutterLogo(),"));
        assert_eq!(out.code.matches("Container(").count(), 2);
    }

    #[test]
    fn test_text_is_cached_before_decoration() {
        let mut graph = SceneGraph::new();
        let id = graph.add_root(SceneNode::text(TextProps::new("Hi")).with_opacity(0.5));
        let out = generate(&graph, &[id]);

        assert_eq!(out.text_styles.len(), 1);
        assert!(out.text_styles[0].starts_with("Text(\n  'Hi',"));
        assert!(out.code.starts_with("Opacity("));
    }

    #[test]
    fn test_other_kind_is_silently_skipped() {
        let mut graph = SceneGraph::new();
        let id = graph.add_root(SceneNode::new(NodeKind::Other));
        let out = generate(&graph, &[id]);
        assert!(out.code.is_empty());
        assert!(out.warnings.is_empty());
    }

    /// Two 20x20 rectangles at x = 0 and x = 30 under a node of `kind`.
    fn spaced_pair(
        kind: NodeKind,
        layout: Option<AutoLayout>,
        inferred: Option<AutoLayout>,
    ) -> (SceneGraph, NodeId) {
        let mut graph = SceneGraph::new();
        let mut parent = SceneNode::new(kind).with_size(100.0, 40.0);
        if let Some(layout) = layout {
            parent = parent.with_auto_layout(layout);
        }
        if let Some(inferred) = inferred {
            parent = parent.with_inferred_auto_layout(inferred);
        }
        let parent = graph.add_root(parent);
        for x in [0.0, 30.0] {
            graph
                .add_child(
                    parent,
                    SceneNode::new(NodeKind::Rectangle)
                        .with_size(20.0, 20.0)
                        .with_position(x, 0.0),
                )
                .unwrap();
        }
        (graph, parent)
    }

    #[test]
    fn test_instance_parent_gets_no_spacers() {
        for kind in [NodeKind::Instance, NodeKind::Component, NodeKind::ComponentSet] {
            let (graph, parent) = spaced_pair(kind, Some(AutoLayout::horizontal(8.0)), None);
            let out = generate(&graph, &[parent]);
            assert!(out.code.contains("Row("), "{:?}:\n{}", kind, out.code);
            assert_eq!(out.code.matches("const SizedBox(").count(), 0);
        }
    }

    #[test]
    fn test_inferred_layout_used_when_optimizing() {
        let inferred = Some(AutoLayout::horizontal(6.0));
        let (graph, frame) = spaced_pair(NodeKind::Frame, None, inferred);
        let settings = Settings::new(GenerationMode::Snippet, true);
        let out = generate_with(&graph, &[frame], &settings);

        assert!(out.code.contains("Row("));
        assert!(!out.code.contains("Stack("));
        assert_eq!(out.code.matches("const SizedBox(").count(), 1);
        assert_eq!(out.code.matches("width: 6,").count(), 1);
    }

    #[test]
    fn test_inferred_layout_ignored_without_optimizing() {
        let inferred = Some(AutoLayout::horizontal(6.0));
        let (graph, frame) = spaced_pair(NodeKind::Frame, None, inferred);
        let settings = Settings::new(GenerationMode::Snippet, false);
        let out = generate_with(&graph, &[frame], &settings);

        assert!(out.code.contains("Stack("));
        assert!(!out.code.contains("Row("));
        assert_eq!(out.code.matches("Positioned(").count(), 2);
        assert_eq!(out.code.matches("const SizedBox(").count(), 0);
    }

    #[test]
    fn test_explicit_layout_wins_over_inferred() {
        let (graph, frame) = spaced_pair(
            NodeKind::Frame,
            Some(AutoLayout::vertical(4.0)),
            Some(AutoLayout::horizontal(10.0)),
        );
        let settings = Settings::new(GenerationMode::Snippet, true);
        let out = generate_with(&graph, &[frame], &settings);

        assert!(out.code.contains("Column("));
        assert!(!out.code.contains("Row("));
        assert_eq!(out.code.matches("height: 4,").count(), 1);
        assert!(!out.code.contains("width: 10,"));
    }
}
