//! Per-pass generation state.

use std::collections::HashSet;

use figflow_core::{AutoLayout, NodeId, SceneGraph, SceneNode};

use crate::settings::Settings;
use crate::warnings::Warnings;

/// State threaded through one generation pass.
///
/// Every pass builds a fresh context, so the collected text styles and
/// warnings never leak between passes.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    pub graph: &'a SceneGraph,
    pub settings: &'a Settings,
    /// Raw text widgets collected from text nodes, in visit order
    pub text_styles: Vec<String>,
    pub warnings: Warnings,
    top_level: HashSet<NodeId>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(graph: &'a SceneGraph, settings: &'a Settings, selection: &[NodeId]) -> Self {
        Self {
            graph,
            settings,
            text_styles: Vec::new(),
            warnings: Warnings::new(),
            top_level: selection.iter().copied().collect(),
        }
    }

    pub fn optimize_layout(&self) -> bool {
        self.settings.optimize_layout
    }

    /// Whether the node is one of the selected top-level nodes.
    pub fn is_top_level(&self, id: NodeId) -> bool {
        self.top_level.contains(&id)
    }

    /// The directional layout that arranges a frame-like node's children:
    /// the explicit one, or the inferred one when layout optimization is on.
    pub fn effective_layout<'n>(&self, node: &'n SceneNode) -> Option<&'n AutoLayout> {
        if !node.kind.is_frame_like() {
            return None;
        }
        if node.auto_layout.is_directional() {
            return Some(&node.auto_layout);
        }
        if self.optimize_layout() {
            return node
                .inferred_auto_layout
                .as_ref()
                .filter(|layout| layout.is_directional());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GenerationMode;
    use figflow_core::{LayoutMode, NodeKind};

    fn layout_mode(kind: NodeKind, optimize: bool) -> Option<LayoutMode> {
        let mut graph = SceneGraph::new();
        let id = graph.add_root(
            SceneNode::new(kind).with_inferred_auto_layout(AutoLayout::vertical(4.0)),
        );
        let settings = Settings::new(GenerationMode::Snippet, optimize);
        let ctx = GenerationContext::new(&graph, &settings, &[id]);
        let node = graph.get(id)?;
        ctx.effective_layout(node).map(|layout| layout.layout_mode)
    }

    #[test]
    fn test_inferred_layout_needs_optimization() {
        assert_eq!(layout_mode(NodeKind::Frame, true), Some(LayoutMode::Vertical));
        assert_eq!(layout_mode(NodeKind::Frame, false), None);
        assert_eq!(layout_mode(NodeKind::Instance, true), Some(LayoutMode::Vertical));
    }

    #[test]
    fn test_only_frame_like_nodes_have_layouts() {
        assert_eq!(layout_mode(NodeKind::Group, true), None);
        assert_eq!(layout_mode(NodeKind::Rectangle, true), None);
    }

    #[test]
    fn test_explicit_layout_takes_priority() {
        let mut graph = SceneGraph::new();
        let id = graph.add_root(
            SceneNode::new(NodeKind::Frame)
                .with_auto_layout(AutoLayout::horizontal(2.0))
                .with_inferred_auto_layout(AutoLayout::vertical(4.0)),
        );
        for optimize in [true, false] {
            let settings = Settings::new(GenerationMode::Snippet, optimize);
            let ctx = GenerationContext::new(&graph, &settings, &[id]);
            let layout = ctx.effective_layout(graph.get(id).unwrap()).unwrap();
            assert_eq!(layout.layout_mode, LayoutMode::Horizontal);
            assert_eq!(layout.item_spacing, 2.0);
        }
    }

    #[test]
    fn test_top_level_membership() {
        let mut graph = SceneGraph::new();
        let root = graph.add_root(SceneNode::new(NodeKind::Frame));
        let child = graph.add_child(root, SceneNode::new(NodeKind::Text)).unwrap();
        let settings = Settings::default();
        let ctx = GenerationContext::new(&graph, &settings, &[root]);
        assert!(ctx.is_top_level(root));
        assert!(!ctx.is_top_level(child));
    }
}
