//! Scene graph data structures.
//!
//! The graph owns every node. Children are listed top-down by id and each
//! node keeps a non-owning `parent` id used for sibling/parent lookups.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::SceneError;
use crate::layout::{AutoLayout, LayoutPositioning, LayoutSizing};
use crate::text::TextProps;
use crate::types::{CornerRadius, Effect, Paint, StrokeAlign};

/// Unique identifier for a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural kind of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Rectangle,
    Ellipse,
    Star,
    Polygon,
    Line,
    Group,
    Frame,
    Instance,
    Component,
    ComponentSet,
    Section,
    Text,
    Vector,
    /// Boolean operations, slices, stickers and anything else.
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Frames, instances, components and component sets.
    pub fn is_frame_like(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Instance | NodeKind::Component | NodeKind::ComponentSet
        )
    }
}

/// Per-axis layout sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sizing {
    pub horizontal: LayoutSizing,
    pub vertical: LayoutSizing,
}

/// A node in the scene graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Unique ID, assigned on insertion
    pub id: NodeId,
    /// Display name
    pub name: String,
    pub kind: NodeKind,
    pub visible: bool,
    /// Position relative to the parent
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, counter-clockwise
    pub rotation: f64,
    pub opacity: f64,
    /// Fills, bottom to top
    pub fills: SmallVec<[Paint; 1]>,
    /// Strokes, bottom to top
    pub strokes: SmallVec<[Paint; 1]>,
    pub stroke_weight: f64,
    pub stroke_align: StrokeAlign,
    pub corner_radius: CornerRadius,
    pub effects: Vec<Effect>,
    /// Explicit auto-layout (frame-like nodes only)
    pub auto_layout: AutoLayout,
    /// Auto-layout inferred from child placement (frame-like nodes only)
    pub inferred_auto_layout: Option<AutoLayout>,
    pub sizing: Sizing,
    pub positioning: LayoutPositioning,
    pub clips_content: bool,
    /// Recognized as an icon or exported asset
    pub is_asset: bool,
    /// Typography (text nodes only)
    pub text: Option<TextProps>,
    /// Parent node ID (None for roots), set by the graph on insertion
    pub parent: Option<NodeId>,
    /// Child node IDs in paint order, filled in by the graph
    pub children: Vec<NodeId>,
}

impl SceneNode {
    /// Create a new visible node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId(0),
            name: String::new(),
            kind,
            visible: true,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            opacity: 1.0,
            fills: SmallVec::new(),
            strokes: SmallVec::new(),
            stroke_weight: 0.0,
            stroke_align: StrokeAlign::Inside,
            corner_radius: CornerRadius::default(),
            effects: Vec::new(),
            auto_layout: AutoLayout::default(),
            inferred_auto_layout: None,
            sizing: Sizing::default(),
            positioning: LayoutPositioning::Auto,
            clips_content: false,
            is_asset: false,
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(props: TextProps) -> Self {
        let mut node = Self::new(NodeKind::Text);
        node.text = Some(props);
        node
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the position relative to the parent.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Add a fill on top of the existing ones.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    /// Add a stroke with the given weight.
    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = weight;
        self
    }

    pub fn with_corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_auto_layout(mut self, layout: AutoLayout) -> Self {
        self.auto_layout = layout;
        self
    }

    pub fn with_inferred_auto_layout(mut self, layout: AutoLayout) -> Self {
        self.inferred_auto_layout = Some(layout);
        self
    }

    pub fn with_sizing(mut self, horizontal: LayoutSizing, vertical: LayoutSizing) -> Self {
        self.sizing = Sizing {
            horizontal,
            vertical,
        };
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_positioning(mut self, positioning: LayoutPositioning) -> Self {
        self.positioning = positioning;
        self
    }

    pub fn with_clips_content(mut self, clips: bool) -> Self {
        self.clips_content = clips;
        self
    }

    /// Mark as a recognized asset.
    pub fn asset(mut self) -> Self {
        self.is_asset = true;
        self
    }

    /// Mark as hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// The complete scene graph for one selection.
///
/// Nodes are only reachable immutably once inserted, so the parent and
/// child links always form a forest.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    /// All nodes, indexed by ID
    nodes: HashMap<NodeId, SceneNode>,
    /// Root node IDs in document order
    roots: Vec<NodeId>,
    /// Counter for generating unique IDs
    next_id: u64,
}

impl SceneGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a root node.
    pub fn add_root(&mut self, mut node: SceneNode) -> NodeId {
        let id = self.allocate();
        node.id = id;
        node.parent = None;
        node.children.clear();
        self.nodes.insert(id, node);
        self.roots.push(id);
        id
    }

    /// Add a child node as the last child of `parent_id`.
    pub fn add_child(&mut self, parent_id: NodeId, mut node: SceneNode) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(&parent_id) {
            return Err(SceneError::MissingParent(parent_id));
        }

        let id = self.allocate();
        node.id = id;
        node.parent = Some(parent_id);
        node.children.clear();
        self.nodes.insert(id, node);

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }

        Ok(id)
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes
            .get(&id)
            .and_then(|n| n.parent)
            .and_then(|parent_id| self.nodes.get(&parent_id))
    }

    /// Get children of a node in paint order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SceneNode> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// Get the root nodes.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over all nodes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_graph() {
        let mut graph = SceneGraph::new();

        let root_id = graph.add_root(
            SceneNode::new(NodeKind::Frame)
                .with_name("root")
                .with_size(800.0, 600.0),
        );
        let child_id = graph
            .add_child(
                root_id,
                SceneNode::new(NodeKind::Rectangle).with_position(10.0, 10.0),
            )
            .unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.roots(), &[root_id]);
        assert_eq!(graph.parent(child_id).map(|n| n.id), Some(root_id));
        assert!(graph.parent(root_id).is_none());

        let children: Vec<NodeId> = graph.children(root_id).map(|n| n.id).collect();
        assert_eq!(children, vec![child_id]);
    }

    #[test]
    fn test_insert_resets_links() {
        let mut graph = SceneGraph::new();
        let root = graph.add_root(SceneNode::new(NodeKind::Frame));

        let mut stray = SceneNode::new(NodeKind::Group);
        stray.parent = Some(NodeId(99));
        stray.children = vec![root, NodeId(7)];

        let other_root = graph.add_root(stray.clone());
        assert!(graph.parent(other_root).is_none());
        assert_eq!(graph.children(other_root).count(), 0);

        let child = graph.add_child(root, stray).unwrap();
        assert_eq!(graph.parent(child).map(|n| n.id), Some(root));
        assert_eq!(graph.children(child).count(), 0);
        assert_eq!(graph.get(child).map(|n| n.children.len()), Some(0));
    }

    #[test]
    fn test_add_child_to_missing_parent() {
        let mut graph = SceneGraph::new();
        let err = graph
            .add_child(NodeId(42), SceneNode::new(NodeKind::Text))
            .unwrap_err();
        assert!(matches!(err, SceneError::MissingParent(NodeId(42))));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_frame_like_kinds() {
        assert!(NodeKind::Instance.is_frame_like());
        assert!(NodeKind::ComponentSet.is_frame_like());
        assert!(!NodeKind::Group.is_frame_like());
        assert!(!NodeKind::Section.is_frame_like());
    }

    #[test]
    fn test_kind_from_json() {
        let kind: NodeKind = serde_json::from_str("\"COMPONENT_SET\"").unwrap();
        assert_eq!(kind, NodeKind::ComponentSet);
        let kind: NodeKind = serde_json::from_str("\"BOOLEAN_OPERATION\"").unwrap();
        assert_eq!(kind, NodeKind::Other);
    }
}
