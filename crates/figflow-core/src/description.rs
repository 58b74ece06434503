//! Nested scene descriptions as exported by the design tool.
//!
//! A description is a tree of nodes in the host's JSON shape (camelCase
//! keys, `type` tags). [`SceneGraph::from_descriptions`] flattens it into the
//! id-keyed node table used during generation.

use serde::{Deserialize, Serialize};

use crate::errors::SceneError;
use crate::layout::{
    AutoLayout, CounterAxisAlign, LayoutMode, LayoutPositioning, LayoutSizing, PrimaryAxisAlign,
};
use crate::scene::{NodeId, NodeKind, SceneGraph, SceneNode, Sizing};
use crate::text::{
    FontName, LetterSpacing, LineHeight, TextAlign, TextAutoResize, TextCase, TextDecoration,
    TextProps,
};
use crate::types::{CornerRadius, Effect, Paint, StrokeAlign};

/// One node of a nested scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: f64,
    pub stroke_align: StrokeAlign,
    pub corner_radius: Option<f64>,
    pub top_left_radius: Option<f64>,
    pub top_right_radius: Option<f64>,
    pub bottom_right_radius: Option<f64>,
    pub bottom_left_radius: Option<f64>,
    pub effects: Vec<Effect>,

    // Auto-layout
    pub layout_mode: LayoutMode,
    pub item_spacing: f64,
    pub primary_axis_align_items: PrimaryAxisAlign,
    pub counter_axis_align_items: CounterAxisAlign,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
    pub inferred_auto_layout: Option<AutoLayout>,
    pub layout_sizing_horizontal: LayoutSizing,
    pub layout_sizing_vertical: LayoutSizing,
    pub layout_positioning: LayoutPositioning,
    pub clips_content: bool,
    pub is_asset: bool,

    // Text
    pub characters: String,
    pub font_name: FontName,
    pub font_size: f64,
    pub font_weight: u16,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
    pub text_decoration: TextDecoration,
    pub text_align_horizontal: TextAlign,
    pub text_case: TextCase,
    pub text_auto_resize: TextAutoResize,

    pub children: Vec<NodeDescription>,
}

impl Default for NodeDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Other,
            visible: true,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            opacity: 1.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            stroke_align: StrokeAlign::Inside,
            corner_radius: None,
            top_left_radius: None,
            top_right_radius: None,
            bottom_right_radius: None,
            bottom_left_radius: None,
            effects: Vec::new(),
            layout_mode: LayoutMode::None,
            item_spacing: 0.0,
            primary_axis_align_items: PrimaryAxisAlign::Min,
            counter_axis_align_items: CounterAxisAlign::Min,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
            inferred_auto_layout: None,
            layout_sizing_horizontal: LayoutSizing::Fixed,
            layout_sizing_vertical: LayoutSizing::Fixed,
            layout_positioning: LayoutPositioning::Auto,
            clips_content: false,
            is_asset: false,
            characters: String::new(),
            font_name: FontName::default(),
            font_size: 14.0,
            font_weight: 400,
            line_height: LineHeight::Auto,
            letter_spacing: LetterSpacing::default(),
            text_decoration: TextDecoration::None,
            text_align_horizontal: TextAlign::Left,
            text_case: TextCase::Original,
            text_auto_resize: TextAutoResize::WidthAndHeight,
            children: Vec::new(),
        }
    }
}

impl NodeDescription {
    /// Convert into a detached scene node (without id, parent or children).
    pub fn to_node(&self) -> SceneNode {
        let mut node = SceneNode::new(self.kind);
        node.name = self.name.clone();
        node.visible = self.visible;
        node.x = self.x;
        node.y = self.y;
        node.width = self.width;
        node.height = self.height;
        node.rotation = self.rotation;
        node.opacity = self.opacity;
        node.fills = self.fills.iter().cloned().collect();
        node.strokes = self.strokes.iter().cloned().collect();
        node.stroke_weight = self.stroke_weight;
        node.stroke_align = self.stroke_align;
        node.corner_radius = self.corner_radius();
        node.effects = self.effects.clone();
        node.sizing = Sizing {
            horizontal: self.layout_sizing_horizontal,
            vertical: self.layout_sizing_vertical,
        };
        node.positioning = self.layout_positioning;
        node.clips_content = self.clips_content;
        node.is_asset = self.is_asset;

        if self.kind.is_frame_like() {
            node.auto_layout = AutoLayout {
                layout_mode: self.layout_mode,
                item_spacing: self.item_spacing,
                primary_axis_align_items: self.primary_axis_align_items,
                counter_axis_align_items: self.counter_axis_align_items,
                padding_top: self.padding_top,
                padding_right: self.padding_right,
                padding_bottom: self.padding_bottom,
                padding_left: self.padding_left,
            };
            node.inferred_auto_layout = self.inferred_auto_layout;
        }

        if self.kind == NodeKind::Text {
            node.text = Some(TextProps {
                characters: self.characters.clone(),
                font_name: self.font_name.clone(),
                font_size: self.font_size,
                font_weight: self.font_weight,
                line_height: self.line_height,
                letter_spacing: self.letter_spacing,
                decoration: self.text_decoration,
                align: self.text_align_horizontal,
                text_case: self.text_case,
                auto_resize: self.text_auto_resize,
            });
        }

        node
    }

    fn corner_radius(&self) -> CornerRadius {
        let uniform = self.corner_radius.unwrap_or(0.0);
        CornerRadius {
            top_left: self.top_left_radius.unwrap_or(uniform),
            top_right: self.top_right_radius.unwrap_or(uniform),
            bottom_right: self.bottom_right_radius.unwrap_or(uniform),
            bottom_left: self.bottom_left_radius.unwrap_or(uniform),
        }
    }
}

impl SceneGraph {
    /// Build a graph whose roots are the given descriptions, in order.
    pub fn from_descriptions(descriptions: &[NodeDescription]) -> Result<Self, SceneError> {
        let mut graph = SceneGraph::new();
        for description in descriptions {
            let root = graph.add_root(description.to_node());
            graph.add_description_children(root, &description.children)?;
        }
        Ok(graph)
    }

    /// Parse a JSON array (or a single object) of node descriptions.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let descriptions: Vec<NodeDescription> = match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)?,
            other => vec![serde_json::from_value(other)?],
        };
        Self::from_descriptions(&descriptions)
    }

    fn add_description_children(
        &mut self,
        parent: NodeId,
        children: &[NodeDescription],
    ) -> Result<(), SceneError> {
        for child in children {
            let id = self.add_child(parent, child.to_node())?;
            self.add_description_children(id, &child.children)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    const CARD: &str = r#"
    {
      "name": "Card",
      "type": "FRAME",
      "width": 320,
      "height": 200,
      "layoutMode": "VERTICAL",
      "itemSpacing": 8,
      "paddingTop": 16,
      "cornerRadius": 12,
      "topLeftRadius": 4,
      "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}],
      "children": [
        {
          "name": "Title",
          "type": "TEXT",
          "characters": "Hello",
          "fontSize": 20,
          "fontWeight": 700,
          "lineHeight": {"unit": "PIXELS", "value": 24}
        },
        {"name": "Hidden", "type": "RECTANGLE", "visible": false},
        {"name": "Slice", "type": "SLICE"}
      ]
    }
    "#;

    #[test]
    fn test_from_json_builds_tree() {
        let graph = SceneGraph::from_json(CARD).unwrap();
        assert_eq!(graph.len(), 4);

        let root_id = graph.roots()[0];
        let root = graph.get(root_id).unwrap();
        assert_eq!(root.kind, NodeKind::Frame);
        assert_eq!(root.auto_layout.layout_mode, LayoutMode::Vertical);
        assert_eq!(root.auto_layout.item_spacing, 8.0);
        assert_eq!(root.auto_layout.padding_top, 16.0);
        assert_eq!(root.corner_radius.top_left, 4.0);
        assert_eq!(root.corner_radius.bottom_right, 12.0);
        assert_eq!(root.fills.as_slice(), &[Paint::solid(Color::rgb(1.0, 1.0, 1.0))]);

        let children: Vec<&SceneNode> = graph.children(root_id).collect();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].parent, Some(root_id));

        let text = children[0].text.as_ref().unwrap();
        assert_eq!(text.characters, "Hello");
        assert_eq!(text.font_weight, 700);
        assert_eq!(text.line_height, LineHeight::Pixels { value: 24.0 });

        assert!(!children[1].visible);
        assert_eq!(children[2].kind, NodeKind::Other);
    }

    #[test]
    fn test_non_frames_ignore_layout_fields() {
        let graph = SceneGraph::from_json(
            r#"[{"type": "RECTANGLE", "layoutMode": "HORIZONTAL", "itemSpacing": 4}]"#,
        )
        .unwrap();
        let node = graph.get(graph.roots()[0]).unwrap();
        assert!(!node.auto_layout.is_directional());
        assert!(node.text.is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = SceneGraph::from_json("{not json").unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }
}
