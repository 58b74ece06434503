//! Auto-layout alignment mapping and child ordering.

use figflow_core::{
    AutoLayout, CounterAxisAlign, LayoutMode, NodeId, PrimaryAxisAlign, SceneNode,
};

use crate::context::GenerationContext;
use crate::format::WidgetCall;

pub fn main_axis_alignment(layout: &AutoLayout) -> &'static str {
    match layout.primary_axis_align_items {
        PrimaryAxisAlign::Min => "MainAxisAlignment.start",
        PrimaryAxisAlign::Center => "MainAxisAlignment.center",
        PrimaryAxisAlign::Max => "MainAxisAlignment.end",
        PrimaryAxisAlign::SpaceBetween => "MainAxisAlignment.spaceBetween",
    }
}

pub fn cross_axis_alignment(layout: &AutoLayout) -> &'static str {
    match layout.counter_axis_align_items {
        CounterAxisAlign::Min => "CrossAxisAlignment.start",
        CounterAxisAlign::Center => "CrossAxisAlignment.center",
        CounterAxisAlign::Max => "CrossAxisAlignment.end",
        CounterAxisAlign::Baseline => "CrossAxisAlignment.baseline",
    }
}

/// `Row` for horizontal layouts, `Column` otherwise.
pub fn row_column(layout: &AutoLayout, children: String) -> String {
    let widget = match layout.layout_mode {
        LayoutMode::Horizontal => "Row",
        _ => "Column",
    };

    WidgetCall::new(widget)
        .arg("mainAxisSize", "MainAxisSize.min")
        .arg("mainAxisAlignment", main_axis_alignment(layout))
        .arg("crossAxisAlignment", cross_axis_alignment(layout))
        .list("children", vec![children])
        .render()
}

/// Children in the order they should be emitted.
///
/// An inferred layout only describes where children sit, not their scene
/// order, so with layout optimization on they are sorted along its axis.
pub fn ordered_children(ctx: &GenerationContext<'_>, node: &SceneNode) -> Vec<NodeId> {
    let mut children: Vec<&SceneNode> = ctx.graph.children(node.id).collect();

    let inferred = node
        .inferred_auto_layout
        .as_ref()
        .filter(|layout| ctx.optimize_layout() && layout.is_directional());

    if let Some(layout) = inferred {
        let horizontal = layout.layout_mode == LayoutMode::Horizontal;
        children.sort_by(|a, b| {
            if horizontal {
                a.x.total_cmp(&b.x)
            } else {
                a.y.total_cmp(&b.y)
            }
        });
    }

    children.into_iter().map(|child| child.id).collect()
}
