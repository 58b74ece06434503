//! Property tests for traversal and cleanup invariants.

use figflow_codegen::cleanup::clean_line;
use figflow_codegen::{
    num_to_fixed, CodeGenerator, FlutterGenerator, GenerationMode, Settings,
};
use figflow_core::{AutoLayout, Color, NodeId, NodeKind, Paint, SceneGraph, SceneNode};
use proptest::prelude::*;

/// A horizontal frame holding one rectangle per entry of `children`.
/// Entries are `(visible, width)`.
fn row_scene(spacing: f64, children: &[(bool, u16)]) -> (SceneGraph, NodeId) {
    let mut graph = SceneGraph::new();
    let frame = graph.add_root(
        SceneNode::new(NodeKind::Frame)
            .with_name("toolbar")
            .with_size(400.0, 60.0)
            .with_auto_layout(AutoLayout::horizontal(spacing)),
    );
    for &(visible, width) in children {
        let node = SceneNode::new(NodeKind::Rectangle)
            .with_size(f64::from(width), 24.0)
            .with_fill(Paint::solid(Color::rgb(0.2, 0.4, 0.6)));
        let node = if visible { node } else { node.hidden() };
        graph.add_child(frame, node).unwrap();
    }
    (graph, frame)
}

fn snippet(graph: &SceneGraph, root: NodeId, mode: GenerationMode) -> String {
    FlutterGenerator::new(Settings::new(mode, true))
        .unwrap()
        .generate(graph, &[root])
        .unwrap()
        .code
}

fn cleanup_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,40}",
        Just(",".to_string()),
        Just("   ,  ".to_string()),
        "[ ]{0,6}textDecoration: [a-zA-Z.]{1,20},",
        "[ ]{0,6}border: Border\\.only\\([a-z: 0-9]{0,10}",
    ]
}

proptest! {
    #[test]
    fn spacer_count_matches_adjacent_visible_pairs(
        spacing in 1u16..64,
        children in prop::collection::vec((any::<bool>(), 1u16..200), 0..8),
    ) {
        let (graph, root) = row_scene(f64::from(spacing), &children);
        let code = snippet(&graph, root, GenerationMode::Snippet);

        let visible = children.iter().filter(|(visible, _)| *visible).count();
        prop_assert_eq!(
            code.matches("const SizedBox(").count(),
            visible.saturating_sub(1)
        );
    }

    #[test]
    fn invisible_nodes_leave_no_trace(
        spacing in 0u16..32,
        children in prop::collection::vec((any::<bool>(), 1u16..200), 0..8),
    ) {
        let (with_hidden, root) = row_scene(f64::from(spacing), &children);
        let visible_only: Vec<(bool, u16)> =
            children.iter().copied().filter(|(visible, _)| *visible).collect();
        let (without_hidden, other_root) = row_scene(f64::from(spacing), &visible_only);

        prop_assert_eq!(
            snippet(&with_hidden, root, GenerationMode::Snippet),
            snippet(&without_hidden, other_root, GenerationMode::Snippet)
        );
    }

    #[test]
    fn wrapped_modes_embed_the_snippet(
        children in prop::collection::vec((Just(true), 1u16..200), 1..5),
        full_app in any::<bool>(),
    ) {
        let (graph, root) = row_scene(4.0, &children);
        let plain = snippet(&graph, root, GenerationMode::Snippet);
        let mode = if full_app { GenerationMode::FullApp } else { GenerationMode::Stateless };
        let wrapped = snippet(&graph, root, mode);

        prop_assert!(
            wrapped.contains("class Toolbar extends StatelessWidget {"),
            "missing Toolbar StatelessWidget class"
        );
        for line in plain.trim_end_matches(',').lines() {
            prop_assert!(wrapped.contains(line.trim()));
        }
    }

    #[test]
    fn clean_line_is_idempotent(line in cleanup_line()) {
        let once = clean_line(&line);
        prop_assert_eq!(clean_line(&once), once);
    }

    #[test]
    fn num_to_fixed_keeps_two_decimals(value in -10_000.0f64..10_000.0) {
        let text = num_to_fixed(value);
        let parsed: f64 = text.parse().unwrap();
        prop_assert!((parsed - value).abs() <= 0.005 + 1e-9);
        prop_assert!(!text.ends_with('.'));
        prop_assert_ne!(text.as_str(), "-0");
        if text.contains('.') {
            prop_assert!(!text.ends_with('0'));
        }
    }
}
