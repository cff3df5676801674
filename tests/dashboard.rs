//! End-to-end checks over the public API: layout properties, selection
//! scenarios, rendering and static export.

use chrono::{TimeZone, Utc};
use synapse::render::{render_page, PageOptions};
use synapse::report::{export_snapshot, ExportOptions};
use synapse::selection::{SelectionState, View};
use synapse::store::{FixtureStore, SizeTreeNode};
use synapse::treemap::{layout, LayoutOptions, TreemapLayout};
use tempfile::TempDir;

fn fixture_layout() -> TreemapLayout {
    layout(FixtureStore::builtin().size_tree(), &LayoutOptions::default()).unwrap()
}

#[test]
fn test_every_node_is_laid_out_inside_its_parent() {
    let result = fixture_layout();
    let root = result.root();

    assert_eq!(result.len(), 18);
    assert_eq!((root.rect.x0, root.rect.y0, root.rect.x1, root.rect.y1), (0.0, 0.0, 1200.0, 600.0));

    for node in &result.nodes {
        let r = node.rect;
        assert!(r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite());
        assert!(r.width() >= 0.0 && r.height() >= 0.0, "{}", node.name);
        if let Some(parent) = node.parent {
            assert!(result.nodes[parent].rect.contains(&r), "{} escapes its parent", node.name);
        }
    }
}

#[test]
fn test_siblings_are_disjoint() {
    let result = fixture_layout();

    for (idx, _) in result.nodes.iter().enumerate() {
        let children: Vec<_> = result.children(idx).collect();
        for (i, a) in children.iter().enumerate() {
            for b in &children[i + 1..] {
                assert!(!a.rect.overlaps(&b.rect), "{} overlaps {}", a.name, b.name);
            }
        }
    }
}

#[test]
fn test_leaf_areas_track_sizes_within_a_category() {
    let result = fixture_layout();
    let frontend = result
        .nodes
        .iter()
        .position(|n| n.name == "Frontend")
        .unwrap();

    let leaves: Vec<_> = result.children(frontend).collect();
    let total_value: f64 = leaves.iter().map(|n| n.value).sum();
    let total_area: f64 = leaves.iter().map(|n| n.rect.area()).sum();

    for leaf in leaves {
        let expected = leaf.value / total_value;
        let actual = leaf.rect.area() / total_area;
        // Padding and rounding skew small tiles; stay within a few percent
        assert!((expected - actual).abs() < 0.03, "{}: {} vs {}", leaf.name, expected, actual);
    }
}

#[test]
fn test_langchain_vs_ollama_scenario() {
    let tree = SizeTreeNode::branch(
        "root",
        vec![SizeTreeNode::branch(
            "AI",
            vec![
                SizeTreeNode::leaf("langchain", 82000.0),
                SizeTreeNode::leaf("ollama", 45000.0),
            ],
        )],
    );

    let result = layout(&tree, &LayoutOptions::new(1200.0, 600.0)).unwrap();
    let langchain = result.find("langchain").unwrap().rect.area();
    let ollama = result.find("ollama").unwrap().rect.area();

    assert!(langchain > ollama);
    let ratio = (langchain / ollama) / (82000.0 / 45000.0);
    assert!((ratio - 1.0).abs() < 0.05, "ratio off by {}", ratio);
}

#[test]
fn test_layout_is_deterministic() {
    assert_eq!(fixture_layout(), fixture_layout());
}

#[test]
fn test_view_round_trip_keeps_selection() {
    let store = FixtureStore::builtin();
    let mut state = SelectionState::new(&store);

    assert_eq!(state.view(), View::List);
    assert_eq!(state.selected_id(), store.repos()[0].id);

    state.select_record(&store, "shadcn");
    state.select_view(View::Treemap);
    state.select_view(View::List);

    assert_eq!(state.view(), View::List);
    assert_eq!(state.selected_id(), "shadcn");

    let html = render_page(&store, &state, &PageOptions::default()).unwrap();
    assert!(html.contains("<h2>shadcn/ui</h2>"));
}

#[test]
fn test_static_export() {
    let temp_dir = TempDir::new().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();

    let summary = export_snapshot(
        &FixtureStore::builtin(),
        &ExportOptions::new(temp_dir.path()).base_url("https://example.com/trending"),
        now,
    )
    .unwrap();

    assert_eq!(summary.len(), 6);
    assert!(summary.files.iter().all(|f| f.exists()));

    let digest = std::fs::read_to_string(temp_dir.path().join("2026/01/2026-01-05.md")).unwrap();
    assert!(digest.starts_with("# Synapse Trending Digest (2026-01-05)"));

    let feed = std::fs::read_to_string(temp_dir.path().join("rss.xml")).unwrap();
    assert!(feed.contains("<link>https://example.com/trending</link>"));
    assert_eq!(feed.matches("<item>").count(), 6);
}
