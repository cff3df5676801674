//! Treemap view: absolutely positioned tiles over a computed layout
//!
//! Positions are emitted as percentages of the layout area so the map
//! scales with its container.

use super::format::{escape, percent, thousands};
use crate::treemap::{LayoutNode, Rect, TreemapLayout};

const DEFAULT_TILE_COLOR: &str = "#1e293b";

/// Time windows in the header; only the first is shown as active
const TIME_FILTERS: [&str; 2] = ["24h", "7d"];

/// The whole treemap view: header plus tiles
pub fn render_treemap_view(layout: &TreemapLayout) -> String {
    let filters: String = TIME_FILTERS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let class = if i == 0 { "filter active" } else { "filter" };
            format!(r#"<button type="button" class="{class}">{label}</button>"#)
        })
        .collect();

    format!(
        r#"<section class="treemap-view">
                <div class="treemap-head">
                    <div><h1>Tech Pulse Treemap</h1><p class="muted">Repository stars by category</p></div>
                    <div class="filters">{filters}<button type="button" class="filter">All Languages</button></div>
                </div>
                <div class="treemap-canvas">
                    {map}
                </div>
            </section>"#,
        map = render_treemap(layout),
    )
}

/// Tiles for every leaf and a label for every category
pub fn render_treemap(layout: &TreemapLayout) -> String {
    let mut tiles = String::new();
    let mut labels = String::new();

    for (idx, node) in layout.nodes.iter().enumerate() {
        if node.parent.is_none() {
            continue;
        }
        if node.is_leaf {
            tiles.push_str(&render_tile(layout, node));
        } else {
            labels.push_str(&render_category_label(layout, idx, node));
        }
    }

    format!(r#"<div class="treemap">{tiles}{labels}</div>"#)
}

/// The first-listed leaf of each category is highlighted
pub fn is_hot(node: &LayoutNode) -> bool {
    node.is_leaf && node.depth >= 2 && node.index == 0
}

fn render_tile(layout: &TreemapLayout, node: &LayoutNode) -> String {
    let hot = is_hot(node);
    let class = if hot { "tile hot" } else { "tile" };
    let badge = if hot { r#" <span class="hot-badge">HOT</span>"# } else { "" };
    let color = node.color.as_deref().unwrap_or(DEFAULT_TILE_COLOR);

    format!(
        r#"<div class="{class}" style="{position} background-color: {color};" title="{name}"><span class="tile-name">{name}{badge}</span><span class="tile-stars">&#9733; {stars}</span></div>"#,
        position = position_style(&node.rect, layout.width, layout.height),
        color = escape(color),
        name = escape(&node.name),
        stars = thousands(node.value.max(0.0).round() as u64),
    )
}

fn render_category_label(layout: &TreemapLayout, idx: usize, node: &LayoutNode) -> String {
    let color = node
        .color
        .as_deref()
        .or_else(|| layout.children(idx).find_map(|c| c.color.as_deref()))
        .unwrap_or(DEFAULT_TILE_COLOR);

    format!(
        r#"<div class="category-label" style="left: {left}; top: {top};"><span class="category-dot" style="background-color: {color}"></span>{name}</div>"#,
        left = percent(node.rect.x0, layout.width),
        top = percent(node.rect.y0, layout.height),
        color = escape(color),
        name = escape(&node.name),
    )
}

fn position_style(rect: &Rect, width: f64, height: f64) -> String {
    format!(
        "left: {}; top: {}; width: {}; height: {};",
        percent(rect.x0, width),
        percent(rect.y0, height),
        percent(rect.width(), width),
        percent(rect.height(), height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FixtureStore;
    use crate::treemap::{layout, LayoutOptions};

    fn fixture_layout() -> TreemapLayout {
        let store = FixtureStore::builtin();
        layout(store.size_tree(), &LayoutOptions::default()).unwrap()
    }

    #[test]
    fn test_one_tile_per_leaf() {
        let layout = fixture_layout();
        let html = render_treemap(&layout);

        assert_eq!(html.matches(r#"<div class="tile"#).count(), 14);
        assert_eq!(html.matches("category-label").count(), 3);
    }

    #[test]
    fn test_hot_tiles_are_first_listed_leaves() {
        let layout = fixture_layout();
        let hot: Vec<&str> = layout
            .nodes
            .iter()
            .filter(|n| is_hot(n))
            .map(|n| n.name.as_str())
            .collect();

        assert_eq!(hot, vec!["langchain", "shadcn/ui", "bun"]);

        let html = render_treemap(&layout);
        assert_eq!(html.matches("HOT</span>").count(), 3);
        assert!(html.contains("&#9733; 82,000"));
    }

    #[test]
    fn test_category_label_position() {
        let layout = fixture_layout();
        let ai = layout.find("AI & ML").unwrap();
        let html = render_treemap(&layout);

        let expected = format!(
            "left: {}; top: {};",
            percent(ai.rect.x0, layout.width),
            percent(ai.rect.y0, layout.height)
        );
        assert!(html.contains(&expected));
        assert!(html.contains("AI &amp; ML"));
    }

    #[test]
    fn test_view_header() {
        let html = render_treemap_view(&fixture_layout());

        assert!(html.contains("Tech Pulse Treemap"));
        assert!(html.contains("All Languages"));
        assert_eq!(html.matches("filter active").count(), 1);
    }
}
