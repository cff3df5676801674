//! Treemap layout engine
//!
//! Turns a [`SizeTreeNode`] hierarchy into one rectangle per node.
//!
//! # Algorithm
//!
//! 1. Validate the tree (leaf xor internal, finite non-negative sizes) and
//!    compute each internal node's value as the sum of its leaves.
//! 2. Sort every child list by descending value, stable on ties.
//! 3. Walk the tree top-down. Each node is inset by half the inner padding
//!    of its parent; internal nodes then reserve outer padding on all sides
//!    (the top side uses the label band) and squarify their children into
//!    what is left.
//! 4. Optionally round every coordinate to whole units.
//!
//! When every sibling at a level weighs zero, the siblings split the space
//! equally instead of collapsing, so the engine never divides by zero.

use serde::{Deserialize, Serialize};

use super::error::{TreemapError, TreemapResult};
use super::tile::{squarify, Rect, PHI};
use crate::store::SizeTreeNode;

/// Drawing area and padding for a layout run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutOptions {
    /// Drawing width in units
    pub width: f64,
    /// Drawing height in units
    pub height: f64,
    /// Padding inside every internal node (left, right, bottom)
    pub padding_outer: f64,
    /// Label band at the top of every internal node (replaces top padding)
    pub padding_top: f64,
    /// Gap between siblings
    pub padding_inner: f64,
    /// Round coordinates to whole units
    pub round: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            padding_outer: 4.0,
            padding_top: 20.0,
            padding_inner: 4.0,
            round: true,
        }
    }
}

impl LayoutOptions {
    /// Default padding over a custom drawing area
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Builder: set outer, top and inner padding
    pub fn padding(mut self, outer: f64, top: f64, inner: f64) -> Self {
        self.padding_outer = outer;
        self.padding_top = top;
        self.padding_inner = inner;
        self
    }

    /// Builder: drop all padding
    pub fn unpadded(self) -> Self {
        self.padding(0.0, 0.0, 0.0)
    }

    /// Builder: enable or disable rounding
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Reject unusable areas and paddings
    pub fn validate(&self) -> TreemapResult<()> {
        for (label, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(TreemapError::InvalidDimensions(format!(
                    "{} must be finite and non-negative, got {}",
                    label, value
                )));
            }
        }
        for (label, value) in [
            ("padding_outer", self.padding_outer),
            ("padding_top", self.padding_top),
            ("padding_inner", self.padding_inner),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TreemapError::InvalidDimensions(format!(
                    "{} must be finite and non-negative, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// One laid-out node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutNode {
    pub name: String,
    /// 0 for the root
    pub depth: usize,
    /// Leaf size, or the sum of descendant leaf sizes
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Position of the parent in [`TreemapLayout::nodes`]
    pub parent: Option<usize>,
    /// Position among siblings in the input tree (before sorting)
    pub index: usize,
    pub is_leaf: bool,
    pub rect: Rect,
}

/// Flat, pre-order layout of a whole tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreemapLayout {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<LayoutNode>,
}

impl TreemapLayout {
    /// The root node (always first)
    pub fn root(&self) -> &LayoutNode {
        &self.nodes[0]
    }

    /// Leaves in layout order
    pub fn leaves(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(|n| n.is_leaf)
    }

    /// Direct children of the node at `idx`, in layout order
    pub fn children(&self, idx: usize) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(move |n| n.parent == Some(idx))
    }

    /// Nodes at a given depth, in layout order
    pub fn at_depth(&self, depth: usize) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(move |n| n.depth == depth)
    }

    /// First node with this name
    pub fn find(&self, name: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Validated, value-annotated, sorted copy of the input tree
struct WorkNode<'a> {
    name: &'a str,
    color: Option<&'a str>,
    value: f64,
    index: usize,
    children: Vec<WorkNode<'a>>,
}

impl<'a> WorkNode<'a> {
    fn build(node: &'a SizeTreeNode, index: usize, path: &str) -> TreemapResult<Self> {
        let path = if path.is_empty() {
            node.name.clone()
        } else {
            format!("{}/{}", path, node.name)
        };

        match (node.size, node.children.as_ref()) {
            (Some(_), Some(_)) => Err(TreemapError::MalformedNode {
                path,
                reason: "node has both a size and children".to_string(),
            }),
            (None, None) => Err(TreemapError::MalformedNode {
                path,
                reason: "node has neither a size nor children".to_string(),
            }),
            (None, Some(children)) if children.is_empty() => Err(TreemapError::MalformedNode {
                path,
                reason: "internal node has an empty child list".to_string(),
            }),
            (Some(size), None) => {
                if !size.is_finite() || size < 0.0 {
                    return Err(TreemapError::InvalidSize { path, size });
                }
                Ok(Self {
                    name: &node.name,
                    color: node.color.as_deref(),
                    // -0.0 would sort after 0.0 under total_cmp
                    value: size + 0.0,
                    index,
                    children: Vec::new(),
                })
            }
            (None, Some(children)) => {
                let mut built = children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| WorkNode::build(child, i, &path))
                    .collect::<TreemapResult<Vec<_>>>()?;

                // Stable: equal values keep insertion order.
                built.sort_by(|a, b| b.value.total_cmp(&a.value));

                Ok(Self {
                    name: &node.name,
                    color: node.color.as_deref(),
                    value: built.iter().map(|c| c.value).sum(),
                    index,
                    children: built,
                })
            }
        }
    }
}

/// Lay out `tree` inside `options.width x options.height`
///
/// Returns every node in pre-order (parents before children, siblings by
/// descending value). Identical input always yields identical output.
pub fn layout(tree: &SizeTreeNode, options: &LayoutOptions) -> TreemapResult<TreemapLayout> {
    options.validate()?;
    let root = WorkNode::build(tree, 0, "")?;

    let mut nodes = Vec::with_capacity(tree.node_count());
    position(&root, options.bounds(), 0.0, 0, None, options, &mut nodes);

    tracing::debug!(
        nodes = nodes.len(),
        width = options.width,
        height = options.height,
        "Computed treemap layout"
    );

    Ok(TreemapLayout {
        width: options.width,
        height: options.height,
        nodes,
    })
}

fn position(
    node: &WorkNode<'_>,
    tile: Rect,
    inset: f64,
    depth: usize,
    parent: Option<usize>,
    options: &LayoutOptions,
    out: &mut Vec<LayoutNode>,
) {
    let rect = tile.inset_uniform(inset);
    let own_idx = out.len();

    out.push(LayoutNode {
        name: node.name.to_string(),
        depth,
        value: node.value,
        color: node.color.map(str::to_string),
        parent,
        index: node.index,
        is_leaf: node.children.is_empty(),
        rect: if options.round { rect.round() } else { rect },
    });

    if node.children.is_empty() {
        return;
    }

    // Children are each inset by half the gap, so widen the interior by the
    // same amount to keep the outer padding exact.
    let half = options.padding_inner / 2.0;
    let interior = rect.inset(
        options.padding_outer - half,
        options.padding_top - half,
        options.padding_outer - half,
        options.padding_outer - half,
    );

    let weights: Vec<f64> = if node.value > 0.0 {
        node.children.iter().map(|c| c.value).collect()
    } else {
        vec![1.0; node.children.len()]
    };

    let tiles = squarify(&weights, interior, PHI);
    for (child, child_tile) in node.children.iter().zip(tiles) {
        position(child, child_tile, half, depth + 1, Some(own_idx), options, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::treemap_data;

    fn ai_tree() -> SizeTreeNode {
        SizeTreeNode::branch(
            "root",
            vec![SizeTreeNode::branch(
                "AI",
                vec![
                    SizeTreeNode::leaf("langchain", 82000.0),
                    SizeTreeNode::leaf("ollama", 45000.0),
                ],
            )],
        )
    }

    #[test]
    fn test_root_covers_drawing_area() {
        let result = layout(&treemap_data(), &LayoutOptions::default()).unwrap();

        assert_eq!(result.root().rect, Rect::new(0.0, 0.0, 1200.0, 600.0));
        assert_eq!(result.len(), 18);
        assert_eq!(result.leaves().count(), 14);
    }

    #[test]
    fn test_two_leaf_scenario_ratio() {
        let result = layout(&ai_tree(), &LayoutOptions::new(1200.0, 600.0)).unwrap();

        let langchain = result.find("langchain").unwrap().rect.area();
        let ollama = result.find("ollama").unwrap().rect.area();

        assert!(langchain > ollama);
        let expected = 82000.0 / 45000.0;
        let actual = langchain / ollama;
        assert!(
            ((actual - expected) / expected).abs() < 0.05,
            "ratio {} vs {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_padding_matches_label_band() {
        let result = layout(&ai_tree(), &LayoutOptions::default()).unwrap();

        let ai = result.find("AI").unwrap().rect;
        assert_eq!(ai, Rect::new(4.0, 20.0, 1196.0, 596.0));

        let langchain = result.find("langchain").unwrap().rect;
        assert_eq!(langchain.x0, 8.0);
        assert_eq!(langchain.y0, 40.0);
    }

    #[test]
    fn test_children_sorted_descending_with_stable_ties() {
        let tree = SizeTreeNode::branch(
            "root",
            vec![
                SizeTreeNode::leaf("small", 1.0),
                SizeTreeNode::leaf("tie-a", 5.0),
                SizeTreeNode::leaf("big", 9.0),
                SizeTreeNode::leaf("tie-b", 5.0),
            ],
        );
        let result = layout(&tree, &LayoutOptions::default()).unwrap();
        let order: Vec<&str> = result.children(0).map(|n| n.name.as_str()).collect();

        assert_eq!(order, vec!["big", "tie-a", "tie-b", "small"]);
        assert_eq!(result.find("big").unwrap().index, 2);
    }

    #[test]
    fn test_siblings_do_not_overlap() {
        let result = layout(&treemap_data(), &LayoutOptions::default()).unwrap();

        for (idx, _) in result.nodes.iter().enumerate() {
            let kids: Vec<&LayoutNode> = result.children(idx).collect();
            for (i, a) in kids.iter().enumerate() {
                assert!(result.nodes[idx].rect.contains(&a.rect));
                for b in &kids[i + 1..] {
                    assert!(!a.rect.overlaps(&b.rect), "{} overlaps {}", a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_unpadded_leaves_fill_area() {
        let options = LayoutOptions::new(1200.0, 600.0).unpadded().round(false);
        let result = layout(&treemap_data(), &options).unwrap();

        let area: f64 = result.leaves().map(|l| l.rect.area()).sum();
        assert!((area - 1200.0 * 600.0).abs() < 1e-6);

        let total = result.root().value;
        for leaf in result.leaves() {
            let expected = 1200.0 * 600.0 * leaf.value / total;
            assert!((leaf.rect.area() - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_padded_children_fill_parent_interior() {
        let options = LayoutOptions::default().round(false);
        let half = options.padding_inner / 2.0;
        let result = layout(&treemap_data(), &options).unwrap();

        for (idx, node) in result.nodes.iter().enumerate().filter(|(_, n)| !n.is_leaf) {
            let interior = node.rect.inset(
                options.padding_outer - half,
                options.padding_top - half,
                options.padding_outer - half,
                options.padding_outer - half,
            );
            let filled: f64 = result
                .children(idx)
                .map(|c| c.rect.inset_uniform(-half).area())
                .sum();

            assert!(
                (interior.area() - filled).abs() < 1e-6,
                "{}: interior {} vs filled {}",
                node.name,
                interior.area(),
                filled
            );
        }
    }

    #[test]
    fn test_negative_zero_ties_keep_insertion_order() {
        let tree = SizeTreeNode::branch(
            "root",
            vec![
                SizeTreeNode::leaf("negz", -0.0),
                SizeTreeNode::leaf("z", 0.0),
                SizeTreeNode::leaf("a", 1.0),
            ],
        );
        let result = layout(&tree, &LayoutOptions::default()).unwrap();
        let order: Vec<&str> = result.children(0).map(|n| n.name.as_str()).collect();

        assert_eq!(order, vec!["a", "negz", "z"]);
        assert!(result.find("negz").unwrap().value.is_sign_positive());
    }

    #[test]
    fn test_deterministic() {
        let options = LayoutOptions::default();
        let a = layout(&treemap_data(), &options).unwrap();
        let b = layout(&treemap_data(), &options).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_zero_leaf_gets_non_negative_area() {
        let tree = SizeTreeNode::branch(
            "root",
            vec![
                SizeTreeNode::leaf("a", 10.0),
                SizeTreeNode::leaf("zero", 0.0),
                SizeTreeNode::leaf("b", 5.0),
            ],
        );
        let result = layout(&tree, &LayoutOptions::default().round(false)).unwrap();
        let zero = result.find("zero").unwrap().rect;

        assert!(!zero.area().is_nan());
        assert!(zero.area() >= 0.0);
        assert!(zero.area() < 1.0);
    }

    #[test]
    fn test_all_zero_siblings_share_equally() {
        let tree = SizeTreeNode::branch(
            "root",
            vec![SizeTreeNode::leaf("a", 0.0), SizeTreeNode::leaf("b", 0.0)],
        );
        let options = LayoutOptions::new(100.0, 50.0).unpadded().round(false);
        let result = layout(&tree, &options).unwrap();

        let a = result.find("a").unwrap().rect.area();
        let b = result.find("b").unwrap().rect.area();
        assert!((a - 2500.0).abs() < 1e-9);
        assert!((b - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_malformed_nodes() {
        let mut both = SizeTreeNode::branch("root", vec![SizeTreeNode::leaf("x", 1.0)]);
        both.size = Some(3.0);
        assert!(matches!(
            layout(&both, &LayoutOptions::default()),
            Err(TreemapError::MalformedNode { .. })
        ));

        let neither = SizeTreeNode {
            name: "ghost".to_string(),
            size: None,
            children: None,
            color: None,
        };
        let tree = SizeTreeNode::branch("root", vec![neither]);
        match layout(&tree, &LayoutOptions::default()) {
            Err(TreemapError::MalformedNode { path, .. }) => assert_eq!(path, "root/ghost"),
            other => panic!("unexpected: {:?}", other),
        }

        let empty = SizeTreeNode::branch("root", vec![]);
        assert!(layout(&empty, &LayoutOptions::default()).is_err());
    }

    #[test]
    fn test_rejects_bad_sizes_and_dimensions() {
        let tree = SizeTreeNode::branch("root", vec![SizeTreeNode::leaf("neg", -1.0)]);
        assert!(matches!(
            layout(&tree, &LayoutOptions::default()),
            Err(TreemapError::InvalidSize { .. })
        ));

        let tree = SizeTreeNode::branch("root", vec![SizeTreeNode::leaf("nan", f64::NAN)]);
        assert!(layout(&tree, &LayoutOptions::default()).is_err());

        let err = layout(&treemap_data(), &LayoutOptions::new(f64::INFINITY, 10.0)).unwrap_err();
        assert!(matches!(err, TreemapError::InvalidDimensions(_)));
    }

    #[test]
    fn test_deeper_nesting_is_supported() {
        let tree = SizeTreeNode::branch(
            "root",
            vec![SizeTreeNode::branch(
                "a",
                vec![SizeTreeNode::branch(
                    "b",
                    vec![SizeTreeNode::leaf("c", 1.0), SizeTreeNode::leaf("d", 3.0)],
                )],
            )],
        );
        let result = layout(&tree, &LayoutOptions::default()).unwrap();

        assert_eq!(result.find("d").unwrap().depth, 3);
        let b = result.find("b").unwrap().rect;
        assert!(b.contains(&result.find("c").unwrap().rect));
    }

    #[test]
    fn test_lone_leaf_root() {
        let result = layout(&SizeTreeNode::leaf("solo", 7.0), &LayoutOptions::default()).unwrap();

        assert_eq!(result.len(), 1);
        assert!(result.root().is_leaf);
        assert_eq!(result.root().rect.area(), 1200.0 * 600.0);
    }
}
