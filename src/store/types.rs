//! Core data types for the Synapse dashboard
//!
//! This module defines the records the dashboard renders:
//! - `RepoRecord`: One entry in the trending list
//! - `DeepDiveRecord`: The featured project page
//! - `SizeTreeNode`: Weighted hierarchy fed to the treemap
//! - `Trend` and `Comparison`: Small closed enums/records used by both

use serde::{Deserialize, Serialize};

/// Direction of a repository's rank movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Climbing the list
    Up,
    /// Falling down the list
    Down,
    /// No movement; magnitude is never displayed
    Neutral,
}

impl Trend {
    /// Get all trends for iteration
    pub fn all() -> &'static [Trend] {
        &[Trend::Up, Trend::Down, Trend::Neutral]
    }

    /// Whether the trend magnitude should be shown next to the arrow
    pub fn shows_magnitude(&self) -> bool {
        !matches!(self, Trend::Neutral)
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

/// A single trending repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepoRecord {
    /// Unique identifier (used by selection)
    pub id: String,
    /// Display position, 1-based and distinct across records
    pub rank: u32,
    /// Repository name
    pub name: String,
    /// Owning user or organization
    pub owner: String,
    /// Free-text description
    pub description: String,
    /// Primary language label
    pub language: String,
    /// Hex color for the language dot
    pub language_color: String,
    /// Star count as a display string (e.g. "142k")
    pub stars: String,
    /// Hacker News comment count
    pub hn_comments: u32,
    /// Last-updated label (e.g. "2h ago")
    pub updated: String,
    /// Whether the repository entered the list today
    #[serde(default)]
    pub is_new: bool,
    /// Rank movement direction
    pub trend: Trend,
    /// Rank movement magnitude
    pub trend_value: u32,
    /// Category label
    pub category: String,
    /// GitHub `owner/repo` path when it differs from `owner/name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_path: Option<String>,
}

impl RepoRecord {
    /// Create a record with required fields; everything else starts empty
    pub fn new(id: impl Into<String>, rank: u32, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rank,
            name: name.into(),
            owner: owner.into(),
            description: String::new(),
            language: String::new(),
            language_color: String::new(),
            stars: String::new(),
            hn_comments: 0,
            updated: String::new(),
            is_new: false,
            trend: Trend::Neutral,
            trend_value: 0,
            category: String::new(),
            repo_path: None,
        }
    }

    /// Builder: set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: set language label and color
    pub fn language(mut self, language: impl Into<String>, color: impl Into<String>) -> Self {
        self.language = language.into();
        self.language_color = color.into();
        self
    }

    /// Builder: set star and HN comment counts
    pub fn counts(mut self, stars: impl Into<String>, hn_comments: u32) -> Self {
        self.stars = stars.into();
        self.hn_comments = hn_comments;
        self
    }

    /// Builder: set last-updated label
    pub fn updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = updated.into();
        self
    }

    /// Builder: mark as new today
    pub fn new_entry(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Builder: set trend direction and magnitude
    pub fn trend(mut self, trend: Trend, value: u32) -> Self {
        self.trend = trend;
        self.trend_value = value;
        self
    }

    /// Builder: set category label
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set the GitHub `owner/repo` path
    pub fn repo_path(mut self, path: impl Into<String>) -> Self {
        self.repo_path = Some(path.into());
        self
    }

    /// `owner/repo` on GitHub; names that already contain a slash are used as is
    pub fn full_name(&self) -> String {
        match &self.repo_path {
            Some(path) => path.clone(),
            None if self.name.contains('/') => self.name.clone(),
            None => format!("{}/{}", self.owner, self.name),
        }
    }

    /// GitHub URL for the repository
    pub fn url(&self) -> String {
        format!("https://github.com/{}", self.full_name())
    }
}

/// One discussion comment on the deep-dive page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub user: String,
    pub text: String,
}

impl Comment {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
        }
    }
}

/// Fixed-shape comparison column ("why it matters")
///
/// Exactly four fields; renderers enumerate them through [`Comparison::rows`]
/// so the row order and labels are checked at compile time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comparison {
    pub privacy: String,
    pub table_extraction: String,
    pub dependency: String,
    pub license: String,
}

impl Comparison {
    /// Row labels in display order
    pub const LABELS: [&'static str; 4] = ["Privacy", "Table Extraction", "Dependency", "License"];

    pub fn new(
        privacy: impl Into<String>,
        table_extraction: impl Into<String>,
        dependency: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            privacy: privacy.into(),
            table_extraction: table_extraction.into(),
            dependency: dependency.into(),
            license: license.into(),
        }
    }

    /// `(label, value)` pairs in display order
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            (Self::LABELS[0], self.privacy.as_str()),
            (Self::LABELS[1], self.table_extraction.as_str()),
            (Self::LABELS[2], self.dependency.as_str()),
            (Self::LABELS[3], self.license.as_str()),
        ]
    }
}

/// A named competitor column in the comparison matrix
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Competitor {
    pub name: String,
    pub comparison: Comparison,
}

/// The featured project shown on the deep-dive page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeepDiveRecord {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub stars: String,
    pub forks: String,
    pub tags: Vec<String>,
    /// Narrative technical analysis
    pub tech_analysis: String,
    /// Ordered capability bullet points
    pub capabilities: Vec<String>,
    /// Ordered performance bullet points
    pub performance: Vec<String>,
    /// The featured project's comparison column
    pub why_it_matters: Comparison,
    /// The column it is compared against
    pub competitor: Competitor,
    /// Ordered discussion comments
    pub comments: Vec<Comment>,
    /// "Trending since" label in the hero block
    pub trending_since: String,
    /// Body of the suggested-action card
    pub actionable_idea: String,
}

/// A node of the weighted hierarchy laid out by the treemap
///
/// Either a leaf (`size` set, no `children`) or an internal node
/// (`children` set, no `size`). The treemap engine rejects anything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeTreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SizeTreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SizeTreeNode {
    /// Create a leaf with a size
    pub fn leaf(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
            children: None,
            color: None,
        }
    }

    /// Create an internal node from its children
    pub fn branch(name: impl Into<String>, children: Vec<SizeTreeNode>) -> Self {
        Self {
            name: name.into(),
            size: None,
            children: Some(children),
            color: None,
        }
    }

    /// Builder: set display color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Whether this node carries a size and no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Sum of descendant leaf sizes (the leaf's own size for leaves)
    pub fn total_size(&self) -> f64 {
        match &self.children {
            Some(children) => children.iter().map(SizeTreeNode::total_size).sum(),
            None => self.size.unwrap_or(0.0),
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map(|c| c.iter().map(SizeTreeNode::node_count).sum())
            .unwrap_or(0)
    }

    /// Depth of the deepest leaf (a lone leaf has depth 0)
    pub fn depth(&self) -> usize {
        self.children
            .as_ref()
            .and_then(|c| c.iter().map(SizeTreeNode::depth).max())
            .map(|d| d + 1)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_record_builder() {
        let repo = RepoRecord::new("bun", 5, "oven-sh", "bun")
            .language("Zig", "#ec915c")
            .counts("68k", 76)
            .trend(Trend::Down, 2)
            .category("System");

        assert_eq!(repo.full_name(), "oven-sh/bun");
        assert_eq!(repo.url(), "https://github.com/oven-sh/bun");
        assert_eq!(repo.trend, Trend::Down);
        assert!(!repo.is_new);
    }

    #[test]
    fn test_repo_path_overrides_owner_and_name() {
        let repo = RepoRecord::new("shadcn", 3, "shadcn", "shadcn/ui").repo_path("shadcn-ui/ui");
        assert_eq!(repo.full_name(), "shadcn-ui/ui");
        assert_eq!(repo.url(), "https://github.com/shadcn-ui/ui");

        let slashed = RepoRecord::new("ui", 1, "shadcn", "shadcn/ui");
        assert_eq!(slashed.url(), "https://github.com/shadcn/ui");
    }

    #[test]
    fn test_trend_serialization() {
        assert_eq!(serde_json::to_string(&Trend::Neutral).unwrap(), "\"neutral\"");
        let trend: Trend = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(trend, Trend::Up);
        assert!(!Trend::Neutral.shows_magnitude());
        assert!(Trend::Down.shows_magnitude());
    }

    #[test]
    fn test_comparison_rows_are_ordered() {
        let cmp = Comparison::new("Native", "Advanced", "Moderate", "GPL-3.0");
        let rows = cmp.rows();

        assert_eq!(rows[0], ("Privacy", "Native"));
        assert_eq!(rows[1], ("Table Extraction", "Advanced"));
        assert_eq!(rows[2], ("Dependency", "Moderate"));
        assert_eq!(rows[3], ("License", "GPL-3.0"));
    }

    #[test]
    fn test_size_tree_totals() {
        let tree = SizeTreeNode::branch(
            "root",
            vec![
                SizeTreeNode::branch(
                    "AI",
                    vec![SizeTreeNode::leaf("a", 3.0), SizeTreeNode::leaf("b", 4.0)],
                ),
                SizeTreeNode::leaf("c", 5.0),
            ],
        );

        assert_eq!(tree.total_size(), 12.0);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 2);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_size_tree_deserialization() {
        let json = r##"{"name":"root","children":[{"name":"x","size":10,"color":"#fff"}]}"##;
        let tree: SizeTreeNode = serde_json::from_str(json).unwrap();

        let children = tree.children.as_ref().unwrap();
        assert_eq!(children[0].size, Some(10.0));
        assert_eq!(children[0].color.as_deref(), Some("#fff"));
        assert!(tree.size.is_none());
    }
}
