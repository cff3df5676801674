//! Synapse Treemap
//!
//! Hierarchical area partitioning for the category view:
//!
//! - **tile**: `Rect` plus the slice / dice / squarify tilers
//! - **layout**: Validation, sorting, padding and the recursive walk
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use synapse::store::SizeTreeNode;
//! use synapse::treemap::{layout, LayoutOptions};
//!
//! let tree = SizeTreeNode::branch(
//!     "AI",
//!     vec![
//!         SizeTreeNode::leaf("langchain", 82000.0),
//!         SizeTreeNode::leaf("ollama", 45000.0),
//!     ],
//! );
//!
//! let result = layout(&tree, &LayoutOptions::new(1200.0, 600.0))?;
//! let langchain = result.find("langchain").unwrap();
//! let ollama = result.find("ollama").unwrap();
//! assert!(langchain.rect.area() > ollama.rect.area());
//! # Ok::<(), synapse::treemap::TreemapError>(())
//! ```

pub mod error;
pub mod layout;
pub mod tile;

// Re-export commonly used types
pub use error::{TreemapError, TreemapResult};
pub use layout::{layout, LayoutNode, LayoutOptions, TreemapLayout};
pub use tile::{dice, slice, squarify, Rect, PHI};
