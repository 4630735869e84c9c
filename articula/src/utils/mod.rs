//! Shared utilities for the articula CLI

pub mod format;
pub mod table;
pub mod tree;

pub use format::*;
pub use table::*;
pub use tree::{NodeType, TreeNode, TreeOptions, render_tree};
