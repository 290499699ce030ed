//! Ordered binary search tree.

pub mod iter;
pub mod node;
pub mod ordered_tree;

pub use iter::Iter;
pub use node::Node;
pub use ordered_tree::OrderedTree;
