//! Binary search tree with a mandatory root.

use std::fmt;

use log::trace;

use crate::types::{DsError, DsResult};

use super::{Iter, Node};

/// An unbalanced binary search tree.
///
/// The tree always holds at least its seed value. Equal values are kept as
/// distinct nodes in the right subtree. No rebalancing is done, so
/// adversarial insertion orders degrade to a linear chain.
pub struct OrderedTree<T> {
    root: Node<T>,
    len: usize,
}

impl<T: Ord> OrderedTree<T> {
    /// Create a tree holding only `seed`.
    pub fn new(seed: T) -> Self {
        Self {
            root: Node::new(seed),
            len: 1,
        }
    }

    /// Create a tree from `seed`, then insert `values` in iteration order.
    pub fn with_values<I: IntoIterator<Item = T>>(seed: T, values: I) -> Self {
        let mut tree = Self::new(seed);
        tree.extend(values);
        trace!("built ordered tree with {} values", tree.len);
        tree
    }

    /// Create a tree whose seed is the first element of `values`.
    ///
    /// Fails with [`DsError::InvalidInput`] when `values` is empty.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> DsResult<Self> {
        let mut values = values.into_iter();
        let seed = values
            .next()
            .ok_or_else(|| DsError::InvalidInput("tree requires a seed value".to_string()))?;
        Ok(Self::with_values(seed, values))
    }

    /// Insert a value. Duplicates go to the right subtree.
    pub fn insert(&mut self, value: T) {
        let mut slot = self.root.slot_for(&value);
        while let Some(node) = slot {
            slot = node.slot_for(&value);
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Find the first node holding `value`.
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        self.root.search(value)
    }

    /// Like [`search`](Self::search), but a miss is a [`DsError::NotFound`].
    pub fn find(&self, value: &T) -> DsResult<&Node<T>>
    where
        T: fmt::Debug,
    {
        self.search(value)
            .ok_or_else(|| DsError::NotFound(format!("value {:?}", value)))
    }

    /// True if some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }
}

impl<T> OrderedTree<T> {
    /// The root node.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Smallest value.
    pub fn min(&self) -> &T {
        &self.min_node().value
    }

    /// Largest value.
    pub fn max(&self) -> &T {
        &self.max_node().value
    }

    /// Node holding the smallest value.
    pub fn min_node(&self) -> &Node<T> {
        self.root.min_from()
    }

    /// Node holding the largest value.
    pub fn max_node(&self) -> &Node<T> {
        self.root.max_from()
    }

    /// Number of stored values, duplicates included. Never zero.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the tree cannot be empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(&self.root, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Values in non-decreasing order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// Debug-lists the values in order instead of walking the node structure.
struct InOrder<'a, T>(&'a OrderedTree<T>);

impl<T: fmt::Debug> fmt::Debug for InOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("values", &InOrder(self))
            .finish()
    }
}

impl<T> Drop for OrderedTree<T> {
    // Unlink nodes one at a time; the derived drop would recurse per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.root.left.take());
        stack.extend(self.root.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
