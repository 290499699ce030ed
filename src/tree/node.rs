//! A single tree node owning its two optional subtrees.

use std::cmp::Ordering;
use std::fmt;

/// Owned child link.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A binary search tree node.
///
/// Values in `left` are strictly less than `value`; values in `right` are
/// greater than or equal to it.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Create a leaf node.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Leftmost node of this subtree.
    pub fn min_from(&self) -> &Node<T> {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// Rightmost node of this subtree.
    pub fn max_from(&self) -> &Node<T> {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}

impl<T: Ord> Node<T> {
    /// Search this subtree for the first node equal to `value`.
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// The child slot `value` descends into: left if strictly less, else right.
    pub(crate) fn slot_for(&mut self, value: &T) -> &mut Link<T> {
        if *value < self.value {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}

/// Work item for the iterative renderer.
enum Piece<'a, T> {
    Child(Option<&'a Node<T>>),
    Text(&'static str),
}

/// Renders `"<value> (<left-or-_> <right-or-_>)"` recursively, using an
/// explicit stack so degenerate chains don't exhaust the call stack.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Child(Some(self))];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Child(None) => f.write_str("_")?,
                Piece::Child(Some(node)) => {
                    write!(f, "{} (", node.value)?;
                    // Pushed in reverse of output order.
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Child(node.right.as_deref()));
                    stack.push(Piece::Text(" "));
                    stack.push(Piece::Child(node.left.as_deref()));
                }
            }
        }
        Ok(())
    }
}

/// Shows the value and the values of the direct children only.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}
