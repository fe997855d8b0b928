//! Tree nodes and the helpers every engine shares.

use std::cmp::Ordering;

/// An owned, possibly empty, subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A single value in a tree along with the two subtrees it owns.
#[derive(Debug)]
pub struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1. Only the AVL engine keeps this up to date.
    pub(crate) height: usize,
}

impl Node {
    /// Allocates a leaf holding `value`.
    pub(crate) fn create(value: i32) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The node holding the smallest value in this subtree.
    pub(crate) fn min(&self) -> &Node {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn fix_height(&mut self) {
        self.height = cached_height(&self.left).max(cached_height(&self.right)) + 1;
    }

    /// Height of the left subtree minus the height of the right subtree, using cached heights.
    pub(crate) fn balance_factor(&self) -> isize {
        cached_height(&self.left) as isize - cached_height(&self.right) as isize
    }
}

/// The cached height of a subtree. Empty subtrees have height 0.
pub(crate) fn cached_height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Walks the whole subtree to find its height. Empty subtrees have height 0.
pub(crate) fn computed_height(link: &Link) -> usize {
    let mut height = 0;
    let mut stack: Vec<(&Node, usize)> = link.as_deref().map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }
    height
}

/// Descends from `link` looking for `value`.
pub(crate) fn find(link: &Link, value: i32) -> Option<&Node> {
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match value.cmp(&node.value) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Equal => return Some(node),
            Ordering::Greater => node.right.as_deref(),
        };
    }
    None
}

/// Releases a subtree one node at a time so deep trees don't exhaust the call stack.
pub(crate) fn free(link: Link) {
    let mut stack: Vec<Box<Node>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Collects the values of a subtree in sorted order.
pub(crate) fn values(link: &Link) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut current = link.as_deref();
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        match stack.pop() {
            Some(node) => {
                values.push(node.value);
                current = node.right.as_deref();
            }
            None => return values,
        }
    }
}
