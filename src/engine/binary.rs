//! An unbalanced BST. Inserts and deletes never reshape the tree so inserting sorted values
//! degrades it into a list. [`Engine::balance`] rebuilds it into a tree of minimal height.

use crate::error::TreeError;
use crate::node::{self, Link, Node};

use super::Engine;

/// The unbalanced engine.
pub(crate) struct Binary;

impl Engine for Binary {
    /// Heights aren't cached so this visits every node.
    fn height(root: &Link) -> usize {
        node::computed_height(root)
    }

    fn balance(root: &mut Link, size: usize) -> Result<(), TreeError> {
        // Zero, one or two nodes can't be any shorter than they already are.
        if size <= 2 {
            return Ok(());
        }

        let mut nodes: Vec<Option<Box<Node>>> = Vec::new();
        nodes
            .try_reserve_exact(size)
            .map_err(|_| TreeError::Allocation { nodes: size })?;

        linearize(root.take(), &mut nodes);
        *root = rebuild(&mut nodes);
        Ok(())
    }
}

/// Moves every node of `link` into `nodes` in sorted order, detaching each from its children.
fn linearize(link: Link, nodes: &mut Vec<Option<Box<Node>>>) {
    let mut stack = Vec::new();
    let mut current = link;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(mut node) => {
                current = node.right.take();
                nodes.push(Some(node));
            }
            None => return,
        }
    }
}

/// Builds a tree of minimal height out of sorted, detached nodes. The lower middle node becomes
/// the root so any extra node ends up on the right.
fn rebuild(nodes: &mut [Option<Box<Node>>]) -> Link {
    if nodes.is_empty() {
        return None;
    }

    let mid = (nodes.len() - 1) / 2;
    let (left, rest) = nodes.split_at_mut(mid);
    let (root, right) = rest.split_at_mut(1);
    let mut root = root[0].take()?;
    root.left = rebuild(left);
    root.right = rebuild(right);
    Some(root)
}
