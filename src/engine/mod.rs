//! The BST algorithm shared by both engines.
//!
//! Inserting and deleting always descend the same way: compare against the current node and step
//! into one child. The nodes passed on the way down are detached and kept on a path so that, on
//! the way back up, each one is reattached and the engine gets a chance to fix the subtree it was
//! handed. The AVL engine recomputes heights and rotates on the way up. The unbalanced engine has
//! nothing to do there, so its inserts just walk down to an empty slot.
//!
//! An unbalanced tree can be as tall as it is long, so neither walk may recurse.

pub(crate) mod avl;
pub(crate) mod binary;

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::node::{Link, Node};

pub(crate) use avl::Avl;
pub(crate) use binary::Binary;

/// A balancing strategy. The hooks default to doing nothing which is exactly what an unbalanced
/// BST wants.
pub(crate) trait Engine {
    /// Whether the hooks below do anything. Engines that never rebalance let inserts skip the
    /// path bookkeeping.
    const REBALANCES: bool = false;

    /// The height of the subtree rooted at `root`.
    fn height(root: &Link) -> usize;

    /// Called on every ancestor of a freshly inserted `value`, deepest first.
    fn rebalance_insert(_slot: &mut Link, _value: i32) {}

    /// Called on every ancestor of a removed node, deepest first.
    fn rebalance_delete(_slot: &mut Link) {}

    /// Reshapes the tree of `size` nodes rooted at `root` to minimize its height.
    fn balance(_root: &mut Link, _size: usize) -> Result<(), TreeError> {
        Ok(())
    }
}

/// Detached ancestors, shallowest first, each with the side the descent continued on.
type Path = Vec<(Box<Node>, Ordering)>;

fn child_mut(node: &mut Node, side: Ordering) -> &mut Link {
    match side {
        Ordering::Less => &mut node.left,
        _ => &mut node.right,
    }
}

/// Detaches nodes from `root` down towards `value`, pushing each onto `path`. Returns the node
/// holding `value`, or `None` once the descent falls off the tree.
fn descend(root: &mut Link, value: i32, path: &mut Path) -> Link {
    let mut cursor = root.take();
    while let Some(mut node) = cursor {
        let side = value.cmp(&node.value);
        if side == Ordering::Equal {
            return Some(node);
        }
        cursor = child_mut(&mut node, side).take();
        path.push((node, side));
    }
    None
}

/// Reattaches `child` to the ancestors on `path`, deepest first, calling `fix` on each subtree
/// as it is rebuilt. Returns the new root.
fn ascend(mut path: Path, mut child: Link, mut fix: impl FnMut(&mut Link)) -> Link {
    while let Some((mut parent, side)) = path.pop() {
        *child_mut(&mut parent, side) = child;
        child = Some(parent);
        fix(&mut child);
    }
    child
}

/// Inserts `value` below `root`. Returns whether a node was added; inserting a value that is
/// already present changes nothing.
pub(crate) fn insert<E: Engine>(root: &mut Link, value: i32) -> bool {
    if !E::REBALANCES {
        return insert_in_place(root, value);
    }

    let mut path = Vec::new();
    match descend(root, value, &mut path) {
        Some(existing) => {
            *root = ascend(path, Some(existing), |_| {});
            false
        }
        None => {
            *root = ascend(path, Some(Node::create(value)), |slot| {
                E::rebalance_insert(slot, value)
            });
            true
        }
    }
}

/// Walks down to the empty slot for `value` and fills it. Nothing above the new leaf changes.
fn insert_in_place(root: &mut Link, value: i32) -> bool {
    let mut slot = root;
    while let Some(node) = slot {
        slot = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut node.right,
        };
    }
    *slot = Some(Node::create(value));
    true
}

/// Deletes `value` from below `root`. Returns whether a node was removed; deleting a missing
/// value changes nothing.
pub(crate) fn delete<E: Engine>(root: &mut Link, value: i32) -> bool {
    let mut path = Vec::new();
    let Some(mut target) = descend(root, value, &mut path) else {
        *root = ascend(path, None, |_| {});
        return false;
    };

    let replacement = match (target.left.take(), target.right.take()) {
        // Two children: take over the successor's value and remove it from the right subtree
        // instead.
        (Some(left), Some(right)) => {
            let (successor, right) = remove_min::<E>(right);
            target.value = successor;
            target.left = Some(left);
            target.right = right;
            let mut slot = Some(target);
            E::rebalance_delete(&mut slot);
            slot
        }
        (left, right) => left.or(right),
    };

    *root = ascend(path, replacement, E::rebalance_delete);
    true
}

/// Removes the smallest node of `subtree`. Returns its value and what is left of the subtree.
fn remove_min<E: Engine>(subtree: Box<Node>) -> (i32, Link) {
    let mut path = Vec::new();
    let mut node = subtree;
    while let Some(left) = node.left.take() {
        path.push((node, Ordering::Less));
        node = left;
    }
    // The minimum has no left child so its right child takes its place.
    let rest = ascend(path, node.right.take(), E::rebalance_delete);
    (node.value, rest)
}
