//! A self-balancing BST (specifically, an AVL tree). Every node caches its height and, on the way
//! back up from an insert or delete, each ancestor recomputes it and rotates whenever its
//! children's heights differ by more than one. The tree is therefore always balanced and
//! [`Engine::balance`] has nothing to do.
//!
//! See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.

use crate::node::{self, Link, Node};

use super::Engine;

/// The AVL engine.
pub(crate) struct Avl;

impl Engine for Avl {
    const REBALANCES: bool = true;

    /// Read straight from the root's cached height.
    fn height(root: &Link) -> usize {
        node::cached_height(root)
    }

    fn rebalance_insert(slot: &mut Link, value: i32) {
        rebalance(slot, |node| node.insert_rotation(value));
    }

    fn rebalance_delete(slot: &mut Link) {
        rebalance(slot, Node::delete_rotation);
    }
}

/// The restructuring a subtree root needs to restore the AVL invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Balanced,
    Left,
    Right,
    LeftRight,
    RightLeft,
}

fn rebalance(slot: &mut Link, choose: impl FnOnce(&Node) -> Rotation) {
    let Some(mut root) = slot.take() else {
        return;
    };
    root.fix_height();
    let rotation = choose(&*root);
    let root = match rotation {
        Rotation::Balanced => root,
        Rotation::Left => rotate_left(root),
        Rotation::Right => rotate_right(root),
        Rotation::LeftRight => {
            root.left = root.left.take().map(rotate_left);
            rotate_right(root)
        }
        Rotation::RightLeft => {
            root.right = root.right.take().map(rotate_right);
            rotate_left(root)
        }
    };

    if cfg!(debug_assertions) {
        let left_height = node::cached_height(&root.left);
        let right_height = node::cached_height(&root.right);
        assert_eq!(root.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
    *slot = Some(root);
}

impl Node {
    /// Picks a rotation using where `value` was just inserted. Insertion grows a subtree by at
    /// most one level so a single (possibly double) rotation always suffices.
    fn insert_rotation(&self, value: i32) -> Rotation {
        let balance = self.balance_factor();
        if balance > 1 {
            match self.left.as_deref() {
                Some(left) if value < left.value => Rotation::Right,
                Some(left) if value > left.value => Rotation::LeftRight,
                _ => Rotation::Balanced,
            }
        } else if balance < -1 {
            match self.right.as_deref() {
                Some(right) if value > right.value => Rotation::Left,
                Some(right) if value < right.value => Rotation::RightLeft,
                _ => Rotation::Balanced,
            }
        } else {
            Rotation::Balanced
        }
    }

    /// Picks a rotation using the taller child's own balance. Deletion can leave that child
    /// perfectly balanced, in which case a single rotation is enough.
    fn delete_rotation(&self) -> Rotation {
        let balance = self.balance_factor();
        if balance > 1 {
            match self.left.as_deref().map(Node::balance_factor) {
                Some(left) if left >= 0 => Rotation::Right,
                Some(_) => Rotation::LeftRight,
                None => Rotation::Balanced,
            }
        } else if balance < -1 {
            match self.right.as_deref().map(Node::balance_factor) {
                Some(right) if right <= 0 => Rotation::Left,
                Some(_) => Rotation::RightLeft,
                None => Rotation::Balanced,
            }
        } else {
            Rotation::Balanced
        }
    }
}

/// Rotates `old_root` to the right. This moves its left child up and `old_root` down. A node
/// without a left child is returned untouched.
///
/// ```text
///      old_root              new_root
///       /    \               /     \
///  new_root   z    ->       x    old_root
///   /   \                          /  \
///  x     y                        y    z
/// ```
fn rotate_right(mut old_root: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = old_root.left.take() else {
        return old_root;
    };
    old_root.left = new_root.right.take();
    // `old_root` is now the child so its height has to be fixed first.
    old_root.fix_height();
    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Rotates `old_root` to the left. The mirror image of [`rotate_right`].
fn rotate_left(mut old_root: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = old_root.right.take() else {
        return old_root;
    };
    old_root.right = new_root.left.take();
    old_root.fix_height();
    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}
