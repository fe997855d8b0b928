//! Where to draw each node of a tree.
//!
//! The root sits centered near the top. Children hang two box-heights below their parent and are
//! pushed sideways by a spacing that starts at half the width of the bottom level and halves
//! with every level, so subtrees never overlap.

use crate::node::Node;
use crate::tree::Tree;

/// Width of a node's box.
pub const NODE_SIZE_X: i32 = 20;
/// Height of a node's box.
pub const NODE_SIZE_Y: i32 = 20;
/// Vertical position of the root.
pub const ROOT_Y: i32 = 100;

/// A node's position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The node's value.
    pub value: i32,
    /// Left edge of the node's box.
    pub x: i32,
    /// Top edge of the node's box.
    pub y: i32,
    /// Top-left corner of the parent's box, if this isn't the root.
    pub parent: Option<(i32, i32)>,
}

impl Placement {
    /// Where an edge from the parent should end: the top middle of this node's box.
    pub fn edge_end(&self) -> (i32, i32) {
        (self.x + NODE_SIZE_X / 2, self.y)
    }

    /// Where an edge to this node should start: the bottom middle of the parent's box.
    pub fn edge_start(&self) -> Option<(i32, i32)> {
        self.parent
            .map(|(x, y)| (x + NODE_SIZE_X / 2, y + NODE_SIZE_Y))
    }
}

/// Places every node of `tree` on a canvas `width` wide, root first then each left subtree
/// before its right subtree.
pub fn layout(tree: &Tree, width: i32) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(tree.len());
    let Some(root) = tree.root() else {
        return placements;
    };

    let spacing = sibling_spacing(tree.height());
    let mut stack: Vec<(&Node, i32, i32, i32, Option<(i32, i32)>)> =
        vec![(root, width / 2, ROOT_Y, spacing, None)];
    while let Some((node, x, y, spacing, parent)) = stack.pop() {
        placements.push(Placement {
            value: node.value(),
            x,
            y,
            parent,
        });

        let child_y = y.saturating_add(NODE_SIZE_Y * 2);
        let offset = NODE_SIZE_X.saturating_mul(spacing);
        // Pushed in reverse so the left child is placed first.
        if let Some(right) = node.right() {
            stack.push((right, x.saturating_add(offset), child_y, spacing / 2, Some((x, y))));
        }
        if let Some(left) = node.left() {
            stack.push((left, x.saturating_sub(offset), child_y, spacing / 2, Some((x, y))));
        }
    }
    placements
}

/// Horizontal spacing, in boxes, between the root and each of its children: `2^(height - 1) / 2`.
fn sibling_spacing(height: usize) -> i32 {
    match height {
        0 => 0,
        h => {
            let spacing = 1u64.checked_shl((h - 1) as u32).unwrap_or(u64::MAX) / 2;
            // Beyond this the canvas coordinates saturate anyway.
            i32::try_from(spacing).unwrap_or(i32::MAX)
        }
    }
}
