use ordtree::{Node, Tree, TreeKind};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both and that every operation
/// reported the same outcome.
fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<i32>) -> bool {
    for op in ops {
        let agrees = match *op {
            Op::Insert(v) => tree.insert(v.into()) == set.insert(v.into()),
            Op::Delete(v) => {
                let v = i32::from(v);
                tree.delete(v) == set.remove(&v)
            }
            Op::Balance => tree.balance().is_ok(),
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }
    true
}

/// Returns the height of the subtree if every node in it is AVL balanced.
fn avl_height(node: Option<&Node>) -> Option<usize> {
    match node {
        None => Some(0),
        Some(n) => {
            let left = avl_height(n.left())?;
            let right = avl_height(n.right())?;
            (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
        }
    }
}

/// Whether the in-order walk of the tree is strictly increasing.
fn strictly_increasing(tree: &Tree) -> bool {
    tree.values().windows(2).all(|w| w[0] < w[1])
}

/// The smallest possible height for `n` nodes, `ceil(log2(n + 1))`.
fn min_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn binary_matches_model(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new(TreeKind::Binary);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && strictly_increasing(&tree)
        && tree.values() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn avl_matches_model(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new(TreeKind::Avl);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && strictly_increasing(&tree)
        && tree.values() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn avl_stays_balanced(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new(TreeKind::Avl);
    let mut set = BTreeSet::new();

    for op in ops {
        if !do_ops(&[op], &mut tree, &mut set) || avl_height(tree.root()) != Some(tree.height()) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn binary_balance_is_minimal(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(TreeKind::Binary);
    for x in &xs {
        tree.insert((*x).into());
    }
    let before = tree.values();
    let len = tree.len();

    tree.balance().is_ok()
        && tree.values() == before
        && tree.len() == len
        && tree.height() == min_height(len)
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, dup: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let dup = i32::from(xs[dup % xs.len()]);

    TreeKind::ALL.iter().all(|&kind| {
        let mut tree = Tree::new(kind);
        for x in &xs {
            tree.insert((*x).into());
        }
        let before = (tree.values(), tree.len(), tree.height(), tree.root().map(Node::value));
        !tree.insert(dup)
            && before == (tree.values(), tree.len(), tree.height(), tree.root().map(Node::value))
    })
}

#[quickcheck]
fn insert_then_delete_restores_values(xs: Vec<i8>, v: i8) -> bool {
    TreeKind::ALL.iter().all(|&kind| {
        let mut tree = Tree::new(kind);
        for x in &xs {
            tree.insert((*x).into());
        }
        if tree.find(v.into()) {
            return true;
        }
        let before = tree.values();

        tree.insert(v.into()) && tree.delete(v.into()) && tree.values() == before
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let added: BTreeSet<_> = xs.iter().copied().collect();

    TreeKind::ALL.iter().all(|&kind| {
        let mut tree = Tree::new(kind);
        for x in &xs {
            tree.insert((*x).into());
        }
        xs.iter().all(|x| tree.find((*x).into()))
            && nots
                .iter()
                .filter(|x| !added.contains(*x))
                .all(|x| !tree.find((*x).into()))
    })
}
