use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use ordtree::{Tree, TreeKind};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> i32 {
    2i32.pow(num_levels) - 1
}

/// Builds a tree by inserting values in an unbalanced manner. This adds elements in an
/// ascending manner to ensure the tree is a list.
fn get_unbalanced_tree(num_levels: u32) -> Tree {
    let mut tree = Tree::new(TreeKind::Binary);
    for x in 0..num_nodes_in_full_tree(num_levels) {
        tree.insert(x);
    }
    tree
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that, without
/// any self-balancing, the resultant tree will still be balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: u32) -> Tree {
    let mut tree = Tree::new(TreeKind::Binary);
    let xs = (0..num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Benches `balance` on binary trees that start out as a list and that are already as short as
/// they can be. Either way every node is visited.
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");

    for num_levels in [3, 7, 11, 15] {
        let tree_tests: [(&str, fn(u32) -> Tree); 2] = [
            ("unbalanced", get_unbalanced_tree),
            ("balanced", get_balanced_tree),
        ];
        for (name, build) in tree_tests {
            let id = BenchmarkId::new(name, num_nodes_in_full_tree(num_levels));

            group.bench_function(id, |b| {
                b.iter_batched(
                    || build(num_levels),
                    |mut tree| {
                        let _ = tree.balance();
                        tree
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
