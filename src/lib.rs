//! This crate exposes an ordered set of integers backed by one of two
//! interchangeable Binary Search Trees (BSTs).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! owns up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for a value takes `O(height)` so everything hinges on keeping the
//! tree short. The two engines handle that differently:
//!
//! - [`TreeKind::Binary`] never reshapes the tree on its own. Inserting sorted
//!   values makes it as tall as it is long, until [`Tree::balance`] rebuilds it
//!   into a tree of minimal height.
//! - [`TreeKind::Avl`] rotates nodes on every insert and delete so that the
//!   heights of any node's two subtrees never differ by more than one.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Tree, TreeKind};
//!
//! let mut tree = Tree::new(TreeKind::Avl);
//!
//! // Nothing in here yet.
//! assert!(!tree.find(1));
//!
//! tree.insert(1);
//! assert!(tree.find(1));
//!
//! // Values are unique - inserting one again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the value was there.
//! assert!(tree.delete(1));
//! assert!(!tree.delete(1));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
mod engine;
mod error;
pub mod layout;
mod node;
mod tree;


pub use config::{TreeConfig, TreeKind};
pub use error::TreeError;
pub use node::Node;
pub use tree::Tree;
