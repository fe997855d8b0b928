//! Engine selection and tree configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

/// Largest random value (exclusive) handed out by
/// [`Tree::insert_random`][crate::Tree::insert_random] unless configured otherwise.
pub const DEFAULT_MAX_RANDOM_VALUE: i32 = 99;

/// The balancing strategy a [`Tree`][crate::Tree] uses. Chosen once when the tree is
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    /// Unbalanced BST. Only gets short again when asked to via
    /// [`Tree::balance`][crate::Tree::balance].
    Binary,
    /// AVL tree, rebalanced on every insert and delete.
    Avl,
}

impl TreeKind {
    /// Both engines, in selector order.
    pub const ALL: [TreeKind; 2] = [TreeKind::Binary, TreeKind::Avl];

    /// The canonical name of this engine.
    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Binary => "binary",
            TreeKind::Avl => "avl",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeKind {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bst" => Ok(TreeKind::Binary),
            "avl" => Ok(TreeKind::Avl),
            _ => Err(TreeError::UnknownKind(s.to_string())),
        }
    }
}

/// Numeric selectors: `1` is the binary engine and `2` is AVL.
impl TryFrom<i32> for TreeKind {
    type Error = TreeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TreeKind::Binary),
            2 => Ok(TreeKind::Avl),
            _ => Err(TreeError::UnknownKind(code.to_string())),
        }
    }
}

/// Settings for building a [`Tree`][crate::Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Which engine backs the tree.
    pub kind: TreeKind,
    /// Random inserts draw from `0..max_random_value`. Anything below `1` draws from `0..1`,
    /// so every random insert is `0`.
    pub max_random_value: i32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            kind: TreeKind::Avl,
            max_random_value: DEFAULT_MAX_RANDOM_VALUE,
        }
    }
}

impl TreeConfig {
    /// Default settings with the given engine.
    pub fn with_kind(kind: TreeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}
