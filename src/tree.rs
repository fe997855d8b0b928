//! The tree callers hold on to. It owns the nodes, counts them, and forwards every operation to
//! the engine picked when it was created.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Tree, TreeKind};
//!
//! let mut tree = Tree::new(TreeKind::Binary);
//!
//! // Sorted inserts turn an unbalanced tree into a list.
//! for value in 1..=7 {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.height(), 7);
//!
//! // Until it's asked to balance itself.
//! tree.balance().unwrap();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.values(), vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! // An AVL tree never gets that tall in the first place.
//! let mut avl = Tree::new(TreeKind::Avl);
//! for value in 1..=7 {
//!     avl.insert(value);
//! }
//! assert_eq!(avl.height(), 3);
//! ```

use std::fmt;

use rand::Rng;
use tracing::{debug, error, trace, warn};

use crate::config::{TreeConfig, TreeKind};
use crate::engine::{self, Avl, Binary, Engine};
use crate::error::TreeError;
use crate::node::{self, Link, Node};

/// Runs `$op` with the engine type matching `$kind` in scope as `E`.
macro_rules! with_engine {
    ($kind:expr, $e:ident => $op:expr) => {
        match $kind {
            TreeKind::Binary => {
                type $e = Binary;
                $op
            }
            TreeKind::Avl => {
                type $e = Avl;
                $op
            }
        }
    };
}

/// An ordered set of integers backed by either an unbalanced BST or an AVL tree.
pub struct Tree {
    root: Link,
    /// Number of nodes. Only changes when a node is actually added or removed.
    size: usize,
    kind: TreeKind,
    max_random_value: i32,
}

impl Default for Tree {
    fn default() -> Self {
        Self::with_config(TreeConfig::default())
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        node::free(self.root.take());
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("kind", &self.kind)
            .field("size", &self.size)
            .field("values", &self.values())
            .finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree` using the given engine.
    pub fn new(kind: TreeKind) -> Self {
        Self::with_config(TreeConfig::with_kind(kind))
    }

    /// Generates a new, empty `Tree` from `config`.
    pub fn with_config(config: TreeConfig) -> Self {
        debug!(kind = %config.kind, "creating tree");
        Self {
            root: None,
            size: 0,
            kind: config.kind,
            max_random_value: config.max_random_value,
        }
    }

    /// Generates a new, empty `Tree` using the engine named by `selector` (`"binary"` or
    /// `"avl"`). An unknown selector is reported and no tree is created.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Tree, TreeKind};
    ///
    /// assert_eq!(Tree::create("avl").map(|t| t.kind()).ok(), Some(TreeKind::Avl));
    /// assert!(Tree::create("splay").is_err());
    /// ```
    pub fn create(selector: &str) -> Result<Self, TreeError> {
        match selector.parse() {
            Ok(kind) => Ok(Self::new(kind)),
            Err(err) => {
                error!(selector, "{err}");
                Err(err)
            }
        }
    }

    /// The engine backing this tree.
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node, for callers that want to walk the tree's shape themselves.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// The number of levels in the tree. An empty tree has height 0.
    ///
    /// The binary engine walks the whole tree to answer this while the AVL engine reads it off
    /// the root.
    pub fn height(&self) -> usize {
        with_engine!(self.kind, E => E::height(&self.root))
    }

    /// Whether `value` is in the tree.
    pub fn find(&self, value: i32) -> bool {
        node::find(&self.root, value).is_some()
    }

    /// Inserts `value`. Returns `false`, leaving the tree untouched, if it was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Tree, TreeKind};
    ///
    /// let mut tree = Tree::new(TreeKind::Avl);
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) -> bool {
        let inserted = with_engine!(self.kind, E => engine::insert::<E>(&mut self.root, value));
        if inserted {
            self.size += 1;
        }
        trace!(value, inserted, size = self.size, "insert");
        inserted
    }

    /// Deletes `value`. Returns `false`, leaving the tree untouched, if it wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Tree, TreeKind};
    ///
    /// let mut tree = Tree::new(TreeKind::Binary);
    /// tree.insert(1);
    /// assert!(tree.delete(1));
    /// assert!(!tree.delete(1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: i32) -> bool {
        let deleted = with_engine!(self.kind, E => engine::delete::<E>(&mut self.root, value));
        if deleted {
            self.size -= 1;
        }
        trace!(value, deleted, size = self.size, "delete");
        deleted
    }

    /// Reshapes the tree to the smallest height its values allow. AVL trees are always
    /// balanced so this does nothing for them.
    ///
    /// If the scratch space for the rebuild can't be allocated the tree is left as it was and
    /// [`TreeError::Allocation`] is returned.
    pub fn balance(&mut self) -> Result<(), TreeError> {
        let size = self.size;
        with_engine!(self.kind, E => E::balance(&mut self.root, size)).map_err(|err| {
            warn!(size, "{err}");
            err
        })?;
        // Fields are only evaluated when the event is enabled so the height walk is skipped
        // otherwise.
        debug!(size, height = self.height(), "balanced");
        Ok(())
    }

    /// Inserts a random value from `0..max_random_value`. Returns the value drawn and whether it
    /// was inserted; drawing a value that's already present changes nothing.
    ///
    /// A configured maximum below `1` is treated as `1`, so every draw is `0`.
    pub fn insert_random<R: Rng>(&mut self, rng: &mut R) -> (i32, bool) {
        let value = rng.gen_range(0..self.max_random_value.max(1));
        (value, self.insert(value))
    }

    /// Removes every value, keeping the engine.
    pub fn clear(&mut self) {
        node::free(self.root.take());
        self.size = 0;
        debug!(kind = %self.kind, "cleared");
    }

    /// Releases the tree and every node in it.
    pub fn free(self) {
        drop(self);
    }

    /// Every value in the tree, smallest first.
    pub fn values(&self) -> Vec<i32> {
        node::values(&self.root)
    }
}
