use thiserror::Error;

/// Errors surfaced by tree operations.
///
/// Missing values and duplicate inserts are not errors: those operations
/// report `false` and leave the tree alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The balance pass could not reserve room for every node. The tree is
    /// left exactly as it was.
    #[error("could not allocate room for {nodes} nodes while balancing")]
    Allocation {
        /// How many nodes the tree held.
        nodes: usize,
    },
    /// The engine selector did not name a known engine.
    #[error("unknown tree type {0:?}")]
    UnknownKind(String),
}
