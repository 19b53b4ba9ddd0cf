use thiserror::Error;

use crate::NodeId;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedwoodTreeError {
    /// A value does not sort strictly after its in-order predecessor
    #[error("Values are out of order at {0}")]
    Unordered(NodeId),

    /// The root of the tree is red
    #[error("The root ({0}) is red")]
    RedRoot(NodeId),

    /// A red node has a red child
    #[error("Red {0} has a red child")]
    RedChild(NodeId),

    /// Two paths below a node pass a different number of black nodes
    #[error("Black height below {node} differs: expected {expected}, found {found}")]
    BlackHeight {
        /// The node whose absent child ends the offending path
        node: NodeId,
        /// The black height of the first path that was measured
        expected: usize,
        /// The black height of the offending path
        found: usize,
    },

    /// A child does not point back at its parent
    #[error("{0} does not point back at its parent")]
    BrokenLink(NodeId),

    /// The recorded size disagrees with the number of reachable nodes
    #[error("Tree records {expected} nodes but {found} are reachable")]
    CountMismatch {
        /// The recorded size
        expected: usize,
        /// The number of reachable nodes
        found: usize,
    },

    /// A tree shape ended before every position was filled
    #[error("Incomplete tree shape: {0} positions were never filled")]
    IncompleteShape(usize),

    /// A node or `null` was added to a tree shape that was already complete
    #[error("Tree shape is already complete")]
    ExcessShape,
}
