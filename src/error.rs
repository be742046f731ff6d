use thiserror::Error;

/// A structural error found while reading the topology of a tree.
///
/// No tree is built from a topology that fails validation.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum TopologyError {
    /// A character outside of the alphabet of the encoding.
    #[error("unexpected symbol {symbol:?} at position {position}")]
    UnexpectedSymbol { symbol: char, position: usize },

    /// A closing symbol without a matching opening symbol.
    #[error("unmatched closing symbol at position {position}")]
    UnmatchedClose { position: usize },

    /// The input ended while `depth` symbols were still open.
    #[error("{depth} unclosed symbol(s) at the end of the input")]
    Unclosed { depth: usize },

    /// The root was closed, but the input goes on.
    #[error("a second root starts at position {position}")]
    MultipleRoots { position: usize },

    /// The input describes no node at all.
    #[error("the topology is empty")]
    Empty,

    /// The parent of `node` is not on the path from the root to the previous node in preorder.
    #[error("node {node} has an invalid parent")]
    InvalidParent { node: usize },
}
