/*!
# Errors

All fallible operations of the [`Network`](crate::net::Network) facade report
through [`NetworkError`]. Errors are raised synchronously at the call boundary
and never leave a network partially mutated.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors reported by the [`Network`](crate::net::Network) facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A network must contain at least one node.
    #[error("a network needs at least one node")]
    InvalidNodeCount,

    /// A node id was outside `1..=n`, or a pair of distinct endpoints was
    /// expected and both ids coincide.
    #[error("invalid node id {id} for a network on {n} nodes")]
    InvalidNodeId { id: Node, n: NumNodes },

    /// An edge list row was malformed: an endpoint outside `1..=n`, a
    /// self-loop, or an unordered pair listed more than once.
    #[error("invalid edge list entry ({0}, {1})")]
    InvalidInput(Node, Node),
}
