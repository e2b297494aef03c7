/*!
# Errors

All fallible queries of this crate return [`Result`].

Note that an unreachable target is **not** an error: shortest-path queries report it as
[`NO_PATH`](crate::algo::NO_PATH) or as an empty path, since the absence of a path is an
expected outcome.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Which size guard of a [`Limits`](crate::config::Limits) was violated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// Too many nodes were enumerated
    Nodes,
    /// Too many edges were enumerated
    Edges,
}

impl std::fmt::Display for BoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundKind::Nodes => write!(f, "nodes"),
            BoundKind::Edges => write!(f, "edges"),
        }
    }
}

/// Errors surfaced by graph queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `max_nodes` / `max_edges` guard was exceeded while enumerating a potentially
    /// unbounded graph. The query is aborted; nothing is truncated silently.
    #[error("bound exceeded: more than {limit} {kind} enumerated")]
    BoundExceeded {
        /// The guard that tripped
        kind: BoundKind,
        /// The configured maximum
        limit: usize,
    },

    /// An index graph was queried with a node outside of `0..n`.
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange {
        /// The offending node
        node: Node,
        /// Number of nodes of the queried graph
        number_of_nodes: NumNodes,
    },

    /// The label of a non-existing edge was requested.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound {
        /// Debug-rendering of the source endpoint
        from: String,
        /// Debug-rendering of the target endpoint
        to: String,
    },

    /// A topological order was requested for a graph containing a directed cycle.
    #[error("graph contains a cycle through node {node}")]
    CycleDetected {
        /// Debug-rendering of a node on the cycle
        node: String,
    },
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::EdgeNotFound`] from arbitrary endpoints
    pub fn edge_not_found<N: std::fmt::Debug>(from: &N, to: &N) -> Self {
        Error::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Builds an [`Error::CycleDetected`] from an arbitrary node
    pub fn cycle_detected<N: std::fmt::Debug>(node: &N) -> Self {
        Error::CycleDetected {
            node: format!("{node:?}"),
        }
    }
}
