/*!
# Search Limits

Queries over the whole graph (topological sorting, all-pairs costs, Eulerian circuits, ...)
accept [`Limits`] to guard against graphs whose node function is unbounded.
Exceeding a limit aborts the query with [`Error::BoundExceeded`].

```rust
use sgraphs::config::Limits;

let limits = Limits::unbounded().with_max_nodes(2);
assert!(limits.check_nodes(2).is_ok());
assert!(limits.check_nodes(3).is_err());
```
*/

use crate::error::{BoundKind, Error, Result};

/// Optional upper bounds on the number of nodes/edges a query may enumerate.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Limits {
    max_nodes: Option<usize>,
    max_edges: Option<usize>,
}

impl Limits {
    /// No bounds at all (same as `Limits::default()`)
    pub const fn unbounded() -> Self {
        Self {
            max_nodes: None,
            max_edges: None,
        }
    }

    /// Sets the maximum number of nodes a query may enumerate
    pub fn set_max_nodes(&mut self, max_nodes: usize) {
        self.max_nodes = Some(max_nodes);
    }

    /// Sets the maximum number of nodes a query may enumerate
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.set_max_nodes(max_nodes);
        self
    }

    /// Sets the maximum number of edges a query may enumerate
    pub fn set_max_edges(&mut self, max_edges: usize) {
        self.max_edges = Some(max_edges);
    }

    /// Sets the maximum number of edges a query may enumerate
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.set_max_edges(max_edges);
        self
    }

    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    pub fn max_edges(&self) -> Option<usize> {
        self.max_edges
    }

    /// Returns an error iff `count` nodes exceed the node bound
    pub fn check_nodes(&self, count: usize) -> Result<()> {
        Self::check(self.max_nodes, count, BoundKind::Nodes)
    }

    /// Returns an error iff `count` edges exceed the edge bound
    pub fn check_edges(&self, count: usize) -> Result<()> {
        Self::check(self.max_edges, count, BoundKind::Edges)
    }

    fn check(limit: Option<usize>, count: usize, kind: BoundKind) -> Result<()> {
        match limit {
            Some(limit) if count > limit => {
                tracing::debug!(%kind, limit, count, "search bound exceeded");
                Err(Error::BoundExceeded { kind, limit })
            }
            _ => Ok(()),
        }
    }
}
