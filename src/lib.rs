/*!
`sgraphs` is a generic **s**earch engine for graphs: one frontier-driven traversal behind
breadth-first, depth-first and best-first search, and the queries built on top of it.

# Traversal

Every search of this crate is the same loop: take the next pending item from a
[`Frontier`](crate::algo::Frontier), accept it if its node was not visited yet, and insert the
unvisited neighbors. The removal policy of the frontier is the only difference:

- a stack (`Vec`) yields **DFS**,
- a queue (`VecDeque`) yields **BFS**,
- a [`HeapFrontier`](crate::algo::HeapFrontier) ordered by a [`CostOrder`](crate::algo::CostOrder)
  yields **Dijkstra** or, with a heuristic, **A\***.

On top of this, the [`algo`] module provides connectivity, cycle detection, topological sorting,
strongly connected components (Kosaraju), single-source and all-pairs shortest paths and Eulerian
circuits (Hierholzer).

# Graphs

The engine never owns or mutates a graph; it only queries it through the capability traits in
[`ops`]. Two flavours are supported by the very same code:

- **index graphs** number their nodes `0..n` and use dense per-node storage (bitsets, vectors),
- **label graphs** use arbitrary hashable values as nodes and use hashed per-node storage.

See the [`repr`] module for the shipped representations:

- [`DiGraph`](crate::repr::DiGraph) / [`UnGraph`](crate::repr::UnGraph)
- [`LabelDiGraph`](crate::repr::LabelDiGraph) / [`LabelUnGraph`](crate::repr::LabelUnGraph)
- [`Transposed`](crate::repr::Transposed), a view reversing all edges

# Usage

In most use-cases, `use sgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use sgraphs::{prelude::*, algo::*};

let g = DiGraph::from_edges(5, [(0, 1, 2.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)]);

assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
assert_eq!(g.topological_sort(Limits::default()).unwrap()[0], 4);

let tree = g.shortest_paths_by(0, LabelCost).unwrap();
assert_eq!(tree.cost_of(&3), 5.0);
assert_eq!(tree.path_nodes_to(&3), vec![0, 1, 2, 3]);
assert_eq!(tree.cost_of(&4), NO_PATH);
```

Queries that enumerate the whole graph accept [`Limits`](crate::config::Limits) and fail with an
[`Error`] instead of running unbounded.
*/

pub mod algo;
pub mod config;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use error::{Error, Result};

/// `sgraphs::prelude` includes definitions for nodes and edges, all graph capability traits, all
/// implemented representations and search limits.
pub mod prelude {
    pub use super::{config::Limits, edge::*, node::*, ops::*, repr::*};
}
