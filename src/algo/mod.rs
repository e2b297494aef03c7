/*!
# Graph Algorithms

This module provides the **traversal engine** and the queries built on top of it.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use sgraphs::algo::*;
```
and gain access to traversals, connectivity, shortest paths and Eulerian circuits.

Every search is the same algorithm: take the next item from a [`Frontier`], accept it if its node was
not visited yet, and insert the unvisited neighbors. Only the frontier differs: a stack yields DFS,
a queue BFS and a [`HeapFrontier`] ordered by a [`CostOrder`] Dijkstra or A*.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod all_pairs;
mod connectivity;
mod cost;
mod eulerian;
mod frontier;
mod shortest_path;
mod traversal;

pub use all_pairs::*;
pub use connectivity::*;
pub use cost::*;
pub use eulerian::*;
pub use frontier::*;
pub use shortest_path::*;
pub use traversal::*;
