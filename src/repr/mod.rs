/*!
# Graph Representations

The traversal engine only queries graphs through the traits of [`ops`](crate::ops); the
representations of this module are the ones shipped with the crate.

- [`AdjGraph`] stores outgoing (and, if directed, incoming) adjacency lists of labelled edges over
  the nodes `0..n`. [`DiGraph`] and [`UnGraph`] are its directed and undirected flavours.
- [`LabelGraph`] maps arbitrary hashable node values onto an [`AdjGraph`]. [`LabelDiGraph`] and
  [`LabelUnGraph`] are its directed and undirected flavours.
- [`Transposed`] is a borrowed view that reverses all edges of a graph with in-edges.

Parallel edges and self-loops are stored as given.
*/

mod adjacency;
mod labeled;
mod transposed;

pub use adjacency::*;
pub use labeled::*;
pub use transposed::*;
