/*!
# Graph Capabilities

The engine never owns or mutates a graph; it only queries it through the traits of this module.

- [`GraphNodes`] enumerates nodes and selects the per-node storage (visited set, node maps)
  a traversal uses for this kind of graph.
- [`GraphEdges`] enumerates outgoing edges and answers edge-existence queries.
- [`GraphInEdges`] additionally enumerates incoming edges (needed for transposed views).
- [`IndexGraph`] marks graphs whose nodes are `0..n`.
- [`GraphType`] tells whether edges are directed or undirected.

There are two flavours of graphs:
- **index graphs** use [`Node`] and select [`NodeBitSet`] / `Vec<Option<T>>`, i.e. dense arrays of size `n`,
- **label graphs** use arbitrary hashable values and select `FxHashSet` / `FxHashMap`.

Both are driven by the very same traversal code; the storage is chosen at compile time by the
associated types of [`GraphNodes`].

# Example
```rust
use sgraphs::prelude::*;

let g = DiGraph::from_edges(3, [(0, 1, 2.0), (1, 2, 0.5)]);

assert_eq!(g.neighbors_of(0).collect::<Vec<_>>(), vec![1]);
assert_eq!(g.try_get_edge(&1, &2), Some(0.5));
assert!(g.edge_label(&2, &0).is_err());
```
*/

use std::{fmt::Debug, hash::Hash, ops::Range};

use crate::{
    edge::*,
    error::{Error, Result},
    node::*,
    utils::{FromCapacity, Map, Set},
};

/// Marker for the orientation of edges
pub trait GraphDirection {
    const UNDIRECTED: bool;
}

/// Edges have an orientation: `(u, v)` and `(v, u)` are different edges
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Edges have no orientation: `(u, v)` and `(v, u)` are the same edge
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl GraphDirection for Directed {
    const UNDIRECTED: bool = false;
}

impl GraphDirection for Undirected {
    const UNDIRECTED: bool = true;
}

/// Tells whether a graph is directed or undirected
pub trait GraphType {
    type Dir: GraphDirection;

    fn is_directed() -> bool {
        !Self::Dir::UNDIRECTED
    }

    fn is_undirected() -> bool {
        Self::Dir::UNDIRECTED
    }
}

/// Node enumeration and the choice of per-node storage used by traversals.
pub trait GraphNodes {
    /// Node identity. Index graphs use [`Node`].
    type Node: Clone + Eq + Hash + Debug;

    /// Set of nodes used to track visited nodes during one traversal
    type NodeSet: Set<Self::Node> + FromCapacity;

    /// Map from nodes used for per-node tables such as tentative costs or parent edges
    type NodeMap<T>: Map<Self::Node, T> + FromCapacity;

    /// Returns an iterator over all nodes.
    /// The order must be stable during a single traversal; whole-graph queries restart
    /// in this order.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Returns the number of nodes if known (exact for index graphs).
    /// It is only used to size per-node tables and may be `0` for graphs of unknown size.
    fn number_of_nodes_hint(&self) -> usize;

    /// Returns an error if `u` is no valid node of this graph.
    /// Index graphs report [`Error::NodeOutOfRange`]; label graphs accept every value by default
    /// and treat unknown nodes as isolated.
    fn check_node(&self, _u: &Self::Node) -> Result<()> {
        Ok(())
    }

    /// Returns an empty visited-set sized for this graph
    fn new_node_set(&self) -> Self::NodeSet {
        let n = self.number_of_nodes_hint();
        Self::NodeSet::from_total_used_capacity(n, n)
    }

    /// Returns an empty node-map sized for this graph
    fn new_node_map<T>(&self) -> Self::NodeMap<T> {
        let n = self.number_of_nodes_hint();
        Self::NodeMap::<T>::from_total_used_capacity(n, n)
    }
}

/// Shorthand for the edge type of a graph
pub type EdgeOf<G> = Edge<<G as GraphNodes>::Node, <G as GraphEdges>::Label>;

/// Getters for outgoing edges and edge-existence tests
pub trait GraphEdges: GraphNodes {
    /// Label attached to each edge (e.g. a weight); `()` for unlabelled graphs
    type Label: Clone;

    /// Returns an iterator over the outgoing edges of a given node.
    /// Every yielded edge has `from == u`.
    /// For undirected graphs every edge `{u, v}` is reported from both of its endpoints.
    /// ** Index graphs panic if `u >= n` **
    fn out_edges_of(&self, u: Self::Node) -> impl Iterator<Item = EdgeOf<Self>> + '_;

    /// Returns an iterator over the (out-)neighbors of a given node.
    /// ** Index graphs panic if `u >= n` **
    fn neighbors_of(&self, u: Self::Node) -> impl Iterator<Item = Self::Node> + '_ {
        self.out_edges_of(u).map(|e| e.to)
    }

    /// Returns the number of outgoing edges of `u`
    fn out_degree_of(&self, u: Self::Node) -> usize {
        self.out_edges_of(u).count()
    }

    /// Returns the label of the edge `(u, v)` if it exists
    fn try_get_edge(&self, u: &Self::Node, v: &Self::Node) -> Option<Self::Label> {
        self.out_edges_of(u.clone())
            .find(|e| e.to == *v)
            .map(|e| e.label)
    }

    /// Returns *true* if the edge `(u, v)` exists
    fn contains_edge(&self, u: &Self::Node, v: &Self::Node) -> bool {
        self.try_get_edge(u, v).is_some()
    }

    /// Returns the label of the edge `(u, v)` or [`Error::EdgeNotFound`] if there is none
    fn edge_label(&self, u: &Self::Node, v: &Self::Node) -> Result<Self::Label> {
        self.try_get_edge(u, v)
            .ok_or_else(|| Error::edge_not_found(u, v))
    }

    /// Returns an iterator over all edges of the graph, grouped by their source.
    /// Undirected edges are reported in both orientations.
    fn edges(&self) -> impl Iterator<Item = EdgeOf<Self>> + '_ {
        self.nodes().flat_map(move |u| self.out_edges_of(u))
    }
}

/// Getters for incoming edges
pub trait GraphInEdges: GraphEdges {
    /// Returns an iterator over edges `(v, u)` ending in `u`; every yielded edge has `to == u`.
    /// ** Index graphs panic if `u >= n` **
    fn in_edges_of(&self, u: Self::Node) -> impl Iterator<Item = EdgeOf<Self>> + '_;

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    fn parents_of(&self, u: Self::Node) -> impl Iterator<Item = Self::Node> + '_ {
        self.in_edges_of(u).map(|e| e.from)
    }

    /// Returns the number of incoming edges of `u`
    fn in_degree_of(&self, u: Self::Node) -> usize {
        self.in_edges_of(u).count()
    }
}

/// Graphs whose nodes are exactly `0..n`.
///
/// Implementors should select dense storage in [`GraphNodes`] and override
/// [`GraphNodes::check_node`] with [`IndexGraph::check_index`].
pub trait IndexGraph: GraphEdges<Node = Node> {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of edges of the graph (undirected edges count once)
    fn number_of_edges(&self) -> NumEdges;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range `0..n`. In contrast to [`GraphNodes::nodes`] it does not borrow the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns [`Error::NodeOutOfRange`] iff `u >= n`
    fn check_index(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}
