/*!
# Label Graphs

[`LabelGraph`] lets arbitrary hashable values act as nodes. Every value is assigned an index on
first sight and the edges are stored in an [`AdjGraph`] over these indices.

Traversals on label graphs use hashed per-node storage (`FxHashSet`, `FxHashMap`). Values that were
never added are accepted as queries and behave like isolated nodes.

```rust
use sgraphs::prelude::*;

let g = LabelDiGraph::from_edges([("x", "y", 1), ("y", "z", 2)]);

assert_eq!(g.neighbors_of("y").collect::<Vec<_>>(), vec!["z"]);
assert_eq!(g.out_degree_of("unknown"), 0);
```
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::{FxHashMap, FxHashSet};

use super::AdjGraph;
use crate::{
    edge::{Edge, NumEdges},
    node::*,
    ops::*,
};

/// Graph over arbitrary node values with labelled edges.
#[derive(Debug)]
pub struct LabelGraph<N, E = (), D = Directed> {
    labels: Vec<N>,
    index: FxHashMap<N, Node>,
    inner: AdjGraph<E, D>,
}

/// Directed label graph
pub type LabelDiGraph<N, E = ()> = LabelGraph<N, E, Directed>;

/// Undirected label graph
pub type LabelUnGraph<N, E = ()> = LabelGraph<N, E, Undirected>;

impl<N: Clone, E: Clone, D> Clone for LabelGraph<N, E, D> {
    fn clone(&self) -> Self {
        Self {
            labels: self.labels.clone(),
            index: self.index.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<N, E, D> Default for LabelGraph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    E: Clone,
    D: GraphDirection,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, D> LabelGraph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    E: Clone,
    D: GraphDirection,
{
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
            inner: AdjGraph::new(0),
        }
    }

    /// Creates a graph from the given edges; nodes are added in order of first appearance
    pub fn from_edges<I, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<N, E>>,
    {
        let mut graph = Self::new();
        for e in edges {
            let Edge { from, to, label } = e.into();
            graph.add_edge(from, to, label);
        }
        graph
    }

    /// Adds `u` if it is not part of the graph yet and returns its index
    pub fn add_node(&mut self, u: N) -> Node {
        if let Some(&idx) = self.index.get(&u) {
            return idx;
        }

        let idx = self.inner.add_node();
        self.index.insert(u.clone(), idx);
        self.labels.push(u);
        idx
    }

    /// Adds the edge `(u, v)`; missing endpoints are added first
    pub fn add_edge(&mut self, u: N, v: N, label: E) {
        let u = self.add_node(u);
        let v = self.add_node(v);
        self.inner.add_edge(u, v, label);
    }

    /// Returns a copy of the graph with all edges reversed
    pub fn transposed(&self) -> Self {
        Self {
            labels: self.labels.clone(),
            index: self.index.clone(),
            inner: self.inner.transposed(),
        }
    }

    /// Returns the index assigned to `u`
    pub fn index_of(&self, u: &N) -> Option<Node> {
        self.index.get(u).copied()
    }

    /// Returns the node value with index `idx`.
    /// ** Panics if `idx` was not assigned **
    pub fn label_of(&self, idx: Node) -> &N {
        &self.labels[idx as usize]
    }

    pub fn number_of_nodes(&self) -> usize {
        self.labels.len()
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.inner.number_of_edges()
    }

    fn relabel(&self, e: Edge<Node, E>) -> Edge<N, E> {
        Edge::new(
            self.label_of(e.from).clone(),
            self.label_of(e.to).clone(),
            e.label,
        )
    }
}

impl<N, E, D> GraphType for LabelGraph<N, E, D>
where
    D: GraphDirection,
{
    type Dir = D;
}

impl<N, E, D> GraphNodes for LabelGraph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    E: Clone,
    D: GraphDirection,
{
    type Node = N;
    type NodeSet = FxHashSet<N>;
    type NodeMap<T> = FxHashMap<N, T>;

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.labels.iter().cloned()
    }

    fn number_of_nodes_hint(&self) -> usize {
        self.labels.len()
    }
}

impl<N, E, D> GraphEdges for LabelGraph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    E: Clone,
    D: GraphDirection,
{
    type Label = E;

    fn out_edges_of(&self, u: N) -> impl Iterator<Item = Edge<N, E>> + '_ {
        self.index_of(&u)
            .into_iter()
            .flat_map(move |idx| self.inner.out_edges_of(idx))
            .map(move |e| self.relabel(e))
    }
}

impl<N, E, D> GraphInEdges for LabelGraph<N, E, D>
where
    N: Clone + Eq + Hash + Debug,
    E: Clone,
    D: GraphDirection,
{
    fn in_edges_of(&self, u: N) -> impl Iterator<Item = Edge<N, E>> + '_ {
        self.index_of(&u)
            .into_iter()
            .flat_map(move |idx| self.inner.in_edges_of(idx))
            .map(move |e| self.relabel(e))
    }
}
