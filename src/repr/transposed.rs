use crate::{
    edge::NumEdges,
    error::Result,
    node::*,
    ops::*,
};

/// Borrowed view of a graph with all edges reversed: out-edges of the view are the in-edges of the
/// underlying graph and vice versa. Node storage is the same as for the underlying graph.
///
/// # Examples
/// ```
/// use sgraphs::prelude::*;
///
/// let g = DiGraph::from_edges(3, [(0, 1), (0, 2)]);
/// let t = Transposed::new(&g);
///
/// assert_eq!(t.neighbors_of(2).collect::<Vec<_>>(), vec![0]);
/// assert_eq!(t.out_degree_of(0), 0);
/// ```
#[derive(Debug)]
pub struct Transposed<'a, G> {
    graph: &'a G,
}

impl<G> Clone for Transposed<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Transposed<'_, G> {}

impl<'a, G> Transposed<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Returns the underlying graph
    pub fn inner(&self) -> &'a G {
        self.graph
    }
}

impl<G: GraphType> GraphType for Transposed<'_, G> {
    type Dir = G::Dir;
}

impl<G: GraphNodes> GraphNodes for Transposed<'_, G> {
    type Node = G::Node;
    type NodeSet = G::NodeSet;
    type NodeMap<T> = G::NodeMap<T>;

    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
        self.graph.nodes()
    }

    fn number_of_nodes_hint(&self) -> usize {
        self.graph.number_of_nodes_hint()
    }

    fn check_node(&self, u: &Self::Node) -> Result<()> {
        self.graph.check_node(u)
    }
}

impl<G: GraphInEdges> GraphEdges for Transposed<'_, G> {
    type Label = G::Label;

    fn out_edges_of(&self, u: Self::Node) -> impl Iterator<Item = EdgeOf<Self>> + '_ {
        self.graph.in_edges_of(u).map(|e| e.reversed())
    }

    fn out_degree_of(&self, u: Self::Node) -> usize {
        self.graph.in_degree_of(u)
    }
}

impl<G: GraphInEdges> GraphInEdges for Transposed<'_, G> {
    fn in_edges_of(&self, u: Self::Node) -> impl Iterator<Item = EdgeOf<Self>> + '_ {
        self.graph.out_edges_of(u).map(|e| e.reversed())
    }

    fn in_degree_of(&self, u: Self::Node) -> usize {
        self.graph.out_degree_of(u)
    }
}

impl<G> IndexGraph for Transposed<'_, G>
where
    G: IndexGraph + GraphInEdges,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}
