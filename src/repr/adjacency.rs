/*!
# Adjacency Lists

[`AdjGraph`] is an index graph storing for every node the list of its outgoing edges `(target, label)`.
Directed graphs additionally store the list of incoming edges, so that in-edges and transposed views
are cheap.

An undirected edge `{u, v}` is stored in the lists of both endpoints (a self-loop only once) and
counts as a single edge.
*/

use std::marker::PhantomData;

use crate::{
    edge::{Edge, IndexEdge, NumEdges},
    error::Result,
    node::*,
    ops::*,
    testing::test_graph_ops,
};

/// Index graph with adjacency lists of labelled edges.
///
/// # Type parameters
/// - `E`: label of each edge, `()` for unlabelled graphs.
/// - `D`: [`Directed`] or [`Undirected`].
#[derive(Debug)]
pub struct AdjGraph<E = (), D = Directed> {
    out_edges: Vec<Vec<(Node, E)>>,
    in_edges: Vec<Vec<(Node, E)>>,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// Directed graph using adjacency lists for outgoing and incoming edges
pub type DiGraph<E = ()> = AdjGraph<E, Directed>;

/// Undirected graph using adjacency lists
pub type UnGraph<E = ()> = AdjGraph<E, Undirected>;

// the direction marker is only carried as `PhantomData` and needs no `Clone` bound
impl<E: Clone, D> Clone for AdjGraph<E, D> {
    fn clone(&self) -> Self {
        Self {
            out_edges: self.out_edges.clone(),
            in_edges: self.in_edges.clone(),
            num_edges: self.num_edges,
            _dir: PhantomData,
        }
    }
}

impl<E, D> AdjGraph<E, D>
where
    E: Clone,
    D: GraphDirection,
{
    /// Creates a graph with nodes `0..n` and no edges
    pub fn new(n: NumNodes) -> Self {
        let in_lists = if D::UNDIRECTED { 0 } else { n as usize };
        Self {
            out_edges: vec![Vec::new(); n as usize],
            in_edges: vec![Vec::new(); in_lists],
            num_edges: 0,
            _dir: PhantomData,
        }
    }

    /// Creates a graph with nodes `0..n` and the given edges.
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_edges<I, T>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<IndexEdge<E>>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    /// Appends a new isolated node and returns it
    pub fn add_node(&mut self) -> Node {
        let u = self.out_edges.len() as Node;
        self.out_edges.push(Vec::new());
        if !D::UNDIRECTED {
            self.in_edges.push(Vec::new());
        }
        u
    }

    /// Adds the edge `(u, v)` with the given label. Parallel edges are kept.
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node, label: E) {
        assert!(
            (v as usize) < self.out_edges.len(),
            "node {v} is out of range"
        );

        if D::UNDIRECTED {
            if u != v {
                self.out_edges[v as usize].push((u, label.clone()));
            }
        } else {
            self.in_edges[v as usize].push((u, label.clone()));
        }
        self.out_edges[u as usize].push((v, label));
        self.num_edges += 1;
    }

    /// Adds all given edges
    /// ** Panics if an endpoint is `>= n` **
    pub fn add_edges<I, T>(&mut self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<IndexEdge<E>>,
    {
        for e in edges {
            let Edge { from, to, label } = e.into();
            self.add_edge(from, to, label);
        }
    }

    /// Returns a copy of the graph with all edges reversed.
    /// For undirected graphs this is a plain copy.
    pub fn transposed(&self) -> Self {
        if D::UNDIRECTED {
            return self.clone();
        }

        Self {
            out_edges: self.in_edges.clone(),
            in_edges: self.out_edges.clone(),
            num_edges: self.num_edges,
            _dir: PhantomData,
        }
    }

    fn edge_lists_into(&self, u: Node) -> &[(Node, E)] {
        if D::UNDIRECTED {
            &self.out_edges[u as usize]
        } else {
            &self.in_edges[u as usize]
        }
    }
}

impl<E, D> GraphType for AdjGraph<E, D>
where
    D: GraphDirection,
{
    type Dir = D;
}

impl<E, D> GraphNodes for AdjGraph<E, D>
where
    E: Clone,
    D: GraphDirection,
{
    type Node = Node;
    type NodeSet = NodeBitSet;
    type NodeMap<T> = Vec<Option<T>>;

    fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    fn number_of_nodes_hint(&self) -> usize {
        self.out_edges.len()
    }

    fn check_node(&self, u: &Node) -> Result<()> {
        self.check_index(*u)
    }
}

impl<E, D> GraphEdges for AdjGraph<E, D>
where
    E: Clone,
    D: GraphDirection,
{
    type Label = E;

    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = IndexEdge<E>> + '_ {
        self.out_edges[u as usize]
            .iter()
            .map(move |(v, label)| Edge::new(u, *v, label.clone()))
    }

    fn out_degree_of(&self, u: Node) -> usize {
        self.out_edges[u as usize].len()
    }
}

impl<E, D> GraphInEdges for AdjGraph<E, D>
where
    E: Clone,
    D: GraphDirection,
{
    fn in_edges_of(&self, u: Node) -> impl Iterator<Item = IndexEdge<E>> + '_ {
        self.edge_lists_into(u)
            .iter()
            .map(move |(v, label)| Edge::new(*v, u, label.clone()))
    }

    fn in_degree_of(&self, u: Node) -> usize {
        self.edge_lists_into(u).len()
    }
}

impl<E, D> IndexGraph for AdjGraph<E, D>
where
    E: Clone,
    D: GraphDirection,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.out_edges.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_di_graph,
    DiGraph,
    false,
    (GraphNew, GraphEdges, GraphInEdges)
);

test_graph_ops!(
    test_un_graph,
    UnGraph,
    true,
    (GraphNew, GraphEdges, GraphInEdges)
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn labels_and_parallel_edges() {
        let mut graph = DiGraph::new(2);
        graph.add_edge(0, 1, 'a');
        graph.add_edge(0, 1, 'b');
        graph.add_edge(1, 1, 'c');

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.try_get_edge(&0, &1), Some('a'));
        assert_eq!(
            graph.out_edges_of(0).map(|e| e.label).collect_vec(),
            vec!['a', 'b']
        );
        assert_eq!(graph.in_degree_of(1), 3);
        assert_eq!(graph.parents_of(1).collect_vec(), vec![0, 0, 1]);

        let u = graph.add_node();
        assert_eq!(u, 2);
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.in_degree_of(u), 0);
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let graph = UnGraph::from_edges(3, [(0, 1, 5), (1, 1, 7)]);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edge_label(&1, &0), Ok(5));
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 1]);
        assert_eq!(graph.in_edges_of(0).map(|e| (e.from, e.to)).collect_vec(), vec![(1, 0)]);
        assert!(UnGraph::<i32>::is_undirected());
        assert!(DiGraph::<i32>::is_directed());
    }

    fn copy_and_transpose<D: GraphDirection>(graph: &AdjGraph<u8, D>) -> (AdjGraph<u8, D>, AdjGraph<u8, D>) {
        (graph.clone(), graph.transposed())
    }

    #[test]
    fn transposed_and_cloned() {
        let graph = UnGraph::from_edges(3, [(0, 1, 1u8), (1, 2, 2)]);
        let (copy, transposed) = copy_and_transpose(&graph);
        assert_eq!(copy.number_of_edges(), 2);
        assert_eq!(transposed.number_of_edges(), 2);
        assert_eq!(transposed.edge_label(&2, &1), Ok(2));
        assert_eq!(transposed.neighbors_of(1).collect_vec(), vec![0, 2]);

        let graph = DiGraph::from_edges(3, [(0, 1, 1u8), (2, 1, 3)]);
        let (copy, transposed) = copy_and_transpose(&graph);
        assert_eq!(copy.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(transposed.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(transposed.out_degree_of(0), 0);
        assert_eq!(transposed.parents_of(2).collect_vec(), vec![1]);
    }

    #[test]
    #[should_panic]
    fn edge_out_of_range() {
        let mut graph: DiGraph = DiGraph::new(2);
        graph.add_edge(0, 2, ());
    }
}
