/*!
# Connectivity & Ordering

Queries built on top of the traversals of [`super::traversal`]:
- [`Connectivity::topological_sort`] reverses the post-order of the whole graph,
- [`Connectivity::is_acyclic`] looks for back edges while emitting the post-order,
- [`Connectivity::is_acyclic_undirected`] counts visited neighbors in pre-order,
- [`ConnectedComponents`] restarts a BFS at every yet unvisited node,
- [`StronglyConnectedComponents`] implements Kosaraju's algorithm: the graph is ordered by its reverse
  post-order, then its transpose is swept in that order.

The `try_*` variants accept [`Limits`] and fail with [`Error::BoundExceeded`] instead of running
forever on graphs with an unbounded number of nodes. Nodes are counted when they are discovered.
*/

use itertools::Itertools;

use super::traversal::*;
use crate::{config::Limits, error::*, ops::*, repr::Transposed, utils::Set};

/// Lazily emits connected components.
///
/// Each component is the set of nodes first reached by a BFS that is restarted at the next unvisited
/// node in the order of [`GraphNodes::nodes`]. For undirected graphs these are exactly the connected
/// components; for directed graphs a component contains all nodes reachable from its root that are
/// not part of an earlier component.
pub struct ConnectedComponents<'a, G>
where
    G: GraphEdges,
{
    bfs: Bfs<'a, G>,
    components: usize,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: GraphEdges,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: Bfs::without_start(graph),
            components: 0,
        }
    }

    /// Excluded nodes are not part of any component and do not connect other nodes.
    pub fn set_exclude_nodes<I>(&mut self, exclude: I)
    where
        I: IntoIterator<Item = G::Node>,
    {
        self.bfs.exclude_nodes(exclude);
    }

    /// Excluded nodes are not part of any component and do not connect other nodes.
    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        self.set_exclude_nodes(exclude);
        self
    }

    /// Number of components emitted so far
    pub fn components_emitted(&self) -> usize {
        self.components
    }

    /// Consumes the iterator and returns the number of (remaining) components
    pub fn number_of_components(self) -> usize {
        self.count()
    }

    /// Collects all components, aborting with [`Error::BoundExceeded`] once more than
    /// `limits.max_nodes()` nodes were assigned.
    pub fn try_collect(mut self, limits: Limits) -> Result<Vec<Vec<G::Node>>> {
        let mut assigned = 0;
        let mut components = Vec::new();
        while self.bfs.try_restart_at_unvisited() {
            let mut component = Vec::new();
            for u in self.bfs.by_ref() {
                assigned += 1;
                limits.check_nodes(assigned)?;
                component.push(u);
            }
            components.push(component);
        }

        tracing::debug!(components = components.len(), nodes = assigned, "connected components");
        Ok(components)
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: GraphEdges,
{
    type Item = Vec<G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs.try_restart_at_unvisited() {
            return None;
        }

        let component = self.bfs.by_ref().collect_vec();
        self.components += 1;
        tracing::trace!(index = self.components, size = component.len(), "component found");
        Some(component)
    }
}

/// Kosaraju's algorithm for strongly connected components.
///
/// Emits one component at a time. Components are found in topological order of the
/// condensation (a component is emitted before every component reachable from it).
///
/// # Precondition
/// `transpose` has to be the transpose of the graph the order was computed on. This is not checked;
/// a mismatching transpose yields wrong components.
pub struct StronglyConnectedComponents<'a, T>
where
    T: GraphEdges,
{
    order: std::vec::IntoIter<T::Node>,
    search: Dfs<'a, T>,
}

impl<'a, T> StronglyConnectedComponents<'a, T>
where
    T: GraphEdges,
{
    /// First pass: computes the reverse post-order of `graph`; the second pass runs lazily on `transpose`.
    pub fn new<G>(graph: &G, transpose: &'a T) -> Self
    where
        G: GraphEdges<Node = T::Node>,
    {
        Self::from_post_order(graph.post_order_all().collect_vec(), transpose)
    }

    /// Like [`StronglyConnectedComponents::new`], but the first pass fails with
    /// [`Error::BoundExceeded`] once more than `limits.max_nodes()` nodes were discovered.
    /// The second pass only visits nodes of the first one.
    pub fn try_new<G>(graph: &G, transpose: &'a T, limits: Limits) -> Result<Self>
    where
        G: GraphEdges<Node = T::Node>,
    {
        let mut search = graph.post_order_all();
        let mut order = Vec::new();
        while let Some(u) = search.try_next(&limits)? {
            order.push(u);
        }

        Ok(Self::from_post_order(order, transpose))
    }

    fn from_post_order(mut order: Vec<T::Node>, transpose: &'a T) -> Self {
        order.reverse();

        Self {
            order: order.into_iter(),
            search: Dfs::without_start(transpose),
        }
    }
}

impl<T> Iterator for StronglyConnectedComponents<'_, T>
where
    T: GraphEdges,
{
    type Item = Vec<T::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let root = self.order.next()?;
            // roots claimed by an earlier component are skipped
            if self.search.try_restart_at(root) {
                return Some(self.search.by_ref().collect_vec());
            }
        }
    }
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components<N: Ord>(mut components: Vec<Vec<N>>) -> Vec<Vec<N>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort();
    components
}

/// Connectivity queries available on every graph
pub trait Connectivity: GraphEdges + Sized {
    /// Returns the nodes in an order such that every edge points from an earlier to a later node.
    ///
    /// Fails with [`Error::CycleDetected`] if the graph contains a directed cycle (including
    /// self-loops) and with [`Error::BoundExceeded`] if more than `limits.max_nodes()` nodes are discovered.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*, config::Limits};
    ///
    /// let g = DiGraph::from_edges(3, [(2, 1), (1, 0)]);
    /// assert_eq!(g.topological_sort(Limits::default()).unwrap(), vec![2, 1, 0]);
    ///
    /// let cyclic = DiGraph::from_edges(2, [(0, 1), (1, 0)]);
    /// assert!(cyclic.topological_sort(Limits::default()).is_err());
    /// ```
    #[tracing::instrument(skip(self), fields(nodes = self.number_of_nodes_hint()))]
    fn topological_sort(&self, limits: Limits) -> Result<Vec<Self::Node>> {
        let mut search = self.post_order_all();
        let mut order = Vec::new();

        while let Some(u) = search.try_next(&limits)? {
            if search.has_unfinished_neighbor(&u) {
                tracing::debug!(node = ?u, "cycle detected");
                return Err(Error::cycle_detected(&u));
            }
            order.push(u);
        }

        order.reverse();
        Ok(order)
    }

    /// Returns *true* if the graph contains no directed cycle (self-loops are cycles).
    ///
    /// Treats every edge as directed; for undirected graphs see [`Connectivity::is_acyclic_undirected`].
    fn is_acyclic(&self) -> bool {
        matches!(self.try_is_acyclic(Limits::unbounded()), Ok(true))
    }

    /// Bounded version of [`Connectivity::is_acyclic`]: fails with [`Error::BoundExceeded`] once more
    /// than `limits.max_nodes()` nodes were discovered.
    #[tracing::instrument(skip(self), fields(nodes = self.number_of_nodes_hint()))]
    fn try_is_acyclic(&self, limits: Limits) -> Result<bool> {
        let mut search = self.post_order_all();
        while let Some(u) = search.try_next(&limits)? {
            if search.has_unfinished_neighbor(&u) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns *true* if the undirected graph is a forest.
    ///
    /// A node that is reached while more than one of its other neighbors was already visited
    /// closes a cycle. Self-loops are ignored; parallel edges count as cycles.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = UnGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// assert!(!triangle.is_acyclic_undirected());
    ///
    /// let path = UnGraph::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(path.is_acyclic_undirected());
    /// ```
    fn is_acyclic_undirected(&self) -> bool {
        matches!(self.try_is_acyclic_undirected(Limits::unbounded()), Ok(true))
    }

    /// Bounded version of [`Connectivity::is_acyclic_undirected`]: fails with
    /// [`Error::BoundExceeded`] once more than `limits.max_nodes()` nodes were visited.
    #[tracing::instrument(skip(self), fields(nodes = self.number_of_nodes_hint()))]
    fn try_is_acyclic_undirected(&self, limits: Limits) -> Result<bool> {
        let mut search: Dfs<'_, Self> = NodeSearch::without_start(self);
        let mut visited = 0;
        while search.try_restart_at_unvisited() {
            while let Some(u) = search.next() {
                visited += 1;
                limits.check_nodes(visited)?;

                let visited_neighbors = self
                    .neighbors_of(u.clone())
                    .filter(|v| *v != u && search.did_visit_node(v))
                    .take(2)
                    .count();

                if visited_neighbors > 1 {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Returns an iterator over the connected components of the graph.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
    /// assert_eq!(
    ///     sort_components(g.connected_components().collect()),
    ///     vec![vec![0, 1, 2], vec![3, 4]]
    /// );
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns an iterator over the strongly connected components, sweeping a caller-supplied transpose.
    ///
    /// # Precondition
    /// `transpose` has to be the transpose of `self`; this is not checked.
    fn strongly_connected_components_with<'a, T>(
        &self,
        transpose: &'a T,
    ) -> StronglyConnectedComponents<'a, T>
    where
        T: GraphEdges<Node = Self::Node>,
    {
        StronglyConnectedComponents::new(self, transpose)
    }

    /// Returns the strongly connected components, using a [`Transposed`] view of the graph.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges(4, [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
    /// assert_eq!(
    ///     sort_components(g.strongly_connected_components()),
    ///     vec![vec![0, 1], vec![2, 3]]
    /// );
    /// ```
    fn strongly_connected_components(&self) -> Vec<Vec<Self::Node>>
    where
        Self: GraphInEdges,
    {
        self.try_strongly_connected_components(Limits::unbounded())
            .unwrap_or_default()
    }

    /// Bounded version of [`Connectivity::strongly_connected_components`]: fails with
    /// [`Error::BoundExceeded`] once more than `limits.max_nodes()` nodes were discovered.
    #[tracing::instrument(skip(self), fields(nodes = self.number_of_nodes_hint()))]
    fn try_strongly_connected_components(&self, limits: Limits) -> Result<Vec<Vec<Self::Node>>>
    where
        Self: GraphInEdges,
    {
        let transpose = Transposed::new(self);
        let components =
            StronglyConnectedComponents::try_new(self, &transpose, limits)?.collect_vec();

        tracing::debug!(components = components.len(), "strongly connected components");
        Ok(components)
    }
}

impl<G> Connectivity for G where G: GraphEdges + Sized {}

/// Returns *true* if every edge leaving a node of `order` ends in a node that appears later in `order`.
pub fn is_topological_order<G>(graph: &G, order: &[G::Node]) -> bool
where
    G: GraphEdges,
{
    let mut placed = graph.new_node_set();
    for u in order.iter().rev() {
        if graph.neighbors_of(u.clone()).any(|v| !placed.contains(&v)) {
            return false;
        }
        placed.insert(u.clone());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::Node,
        repr::*,
        testing::{InfiniteChain, random_weighted_graph},
    };
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn topological_sort_orders_edges_forward() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..20 {
            // only edges from smaller to larger nodes, so the graph is a DAG
            let n = 40;
            let edges = (0..80)
                .map(|_| {
                    let u = rng.random_range(0..n - 1);
                    let v = rng.random_range(u + 1..n);
                    (u, v)
                })
                .collect_vec();
            let graph = DiGraph::from_edges(n, edges);

            let order = graph.topological_sort(Limits::default()).unwrap();
            assert_eq!(order.len(), n as usize);
            assert!(is_topological_order(&graph, &order));

            let mut position = vec![0; n as usize];
            for (i, &u) in order.iter().enumerate() {
                position[u as usize] = i;
            }
            for e in graph.edges() {
                assert!(position[e.from as usize] < position[e.to as usize]);
            }
            assert!(graph.is_acyclic());
        }
    }

    #[test]
    fn topological_sort_errors() {
        let cyclic = DiGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert!(matches!(
            cyclic.topological_sort(Limits::default()),
            Err(Error::CycleDetected { .. })
        ));
        assert!(!cyclic.is_acyclic());

        let self_loop = DiGraph::from_edges(2, [(0, 1), (1, 1)]);
        assert!(self_loop.topological_sort(Limits::default()).is_err());
        assert!(!self_loop.is_acyclic());

        let path = DiGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(
            path.topological_sort(Limits::unbounded().with_max_nodes(3)),
            Err(Error::BoundExceeded {
                kind: BoundKind::Nodes,
                limit: 3
            })
        );
        assert!(path.topological_sort(Limits::unbounded().with_max_nodes(4)).is_ok());
    }

    fn assert_node_bound<T: std::fmt::Debug>(result: Result<T>, limit: usize) {
        match &result {
            Err(Error::BoundExceeded {
                kind: BoundKind::Nodes,
                limit: l,
            }) => assert_eq!(*l, limit),
            _ => panic!("expected node bound {limit}, got {result:?}"),
        }
    }

    #[test]
    fn bounded_queries_on_infinite_chain() {
        let limits = Limits::unbounded().with_max_nodes(1000);

        assert_node_bound(InfiniteChain.topological_sort(limits), 1000);
        assert_node_bound(InfiniteChain.try_is_acyclic(limits), 1000);
        assert_node_bound(InfiniteChain.try_is_acyclic_undirected(limits), 1000);
        assert_node_bound(InfiniteChain.try_strongly_connected_components(limits), 1000);
        assert_node_bound(InfiniteChain.connected_components().try_collect(limits), 1000);

        let transpose = Transposed::new(&InfiniteChain);
        assert_node_bound(
            StronglyConnectedComponents::try_new(&InfiniteChain, &transpose, limits).map(|_| ()),
            1000,
        );
    }

    #[test]
    fn bounded_queries_within_bounds() {
        let graph = DiGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
        let limits = Limits::unbounded().with_max_nodes(4);

        assert_eq!(graph.try_is_acyclic(limits), Ok(false));
        assert_eq!(
            sort_components(graph.try_strongly_connected_components(limits).unwrap()),
            vec![vec![0, 1, 2], vec![3]]
        );
        assert_node_bound(
            graph.try_strongly_connected_components(Limits::unbounded().with_max_nodes(3)),
            3,
        );

        let tree = UnGraph::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
        assert_eq!(tree.try_is_acyclic_undirected(limits), Ok(true));
        assert_node_bound(
            tree.try_is_acyclic_undirected(Limits::unbounded().with_max_nodes(2)),
            2,
        );
    }

    #[test]
    fn undirected_acyclicity() {
        let triangle = LabelUnGraph::from_edges([("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
        assert!(!triangle.is_acyclic_undirected());

        let opened = LabelUnGraph::from_edges([("A", "B", 1), ("B", "C", 1)]);
        assert!(opened.is_acyclic_undirected());

        // forest with a self-loop
        let forest = UnGraph::from_edges(7, [(0, 1), (0, 2), (2, 3), (4, 5), (6, 6)]);
        assert!(forest.is_acyclic_undirected());

        let second = UnGraph::from_edges(7, [(0, 1), (0, 2), (2, 3), (4, 5), (5, 6), (6, 4)]);
        assert!(!second.is_acyclic_undirected());
    }

    #[test]
    fn connected_components() {
        let graph = UnGraph::from_edges(7, [(1, 2), (2, 3), (4, 5)]);

        let components = sort_components(graph.connected_components().collect_vec());
        assert_eq!(
            components,
            vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]
        );
        assert_eq!(graph.connected_components().number_of_components(), 4);

        let components = sort_components(
            graph
                .connected_components()
                .exclude_nodes([2, 6])
                .collect_vec(),
        );
        assert_eq!(components, vec![vec![0], vec![1], vec![3], vec![4, 5]]);

        let mut iter = graph.connected_components();
        iter.next();
        assert_eq!(iter.components_emitted(), 1);

        assert!(graph.connected_components().try_collect(Limits::default()).is_ok());
        assert!(
            graph
                .connected_components()
                .try_collect(Limits::unbounded().with_max_nodes(6))
                .is_err()
        );
    }

    #[test]
    fn scc() {
        let graph = DiGraph::from_edges(
            8,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = sort_components(graph.strongly_connected_components());
        assert_eq!(sccs, vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]]);

        // same result with an explicitly built transpose
        let transpose = graph.transposed();
        let sccs_with = sort_components(
            graph
                .strongly_connected_components_with(&transpose)
                .collect_vec(),
        );
        assert_eq!(sccs_with, sccs);
    }

    #[test]
    fn scc_cycle_and_singletons() {
        let n: Node = 1000;
        let cycle = DiGraph::from_edges(n, (0..n).map(|u| (u, (u + 1) % n)));
        let sccs = cycle.strongly_connected_components();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), n as usize);

        let isolated: DiGraph = DiGraph::new(5);
        let sccs = sort_components(isolated.strongly_connected_components());
        assert_eq!(sccs, (0..5).map(|u| vec![u]).collect_vec());

        // a directed tree: every node is its own component
        let tree = DiGraph::from_edges(7, [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);
        assert_eq!(tree.strongly_connected_components().len(), 7);
    }

    #[test]
    fn scc_deep_cycle() {
        // the post-order pass must not overflow the stack
        let n: Node = 100_000;
        let cycle = DiGraph::from_edges(n, (0..n).map(|u| (u, (u + 1) % n)));
        assert_eq!(cycle.strongly_connected_components().len(), 1);
        assert!(!cycle.is_acyclic());
    }

    #[test]
    fn scc_emits_condensation_in_topological_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..20 {
            let graph = random_weighted_graph(rng, 50, 70);
            let sccs = graph.strongly_connected_components();
            assert_eq!(sccs.iter().map(|c| c.len()).sum::<usize>(), 50);

            let mut component_of = vec![usize::MAX; 50];
            for (i, comp) in sccs.iter().enumerate() {
                for &u in comp {
                    component_of[u as usize] = i;
                }
            }

            for e in graph.edges() {
                let (cu, cv) = (component_of[e.from as usize], component_of[e.to as usize]);
                assert!(cu <= cv);
                // mutual reachability inside a component
                if cu == cv {
                    assert!(graph.is_node_reachable(e.to, &e.from));
                }
            }
        }
    }

    #[test]
    fn scc_on_label_graph() {
        let graph = LabelDiGraph::from_edges([
            ("a", "b", ()),
            ("b", "a", ()),
            ("b", "c", ()),
            ("c", "d", ()),
            ("d", "c", ()),
            ("e", "e", ()),
        ]);

        let sccs = sort_components(graph.strongly_connected_components());
        assert_eq!(sccs, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
    }
}
