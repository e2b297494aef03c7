/*!
Graph traversal: one frontier-driven search behind BFS, DFS and best-first search.

This module provides:
- [`NodeSearch`]: a pre-order walk over node identities,
- [`EdgeSearch`]: a pre-order walk over edges (the edge that first reaches a node, or every edge once),
- [`PostOrderSearch`]: a depth-first walk emitting nodes after all of their descendants,
- the [`Traversal`] trait that exposes these searches directly as methods on graphs,
- [`RankFromOrder`] to turn a traversal over an index graph into a ranking.

# Visiting
A node is *visited* at the moment it is taken from the frontier, not when it is inserted.
Duplicates are suppressed on both ends: neighbors that are already visited are never inserted,
and items whose node got visited while they were pending are skipped when taken.
With a stack the result is a true depth-first pre-order; with a heap it is the settling order of
best-first search.

All searches are lazy iterators. Stopping early is done by simply dropping the iterator.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;
use smallvec::SmallVec;

use super::frontier::Frontier;
use crate::{config::Limits, error::Result, node::*, ops::*, utils::*};

/// Gives access to the graph a search runs on
pub trait WithGraphRef<G> {
    fn graph_ref(&self) -> &G;
}

/// Pre-order traversal over nodes, generic over the [`Frontier`].
///
/// Emits every node reachable from the start node(s) exactly once.
pub struct NodeSearch<'a, G, F>
where
    G: GraphEdges,
{
    graph: &'a G,
    visited: G::NodeSet,
    frontier: F,
    stop_at: Option<G::Node>,
    pops: usize,
    restart_cursor: usize,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type Bfs<'a, G> = NodeSearch<'a, G, VecDeque<<G as GraphNodes>::Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first pre-order from a given starting node.
pub type Dfs<'a, G> = NodeSearch<'a, G, Vec<<G as GraphNodes>::Node>>;

impl<'a, G, F> NodeSearch<'a, G, F>
where
    G: GraphEdges,
    F: Frontier<G::Node> + Default,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: G::Node) -> Self {
        Self::with_frontier(graph, F::default(), start)
    }

    /// Creates a traversal without any start node.
    /// Use [`NodeSearch::try_restart_at`] or [`NodeSearch::try_restart_at_unvisited`] to get going.
    pub fn without_start(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.new_node_set(),
            frontier: F::default(),
            stop_at: None,
            pops: 0,
            restart_cursor: 0,
        }
    }
}

impl<'a, G, F> NodeSearch<'a, G, F>
where
    G: GraphEdges,
    F: Frontier<G::Node>,
{
    /// Creates a new traversal iterator starting from `start` that uses the given frontier.
    /// Pending items of the frontier are discarded.
    pub fn with_frontier(graph: &'a G, mut frontier: F, start: G::Node) -> Self {
        frontier.clear();
        frontier.put(start);
        Self {
            graph,
            visited: graph.new_node_set(),
            frontier,
            stop_at: None,
            pops: 0,
            restart_cursor: 0,
        }
    }

    /// Forgets all state of the traversal (including excluded nodes and the stopper) and restarts at `start`.
    pub fn reset(&mut self, start: G::Node) {
        self.visited.clear();
        self.frontier.clear();
        self.frontier.put(start);
        self.stop_at = None;
        self.pops = 0;
        self.restart_cursor = 0;
    }

    /// Restarts the search at `u` if `u` was not visited yet and returns *true* iff successful.
    /// The search should have come to a hold earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at(&mut self, u: G::Node) -> bool {
        if self.visited.contains(&u) {
            return false;
        }
        self.frontier.put(u);
        true
    }

    /// Restarts the search at the first yet unvisited node in the order of [`GraphNodes::nodes`]
    /// and returns *true* iff successful.
    /// The search should have come to a hold earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.frontier.is_empty());
        let graph = self.graph;
        let next = graph
            .nodes()
            .enumerate()
            .skip(self.restart_cursor)
            .find(|(_, u)| !self.visited.contains(u));

        match next {
            None => {
                self.restart_cursor = graph.number_of_nodes_hint();
                false
            }
            Some((i, u)) => {
                self.restart_cursor = i + 1;
                self.frontier.put(u);
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: G::Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: G::Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// It is highly recommended to call this method directly after the constructor.
    /// Excluding the start node yields an empty search.
    pub fn exclude_node(&mut self, u: G::Node) {
        self.visited.insert(u);
    }

    /// Excludes a node from the search. See [`NodeSearch::exclude_node`].
    pub fn with_node_excluded(mut self, u: G::Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`NodeSearch::exclude_node`].
    pub fn exclude_nodes<I>(&mut self, us: I)
    where
        I: IntoIterator<Item = G::Node>,
    {
        self.visited.insert_multiple(us);
    }

    /// Exclude multiple nodes from traversal. See [`NodeSearch::exclude_nodes`].
    pub fn with_nodes_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Consumes the traversal search and returns true iff the requested node can be visited, i.e.
    /// if there exists a (directed) path from the start node to `u`.
    pub fn is_node_reachable(mut self, u: &G::Node) -> bool {
        self.any(|v| v == *u)
    }

    /// Returns *true* if `u` was visited (or excluded)
    pub fn did_visit_node(&self, u: &G::Node) -> bool {
        self.visited.contains(u)
    }

    /// Returns the set of visited nodes
    pub fn visited(&self) -> &G::NodeSet {
        &self.visited
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    pub fn frontier_mut(&mut self) -> &mut F {
        &mut self.frontier
    }

    /// Number of items taken from the frontier so far (including skipped duplicates)
    pub fn frontier_pops(&self) -> usize {
        self.pops
    }
}

impl<G, F> WithGraphRef<G> for NodeSearch<'_, G, F>
where
    G: GraphEdges,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, F> Iterator for NodeSearch<'_, G, F>
where
    G: GraphEdges,
    F: Frontier<G::Node>,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.frontier.take_next()?;
            self.pops += 1;

            if self.visited.insert(u.clone()) {
                continue;
            }

            if self.stop_at.as_ref() == Some(&u) {
                self.frontier.clear();
            } else {
                for v in self.graph.neighbors_of(u.clone()) {
                    if !self.visited.contains(&v) {
                        self.frontier.put(v);
                    }
                }
            }

            return Some(u);
        }
    }
}

/// Which edges an [`EdgeSearch`] emits
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum EdgeMode {
    /// Only the edge that first reaches a node
    FirstReach,
    /// Every edge exactly once
    EveryEdge,
}

/// Pre-order traversal over edges, generic over the [`Frontier`].
///
/// By default, the search emits for every node reachable from the seed(s) the edge through which it
/// was reached first (a spanning tree/forest in pre-order). After [`EdgeSearch::visit_every_edge`]
/// every reachable edge is emitted exactly once instead.
///
/// The out-edges of a node are inserted into the frontier when the *next* item is requested.
/// This allows callers to update frontier state (such as a cost table, see
/// [`ShortestPaths`](super::ShortestPaths)) for an emitted edge before its successors are compared.
pub struct EdgeSearch<'a, G, F>
where
    G: GraphEdges,
{
    graph: &'a G,
    visited: G::NodeSet,
    frontier: F,
    pending: SmallVec<[G::Node; 4]>,
    mode: EdgeMode,
    used_edges: FxHashSet<(G::Node, G::Node)>,
    edge_key: fn(&EdgeOf<G>) -> (G::Node, G::Node),
    stop_at: Option<G::Node>,
    pops: usize,
}

/// An edge-BFS: emits the edges of a breadth-first search tree
pub type BfsEdges<'a, G> = EdgeSearch<'a, G, VecDeque<EdgeOf<G>>>;

/// An edge-DFS: emits the edges of a depth-first search tree
pub type DfsEdges<'a, G> = EdgeSearch<'a, G, Vec<EdgeOf<G>>>;

fn directed_key<G: GraphEdges>(e: &EdgeOf<G>) -> (G::Node, G::Node) {
    (e.from.clone(), e.to.clone())
}

fn canonical_key<G>(e: &EdgeOf<G>) -> (G::Node, G::Node)
where
    G: GraphEdges,
    G::Node: Ord,
{
    e.canonical_pair()
}

impl<'a, G, F> EdgeSearch<'a, G, F>
where
    G: GraphEdges,
    F: Frontier<EdgeOf<G>> + Default,
{
    /// Creates a new edge traversal starting from `start`.
    pub fn new(graph: &'a G, start: G::Node) -> Self {
        Self::with_frontier(graph, F::default(), start)
    }

    /// Creates a new edge traversal that is pre-primed with multiple seeds.
    /// All seeds count as visited; no edge into a seed is emitted in the default mode.
    pub fn with_seeds<I>(graph: &'a G, seeds: I) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        Self::with_frontier_and_seeds(graph, F::default(), seeds)
    }
}

impl<'a, G, F> EdgeSearch<'a, G, F>
where
    G: GraphEdges,
    F: Frontier<EdgeOf<G>>,
{
    /// Creates a new edge traversal starting from `start` that uses the given frontier.
    /// Pending items of the frontier are discarded.
    pub fn with_frontier(graph: &'a G, frontier: F, start: G::Node) -> Self {
        Self::with_frontier_and_seeds(graph, frontier, std::iter::once(start))
    }

    /// Creates a new edge traversal pre-primed with multiple seeds that uses the given frontier.
    /// Pending items of the frontier are discarded.
    pub fn with_frontier_and_seeds<I>(graph: &'a G, mut frontier: F, seeds: I) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        frontier.clear();
        let mut search = Self {
            graph,
            visited: graph.new_node_set(),
            frontier,
            pending: SmallVec::new(),
            mode: EdgeMode::FirstReach,
            used_edges: FxHashSet::default(),
            edge_key: directed_key::<G>,
            stop_at: None,
            pops: 0,
        };
        search.seed(seeds);
        search
    }

    fn seed<I>(&mut self, seeds: I)
    where
        I: IntoIterator<Item = G::Node>,
    {
        for s in seeds {
            if !self.visited.insert(s.clone()) {
                self.pending.push(s);
            }
        }
    }

    /// Emit every reachable edge exactly once instead of only the edges that first reach a node.
    /// Has to be called before the first item is requested.
    pub fn visit_every_edge(mut self) -> Self {
        self.mode = EdgeMode::EveryEdge;
        self
    }

    /// Identify `(u, v)` and `(v, u)` when visiting every edge, so that an undirected edge is
    /// only traversed in one direction.
    pub fn undirected(mut self) -> Self
    where
        G::Node: Ord,
    {
        self.edge_key = canonical_key::<G>;
        self
    }

    /// Forgets all state of the traversal (including excluded nodes and the stopper) and restarts at `start`.
    /// The mode and the frontier's comparator are kept.
    pub fn reset(&mut self, start: G::Node) {
        self.visited.clear();
        self.frontier.clear();
        self.pending.clear();
        self.used_edges.clear();
        self.stop_at = None;
        self.pops = 0;
        self.seed(std::iter::once(start));
    }

    /// Sets a stopper node. If an edge reaching this node is emitted, the iterator returns
    /// only None afterwards. A stopper that is a seed ends the search before its first edge.
    pub fn set_stop_at(&mut self, stopper: G::Node) {
        // before the first take, the visited nodes are exactly the seeds
        if self.pops == 0 && self.visited.contains(&stopper) {
            self.pending.clear();
            self.frontier.clear();
        }
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. See [`EdgeSearch::set_stop_at`].
    pub fn stop_at(mut self, stopper: G::Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Returns the stopper node if one is set
    pub fn stopper(&self) -> Option<&G::Node> {
        self.stop_at.as_ref()
    }

    /// Returns *true* if `u` was reached (or is a seed or excluded)
    pub fn did_visit_node(&self, u: &G::Node) -> bool {
        self.visited.contains(u)
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    pub fn frontier_mut(&mut self) -> &mut F {
        &mut self.frontier
    }

    /// Consumes the search and returns its frontier
    pub fn into_frontier(self) -> F {
        self.frontier
    }

    /// Number of items taken from the frontier so far (including skipped duplicates)
    pub fn frontier_pops(&self) -> usize {
        self.pops
    }

    fn is_pending_edge(&self, e: &EdgeOf<G>) -> bool {
        match self.mode {
            EdgeMode::FirstReach => !self.visited.contains(&e.to),
            EdgeMode::EveryEdge => !self.used_edges.contains(&(self.edge_key)(e)),
        }
    }

    fn expand_pending(&mut self) {
        let graph = self.graph;
        for u in std::mem::take(&mut self.pending) {
            for e in graph.out_edges_of(u) {
                if self.is_pending_edge(&e) {
                    self.frontier.put(e);
                }
            }
        }
    }
}

impl<G, F> WithGraphRef<G> for EdgeSearch<'_, G, F>
where
    G: GraphEdges,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, F> Iterator for EdgeSearch<'_, G, F>
where
    G: GraphEdges,
    F: Frontier<EdgeOf<G>>,
{
    type Item = EdgeOf<G>;

    fn next(&mut self) -> Option<Self::Item> {
        self.expand_pending();

        loop {
            let e = self.frontier.take_next()?;
            self.pops += 1;

            let newly_reached = !self.visited.insert(e.to.clone());
            let accept = match self.mode {
                EdgeMode::FirstReach => newly_reached,
                EdgeMode::EveryEdge => self.used_edges.insert((self.edge_key)(&e)),
            };

            if !accept {
                continue;
            }

            if self.stop_at.as_ref() == Some(&e.to) {
                self.frontier.clear();
            } else if newly_reached || self.mode == EdgeMode::EveryEdge {
                // in every-edge mode a node is re-expanded on every arrival; its used edges are filtered
                self.pending.push(e.to.clone());
            }

            return Some(e);
        }
    }
}

/// One frame of the explicit call stack of a [`PostOrderSearch`]
struct Frame<N> {
    node: N,
    children: SmallVec<[N; 8]>,
}

/// Depth-first post-order traversal: a node is emitted only after all of its descendants that were
/// unvisited when it was discovered.
///
/// A post-order cannot be expressed with an iterative frontier; the search keeps an explicit call stack
/// instead of recursing, so deep graphs do not overflow the stack.
pub struct PostOrderSearch<'a, G>
where
    G: GraphEdges,
{
    graph: &'a G,
    visited: G::NodeSet,
    finished: G::NodeSet,
    call_stack: Vec<Frame<G::Node>>,
    over_all_nodes: bool,
    restart_cursor: usize,
    discovered: usize,
}

impl<'a, G> PostOrderSearch<'a, G>
where
    G: GraphEdges,
{
    /// Post-order of all nodes reachable from `start`
    pub fn new(graph: &'a G, start: G::Node) -> Self {
        let mut search = Self::empty(graph, false);
        search.enter(start);
        search
    }

    /// Post-order over the whole graph: whenever the search comes to a hold, it restarts at the next
    /// unvisited node in the order of [`GraphNodes::nodes`]
    pub fn over_all_nodes(graph: &'a G) -> Self {
        Self::empty(graph, true)
    }

    fn empty(graph: &'a G, over_all_nodes: bool) -> Self {
        Self {
            graph,
            visited: graph.new_node_set(),
            finished: graph.new_node_set(),
            call_stack: Vec::new(),
            over_all_nodes,
            restart_cursor: 0,
            discovered: 0,
        }
    }

    fn enter(&mut self, u: G::Node) {
        self.discovered += 1;
        self.visited.insert(u.clone());
        let mut children: SmallVec<[G::Node; 8]> = self.graph.neighbors_of(u.clone()).collect();
        children.reverse();
        self.call_stack.push(Frame { node: u, children });
    }

    fn try_restart(&mut self) -> bool {
        let graph = self.graph;
        let next = graph
            .nodes()
            .enumerate()
            .skip(self.restart_cursor)
            .find(|(_, u)| !self.visited.contains(u));

        match next {
            None => false,
            Some((i, u)) => {
                self.restart_cursor = i + 1;
                self.enter(u);
                true
            }
        }
    }

    /// Number of nodes discovered so far, including those still waiting for their descendants
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Advances the search like [`Iterator::next`], but fails with
    /// [`crate::Error::BoundExceeded`] as soon as more than `limits.max_nodes()` nodes were discovered.
    ///
    /// A deep search may discover many nodes before it emits the first one; the bound is checked
    /// on discovery so that unbounded graphs are rejected.
    pub fn try_next(&mut self, limits: &Limits) -> Result<Option<G::Node>> {
        limits.check_nodes(self.discovered)?;

        loop {
            while let Some(frame) = self.call_stack.last_mut() {
                match frame.children.pop() {
                    Some(v) => {
                        if !self.visited.contains(&v) {
                            self.enter(v);
                            limits.check_nodes(self.discovered)?;
                        }
                    }
                    None => {
                        let u = frame.node.clone();
                        self.call_stack.pop();
                        self.finished.insert(u.clone());
                        return Ok(Some(u));
                    }
                }
            }

            if !self.over_all_nodes || !self.try_restart() {
                return Ok(None);
            }
            limits.check_nodes(self.discovered)?;
        }
    }

    /// Returns *true* if `u` was already emitted
    pub fn is_finished(&self, u: &G::Node) -> bool {
        self.finished.contains(u)
    }

    /// Returns *true* if `u` was discovered (it may still be waiting for its descendants)
    pub fn did_visit_node(&self, u: &G::Node) -> bool {
        self.visited.contains(u)
    }

    /// Returns *true* if `u` has a neighbor that was not emitted yet (or a self-loop).
    ///
    /// Called directly after `u` was emitted, an unfinished neighbor is an ancestor of `u` on the
    /// call stack, i.e. the edge to it closes a directed cycle.
    pub fn has_unfinished_neighbor(&self, u: &G::Node) -> bool {
        self.graph
            .neighbors_of(u.clone())
            .any(|v| v == *u || !self.finished.contains(&v))
    }
}

impl<G> WithGraphRef<G> for PostOrderSearch<'_, G>
where
    G: GraphEdges,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for PostOrderSearch<'_, G>
where
    G: GraphEdges,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        // without bounds the search cannot fail
        self.try_next(&Limits::unbounded()).ok().flatten()
    }
}

/// Extension trait for traversal iterators over index graphs that allows computing a ranking
/// (iteration order) of the nodes in the graph.
pub trait RankFromOrder<G>: WithGraphRef<G> + Iterator<Item = Node> + Sized
where
    G: IndexGraph,
{
    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position (rank, starting at 0) at which node `u`
    /// was visited.
    ///
    /// - Returns `Some(ranking)` if **all nodes of the graph** were visited.
    /// - Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let ranking = g.bfs(0).ranking().unwrap();
    /// assert_eq!(ranking, vec![0, 1, 2]);
    /// ```
    fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE); // assert no item is repeated by iterator
            ranking[u as usize] = rank;
            rank += 1;
        }

        if rank == self.graph_ref().number_of_nodes() {
            Some(ranking)
        } else {
            None
        }
    }
}

impl<G, F> RankFromOrder<G> for NodeSearch<'_, G, F>
where
    G: IndexGraph,
    F: Frontier<Node>,
{
}

impl<G> RankFromOrder<G> for PostOrderSearch<'_, G> where G: IndexGraph {}

/// Provides convenient traversal methods (BFS, DFS, post-order, ...) on every graph
pub trait Traversal: GraphEdges + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnGraph::from_edges(3, [(0, 1), (0, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Self::Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    /// Neighbors are explored in the order of [`GraphEdges::neighbors_of`] reversed.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges(4, [(0, 1), (1, 2), (0, 3)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 3, 1, 2]);
    /// ```
    fn dfs(&self, start: Self::Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns a pre-order traversal from `start` that is driven by the given frontier
    fn search_with<F>(&self, frontier: F, start: Self::Node) -> NodeSearch<'_, Self, F>
    where
        F: Frontier<Self::Node>,
    {
        NodeSearch::with_frontier(self, frontier, start)
    }

    /// Returns an iterator over the edges of a BFS tree rooted at `start`
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges(3, [(0, 1), (0, 2), (1, 2)]);
    ///
    /// let tree: Vec<_> = g.bfs_edges(0).map(|e| (e.from, e.to)).collect();
    /// assert_eq!(tree, vec![(0, 1), (0, 2)]);
    /// ```
    fn bfs_edges(&self, start: Self::Node) -> BfsEdges<'_, Self> {
        BfsEdges::new(self, start)
    }

    /// Returns an iterator over the edges of a DFS tree rooted at `start`
    fn dfs_edges(&self, start: Self::Node) -> DfsEdges<'_, Self> {
        DfsEdges::new(self, start)
    }

    /// Returns an iterator over all nodes reachable from `start` in **post-order**
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.post_order(0).collect();
    /// assert_eq!(order, vec![2, 1, 0]);
    /// ```
    fn post_order(&self, start: Self::Node) -> PostOrderSearch<'_, Self> {
        PostOrderSearch::new(self, start)
    }

    /// Returns an iterator over all nodes of the graph in **post-order**
    fn post_order_all(&self) -> PostOrderSearch<'_, Self> {
        PostOrderSearch::over_all_nodes(self)
    }

    /// Returns *true* if there exists a (directed) path from `u` to `v`
    fn is_node_reachable(&self, u: Self::Node, v: &Self::Node) -> bool {
        self.bfs(u).is_node_reachable(v)
    }
}

impl<G> Traversal for G where G: GraphEdges + Sized {}
