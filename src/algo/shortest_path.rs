/*!
# Single-Source Shortest Paths

[`ShortestPaths`] is a lazy best-first search: an [`EdgeSearch`] whose frontier is a
[`HeapFrontier`] ordered by a [`CostOrder`]. Every emitted edge *settles* its target: the edge is
recorded as parent edge and relaxes the target's cost before any of the target's out-edges enter the
frontier. With non-negative edge costs (and a consistent heuristic), a settled cost is final.

```rust
use sgraphs::{prelude::*, algo::*};

let g = LabelDiGraph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0), ("C", "D", 1.0)]);

let tree = ShortestPaths::new(&g, "A").with_cost(LabelCost).into_tree();
assert_eq!(tree.cost_of(&"D"), 4.0);
assert_eq!(tree.path_nodes_to(&"D"), vec!["A", "B", "C", "D"]);
```
*/

use super::{all_pairs::AllPairsShortestPaths, cost::*, frontier::*, traversal::EdgeSearch};
use crate::{config::Limits, edge::Edge, error::Result, ops::*, utils::Map};

type CostFrontier<G, C, H> = HeapFrontier<EdgeOf<G>, CostOrder<G, C, H>>;

/// Lazy Dijkstra / A* search emitting the parent edge of every settled node in settling order.
///
/// # Precondition
/// Edge costs have to be non-negative and the heuristic admissible and consistent. This is not
/// checked; otherwise the reported costs are only upper bounds.
pub struct ShortestPaths<'a, G, C = UnitCost, H = NoHeuristic>
where
    G: GraphEdges,
{
    search: EdgeSearch<'a, G, CostFrontier<G, C, H>>,
    sources: Vec<G::Node>,
    parents: G::NodeMap<EdgeOf<G>>,
}

impl<'a, G> ShortestPaths<'a, G>
where
    G: GraphEdges,
{
    /// Best-first search from `source` with unit edge costs
    pub fn new(graph: &'a G, source: G::Node) -> Self {
        Self::from_sources(graph, [source])
    }

    /// Best-first search from multiple sources, all starting at cost `0`.
    /// The resulting costs are distances to the nearest source.
    pub fn from_sources<I>(graph: &'a G, sources: I) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        Self::build(graph, sources.into_iter().collect(), UnitCost, NoHeuristic)
    }
}

impl<'a, G, C, H> ShortestPaths<'a, G, C, H>
where
    G: GraphEdges,
    C: EdgeCost<G::Node, G::Label>,
    H: Heuristic<G::Node>,
{
    fn build(graph: &'a G, sources: Vec<G::Node>, edge_cost: C, heuristic: H) -> Self {
        let order = CostOrder::from_sources(graph, sources.iter().cloned(), edge_cost, heuristic);
        let search =
            EdgeSearch::with_frontier_and_seeds(graph, HeapFrontier::new(order), sources.iter().cloned());

        Self {
            search,
            sources,
            parents: graph.new_node_map(),
        }
    }

    /// Replaces the edge-cost function.
    /// The search restarts from its sources; a stopper is kept.
    pub fn with_cost<C2>(self, edge_cost: C2) -> ShortestPaths<'a, G, C2, H>
    where
        C2: EdgeCost<G::Node, G::Label>,
    {
        let graph = self.search.graph();
        let stop_at = self.search_stopper();
        let (_, _, heuristic) = self.search.into_frontier().into_order().into_parts();

        let mut paths = ShortestPaths::build(graph, self.sources, edge_cost, heuristic);
        if let Some(target) = stop_at {
            paths.set_stop_at(target);
        }
        paths
    }

    /// Replaces the heuristic; the search becomes A*.
    /// The search restarts from its sources; a stopper is kept.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> ShortestPaths<'a, G, C, H2>
    where
        H2: Heuristic<G::Node>,
    {
        let graph = self.search.graph();
        let stop_at = self.search_stopper();
        let (_, edge_cost, _) = self.search.into_frontier().into_order().into_parts();

        let mut paths = ShortestPaths::build(graph, self.sources, edge_cost, heuristic);
        if let Some(target) = stop_at {
            paths.set_stop_at(target);
        }
        paths
    }

    fn search_stopper(&self) -> Option<G::Node> {
        self.search.stopper().cloned()
    }

    /// Stops the search as soon as `target` is settled (point-to-point query)
    pub fn set_stop_at(&mut self, target: G::Node) {
        self.search.set_stop_at(target);
    }

    /// Stops the search as soon as `target` is settled (point-to-point query)
    pub fn stop_at(mut self, target: G::Node) -> Self {
        self.set_stop_at(target);
        self
    }

    /// The sources of the search
    pub fn sources(&self) -> &[G::Node] {
        &self.sources
    }

    /// Returns the settled cost of `u` or [`NO_PATH`] if `u` was not settled (yet)
    pub fn cost_of(&self, u: &G::Node) -> f64 {
        self.search.frontier().order().cost_of(u)
    }

    /// Returns the edges of a cheapest path from a source to `target`.
    /// The path is empty if `target` is a source or was not settled (yet).
    pub fn path_to(&self, target: &G::Node) -> Vec<EdgeOf<G>> {
        trace_back(&self.parents, target)
    }

    /// Returns the nodes of a cheapest path from a source to `target` (both included).
    /// Returns an empty vector if `target` was not settled (yet).
    pub fn path_nodes_to(&self, target: &G::Node) -> Vec<G::Node> {
        nodes_of_path(self.cost_of(target), self.path_to(target), target)
    }

    /// Number of edges taken from the frontier so far
    pub fn frontier_pops(&self) -> usize {
        self.search.frontier_pops()
    }

    /// Runs the search to completion and returns the resulting tree
    #[tracing::instrument(skip(self), fields(sources = self.sources.len()))]
    pub fn into_tree(mut self) -> ShortestPathTree<G> {
        let settled = self.by_ref().count();
        tracing::debug!(settled, pops = self.frontier_pops(), "shortest path search done");

        let (costs, _, _) = self.search.into_frontier().into_order().into_parts();
        ShortestPathTree {
            sources: self.sources,
            costs,
            parents: self.parents,
        }
    }
}

impl<G, C, H> Iterator for ShortestPaths<'_, G, C, H>
where
    G: GraphEdges,
    C: EdgeCost<G::Node, G::Label>,
    H: Heuristic<G::Node>,
{
    type Item = EdgeOf<G>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.search.next()?;
        // relax before the out-edges of `edge.to` are inserted on the next call
        self.search.frontier_mut().order_mut().update_cost(&edge);
        self.parents.insert(edge.to.clone(), edge.clone());
        Some(edge)
    }
}

fn trace_back<N, E, M>(parents: &M, target: &N) -> Vec<Edge<N, E>>
where
    N: Clone + PartialEq,
    E: Clone,
    M: Map<N, Edge<N, E>>,
{
    let mut path = Vec::new();
    let mut u = target.clone();
    while let Some(e) = parents.get(&u) {
        path.push(e.clone());
        u = e.from.clone();
    }
    path.reverse();
    path
}

fn nodes_of_path<N: Clone, E>(cost: f64, path: Vec<Edge<N, E>>, target: &N) -> Vec<N> {
    if cost == NO_PATH {
        return Vec::new();
    }

    let Some(start) = path.first().map(|e| e.from.clone()) else {
        return vec![target.clone()];
    };

    std::iter::once(start)
        .chain(path.into_iter().map(|e| e.to))
        .collect()
}

/// Result of a completed single-source search: settled costs and parent edges.
pub struct ShortestPathTree<G>
where
    G: GraphEdges,
{
    sources: Vec<G::Node>,
    costs: G::NodeMap<f64>,
    parents: G::NodeMap<EdgeOf<G>>,
}

impl<G> ShortestPathTree<G>
where
    G: GraphEdges,
{
    /// The sources of the search
    pub fn sources(&self) -> &[G::Node] {
        &self.sources
    }

    /// Returns the cost of a cheapest path to `u` or [`NO_PATH`] if `u` is unreachable
    pub fn cost_of(&self, u: &G::Node) -> f64 {
        self.costs.get(u).copied().unwrap_or(NO_PATH)
    }

    /// Returns *true* if `u` is reachable from a source
    pub fn is_reachable(&self, u: &G::Node) -> bool {
        self.costs.contains_key(u)
    }

    /// Returns the edge through which `u` was settled
    pub fn parent_edge_of(&self, u: &G::Node) -> Option<&EdgeOf<G>> {
        self.parents.get(u)
    }

    /// Returns the edges of a cheapest path from a source to `target`.
    /// The path is empty if `target` is a source or unreachable.
    pub fn path_to(&self, target: &G::Node) -> Vec<EdgeOf<G>> {
        trace_back(&self.parents, target)
    }

    /// Returns the nodes of a cheapest path from a source to `target` (both included),
    /// or an empty vector if `target` is unreachable.
    pub fn path_nodes_to(&self, target: &G::Node) -> Vec<G::Node> {
        nodes_of_path(self.cost_of(target), self.path_to(target), target)
    }

    /// Returns the number of reachable nodes (including the sources)
    pub fn number_of_reachable(&self) -> usize {
        self.costs.len()
    }
}

/// Shortest-path queries available on every graph
pub trait ShortestPath: GraphEdges + Sized {
    /// Computes hop distances (unit edge costs) from `source` to all nodes.
    ///
    /// Fails if `source` is not a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use sgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
    /// let tree = g.shortest_paths(0).unwrap();
    ///
    /// assert_eq!(tree.cost_of(&2), 1.0);
    /// assert_eq!(tree.cost_of(&3), NO_PATH);
    /// assert!(g.shortest_paths(4).is_err());
    /// ```
    fn shortest_paths(&self, source: Self::Node) -> Result<ShortestPathTree<Self>> {
        self.check_node(&source)?;
        Ok(ShortestPaths::new(self, source).into_tree())
    }

    /// Computes cheapest paths from `source` to all nodes under the given edge costs.
    ///
    /// Fails if `source` is not a node of the graph.
    fn shortest_paths_by<C>(&self, source: Self::Node, edge_cost: C) -> Result<ShortestPathTree<Self>>
    where
        C: EdgeCost<Self::Node, Self::Label>,
    {
        self.check_node(&source)?;
        Ok(ShortestPaths::new(self, source)
            .with_cost(edge_cost)
            .into_tree())
    }

    /// Computes the costs of cheapest paths between all pairs of nodes.
    /// See [`AllPairsShortestPaths::new`].
    fn all_pairs_shortest_paths<C>(
        &self,
        edge_cost: C,
        limits: Limits,
    ) -> Result<AllPairsShortestPaths<Self::Node>>
    where
        C: EdgeCost<Self::Node, Self::Label>,
    {
        AllPairsShortestPaths::new(self, edge_cost, limits)
    }
}

impl<G> ShortestPath for G where G: GraphEdges + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::Node,
        repr::*,
        testing::{assert_close, bellman_ford, random_weighted_graph},
    };
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn concrete_scenario() {
        let graph = LabelDiGraph::from_edges([
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("A", "C", 5.0),
            ("C", "D", 1.0),
        ]);

        let tree = graph.shortest_paths_by("A", LabelCost).unwrap();
        assert_eq!(tree.cost_of(&"A"), 0.0);
        assert_eq!(tree.cost_of(&"B"), 1.0);
        assert_eq!(tree.cost_of(&"C"), 3.0);
        assert_eq!(tree.cost_of(&"D"), 4.0);

        let path = tree
            .path_to(&"D")
            .into_iter()
            .map(|e| (e.from, e.to))
            .collect_vec();
        assert_eq!(path, vec![("A", "B"), ("B", "C"), ("C", "D")]);

        assert!(tree.path_to(&"A").is_empty());
        assert_eq!(tree.path_nodes_to(&"A"), vec!["A"]);
        assert_eq!(tree.cost_of(&"Z"), NO_PATH);
        assert!(tree.path_to(&"Z").is_empty());
        assert!(tree.path_nodes_to(&"Z").is_empty());
        assert_eq!(tree.number_of_reachable(), 4);
    }

    #[test]
    fn unit_costs_are_hop_distances() {
        let graph = UnGraph::from_edges(6, [(0, 1), (1, 2), (2, 3), (0, 4), (4, 3)]);
        let tree = graph.shortest_paths(0).unwrap();

        assert_eq!(
            (0..6).map(|u| tree.cost_of(&u)).collect_vec(),
            vec![0.0, 1.0, 2.0, 2.0, 1.0, NO_PATH]
        );
        assert_eq!(tree.path_to(&3).len(), 2);
        assert!(!tree.is_reachable(&5));
        assert!(tree.parent_edge_of(&0).is_none());
    }

    #[test]
    fn settling_order_is_monotone() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        let graph = random_weighted_graph(rng, 60, 200);

        let mut search = ShortestPaths::new(&graph, 0).with_cost(LabelCost);
        let mut last = 0.0;
        while let Some(e) = search.next() {
            let cost = search.cost_of(&e.to);
            assert!(cost >= last);
            assert_close(cost, search.cost_of(&e.from) + e.label);
            last = cost;
        }
    }

    #[test]
    fn dijkstra_matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(22);

        for _ in 0..30 {
            let graph = random_weighted_graph(rng, 40, 120);
            for source in [0, 13, 39] {
                let expected = bellman_ford(&graph, source, |e: &Edge<Node, f64>| e.label);
                let tree = graph.shortest_paths_by(source, LabelCost).unwrap();

                for u in graph.vertices_range() {
                    assert_close(tree.cost_of(&u), expected[u as usize]);

                    let path = tree.path_to(&u);
                    if let Some(first) = path.first() {
                        assert_eq!(first.from, source);
                        assert_eq!(path.last().map(|e| e.to), Some(u));
                        assert!(path.windows(2).all(|w| w[0].to == w[1].from));
                        assert_close(path.iter().map(|e| e.label).sum(), expected[u as usize]);
                    }
                }
            }
        }
    }

    #[test]
    fn a_star_agrees_with_dijkstra() {
        // grid graph where the heuristic is the manhattan distance to the target
        let width: Node = 12;
        let id = |x: Node, y: Node| y * width + x;
        let mut graph = UnGraph::new(width * width);
        for y in 0..width {
            for x in 0..width {
                if x + 1 < width {
                    graph.add_edge(id(x, y), id(x + 1, y), 1.0);
                }
                if y + 1 < width {
                    graph.add_edge(id(x, y), id(x, y + 1), 1.0);
                }
            }
        }

        let target = id(width - 1, width - 1);
        let manhattan =
            move |u: &Node| ((width - 1 - u % width) + (width - 1 - u / width)) as f64;

        let mut dijkstra = ShortestPaths::new(&graph, 0).with_cost(LabelCost).stop_at(target);
        dijkstra.by_ref().for_each(drop);

        let mut a_star = ShortestPaths::new(&graph, 0)
            .with_cost(LabelCost)
            .with_heuristic(manhattan)
            .stop_at(target);
        a_star.by_ref().for_each(drop);

        assert_eq!(dijkstra.cost_of(&target), 22.0);
        assert_eq!(a_star.cost_of(&target), 22.0);
        assert_eq!(a_star.path_to(&target).len(), 22);
        assert!(a_star.frontier_pops() <= dijkstra.frontier_pops());
    }

    #[test]
    fn a_star_costs_match_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for _ in 0..10 {
            let graph = random_weighted_graph(rng, 40, 150);
            let target: Node = 39;

            // the exact remaining cost is an admissible and consistent heuristic
            let reverse = graph.transposed();
            let remaining = reverse.shortest_paths_by(target, LabelCost).unwrap();
            let heuristic = |u: &Node| {
                let c = remaining.cost_of(u);
                if c == NO_PATH { 0.0 } else { c }
            };

            let mut dijkstra = ShortestPaths::new(&graph, 0).with_cost(LabelCost).stop_at(target);
            dijkstra.by_ref().for_each(drop);

            let mut a_star = ShortestPaths::new(&graph, 0)
                .with_heuristic(heuristic)
                .with_cost(LabelCost)
                .stop_at(target);
            a_star.by_ref().for_each(drop);

            assert_close(a_star.cost_of(&target), dijkstra.cost_of(&target));
            assert!(a_star.frontier_pops() <= dijkstra.frontier_pops());
        }
    }

    #[test]
    fn multiple_sources() {
        let graph = DiGraph::from_edges(5, [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (4, 3, 0.5)]);
        let tree = ShortestPaths::from_sources(&graph, [0, 4])
            .with_cost(LabelCost)
            .into_tree();

        assert_eq!(tree.sources(), &[0, 4]);
        assert_eq!(tree.cost_of(&2), 2.0);
        assert_eq!(tree.cost_of(&3), 0.5);
        assert_eq!(tree.path_nodes_to(&3), vec![4, 3]);
        assert_eq!(tree.cost_of(&4), 0.0);
    }

    #[test]
    fn blocked_edges_are_last_resort() {
        let graph = DiGraph::from_edges(3, [(0, 1, false), (0, 2, true), (2, 1, true)]);
        let tree = graph.shortest_paths_by(0, TraversableCost).unwrap();
        assert_eq!(tree.cost_of(&1), 2.0);

        let blocked = DiGraph::from_edges(2, [(0, 1, false)]);
        let tree = blocked.shortest_paths_by(0, TraversableCost).unwrap();
        assert_eq!(tree.cost_of(&1), BLOCKED_COST);
    }

    #[test]
    fn stopping_at_a_source() {
        let graph = DiGraph::from_edges(4, [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);

        let mut paths = ShortestPaths::new(&graph, 0).with_cost(LabelCost).stop_at(0);
        assert_eq!(paths.next(), None);
        assert_eq!(paths.frontier_pops(), 0);
        assert_eq!(paths.cost_of(&0), 0.0);
        assert_eq!(paths.path_nodes_to(&0), vec![0]);
        assert_eq!(paths.cost_of(&1), NO_PATH);

        // the stopper is kept when the cost function is replaced
        let tree = ShortestPaths::from_sources(&graph, [0, 2])
            .stop_at(2)
            .with_cost(LabelCost)
            .into_tree();
        assert_eq!(tree.cost_of(&2), 0.0);
        assert_eq!(tree.cost_of(&1), NO_PATH);
        assert_eq!(tree.cost_of(&3), NO_PATH);
    }

    #[test]
    fn invalid_source() {
        let graph: DiGraph = DiGraph::new(3);
        assert!(graph.shortest_paths(3).is_err());
        assert!(graph.shortest_paths(2).is_ok());
    }
}
