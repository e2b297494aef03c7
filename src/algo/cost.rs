/*!
# Cost Model

Best-first searches order their frontier by the *estimated total cost* of a pending edge
`e = (u, v)`:
```text
cost[u] + edge_cost(e) + heuristic(v)
```
[`CostOrder`] bundles the tentative cost table with an [`EdgeCost`] and a [`Heuristic`] and acts as
the [`Comparator`] of a [`HeapFrontier`](super::HeapFrontier). With [`NoHeuristic`] the search is
Dijkstra's algorithm; with an admissible heuristic (one that never overestimates the remaining
cost) it is A*.

Edge costs must be non-negative. Negative costs are not detected; the resulting costs are then
only upper bounds.
*/

use std::cmp::Ordering;

use num::ToPrimitive;

use super::frontier::Comparator;
use crate::{edge::Edge, ops::*, utils::Map};

/// Cost reported for nodes that were not reached
pub const NO_PATH: f64 = f64::INFINITY;

/// Cost of an edge whose boolean label marks it as not traversable
pub const BLOCKED_COST: f64 = 1e9;

/// Maps an edge to a non-negative cost.
/// Closures `Fn(&Edge<N, E>) -> f64` are edge costs as well.
pub trait EdgeCost<N, E> {
    fn edge_cost(&self, edge: &Edge<N, E>) -> f64;
}

impl<N, E, F> EdgeCost<N, E> for F
where
    F: Fn(&Edge<N, E>) -> f64,
{
    fn edge_cost(&self, edge: &Edge<N, E>) -> f64 {
        self(edge)
    }
}

/// Every edge costs `1`, i.e. costs are hop-distances
#[derive(Debug, Copy, Clone, Default)]
pub struct UnitCost;

impl<N, E> EdgeCost<N, E> for UnitCost {
    fn edge_cost(&self, _edge: &Edge<N, E>) -> f64 {
        1.0
    }
}

/// Uses the numeric label of an edge as its cost.
/// Labels that cannot be represented as `f64` are treated as [`NO_PATH`].
#[derive(Debug, Copy, Clone, Default)]
pub struct LabelCost;

impl<N, E: ToPrimitive> EdgeCost<N, E> for LabelCost {
    fn edge_cost(&self, edge: &Edge<N, E>) -> f64 {
        edge.label.to_f64().unwrap_or(NO_PATH)
    }
}

/// Interprets a boolean label as *traversable*: `true` costs `1`, `false` costs [`BLOCKED_COST`].
/// Blocked edges are only taken if there is no other way.
#[derive(Debug, Copy, Clone, Default)]
pub struct TraversableCost;

impl<N> EdgeCost<N, bool> for TraversableCost {
    fn edge_cost(&self, edge: &Edge<N, bool>) -> f64 {
        if edge.label { 1.0 } else { BLOCKED_COST }
    }
}

/// Estimates the remaining cost from a node to the target.
/// Closures `Fn(&N) -> f64` are heuristics as well.
pub trait Heuristic<N> {
    fn estimate(&self, node: &N) -> f64;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N) -> f64,
{
    fn estimate(&self, node: &N) -> f64 {
        self(node)
    }
}

/// The zero heuristic; best-first search degenerates to Dijkstra's algorithm
#[derive(Debug, Copy, Clone, Default)]
pub struct NoHeuristic;

impl<N> Heuristic<N> for NoHeuristic {
    fn estimate(&self, _node: &N) -> f64 {
        0.0
    }
}

/// Tentative cost table plus edge-cost function and heuristic.
///
/// Used as [`Comparator`] of pending edges. Every accepted edge has to be passed to
/// [`CostOrder::update_cost`] *before* the out-edges of its target are inserted into the frontier,
/// so that their keys are computed from the settled cost.
pub struct CostOrder<G: GraphNodes, C, H> {
    costs: G::NodeMap<f64>,
    edge_cost: C,
    heuristic: H,
}

impl<G, C, H> CostOrder<G, C, H>
where
    G: GraphEdges,
    C: EdgeCost<G::Node, G::Label>,
    H: Heuristic<G::Node>,
{
    /// Creates a cost table for `graph` with `cost[source] = 0` and all other entries [`NO_PATH`]
    pub fn new(graph: &G, source: G::Node, edge_cost: C, heuristic: H) -> Self {
        Self::from_sources(graph, std::iter::once(source), edge_cost, heuristic)
    }

    /// Creates a cost table for `graph` where all `sources` have cost `0`
    pub fn from_sources<I>(graph: &G, sources: I, edge_cost: C, heuristic: H) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        let mut costs = graph.new_node_map();
        for s in sources {
            costs.insert(s, 0.0);
        }

        Self {
            costs,
            edge_cost,
            heuristic,
        }
    }

    /// Returns the cost of a single edge
    pub fn edge_cost(&self, edge: &EdgeOf<G>) -> f64 {
        self.edge_cost.edge_cost(edge)
    }

    /// Returns the best known cost of `u` or [`NO_PATH`] if `u` was not reached yet
    pub fn cost_of(&self, u: &G::Node) -> f64 {
        self.costs.get(u).copied().unwrap_or(NO_PATH)
    }

    /// Returns the estimated total cost of a path ending with `edge`
    pub fn estimate(&self, edge: &EdgeOf<G>) -> f64 {
        self.cost_of(&edge.from) + self.edge_cost(edge) + self.heuristic.estimate(&edge.to)
    }

    /// Relaxation: lowers `cost[edge.to]` to `cost[edge.from] + edge_cost(edge)` if that is cheaper.
    /// Returns *true* if the cost was lowered.
    pub fn update_cost(&mut self, edge: &EdgeOf<G>) -> bool {
        let candidate = self.cost_of(&edge.from) + self.edge_cost(edge);
        if candidate < self.cost_of(&edge.to) {
            self.costs.insert(edge.to.clone(), candidate);
            true
        } else {
            false
        }
    }

    /// Consumes the order and returns `(cost table, edge cost, heuristic)`
    pub fn into_parts(self) -> (G::NodeMap<f64>, C, H) {
        (self.costs, self.edge_cost, self.heuristic)
    }
}

impl<G, C, H> Comparator<EdgeOf<G>> for CostOrder<G, C, H>
where
    G: GraphEdges,
    C: EdgeCost<G::Node, G::Label>,
    H: Heuristic<G::Node>,
{
    fn compare(&self, a: &EdgeOf<G>, b: &EdgeOf<G>) -> Ordering {
        self.estimate(a).total_cmp(&self.estimate(b))
    }
}
