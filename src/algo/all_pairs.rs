/*!
# All-Pairs Shortest Paths

[`AllPairsShortestPaths`] computes a dense `n x n` cost matrix with the Floyd–Warshall triple loop
```text
cost[i][j] = min(cost[i][j], cost[i][k] + cost[k][j])   for all k, i, j
```
after seeding every direct edge with its cost and the diagonal with `0`.
Only costs are stored; use [`ShortestPaths`](super::ShortestPaths) to reconstruct an actual path.

The matrix needs `O(n^2)` memory and the construction runs in `O(n^3)`.

```rust
use sgraphs::{prelude::*, algo::*, config::Limits};

let g = DiGraph::from_edges(3, [(0, 1, 2.0), (1, 2, 1.0), (0, 2, 5.0)]);
let costs = AllPairsShortestPaths::new(&g, LabelCost, Limits::unbounded()).unwrap();

assert_eq!(costs.path_cost(&0, &2), 3.0);
assert!(!costs.has_path(&2, &0));
```
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;

use super::cost::{EdgeCost, NO_PATH};
use crate::{config::Limits, error::Result, ops::*};

/// Dense matrix of cheapest path costs between all ordered pairs of nodes.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<N> {
    nodes: Vec<N>,
    index: FxHashMap<N, usize>,
    costs: Vec<f64>,
}

impl<N> AllPairsShortestPaths<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Computes the cost matrix of `graph` under the given edge costs.
    /// Of parallel edges, the cheapest one is used.
    ///
    /// Fails with [`Error::BoundExceeded`](crate::error::Error::BoundExceeded) if the graph has more
    /// nodes or (directed) edges than `limits` permit.
    ///
    /// # Precondition
    /// Edge costs have to be non-negative; negative cycles are not detected.
    #[tracing::instrument(skip_all, fields(nodes = graph.number_of_nodes_hint()))]
    pub fn new<G, C>(graph: &G, edge_cost: C, limits: Limits) -> Result<Self>
    where
        G: GraphEdges<Node = N>,
        C: EdgeCost<N, G::Label>,
    {
        let mut nodes = Vec::with_capacity(graph.number_of_nodes_hint());
        let mut index = FxHashMap::default();
        for u in graph.nodes() {
            limits.check_nodes(nodes.len() + 1)?;
            index.insert(u.clone(), nodes.len());
            nodes.push(u);
        }

        let n = nodes.len();
        let mut costs = vec![NO_PATH; n * n];
        for i in 0..n {
            costs[i * n + i] = 0.0;
        }

        let mut num_edges = 0;
        for (i, u) in nodes.iter().enumerate() {
            for e in graph.out_edges_of(u.clone()) {
                num_edges += 1;
                limits.check_edges(num_edges)?;

                let Some(&j) = index.get(&e.to) else {
                    continue;
                };
                let cost = edge_cost.edge_cost(&e);
                if cost < costs[i * n + j] {
                    costs[i * n + j] = cost;
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let via = costs[i * n + k];
                if via == NO_PATH {
                    continue;
                }

                for j in 0..n {
                    let rest = costs[k * n + j];
                    if rest == NO_PATH {
                        continue;
                    }

                    if via + rest < costs[i * n + j] {
                        costs[i * n + j] = via + rest;
                    }
                }
            }
        }

        tracing::debug!(nodes = n, edges = num_edges, "all-pairs cost matrix computed");

        Ok(Self {
            nodes,
            index,
            costs,
        })
    }

    /// Returns the nodes in matrix order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the row/column of `u` in the matrix
    pub fn index_of(&self, u: &N) -> Option<usize> {
        self.index.get(u).copied()
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the cost of a cheapest path from `from` to `to`.
    /// Returns [`NO_PATH`] if there is none or one of the nodes is unknown.
    pub fn path_cost(&self, from: &N, to: &N) -> f64 {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.costs[i * self.nodes.len() + j],
            _ => NO_PATH,
        }
    }

    /// Returns *true* if `to` is reachable from `from`
    pub fn has_path(&self, from: &N, to: &N) -> bool {
        self.path_cost(from, to) != NO_PATH
    }

    /// Returns all `(from, to, cost)` triples of distinct, connected nodes ordered by cost.
    /// If `undirected` is set, only pairs where `from` precedes `to` in matrix order are reported.
    pub fn sorted_costs(&self, ascending: bool, undirected: bool) -> Vec<(N, N, f64)> {
        let n = self.nodes.len();
        let mut result = Vec::new();
        for i in 0..n {
            let first = if undirected { i + 1 } else { 0 };
            for j in first..n {
                let cost = self.costs[i * n + j];
                if i == j || cost == NO_PATH {
                    continue;
                }
                result.push((self.nodes[i].clone(), self.nodes[j].clone(), cost));
            }
        }

        if ascending {
            result.sort_by(|a, b| a.2.total_cmp(&b.2));
        } else {
            result.sort_by(|a, b| b.2.total_cmp(&a.2));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algo::{LabelCost, ShortestPath, UnitCost},
        edge::Edge,
        error::{BoundKind, Error},
        node::Node,
        repr::*,
        testing::{InfiniteChain, assert_close, bellman_ford, random_weighted_graph},
    };
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for _ in 0..10 {
            let graph = random_weighted_graph(rng, 25, 70);
            let all_pairs = AllPairsShortestPaths::new(&graph, LabelCost, Limits::default()).unwrap();
            assert_eq!(all_pairs.number_of_nodes(), 25);

            for source in graph.vertices_range() {
                let expected = bellman_ford(&graph, source, |e: &Edge<Node, f64>| e.label);
                for target in graph.vertices_range() {
                    assert_close(all_pairs.path_cost(&source, &target), expected[target as usize]);
                }
            }
        }
    }

    #[test]
    fn agrees_with_reconstructed_paths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(32);
        let graph = random_weighted_graph(rng, 30, 90);
        let all_pairs = AllPairsShortestPaths::new(&graph, LabelCost, Limits::default()).unwrap();

        for source in graph.vertices_range() {
            let tree = graph.shortest_paths_by(source, LabelCost).unwrap();
            for target in graph.vertices_range() {
                assert_eq!(all_pairs.has_path(&source, &target), tree.is_reachable(&target));
                if source != target && tree.is_reachable(&target) {
                    let walked = tree.path_to(&target).iter().map(|e| e.label).sum();
                    assert_close(all_pairs.path_cost(&source, &target), walked);
                }
            }
        }
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = DiGraph::from_edges(2, [(0, 1, 4.0), (0, 1, 1.5), (1, 1, 3.0)]);
        let all_pairs = AllPairsShortestPaths::new(&graph, LabelCost, Limits::default()).unwrap();

        assert_eq!(all_pairs.path_cost(&0, &1), 1.5);
        assert_eq!(all_pairs.path_cost(&1, &1), 0.0);
        assert_eq!(all_pairs.path_cost(&1, &0), NO_PATH);
        assert_eq!(all_pairs.path_cost(&0, &7), NO_PATH);
        assert_eq!(all_pairs.index_of(&7), None);
    }

    #[test]
    fn sorted_costs() {
        let graph = UnGraph::from_edges(4, [(0, 1, 3.0), (1, 2, 1.0), (0, 3, 0.5)]);
        let all_pairs = AllPairsShortestPaths::new(&graph, LabelCost, Limits::default()).unwrap();

        let ascending = all_pairs.sorted_costs(true, true);
        assert_eq!(
            ascending,
            vec![
                (0, 3, 0.5),
                (1, 2, 1.0),
                (0, 1, 3.0),
                (1, 3, 3.5),
                (0, 2, 4.0),
                (2, 3, 4.5)
            ]
        );

        let descending = all_pairs.sorted_costs(false, false);
        assert_eq!(descending.len(), 12);
        assert!(descending.windows(2).all(|w| w[0].2 >= w[1].2));
        assert!(descending.iter().all(|&(i, j, _)| i != j));
    }

    #[test]
    fn unreachable_pairs_are_omitted() {
        let graph = DiGraph::from_edges(3, [(0, 1), (1, 2)]);
        let all_pairs = AllPairsShortestPaths::new(&graph, UnitCost, Limits::default()).unwrap();

        let pairs = all_pairs
            .sorted_costs(true, false)
            .into_iter()
            .map(|(i, j, c)| (i, j, c as u32))
            .collect_vec();
        assert_eq!(pairs, vec![(0, 1, 1), (1, 2, 1), (0, 2, 2)]);
    }

    #[test]
    fn label_graph() {
        let graph = LabelUnGraph::from_edges([("x", "y", 2.0), ("y", "z", 2.0), ("x", "z", 5.0)]);
        let all_pairs = graph
            .all_pairs_shortest_paths(LabelCost, Limits::default())
            .unwrap();

        assert_eq!(all_pairs.nodes(), &["x", "y", "z"]);
        assert_eq!(all_pairs.path_cost(&"z", &"x"), 4.0);
        assert!(!all_pairs.has_path(&"x", &"w"));
    }

    #[test]
    fn bounds() {
        let graph = DiGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);

        let err = AllPairsShortestPaths::new(&graph, UnitCost, Limits::unbounded().with_max_nodes(3));
        assert_eq!(
            err.err(),
            Some(Error::BoundExceeded {
                kind: BoundKind::Nodes,
                limit: 3
            })
        );

        let err = AllPairsShortestPaths::new(&graph, UnitCost, Limits::unbounded().with_max_edges(2));
        assert_eq!(
            err.err(),
            Some(Error::BoundExceeded {
                kind: BoundKind::Edges,
                limit: 2
            })
        );

        let limits = Limits::unbounded().with_max_nodes(4).with_max_edges(3);
        assert!(AllPairsShortestPaths::new(&graph, UnitCost, limits).is_ok());

        let limits = Limits::unbounded().with_max_nodes(50);
        let err = AllPairsShortestPaths::new(&InfiniteChain, UnitCost, limits);
        assert_eq!(
            err.err(),
            Some(Error::BoundExceeded {
                kind: BoundKind::Nodes,
                limit: 50
            })
        );
    }
}
