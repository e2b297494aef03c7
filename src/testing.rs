#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use fxhash::{FxHashMap, FxHashSet};

#[cfg(test)]
use crate::{
    algo::NO_PATH,
    edge::{Edge, NumEdges},
    node::*,
    ops::*,
    repr::DiGraph,
};

/// Every index graph should satisfy the capability contract of `GraphNodes`, `GraphEdges`
/// and (if implemented) `GraphInEdges`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` distinct random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<IndexEdge> {
                let mut edges = (0..m_ub).map(|_| {
                    let e = IndexEdge::from((rng.random_range(0..n), rng.random_range(0..n)));

                    if $undirected {
                        e.normalized()
                    } else {
                        e
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Expected out-neighbors (`reverse == false`) or in-neighbors of every node
            fn adjacency(n: NumNodes, edges: &[IndexEdge], reverse: bool) -> Vec<Vec<Node>> {
                let mut adj = vec![Vec::new(); n as usize];
                for e in edges {
                    let (u, v) = if reverse { (e.to, e.from) } else { (e.from, e.to) };
                    adj[u as usize].push(v);

                    if $undirected && !e.is_loop() {
                        adj[v as usize].push(u);
                    }
                }

                adj.into_iter().map(|nbs| nbs.into_iter().sorted().collect_vec()).collect_vec()
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.nodes().collect_vec(), (0..n).collect_vec());
                assert!(graph.nodes().all(|u| graph.out_degree_of(u) == 0));

                assert!(graph.check_node(&(n - 1)).is_ok());
                assert!(graph.check_node(&n).is_err());
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdges) => {
        #[test]
        fn graph_edges() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());
                        let expected = adjacency(n, &edges, false);

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        for u in graph.vertices_range() {
                            let nbs = &expected[u as usize];
                            assert_eq!(&graph.neighbors_of(u).sorted().collect_vec(), nbs);
                            assert_eq!(graph.out_degree_of(u), nbs.len());
                            assert!(graph.out_edges_of(u).all(|e| e.from == u));

                            for v in graph.vertices_range() {
                                let exists = nbs.contains(&v);
                                assert_eq!(graph.contains_edge(&u, &v), exists);
                                assert_eq!(graph.edge_label(&u, &v).is_ok(), exists);
                            }
                        }

                        let loops = edges.iter().filter(|e| e.is_loop()).count();
                        let reported = if $undirected {
                            2 * edges.len() - loops
                        } else {
                            edges.len()
                        };
                        assert_eq!(graph.edges().count(), reported);
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphInEdges) => {
        #[test]
        fn graph_in_edges() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());
                        let out_nbs = adjacency(n, &edges, false);
                        let in_nbs = adjacency(n, &edges, true);

                        let transposed = graph.transposed();
                        let view = Transposed::new(&graph);
                        assert_eq!(view.number_of_edges(), graph.number_of_edges());

                        for u in graph.vertices_range() {
                            let parents = &in_nbs[u as usize];
                            assert_eq!(&graph.parents_of(u).sorted().collect_vec(), parents);
                            assert_eq!(graph.in_degree_of(u), parents.len());
                            assert!(graph.in_edges_of(u).all(|e| e.to == u));

                            assert_eq!(&transposed.neighbors_of(u).sorted().collect_vec(), parents);
                            assert_eq!(&view.neighbors_of(u).sorted().collect_vec(), parents);
                            assert_eq!(
                                &view.parents_of(u).sorted().collect_vec(),
                                &out_nbs[u as usize]
                            );
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Directed graph on `n` nodes with `m` random edges of weight in `[0, 10)`.
/// Loops and parallel edges may occur.
#[cfg(test)]
pub(crate) fn random_weighted_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> DiGraph<f64> {
    let mut graph = DiGraph::new(n);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_edge(u, v, rng.random_range(0.0..10.0));
    }
    graph
}

/// Path `0 -> 1 -> 2 -> ...` that never ends: neither its nodes nor any search on it terminate
/// without a bound.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct InfiniteChain;

#[cfg(test)]
impl GraphType for InfiniteChain {
    type Dir = Directed;
}

#[cfg(test)]
impl GraphNodes for InfiniteChain {
    type Node = u64;
    type NodeSet = FxHashSet<u64>;
    type NodeMap<T> = FxHashMap<u64, T>;

    fn nodes(&self) -> impl Iterator<Item = u64> + '_ {
        0..
    }

    fn number_of_nodes_hint(&self) -> usize {
        0
    }
}

#[cfg(test)]
impl GraphEdges for InfiniteChain {
    type Label = ();

    fn out_edges_of(&self, u: u64) -> impl Iterator<Item = Edge<u64>> + '_ {
        std::iter::once(Edge::new(u, u + 1, ()))
    }
}

#[cfg(test)]
impl GraphInEdges for InfiniteChain {
    fn in_edges_of(&self, u: u64) -> impl Iterator<Item = Edge<u64>> + '_ {
        u.checked_sub(1).map(|p| Edge::new(p, u, ())).into_iter()
    }
}

/// Reference single-source costs computed by Bellman-Ford; unreachable nodes get [`NO_PATH`]
#[cfg(test)]
pub(crate) fn bellman_ford<G, C>(graph: &G, source: Node, cost: C) -> Vec<f64>
where
    G: IndexGraph,
    C: Fn(&EdgeOf<G>) -> f64,
{
    let mut dist = vec![NO_PATH; graph.len()];
    dist[source as usize] = 0.0;

    for _ in 0..graph.len() {
        let mut changed = false;
        for e in graph.edges() {
            let d = dist[e.from as usize];
            if d == NO_PATH {
                continue;
            }

            let candidate = d + cost(&e);
            if candidate < dist[e.to as usize] {
                dist[e.to as usize] = candidate;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    dist
}

/// Asserts that two costs agree up to rounding; infinite costs have to match exactly
#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    if actual.is_infinite() || expected.is_infinite() {
        assert_eq!(actual, expected);
    } else {
        assert!(
            (actual - expected).abs() <= 1e-9 * (1.0 + expected.abs()),
            "{actual} != {expected}"
        );
    }
}
