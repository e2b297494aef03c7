/*!
# Eulerian Circuits

[`EulerianCircuit`] assembles a closed walk that uses every edge exactly once (Hierholzer's
algorithm). It rides on an every-edge [`DfsEdges`] search: the edges taken are kept on a stack, and
whenever the search continues at a node other than the current end of the walk, the stack is
unwound into the circuit until its top ends at that node again.

```rust
use sgraphs::{prelude::*, algo::*};

let g = DiGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
let circuit = g.eulerian_circuit(0).unwrap();

assert_eq!(circuit.iter().map(|e| e.to).collect::<Vec<_>>(), vec![1, 2, 0]);
```
*/

use super::traversal::DfsEdges;
use crate::{config::Limits, error::Result, ops::*};

/// Hierholzer's algorithm over the edges reachable from a start node.
///
/// # Precondition
/// The graph has to be Eulerian: all edges are reachable from the start node and every node has
/// equal in- and out-degree (even degree if undirected). This is not checked; otherwise the result
/// is not a valid circuit. Parallel edges are identified with each other.
pub struct EulerianCircuit<'a, G>
where
    G: GraphEdges,
{
    graph: &'a G,
    start: G::Node,
}

impl<'a, G> EulerianCircuit<'a, G>
where
    G: GraphEdges + GraphType,
    G::Node: Ord,
{
    pub fn new(graph: &'a G, start: G::Node) -> Self {
        Self { graph, start }
    }

    /// Computes the circuit. It starts and ends at the start node; it is empty if the start node
    /// has no edges.
    ///
    /// Fails with [`Error::BoundExceeded`](crate::error::Error::BoundExceeded) if more edges than
    /// permitted by `limits` are traversed.
    #[tracing::instrument(skip(self), fields(start = ?self.start))]
    pub fn run(self, limits: Limits) -> Result<Vec<EdgeOf<G>>> {
        let search = DfsEdges::new(self.graph, self.start).visit_every_edge();
        let search = if G::is_undirected() {
            search.undirected()
        } else {
            search
        };

        let mut walk: Vec<EdgeOf<G>> = Vec::new();
        let mut circuit = Vec::new();

        for (i, edge) in search.enumerate() {
            limits.check_edges(i + 1)?;

            // the search jumped back: the sub-circuit ending in the top of the walk is closed
            while walk.last().is_some_and(|top| top.to != edge.from) {
                circuit.extend(walk.pop());
            }
            walk.push(edge);
        }

        circuit.extend(walk.into_iter().rev());
        circuit.reverse();

        tracing::debug!(edges = circuit.len(), "eulerian circuit assembled");
        Ok(circuit)
    }
}

/// Eulerian circuits on graphs with ordered nodes
pub trait Eulerian: GraphEdges + GraphType + Sized {
    /// Returns a closed walk from `start` using every edge reachable from `start` exactly once.
    ///
    /// Fails if `start` is not a node of the graph.
    /// See [`EulerianCircuit`] for the precondition.
    fn eulerian_circuit(&self, start: Self::Node) -> Result<Vec<EdgeOf<Self>>>
    where
        Self::Node: Ord,
    {
        self.check_node(&start)?;
        EulerianCircuit::new(self, start).run(Limits::unbounded())
    }
}

impl<G> Eulerian for G where G: GraphEdges + GraphType + Sized {}
