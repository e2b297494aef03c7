use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge is defined by two endpoints and a label (e.g. a weight).
/// It is up to the graph whether an edge is directed or not.
///
/// Edges are plain values: traversals hand out owned copies and never refer back into the
/// graph's storage.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N, E = ()> {
    pub from: N,
    pub to: N,
    pub label: E,
}

/// Edges of index graphs
pub type IndexEdge<E = ()> = Edge<Node, E>;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl<N, E> Edge<N, E> {
    pub fn new(from: N, to: N, label: E) -> Self {
        Self { from, to, label }
    }

    /// Returns a reference to the label
    pub fn label(&self) -> &E {
        &self.label
    }

    /// Returns `(from, to)`
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.from, &self.to)
    }

    /// Reverses the edge by switching the endpoints
    pub fn reversed(self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            label: self.label,
        }
    }

    /// Replaces the label
    pub fn map_label<F, T>(self, f: F) -> Edge<N, T>
    where
        F: FnOnce(E) -> T,
    {
        Edge {
            from: self.from,
            to: self.to,
            label: f(self.label),
        }
    }
}

impl<N: PartialEq, E> Edge<N, E> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<N: Ord + Clone, E> Edge<N, E> {
    /// Returns true if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.from <= self.to
    }

    /// Returns the endpoints ordered such that the smaller one comes first.
    /// In an undirected graph, `(u, v)` and `(v, u)` share this key.
    pub fn canonical_pair(&self) -> (N, N) {
        if self.is_normalized() {
            (self.from.clone(), self.to.clone())
        } else {
            (self.to.clone(), self.from.clone())
        }
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(self) -> Self {
        if self.is_normalized() {
            self
        } else {
            self.reversed()
        }
    }
}

impl<N: Display, E> Display for Edge<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.from, self.to)
    }
}

impl<N: Debug, E: Debug> Debug for Edge<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?}:{:?})", self.from, self.to, self.label)
    }
}

impl<N> From<(N, N)> for Edge<N, ()> {
    fn from(value: (N, N)) -> Self {
        Edge::new(value.0, value.1, ())
    }
}

impl<N, E> From<(N, N, E)> for Edge<N, E> {
    fn from(value: (N, N, E)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl<N: Clone, E: Clone> From<&Edge<N, E>> for Edge<N, E> {
    fn from(value: &Edge<N, E>) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair() {
        let e: IndexEdge<f64> = Edge::new(4, 1, 2.5);
        assert!(!e.is_normalized());
        assert_eq!(e.canonical_pair(), (1, 4));
        assert_eq!(e.reversed().canonical_pair(), (1, 4));

        let n = e.normalized();
        assert_eq!((n.from, n.to, n.label), (1, 4, 2.5));
    }

    #[test]
    fn formatting() {
        let e: Edge<&str, i32> = ("a", "b", 3).into();
        assert_eq!(format!("{e}"), "(a,b)");
        assert_eq!(format!("{e:?}"), "(\"a\",\"b\":3)");
        assert!(!e.is_loop());
        assert!(Edge::from((2u32, 2u32)).is_loop());
    }
}
