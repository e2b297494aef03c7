/*!
# Node Representation

Index graphs number their nodes `0..n`. We choose `Node = u32` as almost all use-cases involve
less than `2^32` nodes; this saves space in the dense per-node tables (visited bitsets, cost
tables, parent maps) that index graphs enable.

Label graphs are free to use any `Clone + Eq + Hash` type as node; see [`GraphNodes`](crate::ops::GraphNodes).
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes of index graphs can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in an index graph!
pub type NumNodes = Node;

/// BitSet for Nodes; used as the visited-set of index graphs
pub type NodeBitSet = BitSetImpl<Node>;
