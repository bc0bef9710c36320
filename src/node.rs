/*!
# Node Representation

Nodes are plain `u32` indices in the range `0..n` where `n` is the number of
nodes of the network they live in. The public facade ([`Network`](crate::net::Network))
speaks 1-based ids; everything below it uses the dense 0-based range defined
here.
*/

use stream_bitset::bitset::BitSetImpl;

/// A node is an index in `0..n`.
///
/// As most common graphs do not exceed `2^32` nodes, `u32` suffices and saves
/// space compared to `u64/usize`.
pub type Node = u32;

/// Number of nodes in a graph.
///
/// Same width as [`Node`]: a graph can hold at most `2^32 - 1` nodes.
pub type NumNodes = Node;

/// BitSet over nodes.
pub type NodeBitSet = BitSetImpl<Node>;
