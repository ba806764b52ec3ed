/*!
# Node Representation

We choose `Node = u32` as graphs handled here are small enough that `2^32` nodes always suffice.
Nodes are positional: a graph with `n` nodes has exactly the nodes `0..n`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
