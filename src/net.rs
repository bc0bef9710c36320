/*!
# Network Facade

[`Network`] is the stateful handle bundling an adjacency store with the
counting routines. It validates all arguments and translates between the
external **1-based** node ids and the 0-based ids used internally; it is the
only surface that speaks 1-based.

A network is mutated only through [`Network::flip`], [`Network::set_edges`]
and [`Network::reset`]. It is not safe for concurrent mutation; independent
networks are independent.

```
use orbdelta::net::Network;

let mut net = Network::with_edges(4, &[(1, 2), (2, 3), (1, 4)])?;
assert!(net.has_edge(1, 2)?);
assert_eq!(net.neighbors_of(1)?, vec![2, 4]);

// Seed, toggle, maintain incrementally
let mut counts = net.orbit_counts();
net.flip(3, 4)?;
counts.apply(&net.calculate_delta(3, 4)?);
assert_eq!(counts, net.orbit_counts());
# Ok::<(), orbdelta::error::NetworkError>(())
```
*/

use tracing::debug;

use crate::{
    count::{edge_flip_delta, scratch_counts, OrbitDelta, OrbitMatrix},
    edge::{Edge, NumEdges},
    error::{NetworkError, Result},
    node::{Node, NumNodes},
    ops::*,
    repr::AdjArrayUndir,
};

/// An undirected simple graph over a fixed node universe `1..=n`, with
/// orbit-count queries.
pub struct Network {
    graph: AdjArrayUndir,
}

impl Network {
    /// Creates an empty network on `n` nodes.
    ///
    /// Fails with [`NetworkError::InvalidNodeCount`] if `n == 0`.
    pub fn new(n: NumNodes) -> Result<Self> {
        if n == 0 {
            return Err(NetworkError::InvalidNodeCount);
        }

        Ok(Self {
            graph: AdjArrayUndir::new(n),
        })
    }

    /// Creates a network on `n` nodes and loads the given edge list.
    pub fn with_edges(n: NumNodes, edges: &[(Node, Node)]) -> Result<Self> {
        let mut net = Self::new(n)?;
        net.set_edges(edges)?;
        Ok(net)
    }

    /// Creates a network from an edge list alone; the node count is the
    /// largest id mentioned.
    ///
    /// Fails with [`NetworkError::InvalidNodeCount`] on an empty list.
    pub fn from_edges(edges: &[(Node, Node)]) -> Result<Self> {
        let n = edges
            .iter()
            .map(|&(a, b)| a.max(b))
            .max()
            .ok_or(NetworkError::InvalidNodeCount)?;

        Self::with_edges(n, edges)
    }

    /// Returns the number of nodes.
    pub fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// Returns the number of edges.
    pub fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }

    /// Maps an external 1-based id into the internal 0-based range.
    fn check_node(&self, id: Node) -> Result<Node> {
        if id == 0 || id > self.number_of_nodes() {
            return Err(NetworkError::InvalidNodeId {
                id,
                n: self.number_of_nodes(),
            });
        }

        Ok(id - 1)
    }

    /// Maps a pair of external ids; the endpoints must be distinct.
    fn check_endpoints(&self, i: Node, j: Node) -> Result<(Node, Node)> {
        let u = self.check_node(i)?;
        let v = self.check_node(j)?;
        if u == v {
            return Err(NetworkError::InvalidNodeId {
                id: i,
                n: self.number_of_nodes(),
            });
        }

        Ok((u, v))
    }

    /// Removes every edge; the node count is unchanged.
    pub fn reset(&mut self) {
        self.graph.clear_edges();
    }

    /// Replaces the edge set: resets, then loads the given list.
    ///
    /// Every row must hold two distinct ids in `1..=n` and every unordered
    /// pair may appear at most once; otherwise the call fails with
    /// [`NetworkError::InvalidInput`] and the network is left in the reset
    /// state, matching the "reset then load" semantics.
    pub fn set_edges(&mut self, edges: &[(Node, Node)]) -> Result<()> {
        self.reset();

        let n = self.number_of_nodes();
        for &(a, b) in edges {
            let valid = (1..=n).contains(&a) && (1..=n).contains(&b) && a != b;
            if !valid || self.graph.try_add_edge(a - 1, b - 1) {
                self.reset();
                return Err(NetworkError::InvalidInput(a, b));
            }
        }

        debug!(n, m = edges.len(), "loaded edge list");
        Ok(())
    }

    /// Toggles the edge `{i, j}`: removes it if present, inserts it otherwise.
    ///
    /// Returns whether the edge is present **after** the toggle. Fails with
    /// [`NetworkError::InvalidNodeId`] on an out-of-range id or `i == j`,
    /// leaving the network unchanged.
    pub fn flip(&mut self, i: Node, j: Node) -> Result<bool> {
        let (u, v) = self.check_endpoints(i, j)?;
        let present = self.graph.flip_edge(u, v);
        debug!(i, j, present, "flipped edge");
        Ok(present)
    }

    /// Returns whether the edge `{i, j}` is present. `i == j` yields `false`.
    pub fn has_edge(&self, i: Node, j: Node) -> Result<bool> {
        let u = self.check_node(i)?;
        let v = self.check_node(j)?;
        Ok(u != v && self.graph.has_edge(u, v))
    }

    /// Returns the neighbors of `i` as ascending 1-based ids.
    pub fn neighbors_of(&self, i: Node) -> Result<Vec<Node>> {
        let u = self.check_node(i)?;
        Ok(self.graph.neighbors_of(u).map(|v| v + 1).collect())
    }

    /// Materialises the edge set as 1-based pairs `(a, b)` with `a < b`, in
    /// lexicographic order, each edge exactly once.
    pub fn as_edge_list(&self) -> Vec<(Node, Node)> {
        self.graph
            .edges(true)
            .map(|Edge(a, b)| (a + 1, b + 1))
            .collect()
    }

    /// Computes the orbit-count delta of toggling `{i, j}`, without mutating
    /// the network.
    ///
    /// The current adjacency is read as the state the toggle leads **to**:
    /// `add` holds the instances induced now, `rem` those induced with
    /// `{i, j}` toggled. The standard pattern is [`flip`](Self::flip)
    /// followed by `calculate_delta` on the same endpoints, after which
    /// `counts += add - rem` ([`OrbitMatrix::apply`]) carries a seeded matrix
    /// to the post-flip counts. For the prospective "what would a flip
    /// change" reading, call this *before* flipping and swap the roles via
    /// [`OrbitDelta::inverse`].
    ///
    /// Matrix row `k` corresponds to the external node `k + 1`.
    pub fn calculate_delta(&self, i: Node, j: Node) -> Result<OrbitDelta> {
        let (u, v) = self.check_endpoints(i, j)?;
        Ok(edge_flip_delta(&self.graph, u, v))
    }

    /// Recounts the full orbit matrix of the current adjacency from scratch.
    ///
    /// Matrix row `k` corresponds to the external node `k + 1`. This is the
    /// expensive seeding/validation path; per-toggle maintenance goes
    /// through [`calculate_delta`](Self::calculate_delta).
    pub fn orbit_counts(&self) -> OrbitMatrix {
        scratch_counts(&self.graph)
    }
}
