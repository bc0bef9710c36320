/*!
# Undirected Graph Representations

An undirected simple graph is represented by parameterizing
[`UndirectedGraph`] with a [`Neighborhood`] implementation, which controls
how adjacency information is stored.

## Provided Representations

- [`AdjArrayUndir`] — sorted adjacency lists in `SmallVec<[Node; 8]>`.
- [`AdjMatrixUndir`] — adjacency stored as a bitset row per node.

All representations share the same API and differ only in memory usage and
performance characteristics.
*/

use super::*;

/// Generic undirected graph representation parameterized by a [`Neighborhood`] type.
///
/// - Adjacency is stored in a `Vec<Nbs>`, one entry per vertex.
/// - Edges are kept symmetric: adding/removing `{u, v}` updates both
///   neighborhoods.
/// - Self-loops are rejected; the graph is always simple.
///
/// # Fields
/// - `nbs`: Vector of neighborhoods, one per vertex.
/// - `num_edges`: Total number of edges in the graph, always `Σ deg / 2`.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Undirected graph using sorted adjacency arrays (`SmallVec<[Node; 8]>`).
///
/// - Membership in `O(log deg)`, ascending neighbor iteration.
/// - Best for sparse to moderately dense graphs; the default store of
///   [`Network`](crate::net::Network).
pub type AdjArrayUndir = UndirectedGraph<SortedNeighborhood>;

/// Undirected graph using a bitset-based adjacency matrix.
///
/// - Best for dense graphs where `has_edge` queries dominate.
/// - Memory usage: `O(n^2)`.
pub type AdjMatrixUndir = UndirectedGraph<BitNeighborhood>;

impl<Nbs> GraphNodeOrder for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs> GraphEdgeOrder for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs> AdjacencyList for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    type NeighborIter<'a>
        = <Nbs as Neighborhood>::NeighborhoodIter<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs> AdjacencyTest for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs> GraphNew for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs> GraphEdgeEditing for UndirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(u != v, "self-loops are not supported");

        if self.nbs[u as usize].try_add_neighbor(v) {
            true
        } else {
            self.nbs[v as usize].add_neighbor(u);
            self.num_edges += 1;
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }

    fn clear_edges(&mut self) {
        for nbs in &mut self.nbs {
            nbs.clear();
        }
        self.num_edges = 0;
    }
}

impl<Nbs> NeighborsSlice for UndirectedGraph<Nbs>
where
    Nbs: NeighborhoodSlice,
{
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[u as usize].as_slice()
    }
}

// ---------- Testing ----------

#[cfg(test)]
crate::testing::test_graph_repr!(test_adj_array_undir, AdjArrayUndir);

#[cfg(test)]
crate::testing::test_graph_repr!(test_adj_matrix_undir, AdjMatrixUndir);
