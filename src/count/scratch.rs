/*!
# Scratch Recount

Exact per-node orbit counts of a static graph, computed from scratch.

The counter enumerates every connected induced subgraph on 2 to 5 vertices
exactly once using rooted extension: each set is grown from its smallest
vertex, candidates are consumed one by one, and a candidate's strictly new
neighbors join the frontier. Every visited set is classified through the
orbit tables and credits each of its vertices.

The counter itself expects a dense id space; [`scratch_counts`] is the
adapter that compacts away isolated vertices first and restores their
all-zero rows afterwards, so results always have one row per node of the
input graph.

This is the expensive path: a recount visits the whole graph and is meant
for seeding and validation. Per-toggle updates go through
[`edge_flip_delta`](super::delta::edge_flip_delta) instead.
*/

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    edge::Edge,
    node::{Node, NumNodes},
    ops::{AdjacencyList, AdjacencyTest, GraphFromScratch, GraphNodeOrder},
    orbits::{orbit_of, pair_bit},
    repr::AdjArrayUndir,
};

use super::matrix::OrbitMatrix;

/// Computes the full orbit-count matrix of a graph.
///
/// Returns one row per node; rows of isolated vertices are all zero.
pub fn scratch_counts<G>(graph: &G) -> OrbitMatrix
where
    G: AdjacencyList,
{
    let n = graph.number_of_nodes();

    // Compact the id space to the non-isolated vertices
    let mut compact = vec![0 as Node; n as usize];
    let mut back: Vec<Node> = Vec::new();
    for u in graph.vertices_with_neighbors() {
        compact[u as usize] = back.len() as Node;
        back.push(u);
    }

    let edges: Vec<Edge> = graph
        .edges(true)
        .map(|Edge(a, b)| Edge(compact[a as usize], compact[b as usize]))
        .collect();

    debug!(
        n,
        active = back.len(),
        m = edges.len(),
        "running scratch recount"
    );

    let dense = count_dense(back.len() as NumNodes, &edges);

    // Scatter the rows back into the original id space
    let mut counts = OrbitMatrix::new(n);
    for (i, &u) in back.iter().enumerate() {
        counts.row_mut(u).copy_from_slice(dense.row(i as Node));
    }
    counts
}

/// The counter proper: exact orbit counts over a dense id space.
fn count_dense(n: NumNodes, edges: &[Edge]) -> OrbitMatrix {
    let graph = AdjArrayUndir::from_edges(n, edges.iter());
    let mut counts = OrbitMatrix::new(n);

    let mut set: SmallVec<[Node; 5]> = SmallVec::new();
    for root in graph.vertices_range() {
        let frontier: Vec<Node> = graph.neighbors_of(root).filter(|&z| z > root).collect();

        set.push(root);
        extend_rooted(&graph, root, &mut set, frontier, &mut counts);
        set.pop();
    }

    counts
}

/// Visits every connected superset of `set` whose vertices are all greater
/// than `root`, exactly once each.
fn extend_rooted(
    graph: &AdjArrayUndir,
    root: Node,
    set: &mut SmallVec<[Node; 5]>,
    mut frontier: Vec<Node>,
    counts: &mut OrbitMatrix,
) {
    if set.len() >= 2 {
        credit(graph, set, counts);
    }
    if set.len() == 5 {
        return;
    }

    while let Some(w) = frontier.pop() {
        let mut child = frontier.clone();
        for z in graph.neighbors_of(w) {
            if z <= root || set.contains(&z) || set.iter().any(|&s| graph.has_edge(s, z)) {
                continue;
            }
            child.push(z);
        }

        set.push(w);
        extend_rooted(graph, root, set, child, counts);
        set.pop();
    }
}

/// Classifies one connected vertex set and credits each vertex its orbit.
fn credit(graph: &AdjArrayUndir, set: &[Node], counts: &mut OrbitMatrix) {
    let k = set.len();

    let mut mask: u16 = 0;
    for j in 1..k {
        for i in 0..j {
            if graph.has_edge(set[i], set[j]) {
                mask |= 1 << pair_bit(i, j);
            }
        }
    }

    for (position, &node) in set.iter().enumerate() {
        if let Some(orbit) = orbit_of(k, mask, position) {
            counts.inc(node, orbit);
        }
    }
}
