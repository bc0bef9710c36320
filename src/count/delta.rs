/*!
# Incremental Delta Engine

Computes how the per-node orbit counts change when a single edge is toggled,
without recounting the graph.

Only graphlets containing **both** toggle endpoints can change: every other
induced subgraph keeps its edge set. The engine therefore enumerates exactly
the vertex sets `S ⊇ {u, v}` with `|S| <= 5` that are connected once the
toggled pair is treated as present (a superset of everything connected on
either side of the toggle), classifies the induced edge mask of each set both
with and without the `{u, v}` bit, and credits every vertex of the set its
orbit on both sides.

The search never leaves the 3-hop neighborhood of the endpoints and runs in
`O(d^4)` for local degree `d`.
*/

use smallvec::SmallVec;
use tracing::trace;

use crate::{
    node::Node,
    ops::{AdjacencyList, AdjacencyTest},
    orbits::{orbit_of, pair_bit},
};

use super::matrix::OrbitDelta;

/// Computes the orbit-count delta of toggling the edge `{u, v}`.
///
/// The graph is read as the side of the toggle that holds **after** it:
/// `add` receives the instances induced in the graph as given, `rem` those
/// induced with `{u, v}` toggled. Flipping an edge and then calling this on
/// the resulting graph thus yields the delta that the flip caused.
///
/// The graph itself is never mutated.
///
/// **Panics if `u >= n || v >= n || u == v`.**
pub fn edge_flip_delta<G>(graph: &G, u: Node, v: Node) -> OrbitDelta
where
    G: AdjacencyList + AdjacencyTest,
{
    assert!(u != v, "toggle endpoints must differ");

    let mut delta = OrbitDelta::new(graph.number_of_nodes());

    // Joint frontier of both endpoints; common neighbors appear once
    let mut frontier: Vec<Node> = graph
        .neighbors_of(u)
        .chain(graph.neighbors_of(v))
        .filter(|&w| w != u && w != v)
        .collect();
    frontier.sort_unstable();
    frontier.dedup();

    let mut set: SmallVec<[Node; 5]> = SmallVec::new();
    set.push(u);
    set.push(v);
    extend(graph, &mut set, frontier, &mut delta);

    trace!(u, v, "computed edge flip delta");
    delta
}

/// Visits every connected superset of `set` reachable through `frontier`,
/// exactly once each.
///
/// Candidates are consumed one by one; a popped candidate is extended with
/// its strictly new neighbors (not adjacent to the set so far) and never
/// re-enters a later branch, so no vertex set is generated twice.
fn extend<G>(
    graph: &G,
    set: &mut SmallVec<[Node; 5]>,
    mut frontier: Vec<Node>,
    delta: &mut OrbitDelta,
) where
    G: AdjacencyList + AdjacencyTest,
{
    credit(graph, set, delta);
    if set.len() == 5 {
        return;
    }

    while let Some(w) = frontier.pop() {
        let mut child = frontier.clone();
        for z in graph.neighbors_of(w) {
            if set.contains(&z) || set.iter().any(|&s| graph.has_edge(s, z)) {
                continue;
            }
            child.push(z);
        }

        set.push(w);
        extend(graph, set, child, delta);
        set.pop();
    }
}

/// Classifies one vertex set on both sides of the toggle and credits each
/// vertex its orbit.
///
/// The toggled endpoints sit at positions 0 and 1 of `set`, so their pair is
/// mask bit 0.
fn credit<G>(graph: &G, set: &[Node], delta: &mut OrbitDelta)
where
    G: AdjacencyTest,
{
    let k = set.len();

    let mut mask: u16 = 0;
    for j in 1..k {
        for i in 0..j {
            if graph.has_edge(set[i], set[j]) {
                mask |= 1 << pair_bit(i, j);
            }
        }
    }
    let toggled = mask ^ 1;

    for (position, &node) in set.iter().enumerate() {
        if let Some(orbit) = orbit_of(k, mask, position) {
            delta.add.inc(node, orbit);
        }
        if let Some(orbit) = orbit_of(k, toggled, position) {
            delta.rem.inc(node, orbit);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        count::{matrix::OrbitMatrix, scratch::scratch_counts},
        node::NumNodes,
        ops::{GraphEdgeEditing, GraphFromScratch, GraphNew},
        repr::AdjArrayUndir,
        testing::random_edges,
    };

    /// Incrementally maintained counts must match the recount after the flip.
    fn assert_delta_matches_recount(graph: &mut AdjArrayUndir, u: Node, v: Node) {
        let mut counts = scratch_counts(graph);
        graph.flip_edge(u, v);
        counts.apply(&edge_flip_delta(graph, u, v));
        assert_eq!(counts, scratch_counts(graph));
    }

    #[test]
    fn edge_toggle_on_empty_pair() {
        let mut graph = AdjArrayUndir::new(2);
        graph.add_edge(0, 1);

        let delta = edge_flip_delta(&graph, 0, 1);
        assert_eq!(delta.add.get(0, 0), 1);
        assert_eq!(delta.add.get(1, 0), 1);
        assert!(delta.rem.is_all_zero());
    }

    #[test]
    fn triangle_to_path() {
        // Removing one edge of a triangle leaves a path
        let mut graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        graph.flip_edge(0, 2);
        let delta = edge_flip_delta(&graph, 0, 2);

        // Before: every node in one triangle, two edges each
        assert_eq!(delta.rem.get(0, 3), 1);
        assert_eq!(delta.rem.get(1, 3), 1);
        assert_eq!(delta.rem.get(2, 3), 1);
        assert_eq!(delta.rem.get(0, 0), 1);
        assert_eq!(delta.rem.get(2, 0), 1);

        // After: a path with 1 in the middle
        assert_eq!(delta.add.get(0, 1), 1);
        assert_eq!(delta.add.get(1, 2), 1);
        assert_eq!(delta.add.get(2, 1), 1);
        assert_eq!(delta.add.get(1, 0), 0); // edges at 1 did not change
    }

    #[test]
    fn chord_into_five_cycle() {
        let cycle = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];
        let mut graph = AdjArrayUndir::from_edges(5, cycle);

        let before = scratch_counts(&graph);
        graph.flip_edge(0, 2);
        let delta = edge_flip_delta(&graph, 0, 2);

        let mut after = before.clone();
        after.apply(&delta);
        assert_eq!(after, scratch_counts(&graph));

        // The before-side loses its 5-cycle orbit, the chord closes the
        // triangle {0,1,2} and turns {0,2,3,4} into a 4-cycle
        assert_eq!(delta.rem.get(0, 34), 1);
        assert_eq!(delta.add.get(1, 3), 1);
        assert_eq!(delta.add.get(2, 11), 1);
        assert_eq!(delta.add.get(3, 8), 1);
    }

    #[test]
    fn delta_is_local() {
        // Two 4-cycles joined by a long path; toggling inside one cycle must
        // not touch rows further than 4 hops away
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (2, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 10),
            (10, 11),
            (11, 8),
        ];
        let mut graph = AdjArrayUndir::from_edges(12, edges);
        graph.flip_edge(0, 2);
        let delta = edge_flip_delta(&graph, 0, 2);

        for far in [7, 8, 9, 10, 11] {
            assert!(delta.add.row(far).iter().all(|&c| c == 0));
            assert!(delta.rem.row(far).iter().all(|&c| c == 0));
        }
        assert!(delta.add.row(1).iter().any(|&c| c > 0));
    }

    #[test]
    fn double_flip_deltas_are_inverse() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let edges = random_edges(rng, 12, 24);
        let mut graph = AdjArrayUndir::from_edges(12, edges.iter());

        graph.flip_edge(3, 9);
        let first = edge_flip_delta(&graph, 3, 9);
        graph.flip_edge(3, 9);
        let second = edge_flip_delta(&graph, 3, 9);

        assert_eq!(first.inverse(), second);
    }

    #[test]
    fn random_flips_match_recount() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [6 as NumNodes, 10, 16] {
            let edges = random_edges(rng, n, n * 2);
            let mut graph = AdjArrayUndir::from_edges(n, edges.iter());

            for _ in 0..30 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u == v {
                    continue;
                }
                assert_delta_matches_recount(&mut graph, u, v);
            }
        }
    }

    #[test]
    fn running_counts_follow_a_flip_sequence() {
        // Two hubs with a shared periphery
        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (0, 6),
            (1, 6),
            (1, 7),
            (1, 8),
            (1, 9),
        ];
        let mut graph = AdjArrayUndir::from_edges(10, edges);
        let mut counts = scratch_counts(&graph);

        for (u, v) in [(4, 9), (5, 9), (0, 4)] {
            graph.flip_edge(u, v);
            counts.apply(&edge_flip_delta(&graph, u, v));
        }

        assert_eq!(counts, scratch_counts(&graph));
    }

    #[test]
    fn isolated_rows_stay_zero() {
        let mut graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2)]);
        graph.flip_edge(2, 3);
        let delta = edge_flip_delta(&graph, 2, 3);

        let mut zero = OrbitMatrix::new(6);
        zero.apply(&delta);
        assert!(zero.row(5).iter().all(|&c| c == 0));
        assert!(zero.row(4).iter().all(|&c| c == 0));
    }
}
