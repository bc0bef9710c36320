//! Shared helpers for the `#[cfg(test)]` modules of this crate.

use rand::Rng;

use crate::{edge::*, node::*};

/// Creates a list of at most `m_ub` distinct random normalized edges for
/// nodes `0..n`, without self-loops.
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..m_ub)
        .filter_map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);

            (u != v).then(|| Edge(u, v).normalized())
        })
        .collect();
    edges.sort_unstable();
    edges.dedup();

    edges
}

/// Every adjacency store should pass these representation tests.
macro_rules! test_graph_repr {
    ($env:ident, $graph:ident) => {
        mod $env {
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            use crate::{edge::*, node::*, ops::*, repr::*, testing::random_edges};

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices_range().len(), n as usize);
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);

                            let mut adj_matrix: Vec<NodeBitSet> =
                                vec![NodeBitSet::new(n); n as usize];
                            for &Edge(u, v) in &edges {
                                adj_matrix[u as usize].set_bit(v);
                                adj_matrix[v as usize].set_bit(u);
                            }

                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                            // Normalized edge iteration is lex-sorted because
                            // neighborhoods iterate ascending
                            assert_eq!(edges, graph.edges(true).collect_vec());

                            for u in 0..n {
                                assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                                assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());

                                let ns = graph.neighbors_of(u).collect_vec();
                                let mut sorted = ns.clone();
                                sorted.sort_unstable();
                                assert_eq!(ns, sorted);

                                for v in 0..n {
                                    assert_eq!(
                                        graph.has_edge(u, v),
                                        adj_matrix[u as usize].get_bit(v)
                                    );
                                }
                            }
                        }
                    }
                }
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);

                for n in [10 as NumNodes, 20, 50] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, n * 5);

                        let mut graph = <$graph>::new(n);
                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(u, v));
                            assert!(graph.try_add_edge(v, u)); // duplicate, either direction
                        }

                        let mut m = graph.number_of_edges();
                        assert_eq!(m, edges.len() as NumEdges);

                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            if u == v {
                                continue;
                            }

                            let was_present = graph.has_edge(u, v);
                            assert_eq!(graph.try_remove_edge(u, v), was_present);
                            if was_present {
                                m -= 1;
                            }
                            assert_eq!(graph.number_of_edges(), m);
                        }

                        // A double flip is a no-op on adjacency
                        let u = rng.random_range(0..n);
                        let v = (u + 1) % n;
                        let before = graph.has_edge(u, v);
                        assert_eq!(graph.flip_edge(u, v), !before);
                        assert_eq!(graph.flip_edge(u, v), before);
                        assert_eq!(graph.has_edge(u, v), before);

                        graph.clear_edges();
                        assert!(graph.is_singleton_graph());
                        assert!((0..n).all(|u| graph.degree_of(u) == 0));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_repr;
