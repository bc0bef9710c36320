//! # Graphlet Catalogue
//!
//! One canonical representative for each of the 30 connected graphlets on
//! 2 to 5 nodes, together with the orbit id of every vertex under the
//! standard 73-orbit numbering. The lookup tables in [`super`] are derived
//! from these representatives by symmetrising over all vertex permutations,
//! so this catalogue is the single source of truth for classification.

use super::{Graphlet, Orbit};

/// A connected graphlet on `size` labelled vertices `0..size`.
///
/// `orbits[v]` is the automorphism orbit of vertex `v`; vertices that can be
/// mapped onto each other by an automorphism carry the same id.
pub struct GraphletSpec {
    /// Graphlet id `G0..G29`.
    pub id: Graphlet,
    /// Number of vertices, in `2..=5`.
    pub size: usize,
    /// Induced edges of the representative.
    pub edges: &'static [(u8, u8)],
    /// Orbit id per vertex.
    pub orbits: &'static [Orbit],
}

/// The 30 connected graphlets on 2..=5 nodes.
pub static GRAPHLETS: [GraphletSpec; 30] = [
    // G0: a single edge
    GraphletSpec {
        id: 0,
        size: 2,
        edges: &[(0, 1)],
        orbits: &[0, 0],
    },
    // G1: path on 3 nodes
    GraphletSpec {
        id: 1,
        size: 3,
        edges: &[(0, 1), (1, 2)],
        orbits: &[1, 2, 1],
    },
    // G2: triangle
    GraphletSpec {
        id: 2,
        size: 3,
        edges: &[(0, 1), (1, 2), (0, 2)],
        orbits: &[3, 3, 3],
    },
    // G3: path on 4 nodes
    GraphletSpec {
        id: 3,
        size: 4,
        edges: &[(0, 1), (1, 2), (2, 3)],
        orbits: &[4, 5, 5, 4],
    },
    // G4: claw (star on 3 leaves)
    GraphletSpec {
        id: 4,
        size: 4,
        edges: &[(0, 1), (0, 2), (0, 3)],
        orbits: &[7, 6, 6, 6],
    },
    // G5: 4-cycle
    GraphletSpec {
        id: 5,
        size: 4,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        orbits: &[8, 8, 8, 8],
    },
    // G6: paw (triangle 0,1,2 with pendant 3 on 0)
    GraphletSpec {
        id: 6,
        size: 4,
        edges: &[(0, 1), (1, 2), (0, 2), (0, 3)],
        orbits: &[11, 10, 10, 9],
    },
    // G7: diamond (4-cycle with chord 0-2)
    GraphletSpec {
        id: 7,
        size: 4,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
        orbits: &[13, 12, 13, 12],
    },
    // G8: complete graph on 4 nodes
    GraphletSpec {
        id: 8,
        size: 4,
        edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
        orbits: &[14, 14, 14, 14],
    },
    // G9: path on 5 nodes
    GraphletSpec {
        id: 9,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4)],
        orbits: &[15, 16, 17, 16, 15],
    },
    // G10: fork (path 0-1-2 with leaves 3,4 on 2)
    GraphletSpec {
        id: 10,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (2, 4)],
        orbits: &[18, 20, 21, 19, 19],
    },
    // G11: star on 4 leaves
    GraphletSpec {
        id: 11,
        size: 5,
        edges: &[(0, 1), (0, 2), (0, 3), (0, 4)],
        orbits: &[23, 22, 22, 22],
    },
    // G12: cricket (triangle 0,1,2 with pendants 3,4 on 0)
    GraphletSpec {
        id: 12,
        size: 5,
        edges: &[(0, 1), (1, 2), (0, 2), (0, 3), (0, 4)],
        orbits: &[26, 25, 25, 24, 24],
    },
    // G13: tadpole (triangle 0,1,2 with tail 0-3-4)
    GraphletSpec {
        id: 13,
        size: 5,
        edges: &[(0, 1), (1, 2), (0, 2), (0, 3), (3, 4)],
        orbits: &[30, 29, 29, 28, 27],
    },
    // G14: bull (triangle 0,1,2 with horns 3 on 0 and 4 on 1)
    GraphletSpec {
        id: 14,
        size: 5,
        edges: &[(0, 1), (1, 2), (0, 2), (0, 3), (1, 4)],
        orbits: &[33, 33, 32, 31, 31],
    },
    // G15: 5-cycle
    GraphletSpec {
        id: 15,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
        orbits: &[34, 34, 34, 34, 34],
    },
    // G16: banner (4-cycle 0,1,2,3 with pendant 4 on 0)
    GraphletSpec {
        id: 16,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4)],
        orbits: &[38, 37, 36, 37, 35],
    },
    // G17: diamond (hubs 1,3) with pendant 4 on the degree-2 vertex 0
    GraphletSpec {
        id: 17,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (0, 4)],
        orbits: &[41, 42, 40, 42, 39],
    },
    // G18: bowtie (triangles 0,1,2 and 0,3,4 sharing vertex 0)
    GraphletSpec {
        id: 18,
        size: 5,
        edges: &[(0, 1), (1, 2), (0, 2), (0, 3), (3, 4), (0, 4)],
        orbits: &[44, 43, 43, 43, 43],
    },
    // G19: diamond (hubs 1,3) with pendant 4 on the degree-3 vertex 1
    GraphletSpec {
        id: 19,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (1, 4)],
        orbits: &[46, 48, 46, 47, 45],
    },
    // G20: complete bipartite K(2,3) with parts {0,1} and {2,3,4}
    GraphletSpec {
        id: 20,
        size: 5,
        edges: &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)],
        orbits: &[50, 50, 49, 49, 49],
    },
    // G21: house (4-cycle 0,1,2,3 with roof 4 on 0 and 1)
    GraphletSpec {
        id: 21,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (1, 4)],
        orbits: &[53, 53, 51, 51, 52],
    },
    // G22: book (K(2,3) with the spine edge 0-1 added)
    GraphletSpec {
        id: 22,
        size: 5,
        edges: &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)],
        orbits: &[55, 55, 54, 54, 54],
    },
    // G23: complete graph on 0,1,2,3 with pendant 4 on 0
    GraphletSpec {
        id: 23,
        size: 5,
        edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (0, 4)],
        orbits: &[58, 57, 57, 57, 56],
    },
    // G24: gem (path 0-1-2-3 with apex 4 adjacent to all)
    GraphletSpec {
        id: 24,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (0, 4), (1, 4), (2, 4), (3, 4)],
        orbits: &[59, 60, 60, 59, 61],
    },
    // G25: 4-cycle 0,1,2,3 with chord 1-3 and vertex 4 adjacent to 0 and 2
    GraphletSpec {
        id: 25,
        size: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (0, 4), (2, 4)],
        orbits: &[63, 64, 63, 64, 62],
    },
    // G26: complete graph on 5 nodes minus the adjacent edges 0-1 and 0-2
    GraphletSpec {
        id: 26,
        size: 5,
        edges: &[(0, 3), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)],
        orbits: &[65, 66, 66, 67, 67],
    },
    // G27: complete graph on 5 nodes minus the disjoint edges 0-1 and 2-3
    GraphletSpec {
        id: 27,
        size: 5,
        edges: &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4), (2, 4), (3, 4)],
        orbits: &[68, 68, 68, 68, 69],
    },
    // G28: complete graph on 5 nodes minus the edge 0-1
    GraphletSpec {
        id: 28,
        size: 5,
        edges: &[
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
        ],
        orbits: &[70, 70, 71, 71, 71],
    },
    // G29: complete graph on 5 nodes
    GraphletSpec {
        id: 29,
        size: 5,
        edges: &[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
        ],
        orbits: &[72, 72, 72, 72, 72],
    },
];
