/*!
# Orbit Classification

Table-driven classification of induced subgraphs on 2 to 5 labelled vertices
into the 30 connected graphlets and their 73 automorphism orbits.

A subgraph on `k` labelled vertices is encoded as an **edge mask**: bit
[`pair_bit(i, j)`](pair_bit) is set iff `{i, j}` is an induced edge. For every
`k` there is a lookup table over all `2^(k(k-1)/2)` masks (at most 1024 for
`k = 5`) storing, per vertex position, the orbit id, or nothing when the
mask is disconnected. The tables are built once per process from the
[`GRAPHLETS`](graphlets::GRAPHLETS) catalogue by symmetrising each canonical
representative over all vertex permutations, and are shared read-only across
threads.

```
use orbdelta::orbits::{graphlet_of, orbit_of, pair_bit};

// A triangle on positions 0,1,2
let mask = (1 << pair_bit(0, 1)) | (1 << pair_bit(1, 2)) | (1 << pair_bit(0, 2));
assert_eq!(graphlet_of(3, mask), Some(2));
assert_eq!(orbit_of(3, mask, 0), Some(3));

// Remove one edge: a path, whose middle vertex sits in orbit 2
let path = mask & !(1 << pair_bit(0, 2));
assert_eq!(orbit_of(3, path, 1), Some(2));
assert_eq!(orbit_of(3, path, 0), Some(1));
```
*/

use std::sync::OnceLock;

use itertools::Itertools;

pub mod graphlets;

pub use graphlets::{GraphletSpec, GRAPHLETS};

/// An automorphism orbit id in `0..73`.
pub type Orbit = u8;

/// A graphlet id in `0..30`.
pub type Graphlet = u8;

/// Number of automorphism orbits of the graphlets on up to 5 nodes.
pub const NUM_ORBITS: usize = 73;

/// Number of connected graphlets on 2 to 5 nodes.
pub const NUM_GRAPHLETS: usize = 30;

/// Smallest graphlet size handled by the classifier.
pub const MIN_GRAPHLET_NODES: usize = 2;

/// Largest graphlet size handled by the classifier.
pub const MAX_GRAPHLET_NODES: usize = 5;

const NONE: u8 = u8::MAX;

/// Returns the bit index of the vertex pair `{i, j}` within an edge mask.
///
/// Independent of the subgraph size, so masks for `k < 5` are prefixes of the
/// `k = 5` encoding. `i == j` is not a valid pair.
#[inline]
pub const fn pair_bit(i: usize, j: usize) -> u16 {
    let (a, b) = if i < j { (i, j) } else { (j, i) };
    (b * (b - 1) / 2 + a) as u16
}

/// Lookup table for one subgraph size.
struct OrbitTable {
    /// Per mask: the orbit id of each vertex position, [`NONE`] if disconnected.
    orbits: Vec<[u8; 5]>,
    /// Per mask: the graphlet id, [`NONE`] if disconnected.
    graphlets: Vec<u8>,
}

impl OrbitTable {
    fn build(k: usize) -> Self {
        let num_masks = 1usize << (k * (k - 1) / 2);
        let mut table = Self {
            orbits: vec![[NONE; 5]; num_masks],
            graphlets: vec![NONE; num_masks],
        };

        for spec in GRAPHLETS.iter().filter(|spec| spec.size == k) {
            for perm in (0..k).permutations(k) {
                let mut mask = 0usize;
                for &(a, b) in spec.edges {
                    mask |= 1 << pair_bit(perm[a as usize], perm[b as usize]);
                }

                // A mask reached through several permutations must classify
                // identically; a clash means the catalogue itself is broken.
                assert!(
                    table.graphlets[mask] == NONE || table.graphlets[mask] == spec.id,
                    "graphlet catalogue is inconsistent for mask {mask:#b}"
                );
                table.graphlets[mask] = spec.id;

                for (v, &orbit) in spec.orbits.iter().enumerate() {
                    let slot = &mut table.orbits[mask][perm[v]];
                    assert!(
                        *slot == NONE || *slot == orbit,
                        "orbit assignment of graphlet G{} is inconsistent",
                        spec.id
                    );
                    *slot = orbit;
                }
            }
        }

        table
    }
}

fn tables() -> &'static [OrbitTable; 4] {
    static TABLES: OnceLock<[OrbitTable; 4]> = OnceLock::new();
    TABLES.get_or_init(|| {
        [
            OrbitTable::build(2),
            OrbitTable::build(3),
            OrbitTable::build(4),
            OrbitTable::build(5),
        ]
    })
}

/// Returns the orbit of vertex `position` within the induced subgraph on `k`
/// labelled vertices encoded by `mask`, or `None` if the mask is disconnected.
///
/// **Panics if `k` is outside `2..=5`, `position >= k`, or `mask` has bits
/// beyond the `k`-vertex pairs.**
#[inline]
pub fn orbit_of(k: usize, mask: u16, position: usize) -> Option<Orbit> {
    assert!(position < k);
    let orbit = tables()[k - MIN_GRAPHLET_NODES].orbits[mask as usize][position];
    (orbit != NONE).then_some(orbit)
}

/// Returns the graphlet id of the induced subgraph on `k` labelled vertices
/// encoded by `mask`, or `None` if the mask is disconnected.
///
/// **Panics if `k` is outside `2..=5` or `mask` has bits beyond the
/// `k`-vertex pairs.**
#[inline]
pub fn graphlet_of(k: usize, mask: u16) -> Option<Graphlet> {
    let graphlet = tables()[k - MIN_GRAPHLET_NODES].graphlets[mask as usize];
    (graphlet != NONE).then_some(graphlet)
}

/// Returns the graphlet an orbit belongs to.
///
/// **Panics if `orbit >= 73`.**
pub fn graphlet_of_orbit(orbit: Orbit) -> Graphlet {
    GRAPHLETS
        .iter()
        .find(|spec| spec.orbits.contains(&orbit))
        .map(|spec| spec.id)
        .unwrap_or_else(|| panic!("orbit {orbit} out of range"))
}

/// Column label of an orbit, `"O0"` to `"O72"`.
pub fn orbit_label(orbit: Orbit) -> String {
    format!("O{orbit}")
}
