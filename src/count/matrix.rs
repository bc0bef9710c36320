/*!
# Orbit Count Matrices

[`OrbitMatrix`] is the dense `n x 73` matrix of per-node orbit counts; it is
what the scratch counter produces and what a sequence of flip deltas
maintains. [`OrbitDelta`] pairs two such matrices, `add` and `rem`,
describing the orbit instances created and destroyed by one edge toggle.
*/

use std::fmt::{Debug, Formatter};

use crate::{
    node::{Node, NumNodes},
    orbits::{Orbit, NUM_ORBITS},
};

/// A dense `n x 73` matrix of non-negative orbit counts.
///
/// Row `u` holds the orbit signature of node `u`: entry `o` counts the
/// induced graphlet instances that contain `u` with `u` in orbit `o`.
#[derive(Clone, PartialEq, Eq)]
pub struct OrbitMatrix {
    n: NumNodes,
    counts: Vec<u64>,
}

impl OrbitMatrix {
    /// Creates an all-zero matrix for `n` nodes.
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            counts: vec![0; n as usize * NUM_ORBITS],
        }
    }

    /// Returns the number of rows (nodes).
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the count of node `u` in orbit `orbit`.
    ///
    /// **Panics if `u >= n` or `orbit >= 73`.**
    #[inline]
    pub fn get(&self, u: Node, orbit: Orbit) -> u64 {
        assert!((orbit as usize) < NUM_ORBITS);
        self.counts[u as usize * NUM_ORBITS + orbit as usize]
    }

    /// Increments the count of node `u` in orbit `orbit`.
    #[inline]
    pub(crate) fn inc(&mut self, u: Node, orbit: Orbit) {
        self.counts[u as usize * NUM_ORBITS + orbit as usize] += 1;
    }

    /// Returns the row of node `u` as a slice of length 73.
    ///
    /// **Panics if `u >= n`.**
    pub fn row(&self, u: Node) -> &[u64] {
        &self.counts[u as usize * NUM_ORBITS..(u as usize + 1) * NUM_ORBITS]
    }

    pub(crate) fn row_mut(&mut self, u: Node) -> &mut [u64] {
        &mut self.counts[u as usize * NUM_ORBITS..(u as usize + 1) * NUM_ORBITS]
    }

    /// Returns an iterator over all rows in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.counts.chunks_exact(NUM_ORBITS)
    }

    /// Returns the sum of column `orbit` over all nodes.
    pub fn column_total(&self, orbit: Orbit) -> u64 {
        self.rows().map(|row| row[orbit as usize]).sum()
    }

    /// Returns `true` if every entry is zero.
    pub fn is_all_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Folds one flip delta into the running counts: entry-wise
    /// `counts += delta.add - delta.rem`.
    ///
    /// Seeding from a scratch recount and applying the delta of every
    /// subsequent flip keeps this matrix equal to the recount of the current
    /// adjacency.
    ///
    /// **Panics if the shapes differ.**
    pub fn apply(&mut self, delta: &OrbitDelta) {
        assert_eq!(self.n, delta.number_of_nodes());

        for ((count, &add), &rem) in self
            .counts
            .iter_mut()
            .zip(&delta.add.counts)
            .zip(&delta.rem.counts)
        {
            *count = *count + add - rem;
        }
    }
}

impl Debug for OrbitMatrix {
    /// Compact output: only non-zero entries, as `node:orbit=count`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrbitMatrix(n={})[", self.n)?;
        let mut first = true;
        for (u, row) in self.rows().enumerate() {
            for (orbit, &count) in row.iter().enumerate() {
                if count > 0 {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{u}:O{orbit}={count}")?;
                    first = false;
                }
            }
        }
        write!(f, "]")
    }
}

/// The per-node orbit-count changes caused by one edge toggle.
///
/// `add` counts the graphlet instances induced in the graph the toggle leads
/// *to*, `rem` those induced in the graph it comes *from*; both restricted to
/// instances containing the toggled pair. See
/// [`Network::calculate_delta`](crate::net::Network::calculate_delta) for the
/// direction convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrbitDelta {
    /// Instances created by the toggle.
    pub add: OrbitMatrix,
    /// Instances destroyed by the toggle.
    pub rem: OrbitMatrix,
}

impl OrbitDelta {
    pub(crate) fn new(n: NumNodes) -> Self {
        Self {
            add: OrbitMatrix::new(n),
            rem: OrbitMatrix::new(n),
        }
    }

    /// Returns the number of rows (nodes).
    pub fn number_of_nodes(&self) -> NumNodes {
        self.add.n
    }

    /// Returns the delta describing the inverse toggle.
    pub fn inverse(self) -> Self {
        Self {
            add: self.rem,
            rem: self.add,
        }
    }
}
