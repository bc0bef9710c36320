/*!
# Neighborhood Abstractions

This module defines the abstraction of the **neighborhood** of a single
vertex, the building block of the adjacency stores in [`super::undirected`].

## Provided Representations

- [`SortedNeighborhood`] — neighbors in a sorted `SmallVec<[Node; N]>`;
  binary-search membership, ascending iteration, inline storage while the
  neighborhood is small.
- [`BitNeighborhood`] — neighbors as a [`NodeBitSet`]; constant-time
  membership, ascending iteration via the bitmask stream.

Every implementation yields neighbors in ascending node order. This is part
of the [`Neighborhood`] contract (not merely an artifact of the backing
store) and is relied on by edge-list materialisation.
*/

use std::{iter::Copied, slice::Iter};

use smallvec::{Array, SmallVec};
use stream_bitset::prelude::{
    BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream,
};

use super::*;

/// Core trait for representing the **neighborhood of a single vertex**.
///
/// # Contracts
/// - [`Neighborhood::neighbors`] yields neighbors in ascending node order.
/// - A neighbor is stored at most once; callers keep the symmetric entry of
///   the partner vertex in sync.
pub trait Neighborhood: Clone {
    /// Constructs a new, empty neighborhood for a graph with `n` nodes.
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors.
    fn num_of_neighbors(&self) -> NumNodes;

    /// Iterator over neighbors, ascending.
    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in ascending node order.
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Checks whether `v` is a neighbor.
    ///
    /// # Panics
    /// **Might panic** if `v >= n`.
    fn has_neighbor(&self, v: Node) -> bool;

    /// Tries to add a neighbor.
    ///
    /// Returns `true` if the neighbor was already present.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor. Present neighbors are kept as-is.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor.
    ///
    /// Returns `true` if the neighbor was present.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors.
    fn clear(&mut self);
}

/// Extension trait for neighborhoods exposing neighbors as slices.
pub trait NeighborhoodSlice: Neighborhood {
    /// Returns a shared slice of the neighborhood, ascending.
    fn as_slice(&self) -> &[Node];
}

/// Neighborhood backed by a sorted `SmallVec<[Node; N]>`.
///
/// - Membership in `O(log deg)` via binary search.
/// - Insertions/removals shift the tail, which is cheap for the small
///   degrees this crate targets.
/// - Small neighborhoods live inline without heap allocation.
#[derive(Default, Clone)]
pub struct SortedNeighborhood<const N: usize = 8>(SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SortedNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(_) => true,
            Err(pos) => {
                self.0.insert(pos, u);
                false
            }
        }
    }

    fn add_neighbor(&mut self, u: Node) {
        if let Err(pos) = self.0.binary_search(&u) {
            self.0.insert(pos, u);
        }
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Ok(pos) = self.0.binary_search(&u) {
            // `remove` instead of `swap_remove` to keep the slice sorted
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl<const N: usize> NeighborhoodSlice for SortedNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

/// Neighborhood backed by a [`NodeBitSet`].
///
/// - Constant-time membership queries.
/// - Iteration is ascending by construction.
/// - Memory per node is `O(n)` bits, so a full graph costs `O(n^2)`.
#[derive(Default, Clone)]
pub struct BitNeighborhood(pub NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.cardinality()
    }

    type NeighborhoodIter<'a>
        = BitmaskStreamToIndices<BitmaskSliceStream<'a>, Node, true>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        // NeighborhoodIter needs a nameable type; the bitset's own
        // `iter_set_bits` hides its iterator behind an opaque wrapper
        self.0.bitmask_stream().iter_set_bits()
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0.get_bit(u)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        self.0.set_bit(u)
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.set_bit(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        self.0.clear_bit(u)
    }

    fn clear(&mut self) {
        self.0.clear_all();
    }
}
