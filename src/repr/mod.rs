/*!
# Graph Representation

Concrete adjacency stores for undirected simple graphs.

A store is an [`UndirectedGraph`] parameterized by a [`Neighborhood`]
implementation, which controls how the per-node neighbor sets are kept.

## Provided Representations

- [`AdjArrayUndir`] — sorted adjacency lists in `SmallVec<[Node; 8]>`.
  Membership in `O(log deg)`, ascending iteration, inline storage for the
  small neighborhoods typical of sparse graphs. The default store.
- [`AdjMatrixUndir`] — adjacency as a [`NodeBitSet`](crate::node::NodeBitSet)
  per node. Membership in `O(1)` at `O(n^2)` memory; preferable for dense
  graphs.

Both yield neighbors in ascending node order, so every representation
satisfies the ordered-iteration contract the edge-list materialisation and
the graphlet enumeration rely on. The choice is invisible to all other
components.
*/

use crate::{edge::*, node::*, ops::*};

pub mod neighborhood;
pub mod undirected;

use neighborhood::*;

pub use neighborhood::{BitNeighborhood, Neighborhood, SortedNeighborhood};
pub use undirected::{AdjArrayUndir, AdjMatrixUndir, UndirectedGraph};
