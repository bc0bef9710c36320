/*!
# Orbit Counting

Everything that produces or maintains per-node orbit counts:

- [`OrbitMatrix`] / [`OrbitDelta`] — the `n x 73` count matrices.
- [`edge_flip_delta`] — the incremental engine: the orbit-count change of a
  single edge toggle, computed from the toggle's neighborhood only.
- [`scratch_counts`] — the exact recount of a static graph, used for seeding
  a running matrix and for validating the incremental path.

The intended loop: seed with [`scratch_counts`], then per toggle apply the
[`edge_flip_delta`] through [`OrbitMatrix::apply`]; the running matrix stays
equal to a recount of the current adjacency.
*/

pub mod delta;
pub mod matrix;
pub mod scratch;

pub use delta::edge_flip_delta;
pub use matrix::{OrbitDelta, OrbitMatrix};
pub use scratch::scratch_counts;
