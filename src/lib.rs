/*!
`orbdelta` maintains **graphlet orbit counts** of undirected simple graphs
under single-edge toggles.

For each of the 73 automorphism orbits of the 30 connected graphlets on up
to 5 nodes, the crate tracks, per node, how many induced graphlet instances
contain that node in that orbit, and how those counts *change* when one edge
is flipped. A full recount after every toggle costs far more
than necessary: only graphlets touching both flipped endpoints can change,
so the incremental engine enumerates exactly those.

# Representation

Nodes are `u32` indices `0..n`; edges are the tuple struct
[`Edge`](edge::Edge). Adjacency lives in an
[`UndirectedGraph`](repr::UndirectedGraph) parameterized by a neighborhood
backend; see the [`repr`] module for the trade-offs.

# Usage

The high-level entry point is [`Network`](net::Network), which speaks
1-based node ids and bundles validation, toggling and counting:

```
use orbdelta::prelude::*;

let mut net = Network::with_edges(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)])?;

// Seed once, then maintain incrementally
let mut counts = net.orbit_counts();
net.flip(1, 3)?;
counts.apply(&net.calculate_delta(1, 3)?);

assert_eq!(counts, net.orbit_counts());
# Ok::<(), NetworkError>(())
```

The 0-based core ([`edge_flip_delta`](count::edge_flip_delta),
[`scratch_counts`](count::scratch_counts) and the [`orbits`] classifier)
is public for callers that manage their own graphs.

# When to use

You should only use this library if the following apply:
- Your graphs are undirected, unweighted and simple.
- You toggle edges one at a time and need per-node orbit counts kept current.
- Orbit resolution up to graphlet size 5 is sufficient.

For one-shot counting of large static graphs, a dedicated batch counter will
beat the scratch path provided here.
*/

pub mod count;
pub mod edge;
pub mod error;
pub mod net;
pub mod node;
pub mod ops;
pub mod orbits;
pub mod repr;

#[cfg(test)]
pub(crate) mod testing;

/// `orbdelta::prelude` includes the node/edge definitions, the graph
/// operation traits, the representations, and the counting surface.
pub mod prelude {
    pub use super::{
        count::{edge_flip_delta, scratch_counts, OrbitDelta, OrbitMatrix},
        edge::*,
        error::{NetworkError, Result},
        net::Network,
        node::*,
        ops::*,
        orbits::{Graphlet, Orbit, NUM_GRAPHLETS, NUM_ORBITS},
        repr::*,
    };
}
