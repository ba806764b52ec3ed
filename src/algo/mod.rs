/*!
# Graph Algorithms

Algorithms built on top of the uniform operation set in [`ops`](crate::ops).
All of them are re-exported at the top level of this module, so you can simply do:
```rust
use tourgraphs::algo::*;
```

- [`Connectivity`]: connected components of the working copy,
- [`EulerianCircuits`] / [`EulerianCircuitBuilder`]: Hierholzer's algorithm for Eulerian circuits,
- [`HamiltonianCheck`]: the necessary condition `ω(G - S) <= |S|` for Hamiltonian cycles.

The algorithms mutate the working copy of a graph and never touch its base graph.
*/

mod connectivity;
mod eulerian;
mod hamiltonian;

use crate::prelude::*;

pub use connectivity::*;
pub use eulerian::*;
pub use hamiltonian::*;
