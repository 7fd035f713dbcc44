/*!
# Graph Algorithms

Bounded traversal, vertex-induced subgraphs and the extraction strategies built on top of them.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use mtxgraph::algo::*;
```
*/

mod extract;
mod subgraph;
mod traversal;

use crate::{
    error::{GraphError, Result},
    prelude::*,
    utils::*,
};

pub use extract::*;
pub use subgraph::*;
pub use traversal::*;
