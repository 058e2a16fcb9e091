//! Multi-metric route finding over a directed weighted graph.
//!
//! The graph is assembled incrementally from JSON snapshots and queried for
//! cheapest routes by a named edge metric ("distance" or "time").

#[macro_use]
extern crate log;

pub use self::errors::RouterError;
pub use self::metric::Metric;
pub use self::router::{GraphRouter, RouteResult};
pub use self::snapshot::{EdgeWeights, Snapshot};

mod errors;
mod metric;
mod router;
mod snapshot;
