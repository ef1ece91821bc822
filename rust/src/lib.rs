//! Batched topological sorting of dependency graphs.
//!
//! Groups the nodes of a DAG into successive batches: every node's
//! prerequisites sit in strictly earlier batches, and nodes sharing a batch
//! do not depend on each other. Cyclic input is rejected as a whole.

pub mod config;
pub mod degrees;
pub mod logging;
pub mod models;
#[cfg(feature = "python")]
mod python;
pub mod toposort;

pub use config::ToposortConfig;
pub use degrees::{count_in_degrees, non_roots, roots};
pub use models::{dag_from_edges, edge_count, Batch, Batches, Dag, DegreeMap};
pub use toposort::{
    batching_toposort, batching_toposort_with_config, find_undeclared_dependents, ToposortError,
};
