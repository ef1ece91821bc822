//! Core data types for batched topological sorting.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Dependency graph: node ID -> IDs of the nodes that depend on it.
///
/// Edges point from a prerequisite to its dependents, so `a: [b]` means
/// `a` must come before `b`. Key insertion order decides the order of
/// nodes inside each batch.
pub type Dag = IndexMap<String, Vec<String>, FxBuildHasher>;

/// Unresolved prerequisite count per node, in first-seen order.
pub type DegreeMap<'a> = IndexMap<&'a str, usize, FxBuildHasher>;

/// Nodes that became eligible in the same round.
pub type Batch = Vec<String>;

/// Batches ordered by dependency depth.
pub type Batches = Vec<Batch>;

/// Build a [`Dag`] from borrowed `(node, dependents)` pairs, keeping their order.
pub fn dag_from_edges<'a, I, D>(entries: I) -> Dag
where
    I: IntoIterator<Item = (&'a str, D)>,
    D: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .map(|(id, dependents)| {
            (
                id.to_string(),
                dependents.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
}

/// Total number of edges in the graph.
pub fn edge_count(dag: &Dag) -> usize {
    dag.values().map(Vec::len).sum()
}
