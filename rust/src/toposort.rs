//! Batched topological sort (level-by-level Kahn's algorithm).

use thiserror::Error;

use crate::config::ToposortConfig;
use crate::degrees::{count_in_degrees, roots};
use crate::models::{Batches, Dag};
use crate::{log_changes, log_checks, log_debug};

/// Errors that can occur while batching a dependency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToposortError {
    /// Peeling stopped with nodes still waiting on prerequisites.
    #[error("Cycle(s) detected; toposort only works on acyclic graphs")]
    CycleDetected { unresolved: Vec<String> },
    /// A dependent is referenced but never declared as a key.
    #[error("Node {node:?} lists undeclared dependent {dependent:?}")]
    UndeclaredDependent { node: String, dependent: String },
}

fn undeclared_edges(dag: &Dag) -> impl Iterator<Item = (&str, &str)> {
    dag.iter().flat_map(move |(node, dependents)| {
        dependents
            .iter()
            .filter(move |dependent| !dag.contains_key(dependent.as_str()))
            .map(move |dependent| (node.as_str(), dependent.as_str()))
    })
}

/// Every `(node, dependent)` edge whose dependent is not a key, in graph order.
pub fn find_undeclared_dependents(dag: &Dag) -> Vec<(String, String)> {
    undeclared_edges(dag)
        .map(|(node, dependent)| (node.to_string(), dependent.to_string()))
        .collect()
}

/// Group nodes into batches using the default configuration.
///
/// See [`batching_toposort_with_config`].
pub fn batching_toposort(dag: &Dag) -> Result<Batches, ToposortError> {
    batching_toposort_with_config(dag, &ToposortConfig::default())
}

/// Group nodes into batches so that every node's prerequisites sit in
/// strictly earlier batches.
///
/// Batch `n + 1` holds the nodes whose last prerequisite was released by
/// batch `n`, in the order those releases were found. The first batch holds
/// the initial roots in degree-map order. Nothing is sorted.
///
/// # Returns
/// * `Ok(Batches)` - empty for an empty graph; no batch is ever empty
/// * `Err(ToposortError::CycleDetected)` if any node is left unresolved
/// * `Err(ToposortError::UndeclaredDependent)` if `config.reject_undeclared`
///   is set and a dependent is never declared as a key
pub fn batching_toposort_with_config(
    dag: &Dag,
    config: &ToposortConfig,
) -> Result<Batches, ToposortError> {
    let verbosity = config.verbosity;

    if config.reject_undeclared {
        if let Some((node, dependent)) = undeclared_edges(dag).next() {
            log_checks!(
                verbosity,
                "Rejecting graph: {} -> {} (undeclared)",
                node,
                dependent
            );
            return Err(ToposortError::UndeclaredDependent {
                node: node.to_string(),
                dependent: dependent.to_string(),
            });
        }
    }

    let mut in_degrees = count_in_degrees(dag);
    log_debug!(verbosity, "In-degrees: {:?}", in_degrees);

    let mut sorted = Batches::new();
    let mut frontier = roots(&in_degrees);

    while !frontier.is_empty() {
        let mut next_frontier: Vec<&str> = Vec::new();

        for &root in &frontier {
            let Some(dependents) = dag.get(root) else {
                continue;
            };
            for dependent in dependents {
                if let Some(degree) = in_degrees.get_mut(dependent.as_str()) {
                    *degree -= 1;
                    log_debug!(
                        verbosity,
                        "  {} -> {}: degree {}",
                        root,
                        dependent,
                        *degree
                    );
                    // Undeclared dependents are never emitted; they stay unresolved
                    if *degree == 0 && dag.contains_key(dependent.as_str()) {
                        next_frontier.push(dependent.as_str());
                    }
                }
            }
        }

        log_changes!(verbosity, "Batch {}: {:?}", sorted.len(), frontier);
        sorted.push(frontier.iter().map(|&id| id.to_string()).collect());
        frontier = next_frontier;
    }

    let unresolved: Vec<&str> = in_degrees
        .iter()
        .filter(|(&id, &degree)| degree != 0 || !dag.contains_key(id))
        .map(|(&id, _)| id)
        .collect();
    if !unresolved.is_empty() {
        log_checks!(
            verbosity,
            "Unresolved after {} batch(es): {:?}",
            sorted.len(),
            unresolved
        );
        return Err(ToposortError::CycleDetected {
            unresolved: unresolved.into_iter().map(str::to_string).collect(),
        });
    }

    log_changes!(
        verbosity,
        "Sorted {} node(s) into {} batch(es)",
        in_degrees.len(),
        sorted.len()
    );
    Ok(sorted)
}
