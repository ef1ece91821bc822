//! In-degree counting and root selection.

use crate::models::{Dag, DegreeMap};

/// Count incoming edges for every node mentioned in the graph.
///
/// Nodes get an entry the first time they are seen, either as a key or as a
/// dependent. A dependent that is never declared as a key still gets an entry
/// (with count >= 1), it just has no outgoing edges.
pub fn count_in_degrees(dag: &Dag) -> DegreeMap<'_> {
    let mut counts = DegreeMap::with_capacity_and_hasher(dag.len(), Default::default());

    for (vx, dependents) in dag {
        counts.entry(vx.as_str()).or_insert(0);
        for dependent in dependents {
            *counts.entry(dependent.as_str()).or_insert(0) += 1;
        }
    }

    counts
}

fn filter_by_degree<'a>(
    counts: &DegreeMap<'a>,
    predicate: impl Fn(usize) -> bool,
) -> Vec<&'a str> {
    counts
        .iter()
        .filter(|(_, &degree)| predicate(degree))
        .map(|(&id, _)| id)
        .collect()
}

/// Nodes with no unresolved prerequisites, in degree-map order.
pub fn roots<'a>(counts: &DegreeMap<'a>) -> Vec<&'a str> {
    filter_by_degree(counts, |degree| degree == 0)
}

/// Nodes still waiting on at least one prerequisite, in degree-map order.
pub fn non_roots<'a>(counts: &DegreeMap<'a>) -> Vec<&'a str> {
    filter_by_degree(counts, |degree| degree != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dag_from_edges;

    fn as_pairs<'a>(counts: &DegreeMap<'a>) -> Vec<(&'a str, usize)> {
        counts.iter().map(|(&id, &degree)| (id, degree)).collect()
    }

    #[test]
    fn test_empty_dag() {
        let dag = Dag::default();
        assert!(count_in_degrees(&dag).is_empty());
    }

    #[test]
    fn test_small_dag() {
        let dag = dag_from_edges([("a", vec!["b"]), ("b", vec![])]);
        assert_eq!(as_pairs(&count_in_degrees(&dag)), vec![("a", 0), ("b", 1)]);
    }

    #[test]
    fn test_medium_dag() {
        let dag = dag_from_edges([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec![]),
            ("d", vec![]),
        ]);
        let counts = count_in_degrees(&dag);

        assert_eq!(counts.get("a"), Some(&0));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.get("c"), Some(&2));
        assert_eq!(counts.get("d"), Some(&0));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn test_bigger_dag() {
        let dag = dag_from_edges([
            ("a", vec!["c", "f"]),
            ("b", vec!["d", "e"]),
            ("c", vec!["f"]),
            ("d", vec!["f", "g"]),
            ("e", vec!["h"]),
            ("f", vec!["i"]),
            ("g", vec!["j"]),
            ("h", vec!["j"]),
            ("i", vec![]),
            ("j", vec![]),
        ]);

        // First-seen order: dependents are registered while their source is scanned
        assert_eq!(
            as_pairs(&count_in_degrees(&dag)),
            vec![
                ("a", 0),
                ("c", 1),
                ("f", 3),
                ("b", 0),
                ("d", 1),
                ("e", 1),
                ("g", 1),
                ("h", 1),
                ("i", 1),
                ("j", 2),
            ]
        );
    }

    #[test]
    fn test_undeclared_dependent_gets_entry() {
        let dag = dag_from_edges([("a", vec!["ghost"]), ("b", vec!["ghost"])]);
        let counts = count_in_degrees(&dag);

        assert_eq!(counts.get("ghost"), Some(&2));
        assert_eq!(roots(&counts), vec!["a", "b"]);
        assert_eq!(non_roots(&counts), vec!["ghost"]);
    }

    #[test]
    fn test_roots_and_non_roots_partition() {
        let dag = dag_from_edges([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec![]),
            ("d", vec![]),
        ]);
        let counts = count_in_degrees(&dag);

        assert_eq!(roots(&counts), vec!["a", "d"]);
        assert_eq!(non_roots(&counts), vec!["b", "c"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let dag = dag_from_edges([("a", vec!["b"]), ("b", vec![])]);
        let before = dag.clone();
        let _ = count_in_degrees(&dag);
        assert_eq!(dag, before);
    }
}
