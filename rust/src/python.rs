//! Python bindings (enabled with the `python` feature).

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use indexmap::IndexMap;
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rustc_hash::FxBuildHasher;

use crate::config::ToposortConfig;
use crate::models::{Batches, Dag};
use crate::toposort::{batching_toposort_with_config, ToposortError};

create_exception!(rust, CycleDetectedError, PyValueError);
create_exception!(rust, UndeclaredDependentError, PyValueError);

impl From<ToposortError> for PyErr {
    fn from(err: ToposortError) -> Self {
        match err {
            ToposortError::CycleDetected { .. } => CycleDetectedError::new_err(err.to_string()),
            ToposortError::UndeclaredDependent { .. } => {
                UndeclaredDependentError::new_err(err.to_string())
            }
        }
    }
}

/// Group a dependency graph into batches.
///
/// # Arguments
/// * `dag` - Dict mapping node ID to the IDs of nodes that depend on it
/// * `verbosity` - 0=silent, 1=batches, 2=checks, 3=debug (stderr)
/// * `reject_undeclared` - Raise UndeclaredDependentError for dependents never declared as keys
///
/// # Returns
/// * List of batches; each batch is a list of node IDs
///
/// # Raises
/// * CycleDetectedError (a ValueError) if the graph is cyclic
/// * UndeclaredDependentError (a ValueError) in strict mode
#[pyfunction]
#[pyo3(name = "batching_toposort", signature = (dag, verbosity=0, reject_undeclared=false))]
fn py_batching_toposort(dag: Dag, verbosity: u8, reject_undeclared: bool) -> PyResult<Batches> {
    let config = ToposortConfig {
        verbosity,
        reject_undeclared,
    };
    Ok(batching_toposort_with_config(&dag, &config)?)
}

/// Count incoming edges for every node mentioned in the graph.
#[pyfunction]
#[pyo3(name = "count_in_degrees")]
fn py_count_in_degrees(dag: Dag) -> IndexMap<String, usize, FxBuildHasher> {
    crate::degrees::count_in_degrees(&dag)
        .into_iter()
        .map(|(id, degree)| (id.to_string(), degree))
        .collect()
}

/// The batching_toposort.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("CycleDetectedError", m.py().get_type_bound::<CycleDetectedError>())?;
    m.add(
        "UndeclaredDependentError",
        m.py().get_type_bound::<UndeclaredDependentError>(),
    )?;

    m.add_function(wrap_pyfunction!(py_batching_toposort, m)?)?;
    m.add_function(wrap_pyfunction!(py_count_in_degrees, m)?)?;

    Ok(())
}
