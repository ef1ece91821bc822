//! Configuration types for batched topological sorting.

/// Options for a single toposort call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToposortConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,

    /// Reject dependents that are never declared as keys instead of letting
    /// them surface as a cycle.
    pub reject_undeclared: bool,
}

impl ToposortConfig {
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_reject_undeclared(mut self, reject_undeclared: bool) -> Self {
        self.reject_undeclared = reject_undeclared;
        self
    }
}
