//! Diagnostic output for the toposort driver.
//!
//! Every message goes to stderr tagged with its level, and only when the
//! configured verbosity reaches that level. Verbosity 0 prints nothing.
//! - 1: CHANGES (each emitted batch, final summary)
//! - 2: CHECKS (undeclared dependents, nodes left unresolved)
//! - 3: DEBUG (degree map contents, every in-degree decrement)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Short tag printed in front of a message logged at `level`.
pub fn level_tag(level: u8) -> &'static str {
    match level {
        VERBOSITY_SILENT => "",
        VERBOSITY_CHANGES => "toposort",
        VERBOSITY_CHECKS => "toposort:check",
        _ => "toposort:debug",
    }
}

/// Print when `$verbosity` is at least `$level`. Backs the level macros below.
#[doc(hidden)]
#[macro_export]
macro_rules! log_at {
    ($level:expr, $verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $level {
            eprintln!(
                "[{}] {}",
                $crate::logging::level_tag($level),
                format_args!($($arg)*)
            );
        }
    };
}

/// Batches and summaries.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHANGES, $verbosity, $($arg)*)
    };
}

/// Validation results and cycle residue.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHECKS, $verbosity, $($arg)*)
    };
}

/// Algorithm internals.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_DEBUG, $verbosity, $($arg)*)
    };
}
