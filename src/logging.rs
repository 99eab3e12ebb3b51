//! Trace output for the simulators, switched on with `-v`.
//!
//! Traces go to stderr and never mix with the reports on stdout. Each extra
//! `-v` adds a finer level:
//! - 1: the CPU changing hands (dispatch, preemption, completion, idle gaps)
//! - 2: the job picked at every step and its priority
//! - 3: the waiting queue with remaining service before each step

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Traces a change of the running job, e.g. `t=2 Job #1 preempted, Job #2 starts`.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!($($arg)*);
        }
    };
}

/// Traces a selection decision, even when the same job keeps the CPU.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

/// Dumps simulator state.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
