use crate::constants::Algorithm;
use crate::{Job, SimulationConfig, SimulationResult};

use super::{FirstComeFirstServed, PriorityPreemptive};

/// A single-CPU scheduling discipline.
pub trait Scheduler {
    fn algorithm(&self) -> Algorithm;

    /// Runs the jobs to completion. The jobs are owned by this call, so
    /// nothing leaks between two simulations of the same input. The clock
    /// is only guaranteed not to overflow for jobs taken from a `JobSet`.
    fn simulate(&self, jobs: Vec<Job>) -> SimulationResult;
}

/// Builds the scheduler for `algorithm` with the options of `config`.
pub fn build_scheduler(algorithm: Algorithm, config: &SimulationConfig) -> Box<dyn Scheduler> {
    match algorithm {
        Algorithm::FirstComeFirstServed => {
            Box::new(FirstComeFirstServed::new(config.fcfs_order, config.verbosity))
        }
        Algorithm::PriorityPreemptive => Box::new(PriorityPreemptive::new(
            config.tie_break,
            config.stepping,
            config.verbosity,
        )),
    }
}
