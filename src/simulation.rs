use crate::constants::Algorithm;
use crate::scheduler::build_scheduler;
use crate::{log_changes, JobSet, SimulationConfig, SimulationResult};

/// Runs one discipline on a fresh copy of `job_set`.
pub fn run_simulation(job_set: &JobSet, algorithm: Algorithm, config: &SimulationConfig) -> SimulationResult {
    let scheduler = build_scheduler(algorithm, config);
    log_changes!(config.verbosity, "Simulating {} over {} job(s)", scheduler.algorithm(), job_set.len());

    if job_set.is_empty() {
        return SimulationResult::default();
    }

    scheduler.simulate(job_set.to_jobs())
}

/// Runs every configured discipline, each on its own copy of the jobs.
pub fn run_all(job_set: &JobSet, config: &SimulationConfig) -> Vec<(Algorithm, SimulationResult)> {
    config
        .algorithms
        .iter()
        .map(|&algorithm| (algorithm, run_simulation(job_set, algorithm, config)))
        .collect()
}
