use super::{Job, TimeStep};

/// Annotated jobs of one simulation run plus the summed turnaround time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResult {
    jobs: Vec<Job>,
    total_turnaround: TimeStep,
}

impl SimulationResult {
    pub fn new(jobs: Vec<Job>, total_turnaround: TimeStep) -> Self {
        Self { jobs, total_turnaround }
    }

    /// Jobs in the order the simulator produced them.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn total_turnaround(&self) -> TimeStep {
        self.total_turnaround
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// `None` when no job ran.
    pub fn average_turnaround(&self) -> Option<f64> {
        if self.jobs.is_empty() {
            return None;
        }
        Some(self.total_turnaround as f64 / self.jobs.len() as f64)
    }

    /// Jobs sorted by id, ties kept in result order.
    pub fn by_id(&self) -> Vec<&Job> {
        let mut jobs: Vec<&Job> = self.jobs.iter().collect();
        jobs.sort_by_key(|job| job.id());
        jobs
    }

    /// Jobs sorted by the order in which they finished.
    pub fn execution_order(&self) -> Vec<&Job> {
        let mut jobs: Vec<&Job> = self.jobs.iter().collect();
        jobs.sort_by_key(|job| job.execution_index());
        jobs
    }

    pub fn makespan(&self) -> TimeStep {
        self.jobs
            .iter()
            .filter_map(|job| job.completion_time())
            .max()
            .unwrap_or(0)
    }
}
