use super::{Job, TimeStep};
use crate::SchedulerError;

/// The validated input of a simulation. Each simulator works on its own copy.
#[derive(Debug, Clone, Default)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Builds a job set, rejecting jobs that would never need the CPU.
    pub fn new(jobs: Vec<Job>) -> Result<Self, SchedulerError> {
        if let Some(job) = jobs.iter().find(|job| job.service_time() == 0) {
            return Err(SchedulerError::ZeroServiceTime(job.id()));
        }
        let job_set = Self { jobs };
        job_set.time_bound()?;
        Ok(job_set)
    }

    /// Latest time any simulation of this set can reach, `max(arrival) +
    /// sum(service)`. Summed turnaround times stay below `len` times this
    /// bound, so both must fit in a `TimeStep`.
    pub fn time_bound(&self) -> Result<TimeStep, SchedulerError> {
        let last_arrival = self.jobs.iter().map(|job| job.arrival_time()).max().unwrap_or(0);
        self.total_service_time()
            .and_then(|service| service.checked_add(last_arrival))
            .filter(|bound| bound.checked_mul(self.jobs.len()).is_some())
            .ok_or(SchedulerError::TimeOverflow)
    }

    pub fn new_empty() -> Self {
        Self { jobs: Vec::new() }
    }

    pub fn get_jobs(&self) -> &Vec<Job> {
        &self.jobs
    }

    /// Fresh, independently owned copy of the jobs in input order.
    pub fn to_jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Job> {
        self.jobs.iter()
    }

    /// `None` when the sum does not fit in a `TimeStep`.
    pub fn total_service_time(&self) -> Option<TimeStep> {
        self.jobs
            .iter()
            .try_fold(0, |total: TimeStep, job| total.checked_add(job.service_time()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_service_time() {
        let result = JobSet::new(vec![Job::new(1, 0, 1, 2), Job::new(2, 0, 1, 0)]);

        assert!(matches!(result, Err(SchedulerError::ZeroServiceTime(2))));
    }

    #[test]
    fn test_rejects_clock_overflow() {
        let late = JobSet::new(vec![Job::new(1, TimeStep::MAX, 0, 1)]);
        let long = JobSet::new(vec![Job::new(1, 0, 0, TimeStep::MAX), Job::new(2, 0, 0, 1)]);
        let summed = JobSet::new(vec![Job::new(1, 0, 0, TimeStep::MAX / 2), Job::new(2, 0, 0, TimeStep::MAX / 2)]);

        assert!(matches!(late, Err(SchedulerError::TimeOverflow)));
        assert!(matches!(long, Err(SchedulerError::TimeOverflow)));
        assert!(matches!(summed, Err(SchedulerError::TimeOverflow)));
    }

    #[test]
    fn test_time_bound() {
        let set = JobSet::new(vec![Job::new(1, 0, 1, 4), Job::new(2, 6, 1, 3)]).unwrap();

        assert_eq!(set.time_bound().unwrap(), 13);
        assert_eq!(JobSet::new_empty().time_bound().unwrap(), 0);
    }

    #[test]
    fn test_copies_are_independent() {
        let set = JobSet::new(vec![Job::new(1, 0, 1, 2)]).unwrap();
        let mut copy = set.to_jobs();
        copy[0].schedule(2);

        assert_eq!(set.get_jobs()[0].remaining_time(), 2);
        assert_eq!(set.total_service_time(), Some(2));
    }
}
