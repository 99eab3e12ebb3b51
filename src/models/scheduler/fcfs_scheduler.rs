use super::scheduler::Scheduler;
use crate::constants::{Algorithm, FcfsOrder};
use crate::{log_changes, Job, SimulationResult, TimeStep};

/// Non-preemptive first-come-first-served.
pub struct FirstComeFirstServed {
    order: FcfsOrder,
    verbosity: u8,
}

impl FirstComeFirstServed {
    pub fn new(order: FcfsOrder, verbosity: u8) -> Self {
        Self { order, verbosity }
    }
}

impl Scheduler for FirstComeFirstServed {
    fn algorithm(&self) -> Algorithm {
        Algorithm::FirstComeFirstServed
    }

    fn simulate(&self, mut jobs: Vec<Job>) -> SimulationResult {
        if self.order == FcfsOrder::ArrivalOrder {
            // sort_by_key is stable: equal arrivals keep input order
            jobs.sort_by_key(|job| job.arrival_time());
        }

        let mut time: TimeStep = 0;
        let mut total_turnaround: TimeStep = 0;

        for (index, job) in jobs.iter_mut().enumerate() {
            let start = time.max(job.arrival_time());
            if start > time {
                log_changes!(self.verbosity, "t={} idle until {}", time, start);
            }

            job.dispatch(start);
            job.schedule(job.remaining_time());
            time = start + job.service_time();
            total_turnaround += job.complete(time, index);

            log_changes!(self.verbosity, "t={} {} runs until {}", start, job.name(), time);
        }

        SimulationResult::new(jobs, total_turnaround)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(order: FcfsOrder, jobs: Vec<Job>) -> SimulationResult {
        FirstComeFirstServed::new(order, 0).simulate(jobs)
    }

    #[test]
    fn test_single_job() {
        let result = run(FcfsOrder::InputOrder, vec![Job::new(1, 0, 1, 5)]);
        let job = &result.jobs()[0];

        assert_eq!(job.start_time(), Some(0));
        assert_eq!(job.completion_time(), Some(5));
        assert_eq!(job.turnaround_time(), Some(5));
        assert_eq!(result.total_turnaround(), 5);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let result = run(
            FcfsOrder::InputOrder,
            vec![Job::new(1, 0, 1, 2), Job::new(2, 5, 1, 3)],
        );
        let second = &result.jobs()[1];

        assert_eq!(second.start_time(), Some(5));
        assert_eq!(second.completion_time(), Some(8));
        assert_eq!(second.turnaround_time(), Some(3));
    }

    #[test]
    fn test_input_order_is_trusted() {
        let result = run(
            FcfsOrder::InputOrder,
            vec![Job::new(1, 4, 1, 2), Job::new(2, 0, 1, 3)],
        );
        let ids: Vec<u32> = result.jobs().iter().map(|job| job.id()).collect();

        assert_eq!(ids, vec![1, 2]);
        // job 2 arrived first but waits behind job 1
        assert_eq!(result.jobs()[1].start_time(), Some(6));
        assert_eq!(result.jobs()[1].turnaround_time(), Some(9));
    }

    #[test]
    fn test_arrival_order_sorts_stably() {
        let result = run(
            FcfsOrder::ArrivalOrder,
            vec![Job::new(1, 4, 1, 2), Job::new(2, 0, 1, 3), Job::new(3, 0, 1, 1)],
        );
        let ids: Vec<u32> = result.execution_order().iter().map(|job| job.id()).collect();

        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(result.total_turnaround(), 3 + 4 + 2);
    }

    #[test]
    fn test_empty() {
        let result = run(FcfsOrder::InputOrder, Vec::new());

        assert!(result.is_empty());
        assert_eq!(result.total_turnaround(), 0);
    }
}
