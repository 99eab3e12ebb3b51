use super::scheduler::Scheduler;
use crate::constants::{Algorithm, Stepping, TieBreak};
use crate::{log_changes, log_checks, log_debug, Job, SimulationResult, TimeStep};

/// Preemptive priority scheduling with a quantum of one time unit.
///
/// The eligible job with the numerically lowest priority runs; a better job
/// that arrives takes the CPU at the next time step.
pub struct PriorityPreemptive {
    tie_break: TieBreak,
    stepping: Stepping,
    verbosity: u8,
}

impl PriorityPreemptive {
    pub fn new(tie_break: TieBreak, stepping: Stepping, verbosity: u8) -> Self {
        Self {
            tie_break,
            stepping,
            verbosity,
        }
    }

    /// Index in `queue` of the job that should run at `t`, if any has arrived.
    ///
    /// With `TieBreak::ScanOrder`, equal priorities go to whichever job comes
    /// first in `queue`; `min_by_key` keeps the first minimum.
    pub fn select(&self, queue: &[Job], t: TimeStep) -> Option<usize> {
        let eligible = queue
            .iter()
            .enumerate()
            .filter(|(_, job)| job.has_arrived(t) && !job.is_complete());

        let elected = match self.tie_break {
            TieBreak::ScanOrder => eligible.min_by_key(|(_, job)| job.priority()),
            TieBreak::ArrivalThenId => {
                eligible.min_by_key(|(_, job)| (job.priority(), job.arrival_time(), job.id()))
            }
        };

        elected.map(|(index, _)| index)
    }

    /// Latest time the simulation can reach: every idle gap ends before the
    /// last arrival, and every busy step consumes one unit of service.
    fn horizon(queue: &[Job]) -> TimeStep {
        let last_arrival = queue.iter().map(|job| job.arrival_time()).max().unwrap_or(0);
        queue
            .iter()
            .fold(last_arrival, |bound, job| bound.saturating_add(job.remaining_time()))
    }

    fn next_arrival(queue: &[Job], t: TimeStep) -> Option<TimeStep> {
        queue
            .iter()
            .map(|job| job.arrival_time())
            .filter(|&arrival| arrival > t)
            .min()
    }

    /// Records `index` as the running queue position and reports whether the
    /// CPU changed hands. Positions only shift when a job is retired, which
    /// also clears `running`.
    fn switch_to(&self, queue: &[Job], running: &mut Option<usize>, index: usize, t: TimeStep) -> bool {
        if *running == Some(index) {
            return false;
        }
        let job = &queue[index];
        match (*running).map(|previous| &queue[previous]) {
            Some(previous) if job.start_time().is_some() => log_changes!(
                self.verbosity,
                "t={} {} preempted, {} resumes",
                t,
                previous.name(),
                job.name()
            ),
            Some(previous) => log_changes!(
                self.verbosity,
                "t={} {} preempted, {} starts",
                t,
                previous.name(),
                job.name()
            ),
            None => log_changes!(self.verbosity, "t={} {} dispatched", t, job.name()),
        }
        *running = Some(index);
        true
    }

    /// Removes the finished job at `index`, keeping the order of the rest.
    fn retire(
        &self,
        queue: &mut Vec<Job>,
        finished: &mut Vec<Job>,
        index: usize,
        t: TimeStep,
    ) -> TimeStep {
        let mut job = queue.remove(index);
        let turnaround = job.complete(t, finished.len());
        log_changes!(
            self.verbosity,
            "t={} {} completed (turnaround {})",
            t,
            job.name(),
            turnaround
        );
        finished.push(job);
        turnaround
    }

    fn simulate_ticks(&self, mut queue: Vec<Job>) -> SimulationResult {
        let horizon = Self::horizon(&queue);
        let mut finished: Vec<Job> = Vec::with_capacity(queue.len());
        let mut total_turnaround: TimeStep = 0;
        let mut running: Option<usize> = None;
        let mut time: TimeStep = 0;
        let mut idle = false;

        while !queue.is_empty() {
            debug_assert!(time <= horizon, "clock ran past {}", horizon);
            log_debug!(
                self.verbosity,
                "t={} waiting {:?}",
                time,
                queue.iter().map(|job| (job.id(), job.remaining_time())).collect::<Vec<_>>()
            );

            let Some(index) = self.select(&queue, time) else {
                if !idle {
                    log_changes!(self.verbosity, "t={} idle", time);
                    idle = true;
                }
                running = None;
                time += 1;
                continue;
            };
            idle = false;

            log_checks!(
                self.verbosity,
                "t={} selected {} (priority {})",
                time,
                queue[index].name(),
                queue[index].priority()
            );
            self.switch_to(&queue, &mut running, index, time);
            let job = &mut queue[index];
            job.dispatch(time);
            job.schedule(1);

            if job.is_complete() {
                total_turnaround += self.retire(&mut queue, &mut finished, index, time + 1);
                running = None;
            }

            time += 1;
        }

        SimulationResult::new(finished, total_turnaround)
    }

    fn simulate_events(&self, mut queue: Vec<Job>) -> SimulationResult {
        let horizon = Self::horizon(&queue);
        let mut finished: Vec<Job> = Vec::with_capacity(queue.len());
        let mut total_turnaround: TimeStep = 0;
        let mut running: Option<usize> = None;
        let mut time: TimeStep = 0;

        while !queue.is_empty() {
            debug_assert!(time <= horizon, "clock ran past {}", horizon);
            let next_arrival = Self::next_arrival(&queue, time);

            let Some(index) = self.select(&queue, time) else {
                // Nothing eligible and nothing left to arrive cannot happen
                // while unfinished jobs remain.
                let Some(arrival) = next_arrival else {
                    debug_assert!(false, "unfinished jobs but no pending arrival");
                    break;
                };
                log_changes!(self.verbosity, "t={} idle until {}", time, arrival);
                running = None;
                time = arrival;
                continue;
            };

            let remaining = queue[index].remaining_time();
            let slice = match next_arrival {
                Some(arrival) => remaining.min(arrival - time),
                None => remaining,
            };
            log_checks!(
                self.verbosity,
                "t={} selected {} (priority {}) for {}",
                time,
                queue[index].name(),
                queue[index].priority(),
                slice
            );
            self.switch_to(&queue, &mut running, index, time);
            let job = &mut queue[index];
            job.dispatch(time);
            job.schedule(slice);
            time += slice;

            if job.is_complete() {
                total_turnaround += self.retire(&mut queue, &mut finished, index, time);
                running = None;
            }
        }

        SimulationResult::new(finished, total_turnaround)
    }
}

impl Scheduler for PriorityPreemptive {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PriorityPreemptive
    }

    fn simulate(&self, jobs: Vec<Job>) -> SimulationResult {
        match self.stepping {
            Stepping::Tick => self.simulate_ticks(jobs),
            Stepping::Event => self.simulate_events(jobs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ID;

    fn scheduler(stepping: Stepping) -> PriorityPreemptive {
        PriorityPreemptive::new(TieBreak::ScanOrder, stepping, 0)
    }

    fn find(result: &SimulationResult, id: ID) -> &Job {
        result.jobs().iter().find(|job| job.id() == id).unwrap()
    }

    #[test]
    fn test_lower_priority_value_runs_first() {
        for stepping in [Stepping::Tick, Stepping::Event] {
            let result = scheduler(stepping)
                .simulate(vec![Job::new(1, 0, 2, 3), Job::new(2, 0, 1, 2)]);
            let a = find(&result, 1);
            let b = find(&result, 2);

            assert_eq!((b.start_time(), b.completion_time(), b.turnaround_time()), (Some(0), Some(2), Some(2)));
            assert_eq!((a.start_time(), a.completion_time(), a.turnaround_time()), (Some(2), Some(5), Some(5)));
            assert_eq!(result.total_turnaround(), 7);
        }
    }

    #[test]
    fn test_preemption_on_arrival() {
        for stepping in [Stepping::Tick, Stepping::Event] {
            let result = scheduler(stepping)
                .simulate(vec![Job::new(1, 0, 2, 4), Job::new(2, 2, 1, 2)]);
            let a = find(&result, 1);
            let b = find(&result, 2);

            assert_eq!((b.start_time(), b.completion_time(), b.turnaround_time()), (Some(2), Some(4), Some(2)));
            assert_eq!((a.start_time(), a.completion_time(), a.turnaround_time()), (Some(0), Some(6), Some(6)));
            assert_eq!(b.execution_index(), Some(0));
            assert_eq!(a.execution_index(), Some(1));
        }
    }

    #[test]
    fn test_idle_until_first_arrival() {
        for stepping in [Stepping::Tick, Stepping::Event] {
            let result = scheduler(stepping).simulate(vec![Job::new(1, 3, 5, 2)]);
            let job = &result.jobs()[0];

            assert_eq!(job.start_time(), Some(3));
            assert_eq!(job.completion_time(), Some(5));
            assert_eq!(job.turnaround_time(), Some(2));
        }
    }

    #[test]
    fn test_results_in_completion_order() {
        let result = scheduler(Stepping::Tick).simulate(vec![
            Job::new(1, 0, 3, 1),
            Job::new(2, 0, 1, 3),
            Job::new(3, 1, 2, 1),
        ]);
        let ids: Vec<ID> = result.jobs().iter().map(|job| job.id()).collect();

        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_scan_order_tie_break() {
        // Equal priorities: the job stored first wins even if it arrived later.
        let jobs = vec![Job::new(1, 1, 1, 2), Job::new(2, 0, 1, 3)];
        let result = scheduler(Stepping::Tick).simulate(jobs);

        // t=0 only job 2 is eligible, t=1 job 1 is first in the queue.
        assert_eq!(find(&result, 2).start_time(), Some(0));
        assert_eq!(find(&result, 1).start_time(), Some(1));
        assert_eq!(find(&result, 1).completion_time(), Some(3));
        assert_eq!(find(&result, 2).completion_time(), Some(5));
    }

    #[test]
    fn test_arrival_then_id_tie_break() {
        let jobs = vec![Job::new(1, 1, 1, 2), Job::new(2, 0, 1, 3)];
        let result = PriorityPreemptive::new(TieBreak::ArrivalThenId, Stepping::Tick, 0).simulate(jobs);

        assert_eq!(find(&result, 2).completion_time(), Some(3));
        assert_eq!(find(&result, 1).start_time(), Some(3));
        assert_eq!(find(&result, 1).completion_time(), Some(5));
    }

    #[test]
    fn test_select_none_before_arrivals() {
        let queue = vec![Job::new(1, 4, 1, 1)];

        assert_eq!(scheduler(Stepping::Tick).select(&queue, 3), None);
        assert_eq!(scheduler(Stepping::Tick).select(&queue, 4), Some(0));
    }

    #[test]
    fn test_switch_between_jobs_sharing_an_id() {
        let queue = vec![Job::new(1, 0, 2, 3), Job::new(1, 0, 1, 2)];
        let scheduler = scheduler(Stepping::Tick);
        let mut running = None;

        assert!(scheduler.switch_to(&queue, &mut running, 0, 0));
        assert!(!scheduler.switch_to(&queue, &mut running, 0, 1));
        assert!(scheduler.switch_to(&queue, &mut running, 1, 2));
        assert_eq!(running, Some(1));
    }

    #[test]
    fn test_saturating_horizon() {
        let queue = vec![Job::new(1, TimeStep::MAX, 0, 1)];

        assert_eq!(PriorityPreemptive::horizon(&queue), TimeStep::MAX);
    }

    #[test]
    fn test_empty() {
        let result = scheduler(Stepping::Event).simulate(Vec::new());

        assert!(result.is_empty());
        assert_eq!(result.total_turnaround(), 0);
    }
}
