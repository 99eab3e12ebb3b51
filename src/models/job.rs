use super::{Priority, TimeStep, ID};

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: ID,                              // Identifier read from the job file
    arrival_time: TimeStep,              // Time at which the job becomes eligible
    priority: Priority,                  // Lower value runs first
    service_time: TimeStep,              // Total execution the job requires
    remaining_time: TimeStep,            // Execution still owed to the job
    start_time: Option<TimeStep>,        // First dispatch
    completion_time: Option<TimeStep>,   // Time at which remaining_time reached zero
    execution_index: Option<usize>,      // Position in the finish order
}

impl Job {
    pub fn new(id: ID, arrival_time: TimeStep, priority: Priority, service_time: TimeStep) -> Self {
        Self {
            id,
            arrival_time,
            priority,
            service_time,
            remaining_time: service_time,
            start_time: None,
            completion_time: None,
            execution_index: None,
        }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    /// Display label, e.g. `Job #3`.
    pub fn name(&self) -> String {
        format!("Job #{}", self.id)
    }

    pub fn arrival_time(&self) -> TimeStep {
        self.arrival_time
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn service_time(&self) -> TimeStep {
        self.service_time
    }

    pub fn remaining_time(&self) -> TimeStep {
        self.remaining_time
    }

    pub fn start_time(&self) -> Option<TimeStep> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<TimeStep> {
        self.completion_time
    }

    pub fn execution_index(&self) -> Option<usize> {
        self.execution_index
    }

    /// Completion time minus arrival time, once the job has finished.
    pub fn turnaround_time(&self) -> Option<TimeStep> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    pub fn has_arrived(&self, t: TimeStep) -> bool {
        self.arrival_time <= t
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records `t` as the start time on the first dispatch only.
    pub fn dispatch(&mut self, t: TimeStep) {
        if self.start_time.is_none() {
            self.start_time = Some(t);
        }
    }

    pub fn schedule(&mut self, n_steps: TimeStep) {
        debug_assert!(n_steps <= self.remaining_time, "job {} over-scheduled", self.id);
        self.remaining_time -= n_steps;
    }

    /// Marks the job finished at `t` and returns its turnaround time.
    pub fn complete(&mut self, t: TimeStep, execution_index: usize) -> TimeStep {
        debug_assert!(self.is_complete());
        debug_assert!(t >= self.arrival_time + self.service_time);
        self.completion_time = Some(t);
        self.execution_index = Some(execution_index);
        t - self.arrival_time
    }
}
