use std::fmt;
use std::str::FromStr;

use crate::SchedulerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    FirstComeFirstServed,
    PriorityPreemptive,
}

impl Algorithm {
    /// Heading used by the report.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::FirstComeFirstServed => "FCFS (Non Pre-emptive)",
            Algorithm::PriorityPreemptive => "Priority (Pre-emptive)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Order in which the FCFS simulator runs its jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FcfsOrder {
    /// Run jobs exactly as they were read.
    #[default]
    InputOrder,
    /// Stable sort by arrival time first.
    ArrivalOrder,
}

/// Secondary key when several eligible jobs share the best priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// First match in the current waiting collection.
    #[default]
    ScanOrder,
    /// Earliest arrival, then lowest id.
    ArrivalThenId,
}

/// How the preemptive simulator advances its clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stepping {
    /// Re-evaluate every time unit.
    #[default]
    Tick,
    /// Re-evaluate only on arrivals and completions.
    Event,
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fcfs" => Ok(Algorithm::FirstComeFirstServed),
            "priority" => Ok(Algorithm::PriorityPreemptive),
            _ => Err(SchedulerError::UnknownOption(s.to_string())),
        }
    }
}

impl FromStr for FcfsOrder {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(FcfsOrder::InputOrder),
            "arrival" => Ok(FcfsOrder::ArrivalOrder),
            _ => Err(SchedulerError::UnknownOption(s.to_string())),
        }
    }
}

impl FromStr for TieBreak {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(TieBreak::ScanOrder),
            "arrival" => Ok(TieBreak::ArrivalThenId),
            _ => Err(SchedulerError::UnknownOption(s.to_string())),
        }
    }
}

impl FromStr for Stepping {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tick" => Ok(Stepping::Tick),
            "event" => Ok(Stepping::Event),
            _ => Err(SchedulerError::UnknownOption(s.to_string())),
        }
    }
}
