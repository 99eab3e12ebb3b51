use thiserror::Error;

use crate::models::ID;

/// Errors raised while loading jobs or configuring a run.
///
/// The simulators themselves are total over a valid `JobSet` and never fail.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Cannot read job file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed job file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid {field} `{token}` on line {line}")]
    InvalidField {
        field: &'static str,
        token: String,
        line: u64,
    },
    #[error("Truncated job record: {0} trailing value(s), expected 4 per job")]
    TruncatedRecord(usize),
    #[error("Job {0} has a service time of zero")]
    ZeroServiceTime(ID),
    #[error("Arrival and service times are too large to simulate")]
    TimeOverflow,
    #[error("Unknown option value: {0}")]
    UnknownOption(String),
}
