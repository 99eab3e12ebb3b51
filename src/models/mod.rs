mod job;
pub mod jobset;
pub mod result;
pub mod scheduler;

pub use job::Job;
pub use jobset::JobSet;
pub use result::SimulationResult;

pub type TimeStep = usize;

pub type Priority = i32;

pub type ID = u32;
