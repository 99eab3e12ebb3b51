pub mod scheduler;
pub mod fcfs_scheduler;
pub mod priority_scheduler;

pub use scheduler::{build_scheduler, Scheduler};
pub use fcfs_scheduler::FirstComeFirstServed;
pub use priority_scheduler::PriorityPreemptive;
