pub mod config;
pub mod simulation;
pub mod logging;
pub mod models;
pub mod report;
pub mod utils;

pub use config::SimulationConfig;
pub use models::{scheduler, Job, JobSet, Priority, SimulationResult, TimeStep, ID};
pub use utils::{constants, SchedulerError};
