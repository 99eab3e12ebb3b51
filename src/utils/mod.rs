pub mod constants;
pub mod errors;

pub use constants::{Algorithm, FcfsOrder, Stepping, TieBreak};
pub use errors::SchedulerError;
