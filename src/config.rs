//! Run configuration shared by the CLI and the library entry points.

use crate::constants::{Algorithm, FcfsOrder, Stepping, TieBreak};
use crate::logging::VERBOSITY_SILENT;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Simulations to run, in report order
    pub algorithms: Vec<Algorithm>,
    /// Whether FCFS trusts the input order or sorts by arrival
    pub fcfs_order: FcfsOrder,
    /// Secondary key between equal priorities
    pub tie_break: TieBreak,
    /// Clock advance strategy of the preemptive simulator
    pub stepping: Stepping,
    /// 0 = silent, up to 3 = debug
    pub verbosity: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithms: vec![Algorithm::FirstComeFirstServed, Algorithm::PriorityPreemptive],
            fcfs_order: FcfsOrder::InputOrder,
            tie_break: TieBreak::ScanOrder,
            stepping: Stepping::Tick,
            verbosity: VERBOSITY_SILENT,
        }
    }
}
