//! Simulation result (solution) model.

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};
use crate::metrics::Metrics;

/// Complete outcome of one algorithm run.
///
/// Carries the algorithm label (with parameter values where relevant),
/// the finished process list with all derived fields populated, the
/// execution timeline, and the summary metrics. The crate performs no
/// formatting or file I/O on results; see [`crate::report`] for text
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Human-readable algorithm label, e.g. `"Round Robin (RR) - Quantum: 2"`.
    pub algorithm: String,
    /// Finished processes, in the engine's working order.
    pub processes: Vec<Process>,
    /// What occupied the CPU, tick by tick.
    pub timeline: Timeline,
    /// Summary performance metrics.
    pub metrics: Metrics,
}

impl SimulationResult {
    /// Assembles a result, computing metrics from the finished processes.
    pub fn new(algorithm: impl Into<String>, processes: Vec<Process>, timeline: Timeline) -> Self {
        let metrics = Metrics::calculate(&processes);
        Self {
            algorithm: algorithm.into(),
            processes,
            timeline,
            metrics,
        }
    }

    /// Looks up a finished process by id.
    pub fn process(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Completion time of the last process to finish (timeline end).
    pub fn makespan(&self) -> u64 {
        self.timeline.span()
    }
}
