//! Scheduling policies (the five engines).
//!
//! Each policy is a self-contained state machine over a cloned process
//! set and a single integer simulation clock. Policies share the
//! [`SchedulingPolicy`] seam and the data model, nothing else: no engine
//! calls another or touches state outside its own clones.
//!
//! # Determinism
//! Every selection tie breaks on the lower process id, and arrival
//! admission scans in (arrival, id) order. Running the same policy twice
//! on identical input produces identical results.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

mod fcfs;
mod mlfq;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use mlfq::Mlfq;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt::Debug;

use crate::models::{Process, SimulationResult};
use crate::validation::ValidationError;

/// A scheduling algorithm that simulates a process batch to completion.
///
/// Implementations clone the input up front and never mutate it; repeated
/// or concurrent runs over the same slice cannot interfere.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Algorithm label, including parameter values where relevant.
    fn name(&self) -> String;

    /// Checks algorithm parameters before a run.
    fn validate_config(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Simulates the batch and returns the outcome.
    ///
    /// Expects validated input (see [`crate::validation`]); an empty
    /// slice yields an empty result with zero metrics.
    fn run(&self, processes: &[Process]) -> SimulationResult;
}

/// Indices into `processes` sorted by (arrival, id): the order in which
/// arrivals are admitted to ready structures.
pub(crate) fn admission_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].id));
    order
}
