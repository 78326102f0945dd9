//! Process (simulated job) model.
//!
//! A process is a single atomic CPU demand: it arrives once, requires
//! `burst_time` ticks of CPU, and performs no I/O. Engines never mutate
//! caller-owned processes; each run works on its own clone.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// A simulated process.
///
/// Static inputs (`id`, `arrival_time`, `burst_time`, `priority`) are set at
/// creation and never change afterwards. The remaining fields are derived
/// state written by the engine executing this process.
///
/// # Time Representation
/// All times are integer clock ticks from the simulation epoch (t=0).
/// There is no wall-clock involvement anywhere in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier. Must be nonzero: id 0 is reserved for
    /// the idle sentinel in timelines.
    pub id: u32,
    /// Tick at which the process becomes available for dispatch.
    pub arrival_time: u64,
    /// Total CPU demand in ticks. Always at least 1 for valid input.
    pub burst_time: u64,
    /// Priority tag. Carried for display and workload generation; no
    /// engine selects on it.
    pub priority: i32,
    /// Unserved CPU demand. Initialized to `burst_time`, reaches 0
    /// exactly once per run.
    pub remaining_time: u64,
    /// Whether the process has entered a ready structure.
    pub has_started: bool,
    /// Delay from arrival to first dispatch. `None` until the process
    /// first gets the CPU, then fixed.
    pub response_time: Option<u64>,
    /// Tick at which the process finished. Meaningful once
    /// `remaining_time` reaches 0.
    pub completion_time: u64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: u64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: u64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: u32, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            has_started: false,
            response_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the priority tag.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has received its full CPU demand.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records the first dispatch. Later dispatches leave the response
    /// time untouched.
    pub(crate) fn mark_dispatched(&mut self, now: u64) {
        if self.response_time.is_none() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Records completion at `now` and derives turnaround and waiting times.
    pub(crate) fn complete_at(&mut self, now: u64) {
        self.completion_time = now;
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}
