//! Synthetic workload generation.
//!
//! Produces randomized process batches for experiments. The randomness
//! source is injected, never global, so callers (and tests) decide
//! between a seeded [`rand::rngs::StdRng`] and an OS-backed generator;
//! the engines themselves consume no randomness at all.

use rand::Rng;

use crate::models::Process;

/// Builder for randomized process batches.
///
/// Ids are assigned 1..=count; arrival times fall in
/// `0..max_arrival_time`, burst times in `1..=max_burst_time`, and
/// priorities in `1..=max_priority`.
///
/// # Example
/// ```
/// use cpu_sched::generator::WorkloadGenerator;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let batch = WorkloadGenerator::default().generate(10, &mut rng);
/// assert_eq!(batch.len(), 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkloadGenerator {
    /// Exclusive upper bound on arrival times.
    pub max_arrival_time: u64,
    /// Inclusive upper bound on burst times. Treated as at least 1.
    pub max_burst_time: u64,
    /// Inclusive upper bound on priorities. Treated as at least 1.
    pub max_priority: i32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            max_arrival_time: 10,
            max_burst_time: 10,
            max_priority: 10,
        }
    }
}

impl WorkloadGenerator {
    /// Sets the exclusive arrival-time bound.
    pub fn with_max_arrival_time(mut self, max_arrival_time: u64) -> Self {
        self.max_arrival_time = max_arrival_time;
        self
    }

    /// Sets the inclusive burst-time bound.
    pub fn with_max_burst_time(mut self, max_burst_time: u64) -> Self {
        self.max_burst_time = max_burst_time;
        self
    }

    /// Sets the inclusive priority bound.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates `count` processes from the given randomness source.
    pub fn generate<R: Rng + ?Sized>(&self, count: u32, rng: &mut R) -> Vec<Process> {
        let max_burst = self.max_burst_time.max(1);
        let max_priority = self.max_priority.max(1);
        (1..=count)
            .map(|id| {
                let arrival = if self.max_arrival_time == 0 {
                    0
                } else {
                    rng.random_range(0..self.max_arrival_time)
                };
                let burst = rng.random_range(1..=max_burst);
                let priority = rng.random_range(1..=max_priority);
                Process::new(id, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}
