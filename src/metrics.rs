//! Summary performance metrics.
//!
//! Computes the comparative indicators reported for each algorithm run
//! from the finished process list.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Avg Response Time | mean(first dispatch - arrival), over dispatched processes |
//! | CPU Utilization | 100 * sum(burst) / max(completion) |
//! | Throughput | process count / max(completion) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Summary metrics for one algorithm run.
///
/// All averages over an empty process set resolve to 0; no division by
/// zero can occur.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time across all processes (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all processes (ticks).
    pub avg_turnaround_time: f64,
    /// Mean response time across processes that were ever dispatched (ticks).
    pub avg_response_time: f64,
    /// Percentage of elapsed wall time spent executing processes (0..=100).
    pub cpu_utilization: f64,
    /// Completed processes per tick of elapsed wall time.
    pub throughput: f64,
}

impl Metrics {
    /// Computes metrics from a finished process list.
    ///
    /// Expects every process to carry populated derived fields; the
    /// engines guarantee this before calling.
    pub fn calculate(processes: &[Process]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        let n = processes.len() as f64;
        let total_waiting: u64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: u64 = processes.iter().map(|p| p.turnaround_time).sum();

        let responses: Vec<u64> = processes.iter().filter_map(|p| p.response_time).collect();
        let avg_response_time = if responses.is_empty() {
            0.0
        } else {
            responses.iter().sum::<u64>() as f64 / responses.len() as f64
        };

        let total_burst: u64 = processes.iter().map(|p| p.burst_time).sum();
        let max_completion = processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);

        let (cpu_utilization, throughput) = if max_completion == 0 {
            (0.0, 0.0)
        } else {
            (
                total_burst as f64 / max_completion as f64 * 100.0,
                n / max_completion as f64,
            )
        };

        Self {
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_response_time,
            cpu_utilization,
            throughput,
        }
    }
}
