//! Simulation front door.
//!
//! [`Simulator`] owns a process batch, validates it once at the boundary,
//! and runs one policy or all five for side-by-side comparison. Policies
//! clone the batch per run, so runs are independent and repeatable.

use crate::models::{Process, SimulationResult};
use crate::policies::{Fcfs, Mlfq, RoundRobin, SchedulingPolicy, Sjf, Srtf};
use crate::validation::{validate_processes, ValidationError};

/// Runs scheduling policies over a fixed process batch.
///
/// # Example
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::policies::Fcfs;
/// use cpu_sched::sim::Simulator;
///
/// let sim = Simulator::with_processes(vec![
///     Process::new(1, 0, 6),
///     Process::new(2, 2, 4),
/// ]);
/// let result = sim.run(&Fcfs).unwrap();
/// assert_eq!(result.makespan(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    processes: Vec<Process>,
}

impl Simulator {
    /// Creates a simulator with no processes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator over the given batch.
    pub fn with_processes(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Replaces the process batch.
    pub fn set_processes(&mut self, processes: Vec<Process>) {
        self.processes = processes;
    }

    /// The current batch.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Validates the batch and the policy's parameters, then simulates.
    ///
    /// An empty batch is valid and produces an empty, zero-metric result.
    pub fn run(&self, policy: &dyn SchedulingPolicy) -> Result<SimulationResult, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(e) = policy.validate_config() {
            errors.push(e);
        }
        if let Err(mut e) = validate_processes(&self.processes) {
            errors.append(&mut e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(policy.run(&self.processes))
    }

    /// Runs all five policies with default parameters over the same batch.
    ///
    /// Results come back in a fixed order: FCFS, SJF, RR, SRTF, MLFQ.
    pub fn compare(&self) -> Result<Vec<SimulationResult>, Vec<ValidationError>> {
        let policies: [&dyn SchedulingPolicy; 5] = [
            &Fcfs,
            &Sjf,
            &RoundRobin::default(),
            &Srtf,
            &Mlfq::default(),
        ];
        policies.iter().map(|p| self.run(*p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IDLE;
    use crate::validation::ValidationErrorKind;

    fn batch() -> Vec<Process> {
        vec![
            Process::new(1, 0, 6).with_priority(3),
            Process::new(2, 2, 4).with_priority(1),
            Process::new(3, 4, 2).with_priority(2),
        ]
    }

    fn all_policies() -> Vec<Box<dyn SchedulingPolicy>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(RoundRobin::default()),
            Box::new(Srtf),
            Box::new(Mlfq::default()),
        ]
    }

    #[test]
    fn test_run_validates_batch() {
        let sim = Simulator::with_processes(vec![Process::new(1, 0, 0)]);
        let errors = sim.run(&Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_run_validates_config() {
        let sim = Simulator::with_processes(batch());
        let errors = sim.run(&RoundRobin::new(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidConfig));
    }

    #[test]
    fn test_compare_runs_all_five() {
        let sim = Simulator::with_processes(batch());
        let results = sim.compare().unwrap();
        assert_eq!(results.len(), 5);
        assert!(results[0].algorithm.contains("FCFS"));
        assert!(results[4].algorithm.contains("MLFQ"));
    }

    #[test]
    fn test_empty_batch_is_not_an_error() {
        let sim = Simulator::new();
        for result in sim.compare().unwrap() {
            assert!(result.processes.is_empty());
            assert_eq!(result.metrics.avg_waiting_time, 0.0);
            assert_eq!(result.metrics.cpu_utilization, 0.0);
        }
    }

    // Cross-policy invariants from the scheduling contract.

    #[test]
    fn test_per_process_identities_hold_everywhere() {
        let sim = Simulator::with_processes(batch());
        for result in sim.compare().unwrap() {
            for p in &result.processes {
                assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
                assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
                assert!(p.turnaround_time >= p.burst_time);
                assert_eq!(p.remaining_time, 0);
                assert!(p.response_time.is_some());
            }
        }
    }

    #[test]
    fn test_timeline_tiles_the_run_everywhere() {
        let batch = vec![
            Process::new(1, 3, 4),
            Process::new(2, 0, 2),
            Process::new(3, 9, 5),
        ];
        let total_burst: u64 = batch.iter().map(|p| p.burst_time).sum();
        let sim = Simulator::with_processes(batch);
        for result in sim.compare().unwrap() {
            assert!(result.timeline.is_contiguous());
            assert_eq!(result.timeline.busy_time(), total_burst);
            let max_completion = result
                .processes
                .iter()
                .map(|p| p.completion_time)
                .max()
                .unwrap();
            assert_eq!(result.timeline.span(), max_completion);
        }
    }

    #[test]
    fn test_idempotence() {
        let sim = Simulator::with_processes(batch());
        for policy in all_policies() {
            let a = sim.run(policy.as_ref()).unwrap();
            let b = sim.run(policy.as_ref()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_utilization_is_100_without_forced_idle() {
        // All arrive at 0: no policy can idle.
        let sim = Simulator::with_processes(vec![
            Process::new(1, 0, 8),
            Process::new(2, 0, 4),
            Process::new(3, 0, 2),
        ]);
        for result in sim.compare().unwrap() {
            assert!(!result.timeline.has_idle());
            assert!((result.metrics.cpu_utilization - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_utilization_below_100_with_idle() {
        let sim = Simulator::with_processes(vec![Process::new(1, 4, 2)]);
        for result in sim.compare().unwrap() {
            assert_eq!(result.timeline.slices()[0].actor_id, IDLE);
            assert!(result.metrics.cpu_utilization < 100.0);
            assert!(result.metrics.cpu_utilization > 0.0);
        }
    }
}
