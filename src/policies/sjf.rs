//! Shortest Job First (non-preemptive).
//!
//! At each decision point the arrived process with the smallest burst
//! time runs to completion. A shorter job arriving mid-burst does not
//! interrupt; it waits for the next decision point.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Process, SimulationResult, Timeline, IDLE};
use crate::policies::{admission_order, SchedulingPolicy};

/// Shortest Job First scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> String {
        "Shortest Job First (SJF)".to_string()
    }

    fn run(&self, input: &[Process]) -> SimulationResult {
        let mut processes: Vec<Process> = input.to_vec();
        let order = admission_order(&processes);

        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;
        let mut completed = 0;
        let mut next_admit = 0;
        // Min-pool keyed (burst, id): smallest job first, id breaks ties.
        let mut pool: BinaryHeap<Reverse<(u64, u32, usize)>> = BinaryHeap::new();

        while completed < processes.len() {
            while next_admit < order.len()
                && processes[order[next_admit]].arrival_time <= clock
            {
                let i = order[next_admit];
                pool.push(Reverse((processes[i].burst_time, processes[i].id, i)));
                processes[i].has_started = true;
                next_admit += 1;
            }

            let Some(Reverse((_, _, i))) = pool.pop() else {
                // Nothing ready: jump to the next arrival.
                let arrival = processes[order[next_admit]].arrival_time;
                timeline.record(IDLE, clock, arrival);
                clock = arrival;
                continue;
            };

            processes[i].mark_dispatched(clock);
            let burst = processes[i].burst_time;
            timeline.record(processes[i].id, clock, clock + burst);
            clock += burst;
            processes[i].remaining_time = 0;
            processes[i].complete_at(clock);
            completed += 1;
        }

        SimulationResult::new(self.name(), processes, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<Process> {
        vec![
            Process::new(1, 0, 6).with_priority(3),
            Process::new(2, 2, 4).with_priority(1),
            Process::new(3, 4, 2).with_priority(2),
        ]
    }

    #[test]
    fn test_known_averages() {
        let result = Sjf.run(&batch());
        // P1 runs first (only arrival at t=0), then P3 (burst 2) jumps
        // ahead of P2 (burst 4). Waiting: 0, 6, 2. Turnaround: 6, 10, 4.
        assert!((result.metrics.avg_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((result.metrics.avg_turnaround_time - 20.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_shorter_job_jumps_queue_at_decision_point() {
        let result = Sjf.run(&batch());
        let ids: Vec<u32> = result.timeline.slices().iter().map(|s| s.actor_id).collect();
        // P1 [0,6), P3 [6,8), P2 [8,12).
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(result.process(2).unwrap().completion_time, 12);
        assert_eq!(result.process(3).unwrap().completion_time, 8);
    }

    #[test]
    fn test_no_preemption_mid_burst() {
        // P2 is shorter and arrives while P1 runs, but P1 still finishes.
        let result = Sjf.run(&[Process::new(1, 0, 10), Process::new(2, 1, 1)]);
        assert_eq!(result.process(1).unwrap().completion_time, 10);
        assert_eq!(result.process(2).unwrap().completion_time, 11);
    }

    #[test]
    fn test_burst_tie_breaks_by_id() {
        let result = Sjf.run(&[Process::new(2, 0, 3), Process::new(1, 0, 3)]);
        assert_eq!(result.timeline.slices()[0].actor_id, 1);
    }

    #[test]
    fn test_idle_then_pick_shortest() {
        let result = Sjf.run(&[Process::new(1, 5, 4), Process::new(2, 5, 2)]);
        let ids: Vec<u32> = result.timeline.slices().iter().map(|s| s.actor_id).collect();
        assert_eq!(ids, vec![IDLE, 2, 1]);
    }

    #[test]
    fn test_empty_input() {
        let result = Sjf.run(&[]);
        assert!(result.processes.is_empty());
        assert_eq!(result.metrics.throughput, 0.0);
    }
}
