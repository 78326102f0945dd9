//! First-Come, First-Served.
//!
//! Non-preemptive: processes run start to finish in arrival order, with
//! id breaking arrival ties. The simplest possible policy and the
//! baseline the others are compared against.

use crate::models::{Process, SimulationResult, Timeline, IDLE};
use crate::policies::SchedulingPolicy;

/// First-Come, First-Served scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> String {
        "First-Come, First-Served (FCFS)".to_string()
    }

    fn run(&self, input: &[Process]) -> SimulationResult {
        let mut processes: Vec<Process> = input.to_vec();
        processes.sort_by_key(|p| (p.arrival_time, p.id));

        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;

        for p in &mut processes {
            if clock < p.arrival_time {
                timeline.record(IDLE, clock, p.arrival_time);
                clock = p.arrival_time;
            }

            p.has_started = true;
            p.mark_dispatched(clock);

            timeline.record(p.id, clock, clock + p.burst_time);
            clock += p.burst_time;
            p.remaining_time = 0;
            p.complete_at(clock);
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
        let result = Fcfs.run(&batch());
        // Waiting: 0, 4, 4. Turnaround: 6, 8, 6.
        assert!((result.metrics.avg_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((result.metrics.avg_turnaround_time - 23.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_runs_whole_bursts_in_arrival_order() {
        let result = Fcfs.run(&batch());
        let ids: Vec<u32> = result.timeline.slices().iter().map(|s| s.actor_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(result.process(3).unwrap().completion_time, 12);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let result = Fcfs.run(&[Process::new(1, 5, 2)]);
        assert!(result.timeline.has_idle());
        assert_eq!(result.timeline.slices()[0].end, 5);
        assert_eq!(result.process(1).unwrap().response_time, Some(0));
    }

    #[test]
    fn test_arrival_tie_breaks_by_id() {
        // Input deliberately out of id order.
        let result = Fcfs.run(&[Process::new(2, 0, 3), Process::new(1, 0, 3)]);
        assert_eq!(result.timeline.slices()[0].actor_id, 1);
    }

    #[test]
    fn test_empty_input() {
        let result = Fcfs.run(&[]);
        assert!(result.processes.is_empty());
        assert!(result.timeline.is_empty());
        assert_eq!(result.metrics.avg_waiting_time, 0.0);
    }

    #[test]
    fn test_caller_input_untouched() {
        let input = batch();
        let _ = Fcfs.run(&input);
        assert!(input.iter().all(|p| !p.has_started && p.remaining_time == p.burst_time));
    }
}
