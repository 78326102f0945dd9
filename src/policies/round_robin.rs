//! Round Robin (preemptive, fixed quantum).
//!
//! A FIFO ready queue where each dispatch runs for at most one quantum.
//! Arrivals during a slice join the queue before the preempted process
//! re-enqueues, so a fresh arrival is always served ahead of work that
//! just used the CPU. That ordering is part of the numeric contract, not
//! a free choice.

use std::collections::VecDeque;

use crate::models::{Process, SimulationResult, Timeline, IDLE};
use crate::policies::{admission_order, SchedulingPolicy};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Round Robin scheduling with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Maximum ticks a process runs per dispatch. Must be at least 1.
    pub time_quantum: u64,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given quantum.
    pub fn new(time_quantum: u64) -> Self {
        Self { time_quantum }
    }
}

impl Default for RoundRobin {
    /// The conventional default quantum of 2 ticks.
    fn default() -> Self {
        Self { time_quantum: 2 }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> String {
        format!("Round Robin (RR) - Quantum: {}", self.time_quantum)
    }

    fn validate_config(&self) -> Result<(), ValidationError> {
        if self.time_quantum == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidConfig,
                "Round Robin time quantum must be at least 1",
            ));
        }
        Ok(())
    }

    fn run(&self, input: &[Process]) -> SimulationResult {
        let mut processes: Vec<Process> = input.to_vec();
        let order = admission_order(&processes);

        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;
        let mut completed = 0;
        let mut next_admit = 0;
        let mut queue: VecDeque<usize> = VecDeque::new();

        // Moves every process arrived by `clock` to the queue tail, in
        // (arrival, id) order.
        let admit = |clock: u64,
                     next_admit: &mut usize,
                     queue: &mut VecDeque<usize>,
                     processes: &mut [Process]| {
            while *next_admit < order.len()
                && processes[order[*next_admit]].arrival_time <= clock
            {
                let i = order[*next_admit];
                queue.push_back(i);
                processes[i].has_started = true;
                *next_admit += 1;
            }
        };

        while completed < processes.len() {
            admit(clock, &mut next_admit, &mut queue, &mut processes);

            let Some(i) = queue.pop_front() else {
                let arrival = processes[order[next_admit]].arrival_time;
                timeline.record(IDLE, clock, arrival);
                clock = arrival;
                continue;
            };

            processes[i].mark_dispatched(clock);
            let slice = self.time_quantum.min(processes[i].remaining_time);
            timeline.record(processes[i].id, clock, clock + slice);
            clock += slice;
            processes[i].remaining_time -= slice;

            // Mid-slice arrivals go ahead of the process that just ran.
            admit(clock, &mut next_admit, &mut queue, &mut processes);

            if processes[i].remaining_time == 0 {
                processes[i].complete_at(clock);
                completed += 1;
            } else {
                queue.push_back(i);
            }
        }

        SimulationResult::new(self.name(), processes, timeline)
    }
}
