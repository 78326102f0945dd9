//! Multi-Level Feedback Queue.
//!
//! `num_queues` FIFO levels, level 0 highest. New arrivals always enter
//! level 0; a process that exhausts its quantum demotes one level, and
//! work at the bottom level loops there with the largest quantum. The
//! level-L quantum is `base_quantum * 2^L`. No aging back to higher
//! levels is modeled.
//!
//! # Reference
//! Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 8

use std::collections::VecDeque;

use crate::models::{Process, SimulationResult, Timeline, IDLE};
use crate::policies::{admission_order, SchedulingPolicy};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Multi-Level Feedback Queue scheduling.
#[derive(Debug, Clone, Copy)]
pub struct Mlfq {
    /// Number of priority levels. Must be at least 1.
    pub num_queues: usize,
    /// Quantum of the highest-priority level. Must be at least 1.
    pub base_quantum: u64,
}

impl Mlfq {
    /// Creates an MLFQ policy with the given shape.
    pub fn new(num_queues: usize, base_quantum: u64) -> Self {
        Self {
            num_queues,
            base_quantum,
        }
    }

    /// Quantum allotted at `level`: doubles per level down, saturating
    /// so deep hierarchies cannot wrap to a zero quantum.
    fn quantum_at(&self, level: usize) -> u64 {
        self.base_quantum.saturating_mul(1u64 << level.min(63))
    }
}

impl Default for Mlfq {
    /// Three levels with a base quantum of 2: slices of 2, 4, 8.
    fn default() -> Self {
        Self {
            num_queues: 3,
            base_quantum: 2,
        }
    }
}

impl SchedulingPolicy for Mlfq {
    fn name(&self) -> String {
        format!(
            "Multi-Level Feedback Queue (MLFQ) - Queues: {}, Base Quantum: {}",
            self.num_queues, self.base_quantum
        )
    }

    fn validate_config(&self) -> Result<(), ValidationError> {
        if self.num_queues == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidConfig,
                "MLFQ needs at least one queue level",
            ));
        }
        if self.base_quantum == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidConfig,
                "MLFQ base quantum must be at least 1",
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
        let mut levels: Vec<VecDeque<usize>> = vec![VecDeque::new(); self.num_queues];

        // Arrivals always enter the highest-priority level.
        let admit = |clock: u64,
                     next_admit: &mut usize,
                     levels: &mut [VecDeque<usize>],
                     processes: &mut [Process]| {
            while *next_admit < order.len()
                && processes[order[*next_admit]].arrival_time <= clock
            {
                let i = order[*next_admit];
                levels[0].push_back(i);
                processes[i].has_started = true;
                *next_admit += 1;
            }
        };

        while completed < processes.len() {
            admit(clock, &mut next_admit, &mut levels, &mut processes);

            let Some(level) = levels.iter().position(|q| !q.is_empty()) else {
                let arrival = processes[order[next_admit]].arrival_time;
                timeline.record(IDLE, clock, arrival);
                clock = arrival;
                continue;
            };

            let Some(i) = levels[level].pop_front() else {
                continue;
            };

            processes[i].mark_dispatched(clock);
            let slice = self.quantum_at(level).min(processes[i].remaining_time);
            timeline.record(processes[i].id, clock, clock + slice);
            clock += slice;
            processes[i].remaining_time -= slice;

            admit(clock, &mut next_admit, &mut levels, &mut processes);

            if processes[i].remaining_time == 0 {
                processes[i].complete_at(clock);
                completed += 1;
            } else {
                // Demote; the bottom level keeps looping.
                let next = (level + 1).min(self.num_queues - 1);
                levels[next].push_back(i);
            }
        }

        SimulationResult::new(self.name(), processes, timeline)
    }
}
