//! Shortest Remaining Time First (preemptive SJF).
//!
//! The running process keeps the CPU only while no arrived process has
//! strictly less remaining work. Execution advances in slices bounded by
//! the next arrival, since only an arrival can change the decision; the
//! preemption check re-runs at each such boundary.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Process, SimulationResult, Timeline, IDLE};
use crate::policies::{admission_order, SchedulingPolicy};

/// Shortest Remaining Time First scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> String {
        "Shortest Remaining Time First (SRTF)".to_string()
    }

    fn run(&self, input: &[Process]) -> SimulationResult {
        let mut processes: Vec<Process> = input.to_vec();
        let order = admission_order(&processes);

        let mut timeline = Timeline::new();
        let mut clock: u64 = 0;
        let mut completed = 0;
        let mut next_admit = 0;
        // Min-pool keyed (remaining, id). Pooled processes never run, so
        // their keys stay valid while queued.
        let mut pool: BinaryHeap<Reverse<(u64, u32, usize)>> = BinaryHeap::new();
        let mut running: Option<usize> = None;

        while completed < processes.len() {
            while next_admit < order.len()
                && processes[order[next_admit]].arrival_time <= clock
            {
                let i = order[next_admit];
                pool.push(Reverse((processes[i].remaining_time, processes[i].id, i)));
                processes[i].has_started = true;
                next_admit += 1;
            }

            // Preempt when an arrival has strictly less remaining work.
            if let Some(cur) = running {
                if let Some(&Reverse((shortest, _, _))) = pool.peek() {
                    if shortest < processes[cur].remaining_time {
                        pool.push(Reverse((
                            processes[cur].remaining_time,
                            processes[cur].id,
                            cur,
                        )));
                        running = None;
                    }
                }
            }

            let cur = match running {
                Some(i) => i,
                None => {
                    let Some(Reverse((_, _, i))) = pool.pop() else {
                        let arrival = processes[order[next_admit]].arrival_time;
                        timeline.record(IDLE, clock, arrival);
                        clock = arrival;
                        continue;
                    };
                    processes[i].mark_dispatched(clock);
                    running = Some(i);
                    i
                }
            };

            // Run until the next arrival could change the decision, or
            // to completion when no arrival is pending.
            let slice = match order.get(next_admit) {
                Some(&j) => processes[cur]
                    .remaining_time
                    .min(processes[j].arrival_time - clock),
                None => processes[cur].remaining_time,
            };

            timeline.record(processes[cur].id, clock, clock + slice);
            clock += slice;
            processes[cur].remaining_time -= slice;

            if processes[cur].remaining_time == 0 {
                processes[cur].complete_at(clock);
                completed += 1;
                running = None;
            }
        }

        SimulationResult::new(self.name(), processes, timeline)
    }
}
