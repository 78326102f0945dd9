//! CPU scheduling simulator.
//!
//! Simulates five classic scheduling policies over a fixed batch of
//! synthetic processes on a single integer clock and reports comparative
//! performance metrics. Every engine clones its input and runs a
//! synchronous, terminating loop; runs never share mutable state, so a
//! host may execute them concurrently without synchronization.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeline`, `TimeSlice`,
//!   `SimulationResult`
//! - **`metrics`**: Summary metrics computed from a finished batch
//! - **`policies`**: The five engines behind the `SchedulingPolicy` trait:
//!   `Fcfs`, `Sjf`, `RoundRobin`, `Srtf`, `Mlfq`
//! - **`sim`**: `Simulator` front door — boundary validation, single
//!   runs, five-way comparison
//! - **`validation`**: Input integrity checks (duplicate ids, zero
//!   bursts, parameter ranges)
//! - **`generator`**: Randomized workloads behind an injectable RNG
//! - **`report`**: Pure text rendering (process table, Gantt, comparison
//!   table, CSV)
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::policies::RoundRobin;
//! use cpu_sched::sim::Simulator;
//!
//! let sim = Simulator::with_processes(vec![
//!     Process::new(1, 0, 6).with_priority(3),
//!     Process::new(2, 2, 4).with_priority(1),
//! ]);
//! let result = sim.run(&RoundRobin::new(2)).unwrap();
//! assert!(result.timeline.is_contiguous());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

pub mod generator;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod report;
pub mod sim;
pub mod validation;
