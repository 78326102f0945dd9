//! Simulation domain models.
//!
//! Core data types shared by every scheduling engine: the [`Process`]
//! record, the execution [`Timeline`], and the per-run
//! [`SimulationResult`] aggregate.

mod process;
mod result;
mod timeline;

pub use process::Process;
pub use result::SimulationResult;
pub use timeline::{TimeSlice, Timeline, IDLE};
