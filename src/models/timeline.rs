//! Execution timeline (Gantt data) model.
//!
//! A timeline records, tick by tick, what occupied the CPU during a run:
//! an ordered, contiguous sequence of slices with no gaps and no overlaps.
//! Idle slices use the sentinel actor id [`IDLE`].

use serde::{Deserialize, Serialize};

/// Sentinel actor id for idle CPU slices. Distinct from every valid
/// process id, which must be nonzero.
pub const IDLE: u32 = 0;

/// One half-open interval `[start, end)` of CPU occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process id that held the CPU, or [`IDLE`].
    pub actor_id: u32,
    /// Start tick (inclusive).
    pub start: u64,
    /// End tick (exclusive).
    pub end: u64,
}

impl TimeSlice {
    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Whether this slice represents idle CPU.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.actor_id == IDLE
    }
}

/// Ordered, contiguous sequence of [`TimeSlice`]s covering a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice for `actor_id` over `[start, end)`.
    ///
    /// Zero-length slices are dropped. An appended slice that continues
    /// the previous slice's actor is merged into it, so back-to-back
    /// quanta of the same process render as one Gantt bar.
    pub fn record(&mut self, actor_id: u32, start: u64, end: u64) {
        if start == end {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.actor_id == actor_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(TimeSlice {
            actor_id,
            start,
            end,
        });
    }

    /// The recorded slices, in order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End tick of the final slice, or 0 for an empty timeline.
    pub fn span(&self) -> u64 {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Total ticks spent executing processes (non-idle).
    pub fn busy_time(&self) -> u64 {
        self.slices
            .iter()
            .filter(|s| !s.is_idle())
            .map(TimeSlice::duration)
            .sum()
    }

    /// Total ticks spent idle.
    pub fn idle_time(&self) -> u64 {
        self.slices
            .iter()
            .filter(|s| s.is_idle())
            .map(TimeSlice::duration)
            .sum()
    }

    /// Whether any idle slice was recorded.
    pub fn has_idle(&self) -> bool {
        self.slices.iter().any(TimeSlice::is_idle)
    }

    /// Whether the slices start at 0 and tile the span with no gaps
    /// or overlaps.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 0;
        for s in &self.slices {
            if s.start != expected || s.end <= s.start {
                return false;
            }
            expected = s.end;
        }
        true
    }
}
