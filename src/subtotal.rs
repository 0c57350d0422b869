use crate::store::Side;
use serde::Serialize;
use std::time::{Duration, Instant};
use strum_macros::{Display, EnumIter, EnumString};

/// Deltas closer together than this are summed into one burst.
pub const BURST_GAP: Duration = Duration::from_millis(1500);
/// How long a badge stays visible after the last delta.
pub const DISPLAY_FOR: Duration = Duration::from_millis(2000);

/// Which stack of buttons a subtotal badge sits over.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Direction::Increase => 0,
            Direction::Decrease => 1,
        }
    }
}

/// What the renderer needs to draw one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtotalDisplay {
    pub value: i64,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    value: i64,
    last_event: Option<Instant>,
    hide_at: Option<Instant>,
}

/// Rolling-subtotal accumulators, one per (side, direction) pair.
///
/// The original widget arms a hide timer per badge and cancels it on every
/// new delta. Here the pending hide is just a deadline: recording a delta
/// overwrites `hide_at`, which supersedes (cancels) the previous one, and
/// `current_display` compares the caller's clock against it. Nothing runs
/// in the background, so the tracker is deterministic under test.
#[derive(Debug, Clone)]
pub struct SubtotalTracker {
    cells: [[Cell; 2]; 2],
    burst_gap: Duration,
    display_for: Duration,
}

impl Default for SubtotalTracker {
    fn default() -> Self {
        Self::new(BURST_GAP, DISPLAY_FOR)
    }
}

impl SubtotalTracker {
    pub fn new(burst_gap: Duration, display_for: Duration) -> Self {
        Self {
            cells: [[Cell::default(); 2]; 2],
            burst_gap,
            display_for,
        }
    }

    /// Folds a signed delta into the (side, direction) accumulator.
    ///
    /// A delta arriving more than `burst_gap` after the previous one (or
    /// with no previous one) starts a fresh burst, replacing the value
    /// outright. The gap check is strict: a delta exactly at the gap still
    /// accumulates. Either way the badge becomes visible and its hide
    /// deadline moves to `now + display_for`.
    pub fn record_delta(&mut self, side: Side, direction: Direction, delta: i64, now: Instant) {
        let cell = &mut self.cells[side.index()][direction.index()];

        let fresh_burst = match cell.last_event {
            Some(last) => now.saturating_duration_since(last) > self.burst_gap,
            None => true,
        };
        cell.value = if fresh_burst {
            delta
        } else {
            cell.value + delta
        };

        cell.last_event = Some(now);
        cell.hide_at = Some(now + self.display_for);
    }

    /// Pure read for the renderer; `visible` flips off once `now` reaches
    /// the hide deadline.
    pub fn current_display(&self, side: Side, direction: Direction, now: Instant) -> SubtotalDisplay {
        let cell = &self.cells[side.index()][direction.index()];
        SubtotalDisplay {
            value: cell.value,
            visible: cell.hide_at.is_some_and(|hide_at| now < hide_at),
        }
    }
}
