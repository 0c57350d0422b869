// ===== duelboard/src/board.rs =====
use crate::config::BoardConfig;
use crate::events::BoardEvent;
use crate::store::{ScoreStore, Side};
use crate::subtotal::{Direction, SubtotalDisplay, SubtotalTracker};
use std::time::{Duration, Instant};
use tracing::debug;

/// The whole widget state: score store plus the four subtotal accumulators.
///
/// This is the object the rendering layer holds a handle to. It dispatches
/// each intent to the store and mirrors score deltas into the tracker, then
/// the renderer reads `snapshot()` and `display()` back out. Everything is
/// single-threaded and `&mut`; there is nothing to lock.
pub struct Scoreboard {
    store: ScoreStore,
    subtotals: SubtotalTracker,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl Scoreboard {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            store: ScoreStore::new(config.start_score),
            subtotals: SubtotalTracker::new(
                Duration::from_millis(config.burst_gap_ms),
                Duration::from_millis(config.subtotal_visible_ms),
            ),
        }
    }

    /// Applies one intent at time `now`.
    ///
    /// Score deltas feed the badge with the nominal button amount, even
    /// when the store clamps at zero; that matches the widget, where the
    /// badge tracks what was pressed rather than what was applied.
    /// `ResetAll` restores the store only, and live badges run out their
    /// own hide deadlines.
    pub fn apply(&mut self, event: BoardEvent, now: Instant) {
        debug!(?event, "applying board event");
        match event {
            BoardEvent::Increment { side, amount } => {
                self.store.increment(side, amount);
                self.subtotals
                    .record_delta(side, Direction::Increase, i64::from(amount), now);
            }
            BoardEvent::Decrement { side, amount } => {
                self.store.decrement(side, amount);
                self.subtotals
                    .record_delta(side, Direction::Decrease, -i64::from(amount), now);
            }
            BoardEvent::UseCoin { side } => self.store.use_coin(side),
            BoardEvent::ResetCoin { side } => self.store.reset_coin(side),
            BoardEvent::ResetAll => self.store.reset_all(),
        }
    }

    /// Direct badge feed for renderers that synthesize their own deltas.
    /// `apply` already does this for score events.
    pub fn record_delta(&mut self, side: Side, direction: Direction, delta: i64, now: Instant) {
        self.subtotals.record_delta(side, direction, delta, now);
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    pub fn snapshot(&self) -> ScoreStore {
        self.store.snapshot()
    }

    pub fn display(&self, side: Side, direction: Direction, now: Instant) -> SubtotalDisplay {
        self.subtotals.current_display(side, direction, now)
    }
}
