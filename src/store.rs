use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Starting score for both players, restored by `reset_all`.
pub const START_SCORE: u32 = 5;

/// One of the two rotated halves of the board.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    /// Stable slot index for per-side arrays.
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub score: u32,
    pub coin_used: bool,
}

impl PlayerState {
    fn new(start_score: u32) -> Self {
        Self {
            score: start_score,
            coin_used: false,
        }
    }
}

/// Single source of truth for both players' scores and coin flags.
///
/// Every transition is total and synchronous: there is no error path, and
/// any reader sees the new state as soon as the call returns. The only
/// guard is the floor at zero on `decrement`. Amounts outside the UI's
/// fixed step sets ({1,5,10} / {1,2,3}) are accepted and get the same
/// clamp treatment; increments saturate instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStore {
    pub top: PlayerState,
    pub bottom: PlayerState,
    #[serde(skip)]
    start_score: u32,
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(START_SCORE)
    }
}

impl ScoreStore {
    pub fn new(start_score: u32) -> Self {
        Self {
            top: PlayerState::new(start_score),
            bottom: PlayerState::new(start_score),
            start_score,
        }
    }

    #[inline]
    pub fn player(&self, side: Side) -> &PlayerState {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    #[inline]
    fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    pub fn increment(&mut self, side: Side, amount: u32) {
        let p = self.player_mut(side);
        p.score = p.score.saturating_add(amount);
    }

    /// Floors at zero; decrementing past zero is a no-op, not an error.
    pub fn decrement(&mut self, side: Side, amount: u32) {
        let p = self.player_mut(side);
        p.score = p.score.saturating_sub(amount);
    }

    /// Idempotent: calling again while already used changes nothing.
    pub fn use_coin(&mut self, side: Side) {
        self.player_mut(side).coin_used = true;
    }

    pub fn reset_coin(&mut self, side: Side) {
        self.player_mut(side).coin_used = false;
    }

    /// Restores both players to the initial state (start score, coin unused).
    pub fn reset_all(&mut self) {
        for side in Side::iter() {
            *self.player_mut(side) = PlayerState::new(self.start_score);
        }
    }

    /// Owned copy of the current state, for renderers and reports.
    pub fn snapshot(&self) -> ScoreStore {
        self.clone()
    }
}
