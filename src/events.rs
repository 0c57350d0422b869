use crate::store::Side;
use crate::subtotal::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user intent, exactly one per button press on the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BoardEvent {
    Increment { side: Side, amount: u32 },
    Decrement { side: Side, amount: u32 },
    UseCoin { side: Side },
    ResetCoin { side: Side },
    ResetAll,
}

impl BoardEvent {
    /// Side the event targets, if it targets one (`ResetAll` hits both).
    pub fn side(&self) -> Option<Side> {
        match *self {
            BoardEvent::Increment { side, .. }
            | BoardEvent::Decrement { side, .. }
            | BoardEvent::UseCoin { side }
            | BoardEvent::ResetCoin { side } => Some(side),
            BoardEvent::ResetAll => None,
        }
    }

    /// Badge stack the event feeds, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            BoardEvent::Increment { .. } => Some(Direction::Increase),
            BoardEvent::Decrement { .. } => Some(Direction::Decrease),
            _ => None,
        }
    }
}

impl fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardEvent::Increment { side, amount } => write!(f, "{} +{}", side, amount),
            BoardEvent::Decrement { side, amount } => write!(f, "{} -{}", side, amount),
            BoardEvent::UseCoin { side } => write!(f, "{} coin", side),
            BoardEvent::ResetCoin { side } => write!(f, "{} uncoin", side),
            BoardEvent::ResetAll => write!(f, "reset"),
        }
    }
}
