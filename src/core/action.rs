//! UI inputs, placement history records, and advisory notices.
//!
//! The action vocabulary of Dariba is closed: six intents, disambiguated by
//! the engine's current phase and selection state. The UI layer turns clicks
//! and buttons into [`Action`] values and hands them to the engine.

use serde::{Deserialize, Serialize};

use super::board::Pos;
use super::player::Player;

/// A player intent delivered by the UI layer.
///
/// All positional actions act as the current player; whose turn it is lives
/// in the engine, not in the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a key (placement phase).
    Place(Pos),
    /// Select an own key, or move the selected key (movement phase).
    SelectOrMove(Pos),
    /// Remove an opponent key after forming a line.
    Strike(Pos),
    /// Take back the most recent placement.
    Undo,
    /// Forfeit the game.
    Concede,
    /// Clear the table for the next game.
    Reset,
}

/// A single placement, recorded so it can be undone.
///
/// Only placements are recorded; movement-phase moves are permanent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: Pos,
    pub player: Player,
}

/// Advisory surfaced to the caller when an operation is rejected with
/// feedback. Silent rejections (occupied cell, out-of-bounds, wrong phase)
/// return no notice at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The attempted move would leave too many keys in one line.
    LineTooLong,
    /// A strike is owed; nothing else is accepted until it lands.
    MustStrikeFirst,
    /// Undo only covers the placement phase.
    UndoUnavailable,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::LineTooLong => write!(f, "Invalid move: too many keys in a line."),
            Notice::MustStrikeFirst => {
                write!(f, "You must strike before making another move.")
            }
            Notice::UndoUnavailable => {
                write!(f, "Undo is only available during key placement.")
            }
        }
    }
}
