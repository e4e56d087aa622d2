//! Engine state: phase, turn bookkeeping, outcome, and snapshots.
//!
//! ## GameState
//!
//! Every mutable piece of a match lives in one [`GameState`] value owned by
//! the engine: board, phase, turn order, selection, strike flag, placement
//! history, score, outcome. There is no ambient state anywhere.
//!
//! ## Snapshot
//!
//! The render-state handed back to the UI after every call. The UI redraws
//! from it and nothing else.

use serde::{Deserialize, Serialize};

use super::action::Placement;
use super::board::{Board, Pos};
use super::config::GameConfig;
use super::player::{Player, PlayerPair};

/// Game phase. Transitions Placement → Movement exactly once per game,
/// never backward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Opening: players alternate placing keys.
    Placement,
    /// Main game: players slide keys to form lines and strike.
    Movement,
}

/// How a finished game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The loser was left with too few keys to ever form a line.
    Elimination,
    /// The loser conceded.
    Concession,
}

/// Terminal result of a finished game. Latches until reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub winner: Player,
    pub reason: WinReason,
}

/// Complete state of one match.
///
/// Fields are public so positions can be constructed directly (tests,
/// analysis); during play only the engine mutates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    /// Whose turn it is.
    pub current: Player,
    /// Who moved first this game; alternates between games.
    pub lead: Player,
    /// Selected key awaiting a destination (movement phase only).
    pub selected: Option<Pos>,
    /// The current player owes a strike before the turn can pass.
    pub strike_ready: bool,
    /// Keys placed so far, per player (placement phase bookkeeping).
    pub keys_placed: PlayerPair<u8>,
    /// Games won, per player. Survives resets.
    pub score: PlayerPair<u32>,
    /// Placement records, append-only, for undo. Cleared on reset.
    pub history: Vec<Placement>,
    /// Set once the game is decided; `None` while play continues.
    pub outcome: Option<GameOver>,
}

impl GameState {
    /// Fresh state for the first game: empty board, placement phase,
    /// Player 1 leads.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            phase: Phase::Placement,
            current: Player::One,
            lead: Player::One,
            selected: None,
            strike_ready: false,
            keys_placed: PlayerPair::with_value(0),
            score: PlayerPair::with_value(0),
            history: Vec::with_capacity(2 * usize::from(config.keys_per_player)),
            outcome: None,
        }
    }

    /// Check if the game has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Build the render-state for the UI.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            phase: self.phase,
            current: self.current,
            lead: self.lead,
            selected: self.selected,
            strike_ready: self.strike_ready,
            game_over: self.outcome.is_some(),
            winner: self.outcome.map(|o| o.winner),
            keys_placed: self.keys_placed,
            score: self.score,
        }
    }
}

/// Observable state for the rendering layer, produced by every engine call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub phase: Phase,
    pub current: Player,
    pub lead: Player,
    pub selected: Option<Pos>,
    pub strike_ready: bool,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub keys_placed: PlayerPair<u8>,
    pub score: PlayerPair<u32>,
}
