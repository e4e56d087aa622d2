//! The Dariba rule engine.
//!
//! One synchronous state machine owning all game state. The UI layer turns
//! player intents into calls here; every call either mutates state and
//! returns, or rejects and leaves state untouched. Rejections are silent
//! no-ops except for the three advisory cases in [`Notice`].
//!
//! ## Phases
//!
//! - **Placement**: players alternate placing keys; a placement may not
//!   complete a line. Placements can be undone in LIFO order.
//! - **Movement**: players slide keys to orthogonally adjacent empty cells.
//!   A move completing a line of exactly the configured length earns a
//!   strike: the mover removes one opponent key before the turn passes.
//!   Longer lines are illegal and the move is rolled back in full.
//!
//! A player reduced below the line length loses; either player may concede
//! during movement. The loser of neither kind can tie: only one count
//! changes per strike.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::action::{Action, Notice, Placement};
use crate::core::board::{Board, Cell, Pos};
use crate::core::config::GameConfig;
use crate::core::player::{Player, PlayerPair};
use crate::core::state::{GameOver, GameState, Phase, Snapshot, WinReason};

use super::{lines, victory};

/// Result of a single engine call: the full render-state plus an optional
/// advisory notice for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub snapshot: Snapshot,
    pub notice: Option<Notice>,
}

/// The rule engine. Owns board, phase, turn order, placement history,
/// score, and outcome; all mutation goes through its operations.
///
/// ## Example
///
/// ```
/// use dariba::{Action, Engine, Phase, Player, Pos};
///
/// let mut engine = Engine::new();
///
/// let reply = engine.handle(Action::Place(Pos::new(2, 3)));
/// assert!(reply.notice.is_none());
/// assert_eq!(reply.snapshot.keys_placed[Player::One], 1);
/// assert_eq!(reply.snapshot.current, Player::Two);
/// assert_eq!(reply.snapshot.phase, Phase::Placement);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    state: GameState,
}

impl Engine {
    /// Engine with the official Dariba rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Engine with custom rule parameters.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        config.validate();
        Self {
            state: GameState::new(&config),
            config,
        }
    }

    /// Resume from an arbitrary position. Intended for analysis and tests;
    /// the state is trusted as-is.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        config.validate();
        Self { config, state }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Render-state for the UI.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Dispatch one player intent and return the state to redraw from.
    pub fn handle(&mut self, action: Action) -> Response {
        let notice = match action {
            Action::Place(pos) => self.place_key(pos),
            Action::SelectOrMove(pos) => self.select_or_move(pos),
            Action::Strike(pos) => self.strike(pos),
            Action::Undo => self.undo(),
            Action::Concede => self.concede(),
            Action::Reset => {
                self.reset();
                None
            }
        };
        Response {
            snapshot: self.snapshot(),
            notice,
        }
    }

    // === Placement phase ===

    /// Check whether `place_key(pos)` would currently succeed.
    #[must_use]
    pub fn can_place(&self, pos: Pos) -> bool {
        let s = &self.state;
        !s.is_over()
            && s.phase == Phase::Placement
            && s.board.contains(pos)
            && s.board.is_empty(pos)
            && s.keys_placed[s.current] < self.config.keys_per_player
            && lines::max_run_through(&s.board, pos, s.current) < self.config.line_length
    }

    /// Place a key for the current player.
    ///
    /// Rejected silently when the cell is occupied or off the board, the
    /// player is out of keys, the game is over, it is not the placement
    /// phase, or the placement would complete a line.
    pub fn place_key(&mut self, pos: Pos) -> Option<Notice> {
        if !self.can_place(pos) {
            return None;
        }
        let player = self.state.current;
        self.state.board.set(pos, Cell::Key(player));
        self.state.keys_placed[player] += 1;
        self.state.history.push(Placement { pos, player });

        let limit = self.config.keys_per_player;
        if Player::both().all(|p| self.state.keys_placed[p] == limit) {
            self.state.phase = Phase::Movement;
            self.state.current = self.state.lead;
            log::info!("placement complete, movement begins with {}", self.state.current);
        } else {
            self.state.current = player.opponent();
        }
        None
    }

    /// Take back the most recent placement: the key comes off the board and
    /// the turn returns to the player who placed it.
    ///
    /// Advises [`Notice::UndoUnavailable`] during the movement phase; an
    /// empty history during placement is a silent no-op.
    pub fn undo(&mut self) -> Option<Notice> {
        if self.state.phase == Phase::Movement {
            return Some(Notice::UndoUnavailable);
        }
        let last = self.state.history.pop()?;
        self.state.board.set(last.pos, Cell::Empty);
        self.state.keys_placed[last.player] -= 1;
        self.state.current = last.player;
        None
    }

    // === Movement phase ===

    /// Single movement-phase entry point: selects an own key when nothing
    /// is selected, otherwise treats `pos` as the destination.
    ///
    /// A destination that is not an adjacent empty cell deselects silently.
    /// While a strike is owed, nothing may be selected.
    pub fn select_or_move(&mut self, pos: Pos) -> Option<Notice> {
        if self.state.is_over()
            || self.state.phase != Phase::Movement
            || !self.state.board.contains(pos)
        {
            return None;
        }
        if self.state.strike_ready {
            return Some(Notice::MustStrikeFirst);
        }
        match self.state.selected.take() {
            None => {
                if self.state.board.get(pos) == Cell::Key(self.state.current) {
                    self.state.selected = Some(pos);
                }
                None
            }
            // Selection clears on every completed, reverted, or abandoned
            // destination; `take` above already did it.
            Some(from) => {
                if from.is_adjacent(pos) && self.state.board.is_empty(pos) {
                    self.move_key(from, pos)
                } else {
                    None
                }
            }
        }
    }

    /// Adjacent empty cells a key of the current player at `from` may try
    /// to move to. Empty when `from` holds no current-player key or it is
    /// not the movement phase.
    #[must_use]
    pub fn legal_destinations(&self, from: Pos) -> SmallVec<[Pos; 4]> {
        let s = &self.state;
        if s.is_over()
            || s.phase != Phase::Movement
            || !s.board.contains(from)
            || s.board.get(from) != Cell::Key(s.current)
        {
            return SmallVec::new();
        }
        s.board
            .neighbors(from)
            .into_iter()
            .filter(|&n| s.board.is_empty(n))
            .collect()
    }

    /// Apply a move. The move lands, is judged, and is rolled back in full
    /// if it leaves an over-long line; the board is exactly as before when
    /// the rejection returns.
    fn move_key(&mut self, from: Pos, to: Pos) -> Option<Notice> {
        let player = self.state.current;
        self.state.board.set(from, Cell::Empty);
        self.state.board.set(to, Cell::Key(player));

        let run = lines::max_run_through(&self.state.board, to, player);
        if run > self.config.line_length {
            self.state.board.set(to, Cell::Empty);
            self.state.board.set(from, Cell::Key(player));
            return Some(Notice::LineTooLong);
        }
        if run == self.config.line_length {
            self.state.strike_ready = true;
            log::debug!("{} lines up at {} and earns a strike", player, to);
        } else {
            self.state.current = player.opponent();
        }
        None
    }

    /// Remove one opponent key after forming a line. Only legal while a
    /// strike is owed; any cell not holding an opponent key is a silent
    /// no-op and the caller retries.
    pub fn strike(&mut self, pos: Pos) -> Option<Notice> {
        if self.state.is_over()
            || self.state.phase != Phase::Movement
            || !self.state.strike_ready
            || !self.state.board.contains(pos)
        {
            return None;
        }
        let target = self.state.current.opponent();
        if self.state.board.get(pos) != Cell::Key(target) {
            return None;
        }
        self.state.board.set(pos, Cell::Empty);
        self.state.strike_ready = false;
        log::debug!("{} strikes the key at {}", self.state.current, pos);

        if let Some(winner) =
            victory::winner_by_elimination(&self.state.board, self.config.line_length)
        {
            self.finish(winner, WinReason::Elimination);
        } else {
            self.state.current = target;
        }
        None
    }

    // === Game end ===

    /// Forfeit: the opponent of the current player wins immediately.
    /// Only available during the movement phase of a live game.
    pub fn concede(&mut self) -> Option<Notice> {
        if self.state.is_over() || self.state.phase != Phase::Movement {
            return None;
        }
        let winner = self.state.current.opponent();
        self.finish(winner, WinReason::Concession);
        None
    }

    fn finish(&mut self, winner: Player, reason: WinReason) {
        self.state.outcome = Some(GameOver { winner, reason });
        self.state.score[winner] += 1;
        log::info!("{} wins by {:?}", winner, reason);
    }

    /// Clear the table for the next game. The lead alternates and the
    /// scores carry over; everything else reinitializes.
    pub fn reset(&mut self) {
        let lead = self.state.lead.opponent();
        let score = self.state.score;
        self.state = GameState::new(&self.config);
        self.state.lead = lead;
        self.state.current = lead;
        self.state.score = score;
        log::info!("new game, {} leads", lead);
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current
    }

    #[must_use]
    pub fn lead_player(&self) -> Player {
        self.state.lead
    }

    #[must_use]
    pub fn selected(&self) -> Option<Pos> {
        self.state.selected
    }

    #[must_use]
    pub fn strike_ready(&self) -> bool {
        self.state.strike_ready
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state.outcome.map(|o| o.winner)
    }

    #[must_use]
    pub fn keys_placed(&self) -> PlayerPair<u8> {
        self.state.keys_placed
    }

    #[must_use]
    pub fn score(&self) -> PlayerPair<u32> {
        self.state.score
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
