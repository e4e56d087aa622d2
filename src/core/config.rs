//! Game configuration.
//!
//! The official Dariba setup is a 6×6 board, 12 keys per player, and lines
//! of three. The engine reads all of it from [`GameConfig`] rather than
//! hardcoding numbers; the defaults are the official rules.

use serde::{Deserialize, Serialize};

/// Rule parameters for one match.
///
/// ## Example
///
/// ```
/// use dariba::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.board_size, 6);
/// assert_eq!(config.keys_per_player, 12);
/// assert_eq!(config.line_length, 3);
///
/// let small = GameConfig::default().with_board_size(4).with_keys_per_player(5);
/// assert_eq!(small.cell_count(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width and height.
    pub board_size: u8,

    /// Keys each player places during the placement phase.
    pub keys_per_player: u8,

    /// Run length that earns a strike. Placements may not reach it; moves
    /// may not exceed it.
    pub line_length: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            keys_per_player: 12,
            line_length: 3,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        assert!(size >= 3, "Board must be at least 3x3");
        self.board_size = size;
        self
    }

    /// Set the number of keys each player places.
    #[must_use]
    pub fn with_keys_per_player(mut self, keys: u8) -> Self {
        assert!(keys >= 1, "Each player needs at least one key");
        self.keys_per_player = keys;
        self
    }

    /// Set the line length.
    #[must_use]
    pub fn with_line_length(mut self, length: u8) -> Self {
        assert!(length >= 2, "Lines shorter than 2 are meaningless");
        self.line_length = length;
        self
    }

    /// Cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.board_size as usize * self.board_size as usize
    }

    /// Panic if the parameters cannot produce a playable game.
    pub(crate) fn validate(&self) {
        assert!(
            2 * usize::from(self.keys_per_player) <= self.cell_count(),
            "Both players' keys must fit on the board"
        );
        assert!(
            self.line_length <= self.board_size,
            "Lines longer than the board can never form"
        );
    }
}
