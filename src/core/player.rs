//! Player identity and per-player data storage.
//!
//! ## Player
//!
//! Dariba is two-player by rule, so the identity is a closed enum rather
//! than a numeric ID. `opponent()` is the turn-toggling primitive used all
//! over the rules.
//!
//! ## PlayerPair
//!
//! Per-player data storage backed by a fixed `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Iterate over both players, Player 1 first.
    ///
    /// ```
    /// use dariba::Player;
    ///
    /// let players: Vec<_> = Player::both().collect();
    /// assert_eq!(players, vec![Player::One, Player::Two]);
    /// ```
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per player.
///
/// ## Example
///
/// ```
/// use dariba::{Player, PlayerPair};
///
/// let mut keys: PlayerPair<u8> = PlayerPair::with_value(0);
///
/// keys[Player::One] += 1;
/// assert_eq!(keys[Player::One], 1);
/// assert_eq!(keys[Player::Two], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from both players' values.
    #[must_use]
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [Player::One, Player::Two].into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
