//! Board representation: positions, cells, and the square grid.
//!
//! The board is a flat `Vec<Cell>` addressed row-major. All rule logic goes
//! through [`Board`] accessors; nothing else mutates cells.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;

/// A cell on the board: empty, or holding one player's key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Key(Player),
}

impl Cell {
    /// Check if the cell holds no key.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the owner of the key here, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Key(player) => Some(player),
        }
    }
}

/// Position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check orthogonal adjacency (Manhattan distance exactly 1).
    ///
    /// ```
    /// use dariba::Pos;
    ///
    /// assert!(Pos::new(2, 3).is_adjacent(Pos::new(2, 4)));
    /// assert!(!Pos::new(2, 3).is_adjacent(Pos::new(3, 4)));
    /// assert!(!Pos::new(2, 3).is_adjacent(Pos::new(2, 3)));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dr = (i16::from(self.row) - i16::from(other.row)).abs();
        let dc = (i16::from(self.col) - i16::from(other.col)).abs();
        dr + dc == 1
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The square playing grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "Board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; usize::from(size) * usize::from(size)],
        }
    }

    /// Board width and height.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn idx(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos));
        usize::from(pos.row) * usize::from(self.size) + usize::from(pos.col)
    }

    /// Get the cell at a position. The position must be on the board.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.idx(pos)]
    }

    /// Set the cell at a position. The position must be on the board.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.idx(pos);
        self.cells[idx] = cell;
    }

    /// Check if the cell at a position is empty.
    #[must_use]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Count the live keys a player has on the board.
    #[must_use]
    pub fn key_count(&self, player: Player) -> u8 {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Key(player))
            .count() as u8
    }

    /// Total keys on the board.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over every position on the board, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Pos::new(row, col)))
    }

    /// Orthogonal in-bounds neighbors of a position (2 at a corner, 3 on an
    /// edge, 4 in the interior).
    #[must_use]
    pub fn neighbors(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        let mut out = SmallVec::new();
        let (r, c) = (i16::from(pos.row), i16::from(pos.col));
        for (nr, nc) in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
            if nr >= 0 && nc >= 0 && nr < i16::from(self.size) && nc < i16::from(self.size) {
                out.push(Pos::new(nr as u8, nc as u8));
            }
        }
        out
    }
}
