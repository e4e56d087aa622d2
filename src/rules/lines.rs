//! Line-length primitive.
//!
//! Placement legality, move legality, and the strike trigger all reduce to
//! one question: how long is the longest same-player run through a cell?
//! Runs live on the two orthogonal axes only; diagonals never count.
//!
//! The primitive counts the queried cell as owned by the player whether or
//! not a key actually sits there, so the same call answers both the
//! post-move check (key present) and the hypothetical placement check (cell
//! still empty) without any mutate-then-revert.

use crate::core::board::{Board, Cell, Pos};
use crate::core::player::Player;

/// The two axes a line may occupy.
const AXES: [(i16, i16); 2] = [
    (0, 1), // Horizontal
    (1, 0), // Vertical
];

/// Longest run of `player` keys through `pos`, over both axes, with `pos`
/// itself counted as `player`'s.
#[must_use]
pub fn max_run_through(board: &Board, pos: Pos, player: Player) -> u8 {
    let mut best = 1;
    for (dr, dc) in AXES {
        let run = 1 + run_from(board, pos, player, dr, dc) + run_from(board, pos, player, -dr, -dc);
        best = best.max(run);
    }
    best
}

/// Contiguous `player` keys extending from `pos` (exclusive) along one
/// direction.
fn run_from(board: &Board, pos: Pos, player: Player, dr: i16, dc: i16) -> u8 {
    let size = i16::from(board.size());
    let mut count = 0;
    let mut r = i16::from(pos.row) + dr;
    let mut c = i16::from(pos.col) + dc;
    while r >= 0 && c >= 0 && r < size && c < size {
        if board.get(Pos::new(r as u8, c as u8)) != Cell::Key(player) {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(keys: &[(u8, u8)], player: Player) -> Board {
        let mut board = Board::new(6);
        for &(r, c) in keys {
            board.set(Pos::new(r, c), Cell::Key(player));
        }
        board
    }

    #[test]
    fn test_lone_key_is_run_of_one() {
        let board = Board::new(6);
        assert_eq!(max_run_through(&board, Pos::new(3, 3), Player::One), 1);
    }

    #[test]
    fn test_horizontal_run() {
        let board = board_with(&[(2, 1), (2, 2)], Player::One);

        // Key at (2, 3) would extend the pair to three.
        assert_eq!(max_run_through(&board, Pos::new(2, 3), Player::One), 3);
        // From inside the pair the run counts both sides.
        assert_eq!(max_run_through(&board, Pos::new(2, 1), Player::One), 2);
    }

    #[test]
    fn test_vertical_run() {
        let board = board_with(&[(1, 4), (3, 4)], Player::Two);

        // The gap cell bridges both neighbors.
        assert_eq!(max_run_through(&board, Pos::new(2, 4), Player::Two), 3);
    }

    #[test]
    fn test_hypothetical_does_not_touch_board() {
        let board = board_with(&[(0, 0), (0, 1)], Player::One);
        let before = board.clone();

        let run = max_run_through(&board, Pos::new(0, 2), Player::One);

        assert_eq!(run, 3);
        assert_eq!(board, before);
        assert!(board.is_empty(Pos::new(0, 2)));
    }

    #[test]
    fn test_opponent_key_breaks_run() {
        let mut board = board_with(&[(2, 0), (2, 1), (2, 3)], Player::One);
        board.set(Pos::new(2, 2), Cell::Key(Player::Two));

        // (2, 2) is Player 2's, so Player 1's run through (2, 1) stays at 2.
        assert_eq!(max_run_through(&board, Pos::new(2, 1), Player::One), 2);
    }

    #[test]
    fn test_diagonals_never_count() {
        let board = board_with(&[(1, 1), (3, 3)], Player::One);

        assert_eq!(max_run_through(&board, Pos::new(2, 2), Player::One), 1);
    }

    #[test]
    fn test_axes_counted_independently() {
        // An L: two horizontal neighbors and one vertical neighbor of (2, 2).
        let board = board_with(&[(2, 0), (2, 1), (1, 2)], Player::One);

        // Horizontal axis gives 3, vertical gives 2; maximum wins.
        assert_eq!(max_run_through(&board, Pos::new(2, 2), Player::One), 3);
    }

    #[test]
    fn test_run_clipped_at_edges() {
        let board = board_with(&[(0, 4), (0, 5)], Player::Two);

        assert_eq!(max_run_through(&board, Pos::new(0, 3), Player::Two), 3);
        assert_eq!(max_run_through(&board, Pos::new(0, 5), Player::Two), 2);
    }

    #[test]
    fn test_long_run_counted_fully() {
        let board = board_with(&[(4, 0), (4, 1), (4, 3), (4, 4)], Player::One);

        // Bridging the gap at (4, 2) yields five in a row.
        assert_eq!(max_run_through(&board, Pos::new(4, 2), Player::One), 5);
    }
}
