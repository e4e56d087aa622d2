//! Elimination win condition.
//!
//! A player loses the moment they hold fewer live keys than the configured
//! line length: with the official rules that is two keys or fewer, at which
//! point forming a line, and so ever striking back, is impossible.
//! The check runs after every successful strike; since a strike changes only
//! one player's count, a tie is impossible.

use crate::core::board::Board;
use crate::core::player::{Player, PlayerPair};

/// Count live keys per player across the whole board.
#[must_use]
pub fn live_keys(board: &Board) -> PlayerPair<u8> {
    PlayerPair::new(
        board.key_count(Player::One),
        board.key_count(Player::Two),
    )
}

/// Winner by elimination, if either player can no longer form a line.
#[must_use]
pub fn winner_by_elimination(board: &Board, line_length: u8) -> Option<Player> {
    let keys = live_keys(board);
    for player in Player::both() {
        if keys[player] < line_length {
            return Some(player.opponent());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Cell, Pos};

    fn board_with_counts(one: u8, two: u8) -> Board {
        let mut board = Board::new(6);
        for i in 0..one {
            board.set(Pos::new(i / 6, i % 6), Cell::Key(Player::One));
        }
        for i in 0..two {
            board.set(Pos::new(5 - i / 6, i % 6), Cell::Key(Player::Two));
        }
        board
    }

    #[test]
    fn test_live_keys() {
        let board = board_with_counts(4, 6);
        let keys = live_keys(&board);

        assert_eq!(keys[Player::One], 4);
        assert_eq!(keys[Player::Two], 6);
    }

    #[test]
    fn test_two_keys_loses() {
        // Player 1 down to exactly 2 keys, Player 2 holds 5.
        let board = board_with_counts(2, 5);

        assert_eq!(winner_by_elimination(&board, 3), Some(Player::Two));
    }

    #[test]
    fn test_three_keys_survives() {
        let board = board_with_counts(3, 5);

        assert_eq!(winner_by_elimination(&board, 3), None);
    }

    #[test]
    fn test_player_two_can_lose_too() {
        let board = board_with_counts(7, 1);

        assert_eq!(winner_by_elimination(&board, 3), Some(Player::One));
    }

    #[test]
    fn test_threshold_follows_line_length() {
        let board = board_with_counts(3, 5);

        // With lines of four, three keys is already hopeless.
        assert_eq!(winner_by_elimination(&board, 4), Some(Player::Two));
    }
}
