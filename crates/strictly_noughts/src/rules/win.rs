//! Win detection.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight lines that win: rows, columns, then diagonals.
pub const WINNING_COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::One, Position::Two, Position::Three],
    [Position::Four, Position::Five, Position::Six],
    [Position::Seven, Position::Eight, Position::Nine],
    // Columns
    [Position::One, Position::Four, Position::Seven],
    [Position::Two, Position::Five, Position::Eight],
    [Position::Three, Position::Six, Position::Nine],
    // Diagonals
    [Position::One, Position::Five, Position::Nine],
    [Position::Three, Position::Five, Position::Seven],
];

/// Returns the first combination whose three squares all hold `mark`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    WINNING_COMBINATIONS
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board.apply_move(pos, mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Mark::X), None);
        assert_eq!(winning_line(&board, Mark::O), None);
    }

    #[test]
    fn test_every_combination_wins() {
        for line in WINNING_COMBINATIONS {
            let board = board_with(Mark::O, &line);
            assert_eq!(winning_line(&board, Mark::O), Some(line));
            assert_eq!(winning_line(&board, Mark::X), None);
        }
    }

    #[test]
    fn test_two_of_three_never_wins() {
        for line in WINNING_COMBINATIONS {
            for skip in 0..3 {
                let partial: Vec<Position> = line
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, pos)| *pos)
                    .collect();
                let board = board_with(Mark::X, &partial);
                assert_eq!(winning_line(&board, Mark::X), None, "{partial:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.apply_move(Position::One, Mark::X);
        board.apply_move(Position::Two, Mark::O);
        board.apply_move(Position::Three, Mark::X);
        assert_eq!(winning_line(&board, Mark::X), None);
        assert_eq!(winning_line(&board, Mark::O), None);
    }
}
