//! Draw detection.

use crate::CELL_COUNT;

/// Returns true once every cell has been played.
///
/// Only meaningful after the win check for the same turn has failed.
/// `turn_count` counts turns started, one move each, so the threshold
/// follows the board's cell count.
pub fn is_drawn(turn_count: usize) -> bool {
    turn_count >= CELL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::winning_line;
    use crate::{Board, Mark, Position};

    #[test]
    fn test_threshold() {
        assert!(!is_drawn(0));
        assert!(!is_drawn(8));
        assert!(is_drawn(9));
    }

    #[test]
    fn test_full_board_without_line() {
        // X:1 O:2 X:3 O:5 X:4 O:7 X:6 O:9 X:8
        let moves = [
            (Mark::X, Position::One),
            (Mark::O, Position::Two),
            (Mark::X, Position::Three),
            (Mark::O, Position::Five),
            (Mark::X, Position::Four),
            (Mark::O, Position::Seven),
            (Mark::X, Position::Six),
            (Mark::O, Position::Nine),
            (Mark::X, Position::Eight),
        ];
        let mut board = Board::new();
        for (mark, pos) in moves {
            board.apply_move(pos, mark);
        }

        assert!(board.empty_positions().is_empty());
        assert_eq!(winning_line(&board, Mark::X), None);
        assert_eq!(winning_line(&board, Mark::O), None);
        assert!(is_drawn(moves.len()));
    }
}
