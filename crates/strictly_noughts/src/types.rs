//! Core domain types for noughts and crosses.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A mark placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Crosses.
    X,
    /// Noughts.
    O,
}

/// Identity of a player within a game.
///
/// Turn alternation toggles between seats, never between marks, so two
/// players are distinct even if a variant ever gave them the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First player of the pair (index 0).
    First,
    /// Second player of the pair (index 1).
    Second,
}

impl Seat {
    /// Both seats in pair order.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// Returns the other seat of the pair.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index of this seat into the player pair.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Who chooses the moves for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Moves are read from a human.
    Human,
    /// Moves are picked uniformly at random.
    Computer,
}

/// A participant in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_new::new,
)]
#[display("{}", mark)]
pub struct Player {
    mark: Mark,
    controller: Controller,
}

impl Player {
    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns true if moves are picked by the computer.
    pub fn is_computer(&self) -> bool {
        self.controller == Controller::Computer
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square, rendered as its position label.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Positions still holding their own label, in ascending order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Places a mark.
    ///
    /// The square must be empty; callers validate against
    /// [`Board::empty_positions`] first.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_empty(pos), "square {pos} is already occupied");
        self.squares[pos.to_index()] = Square::Occupied(mark);
    }

    /// Formats the board as rows of `a | b | c` separated by dashes.
    pub fn render(&self) -> String {
        let rows: Vec<String> = Position::ALL
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|&pos| self.cell_text(pos))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect();
        rows.join("\n---------\n")
    }

    fn cell_text(&self, pos: Position) -> String {
        match self.get(pos) {
            Square::Empty => pos.label().to_string(),
            Square::Occupied(mark) => mark.to_string(),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
