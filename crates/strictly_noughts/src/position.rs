//! Board positions, labelled `1` to `9` in row-major order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A cell on the board.
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left.
    One,
    /// Top-center.
    Two,
    /// Top-right.
    Three,
    /// Middle-left.
    Four,
    /// Center.
    Five,
    /// Middle-right.
    Six,
    /// Bottom-left.
    Seven,
    /// Bottom-center.
    Eight,
    /// Bottom-right.
    Nine,
}

impl Position {
    /// All 9 positions in label order.
    pub const ALL: [Position; 9] = [
        Position::One,
        Position::Two,
        Position::Three,
        Position::Four,
        Position::Five,
        Position::Six,
        Position::Seven,
        Position::Eight,
        Position::Nine,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::One => 0,
            Position::Two => 1,
            Position::Three => 2,
            Position::Four => 3,
            Position::Five => 4,
            Position::Six => 5,
            Position::Seven => 6,
            Position::Eight => 7,
            Position::Nine => 8,
        }
    }

    /// The label a player types and an empty square shows.
    pub fn label(self) -> &'static str {
        match self {
            Position::One => "1",
            Position::Two => "2",
            Position::Three => "3",
            Position::Four => "4",
            Position::Five => "5",
            Position::Six => "6",
            Position::Seven => "7",
            Position::Eight => "8",
            Position::Nine => "9",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Text that does not name a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Not a board position: {:?}", text)]
pub struct ParsePositionError {
    /// The rejected text.
    pub text: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts exactly the labels `"1"` to `"9"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label() == s)
            .ok_or_else(|| ParsePositionError {
                text: s.to_string(),
            })
    }
}
