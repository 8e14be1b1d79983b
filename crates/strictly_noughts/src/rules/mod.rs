//! Game rules for noughts and crosses.
//!
//! Pure functions over the board and turn counter, kept apart from the
//! game state so the driver and tests can evaluate them directly.

pub mod draw;
pub mod win;

pub use draw::is_drawn;
pub use win::{WINNING_COMBINATIONS, winning_line};
