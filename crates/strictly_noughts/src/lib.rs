//! Strictly Noughts - noughts and crosses game logic.
//!
//! The crate holds the board, the player pair, turn management, the
//! win/draw rules and the game loop. It performs no I/O of its own: human
//! moves come through a [`MoveInput`], everything players see goes through
//! a [`GameView`], and every random choice draws from a caller-supplied
//! [`rand::Rng`].
//!
//! # Example
//!
//! ```no_run
//! use strictly_noughts::{GameState, Orchestrator, PlayerMode};
//! # fn example<U>(ui: U) -> Result<(), strictly_noughts::GameError>
//! # where
//! #     U: strictly_noughts::MoveInput + strictly_noughts::GameView,
//! # {
//! let mut rng = rand::rng();
//! let state = GameState::new(PlayerMode::OnePlayer, &mut rng);
//! let mut game = Orchestrator::new(state, ui);
//! let end = game.run(&mut rng)?;
//! println!("{end:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod capabilities;
mod error;
mod game;
mod orchestrator;
mod position;
pub mod rules;
mod turn;
mod types;

pub use capabilities::{GameView, HumanChoice, MoveInput};
pub use error::GameError;
pub use game::{GameState, Move, PlayerMode, Status};
pub use orchestrator::{GameEnd, Orchestrator};
pub use position::{ParsePositionError, Position};
pub use turn::{Resolution, resolve_move};
pub use types::{Board, CELL_COUNT, Controller, Mark, Player, Seat, Square};
