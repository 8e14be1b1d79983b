//! Console front end for strictly_noughts.
//!
//! Provides the terminal implementation of the game's input and view
//! capabilities, the settings file, and the glue `main` uses to play a
//! game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;

pub use app::{build_rng, run};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG, Settings};
pub use console::{COMPUTER_MOVES, Console, INVALID_MOVE, MODE_PROMPT, NO_WINNER, move_prompt};
