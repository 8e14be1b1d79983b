//! Wires settings, console and random source into one game.

use crate::config::Settings;
use crate::console::Console;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};
use strictly_noughts::{GameEnd, GameError, GameState, Orchestrator};
use tracing::{info, instrument};

/// Builds the random source: seeded when a seed is configured.
#[instrument]
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Plays one game on `console`.
///
/// The player mode comes from `settings` when set, otherwise from the
/// startup question. Quitting is a normal end, not an error.
#[instrument(skip_all)]
pub fn run<R, W, G>(
    settings: &Settings,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<GameEnd, GameError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mode = match settings.player_mode() {
        Some(mode) => mode,
        None => console.ask_player_mode()?,
    };
    info!(?mode, "New game");

    let state = GameState::new(mode, rng);
    let mut game = Orchestrator::new(state, console);
    let end = game.run(rng)?;

    info!(?end, turns = game.state().turn_count(), "Game over");
    Ok(end)
}
