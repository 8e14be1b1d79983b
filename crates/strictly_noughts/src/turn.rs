//! Move resolution for a single turn.

use crate::{GameError, GameState, GameView, HumanChoice, MoveInput, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument};

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A mark was placed.
    Moved(Position),
    /// The human to move asked to leave; the board is untouched.
    Quit,
}

/// Obtains a move for the current player and applies it.
///
/// The computer picks uniformly from the empty positions. A human is asked
/// through `ui` until they name an empty position or quit; every other
/// answer is reported back through `ui` and asked again.
///
/// Must only be called while at least one position is empty.
#[instrument(skip_all, fields(mark = %state.current_player(), turn = state.turn_count()))]
pub fn resolve_move<R, U>(
    state: &mut GameState,
    rng: &mut R,
    ui: &mut U,
) -> Result<Resolution, GameError>
where
    R: Rng + ?Sized,
    U: MoveInput + GameView + ?Sized,
{
    let valid = state.board().empty_positions();
    let player = *state.current_player();

    let position = if player.is_computer() {
        ui.computer_moves()?;
        *valid
            .choose(rng)
            .ok_or_else(|| GameError::new("No empty positions left for the computer"))?
    } else {
        loop {
            match ui.request_move(&player, &valid)? {
                HumanChoice::Move(pos) => break pos,
                HumanChoice::Quit => {
                    info!("Player quit");
                    return Ok(Resolution::Quit);
                }
                HumanChoice::Invalid(text) => {
                    debug!(input = %text, "Rejected move");
                    ui.invalid_move()?;
                }
            }
        }
    };

    debug!(%position, computer = player.is_computer(), "Move chosen");
    state.apply_move(position);
    Ok(Resolution::Moved(position))
}
