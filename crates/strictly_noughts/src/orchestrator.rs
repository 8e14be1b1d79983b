//! The game loop.

use crate::turn::{Resolution, resolve_move};
use crate::{GameError, GameState, GameView, Mark, MoveInput, Status};
use rand::Rng;
use tracing::{info, instrument};

/// How a game loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// A player completed a line.
    Won {
        /// The winner's mark.
        mark: Mark,
    },
    /// The board filled with no line.
    Drawn,
    /// A human quit mid-game.
    Quit,
}

/// Drives one game between the two players of a [`GameState`].
///
/// The front end `U` both supplies human moves and shows the game, since
/// prompts and board output usually share one terminal.
pub struct Orchestrator<U> {
    state: GameState,
    ui: U,
}

impl<U> Orchestrator<U>
where
    U: MoveInput + GameView,
{
    /// Creates an orchestrator for a fresh game.
    pub fn new(state: GameState, ui: U) -> Self {
        Self { state, ui }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the front end.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Gives back the state and the front end.
    pub fn into_parts(self) -> (GameState, U) {
        (self.state, self.ui)
    }

    /// Runs turns until a win, a draw, or a quit.
    ///
    /// Each turn bumps the counter and hands control to the other seat
    /// before the board is shown, so the board displayed is the one the
    /// upcoming move is made on.
    #[instrument(skip_all)]
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameEnd, GameError> {
        info!(first = %self.state.player(self.state.current_turn().other()), "Starting game");

        while self.state.is_playing() {
            self.state.begin_turn();
            self.ui.show_board(self.state.board())?;

            let resolution = resolve_move(&mut self.state, rng, &mut self.ui)?;
            if resolution == Resolution::Quit {
                return Ok(GameEnd::Quit);
            }

            match self.state.evaluate() {
                Status::Won { seat, mark, line } => {
                    info!(%mark, ?line, turns = self.state.turn_count(), "Game won");
                    let winner = *self.state.player(seat);
                    self.ui.announce_winner(&winner, self.state.board())?;
                    return Ok(GameEnd::Won { mark });
                }
                Status::Drawn => {
                    info!("Game drawn");
                    self.ui.announce_draw()?;
                    return Ok(GameEnd::Drawn);
                }
                Status::InPlay => {}
            }
        }

        Err(GameError::new("Game loop started on a finished game"))
    }
}
