//! Input and output seams between the game loop and a front end.
//!
//! The loop never touches a console directly. A front end supplies a
//! [`MoveInput`] for human moves and a [`GameView`] for everything the
//! players are shown, so tests can drive a whole game from a script.

use crate::{Board, GameError, Player, Position};
use tracing::instrument;

/// What a human asked for on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanChoice {
    /// Place a mark on an empty position.
    Move(Position),
    /// Leave the game.
    Quit,
    /// Anything else; the raw text is kept for logging.
    Invalid(String),
}

impl HumanChoice {
    /// Interprets a line typed by a human.
    ///
    /// `q` in either case quits. The label of a position in `valid` is a
    /// move. Everything else, including labels of occupied squares, is
    /// invalid.
    #[instrument(skip(valid))]
    pub fn parse(text: &str, valid: &[Position]) -> Self {
        if text.eq_ignore_ascii_case("q") {
            return HumanChoice::Quit;
        }
        match text.parse::<Position>() {
            Ok(pos) if valid.contains(&pos) => HumanChoice::Move(pos),
            _ => HumanChoice::Invalid(text.to_string()),
        }
    }
}

/// Source of human moves.
pub trait MoveInput {
    /// Asks `player` for a move given the currently empty positions.
    fn request_move(
        &mut self,
        player: &Player,
        valid: &[Position],
    ) -> Result<HumanChoice, GameError>;
}

/// Everything the players get to see.
pub trait GameView {
    /// Shows the board before the upcoming move.
    fn show_board(&mut self, board: &Board) -> Result<(), GameError>;

    /// Reports that the last input was neither a free position nor quit.
    fn invalid_move(&mut self) -> Result<(), GameError>;

    /// Reports that the computer is about to move.
    fn computer_moves(&mut self) -> Result<(), GameError>;

    /// Announces the winner and shows the final board.
    fn announce_winner(&mut self, player: &Player, board: &Board) -> Result<(), GameError>;

    /// Announces a draw.
    fn announce_draw(&mut self) -> Result<(), GameError>;
}

impl<T: MoveInput + ?Sized> MoveInput for &mut T {
    fn request_move(
        &mut self,
        player: &Player,
        valid: &[Position],
    ) -> Result<HumanChoice, GameError> {
        (**self).request_move(player, valid)
    }
}

impl<T: GameView + ?Sized> GameView for &mut T {
    fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        (**self).show_board(board)
    }

    fn invalid_move(&mut self) -> Result<(), GameError> {
        (**self).invalid_move()
    }

    fn computer_moves(&mut self) -> Result<(), GameError> {
        (**self).computer_moves()
    }

    fn announce_winner(&mut self, player: &Player, board: &Board) -> Result<(), GameError> {
        (**self).announce_winner(player, board)
    }

    fn announce_draw(&mut self) -> Result<(), GameError> {
        (**self).announce_draw()
    }
}
