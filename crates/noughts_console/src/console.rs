//! Line-oriented console front end.

use std::io::{BufRead, Write};
use strictly_noughts::{
    Board, GameError, GameView, HumanChoice, MoveInput, Player, PlayerMode, Position,
};
use tracing::{debug, instrument};

/// Startup question.
pub const MODE_PROMPT: &str = "Do you want to play 1 or 2 player (Enter 1 or 2): ";

/// Shown after input that is neither a free position nor quit.
pub const INVALID_MOVE: &str = "That is not a valid move.";

/// Shown before the computer moves.
pub const COMPUTER_MOVES: &str = "The computer makes a move.";

/// Shown when the board fills without a line.
pub const NO_WINNER: &str = "No winner!";

/// Builds the per-turn prompt for a human player.
pub fn move_prompt(player: &Player) -> String {
    format!(
        "Player {}, please select which space (1-9) you want to place your mark (q to quit): ",
        player
    )
}

/// Console reading lines from `R` and writing text to `W`.
///
/// Implements both game capabilities, so one value can be handed to the
/// orchestrator.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes `prompt`, then reads one line without its terminator.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so odd
    /// input reaches the move parser as an invalid move. Returns `None` at
    /// end of input.
    #[instrument(skip(self))]
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Asks whether one or two humans are playing.
    ///
    /// Only `1` selects one-player mode; anything else, including end of
    /// input, selects two players.
    #[instrument(skip(self))]
    pub fn ask_player_mode(&mut self) -> Result<PlayerMode, GameError> {
        let answer = self.read_line(MODE_PROMPT)?;
        let mode = match answer.as_deref() {
            Some("1") => PlayerMode::OnePlayer,
            _ => PlayerMode::TwoPlayer,
        };
        debug!(?mode, "Player mode chosen");
        Ok(mode)
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveInput for Console<R, W> {
    fn request_move(
        &mut self,
        player: &Player,
        valid: &[Position],
    ) -> Result<HumanChoice, GameError> {
        Ok(match self.read_line(&move_prompt(player))? {
            Some(line) => HumanChoice::parse(&line, valid),
            None => HumanChoice::Quit,
        })
    }
}

impl<R: BufRead, W: Write> GameView for Console<R, W> {
    fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        self.say(&board.render())
    }

    fn invalid_move(&mut self) -> Result<(), GameError> {
        self.say(INVALID_MOVE)
    }

    fn computer_moves(&mut self) -> Result<(), GameError> {
        self.say(COMPUTER_MOVES)
    }

    fn announce_winner(&mut self, player: &Player, board: &Board) -> Result<(), GameError> {
        self.say(&format!("Player {} wins.", player))?;
        self.say(&board.render())?;
        self.writer.flush()?;
        Ok(())
    }

    fn announce_draw(&mut self) -> Result<(), GameError> {
        self.say(NO_WINNER)?;
        self.writer.flush()?;
        Ok(())
    }
}
