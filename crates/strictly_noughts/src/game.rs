//! Game state: board, the player pair, whose turn it is, and the outcome.

use crate::rules::{is_drawn, winning_line};
use crate::{Board, Controller, Mark, Player, Position, Seat};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How many humans are playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerMode {
    /// X is human, O is the computer.
    OnePlayer,
    /// Both X and O are human.
    TwoPlayer,
}

impl PlayerMode {
    /// Builds the player pair for this mode.
    pub fn players(self) -> [Player; 2] {
        let second = match self {
            PlayerMode::OnePlayer => Controller::Computer,
            PlayerMode::TwoPlayer => Controller::Human,
        };
        [
            Player::new(Mark::X, Controller::Human),
            Player::new(Mark::O, second),
        ]
    }
}

/// A mark placed during the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Who moved.
    pub seat: Seat,
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Where the game stands after the last completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves remain to be played.
    InPlay,
    /// The mover completed a line.
    Won {
        /// Seat of the winner.
        seat: Seat,
        /// Mark of the winner.
        mark: Mark,
        /// The completed combination.
        line: [Position; 3],
    },
    /// All cells played with no line.
    Drawn,
}

impl Status {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InPlay)
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current_turn: Seat,
    turn_count: usize,
    status: Status,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a game with an empty board and a random initial turn.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(mode: PlayerMode, rng: &mut R) -> Self {
        let current_turn = *Seat::BOTH.choose(rng).unwrap_or(&Seat::First);
        debug!(?current_turn, "Initial turn chosen");
        Self::with_turn(mode.players(), current_turn)
    }

    /// Creates a game with the given players and initial turn.
    #[instrument]
    pub fn with_turn(players: [Player; 2], current_turn: Seat) -> Self {
        Self {
            board: Board::new(),
            players,
            current_turn,
            turn_count: 0,
            status: Status::InPlay,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns whose turn it is.
    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current_turn)
    }

    /// Number of turns started so far.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Returns the status after the last evaluated turn.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true until a win or draw has been evaluated.
    pub fn is_playing(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Starts a new turn: bumps the counter and hands control to the other seat.
    #[instrument(skip(self), fields(turn = self.turn_count + 1))]
    pub fn begin_turn(&mut self) {
        self.turn_count += 1;
        self.advance_turn();
    }

    /// Hands control to the other seat.
    pub fn advance_turn(&mut self) {
        self.current_turn = self.current_turn.other();
    }

    /// Places the current player's mark.
    ///
    /// `pos` must be one of [`Board::empty_positions`].
    #[instrument(skip(self), fields(seat = ?self.current_turn))]
    pub fn apply_move(&mut self, pos: Position) {
        let action = Move::new(self.current_turn, self.current_player().mark(), pos);
        self.board.apply_move(pos, action.mark);
        self.history.push(action);
        debug!(%action, "Move applied");
    }

    /// Checks the mover's mark for a line, then the turn count for a draw.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> Status {
        let seat = self.current_turn;
        let mark = self.current_player().mark();
        self.status = if let Some(line) = winning_line(&self.board, mark) {
            Status::Won { seat, mark, line }
        } else if is_drawn(self.turn_count) {
            Status::Drawn
        } else {
            Status::InPlay
        };
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state(first: Seat) -> GameState {
        GameState::with_turn(PlayerMode::TwoPlayer.players(), first)
    }

    #[test]
    fn test_one_player_mode_makes_o_the_computer() {
        let [x, o] = PlayerMode::OnePlayer.players();
        assert_eq!(x.mark(), Mark::X);
        assert!(!x.is_computer());
        assert_eq!(o.mark(), Mark::O);
        assert!(o.is_computer());
    }

    #[test]
    fn test_two_player_mode_is_all_human() {
        assert!(
            PlayerMode::TwoPlayer
                .players()
                .iter()
                .all(|p| !p.is_computer())
        );
    }

    #[test]
    fn test_initial_turn_uses_both_seats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(GameState::new(PlayerMode::TwoPlayer, &mut rng).current_turn());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_new_game_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = GameState::new(PlayerMode::OnePlayer, &mut rng);
        assert_eq!(game.turn_count(), 0);
        assert_eq!(game.status(), &Status::InPlay);
        assert!(game.history().is_empty());
        assert_eq!(game.board().empty_positions().len(), 9);
    }

    #[test]
    fn test_advance_turn_toggles_by_seat() {
        // Same mark in both seats still alternates.
        let twin = Player::new(Mark::X, Controller::Human);
        let mut game = GameState::with_turn([twin, twin], Seat::First);
        game.advance_turn();
        assert_eq!(game.current_turn(), Seat::Second);
        game.advance_turn();
        assert_eq!(game.current_turn(), Seat::First);
    }

    #[test]
    fn test_begin_turn_counts_and_toggles() {
        let mut game = state(Seat::Second);
        game.begin_turn();
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.current_turn(), Seat::First);
        assert_eq!(game.current_player().mark(), Mark::X);
    }

    #[test]
    fn test_empty_positions_track_turn_count() {
        let mut game = state(Seat::Second);
        for pos in [Position::Five, Position::One, Position::Nine] {
            game.begin_turn();
            game.apply_move(pos);
            assert_eq!(game.evaluate(), Status::InPlay);
            assert_eq!(game.board().empty_positions().len(), 9 - game.turn_count());
        }
    }

    #[test]
    fn test_win_on_third_mark_only() {
        // X: 1, 2, 3 with O: 4, 5 between.
        let mut game = state(Seat::Second);
        let script = [
            (Position::One, Status::InPlay),
            (Position::Four, Status::InPlay),
            (Position::Two, Status::InPlay),
            (Position::Five, Status::InPlay),
        ];
        for (pos, expected) in script {
            game.begin_turn();
            game.apply_move(pos);
            assert_eq!(game.evaluate(), expected);
        }
        game.begin_turn();
        game.apply_move(Position::Three);
        assert_eq!(
            game.evaluate(),
            Status::Won {
                seat: Seat::First,
                mark: Mark::X,
                line: [Position::One, Position::Two, Position::Three],
            }
        );
        assert!(!game.is_playing());
    }

    #[test]
    fn test_draw_after_ninth_move() {
        let mut game = state(Seat::Second);
        let order = [
            Position::One,
            Position::Two,
            Position::Three,
            Position::Five,
            Position::Four,
            Position::Seven,
            Position::Six,
            Position::Nine,
        ];
        for pos in order {
            game.begin_turn();
            game.apply_move(pos);
            assert_eq!(game.evaluate(), Status::InPlay);
        }
        game.begin_turn();
        game.apply_move(Position::Eight);
        assert_eq!(game.evaluate(), Status::Drawn);
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_win_on_ninth_move_beats_draw() {
        // X completes 3-6-9 with the last free cell.
        let mut game = state(Seat::Second);
        let order = [
            Position::One,   // X
            Position::Two,   // O
            Position::Three, // X
            Position::Five,  // O
            Position::Six,   // X
            Position::Four,  // O
            Position::Eight, // X
            Position::Seven, // O
        ];
        for pos in order {
            game.begin_turn();
            game.apply_move(pos);
            assert_eq!(game.evaluate(), Status::InPlay, "{pos}");
        }
        game.begin_turn();
        game.apply_move(Position::Nine);
        assert!(matches!(game.evaluate(), Status::Won { mark: Mark::X, .. }));
    }

    #[test]
    fn test_state_serializes() {
        let mut game = state(Seat::Second);
        game.begin_turn();
        game.apply_move(Position::Five);
        let json = serde_json::to_string(&game).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
