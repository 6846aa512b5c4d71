//! Game state: one board plus whose turn it is.
//!
//! Each concurrent game owns its own `GameState`; there is no shared or
//! global state anywhere in the crate. The optional player names are
//! opaque metadata for the embedding front end (turn attribution in a
//! chat UI, win/loss bookkeeping) and are never inspected here.

use crate::board::{Board, Score, Side, Square};

/// A single game in progress.
pub struct GameState {
    board: Board,
    turn: Side,
    players: [Option<String>; 2],
}

impl GameState {
    /// Start a new game from the opening position, Black to move
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::opening(),
            turn: Side::Black,
            players: [None, None],
        }
    }

    /// Start a new game with player names attached
    #[must_use]
    pub fn with_players(black: impl Into<String>, white: impl Into<String>) -> Self {
        GameState {
            board: Board::opening(),
            turn: Side::Black,
            players: [Some(black.into()), Some(white.into())],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The name attached to `side`, if any
    #[must_use]
    pub fn player_name(&self, side: Side) -> Option<&str> {
        self.players[side.index()].as_deref()
    }

    /// Play the side-to-move's disc on `sq`.
    ///
    /// Returns `false` without any state change if the move is illegal;
    /// probing illegal squares is normal interaction, not an error. On
    /// success the turn advances to the opponent. If the opponent is then
    /// blocked the caller passes with [`pass_turn`](GameState::pass_turn).
    pub fn play(&mut self, sq: Square) -> bool {
        if !self.board.apply_move(sq, self.turn) {
            return false;
        }
        self.turn = self.turn.opponent();
        true
    }

    /// Hand the turn to the opponent without moving (side to move is
    /// blocked)
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Legal moves for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Square> {
        self.board.legal_moves(self.turn)
    }

    /// Current disc counts
    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// True iff neither side can move; the winner is whoever holds more
    /// discs
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// The side holding more discs, or `None` on a tie
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        let score = self.score();
        match score.black.cmp(&score.white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
