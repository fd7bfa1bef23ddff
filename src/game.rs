use crate::{
    ai,
    board::Board,
    common::{Cell, Marker, MatchStatus, MoveError},
    config::BOARD_CELLS,
};
use rand::Rng;

/// Serializable snapshot of a full engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub cells: [Cell; BOARD_CELLS],
    pub player_marker: Marker,
    pub opponent_marker: Marker,
    pub turn: Marker,
    pub status: MatchStatus,
}

/// Token for an opponent move that a front end has yet to deliver.
///
/// Issued when a player move leaves the match active. The token carries the
/// match sequence number it was issued under; `opponent_move` ignores tokens
/// from a match that has since been restarted, so a deferred move can never
/// land on a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    match_seq: u64,
}

/// Result of `apply_player_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move was accepted. `pending` is present when the opponent owes a
    /// reply; the front end schedules it after the pacing delay.
    Applied {
        status: MatchStatus,
        pending: Option<PendingMove>,
    },
    /// Move was refused and nothing changed.
    Rejected(MoveError),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Core game logic: board, marker assignment, turn and match status.
///
/// The engine owns all authoritative state. Collaborators feed it inputs and
/// render snapshots; no rendering handle ever enters this type.
pub struct GameEngine {
    board: Board,
    player_marker: Marker,
    opponent_marker: Marker,
    turn: Marker,
    status: MatchStatus,
    match_seq: u64,
    started: bool,
}

impl GameEngine {
    /// Create an engine with the default marker assignment and an empty
    /// board. The marker prompt stays visible until `start_match` runs.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player_marker: Marker::X,
            opponent_marker: Marker::O,
            turn: Marker::X,
            status: MatchStatus::Active,
            match_seq: 0,
            started: false,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_marker(&self) -> Marker {
        self.player_marker
    }

    pub fn opponent_marker(&self) -> Marker {
        self.opponent_marker
    }

    /// Marker whose turn it is.
    pub fn turn(&self) -> Marker {
        self.turn
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// `true` once `start_match` has run; drives marker-prompt visibility.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Begin a match with the player's chosen marker. The opponent takes the
    /// complement, the player moves first and the board is cleared. Any
    /// outstanding `PendingMove` token is invalidated.
    pub fn start_match(&mut self, marker: Marker) {
        self.player_marker = marker;
        self.opponent_marker = marker.other();
        self.reset_round();
        self.started = true;
    }

    /// Reset the board for a rematch, keeping the marker assignment from the
    /// most recent `start_match`. Any outstanding `PendingMove` token is
    /// invalidated.
    pub fn restart_match(&mut self) {
        self.reset_round();
    }

    fn reset_round(&mut self) {
        self.board.clear();
        self.turn = self.player_marker;
        self.status = MatchStatus::Active;
        self.match_seq = self.match_seq.wrapping_add(1);
    }

    /// Apply the player's move at `index`.
    ///
    /// Preconditions are checked in fixed order: index in range, cell empty,
    /// match active, player's turn. The first failure rejects the move with
    /// no state change. An accepted move is evaluated for win/draw; when the
    /// match stays active the returned `pending` token is the opponent's
    /// scheduled reply.
    pub fn apply_player_move(&mut self, index: usize) -> MoveOutcome {
        match self.board.cell(index) {
            None => return MoveOutcome::Rejected(MoveError::OutOfRange),
            Some(Cell::Marked(_)) => return MoveOutcome::Rejected(MoveError::CellOccupied),
            Some(Cell::Empty) => {}
        }
        if self.status != MatchStatus::Active {
            return MoveOutcome::Rejected(MoveError::MatchOver);
        }
        if self.turn != self.player_marker {
            return MoveOutcome::Rejected(MoveError::NotPlayersTurn);
        }
        // cannot fail: index and emptiness were checked above
        let _ = self.board.mark(index, self.player_marker);
        self.evaluate();
        MoveOutcome::Applied {
            status: self.status,
            pending: self.pending_move(),
        }
    }

    /// Token for the opponent reply currently owed, if any.
    pub fn pending_move(&self) -> Option<PendingMove> {
        (self.status == MatchStatus::Active && self.turn == self.opponent_marker).then_some(
            PendingMove {
                match_seq: self.match_seq,
            },
        )
    }

    /// Deliver a deferred opponent move.
    ///
    /// A stale token (issued before a restart or a new match), a finished
    /// match or an out-of-turn call is ignored. Otherwise one empty cell is
    /// chosen uniformly at random from `rng` and marked with the opponent's
    /// marker. Returns the index that was marked.
    pub fn opponent_move<R: Rng>(&mut self, rng: &mut R, pending: PendingMove) -> Option<usize> {
        if pending.match_seq != self.match_seq {
            return None;
        }
        if self.status != MatchStatus::Active || self.turn != self.opponent_marker {
            return None;
        }
        // full board cannot occur here in practice: evaluate() declares the
        // draw before the turn ever reaches the opponent
        let index = ai::choose_random_cell(&self.board, rng)?;
        let _ = self.board.mark(index, self.opponent_marker);
        self.evaluate();
        Some(index)
    }

    /// Win/draw detection and turn switch, run after every accepted move.
    ///
    /// The winner check strictly precedes the draw check, so a move that
    /// completes a line while filling the board reports a win. On a win or a
    /// draw the turn does not switch.
    fn evaluate(&mut self) {
        if let Some(winner) = self.board.winning_marker() {
            self.status = MatchStatus::Won(winner);
            return;
        }
        if self.board.is_full() {
            self.status = MatchStatus::Draw;
            return;
        }
        self.turn = self.turn.other();
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            cells: *self.board.cells(),
            player_marker: self.player_marker,
            opponent_marker: self.opponent_marker,
            turn: self.turn,
            status: self.status,
        }
    }

    /// Restore an engine from a previously captured state.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: Board::from(state.cells),
            player_marker: state.player_marker,
            opponent_marker: state.opponent_marker,
            turn: state.turn,
            status: state.status,
            match_seq: 0,
            started: true,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
