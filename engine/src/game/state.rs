use serde::Serialize;
use std::fmt;

use crate::PlayerId;

use super::board::Board;
use super::direction::Direction;
use super::ledger::MoveLedger;

/// Game phase. A pending game is always in exactly one of the two turn
/// states; `Complete` always carries a winner alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Player1Turn,
    Player2Turn,
    Draw,
    Complete,
}

/// The three ways a move request can be invalid. All are caller mistakes,
/// reported synchronously and never retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NotAParticipant,
    NotYourTurn,
    ColumnFull,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotAParticipant => write!(f, "player is not a participant in this game"),
            MoveError::NotYourTurn => write!(f, "it is not this player's turn"),
            MoveError::ColumnFull => write!(f, "column has no room for another coin"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    rows: usize,
    columns: usize,
    player_1: PlayerId,
    player_2: PlayerId,
    status: Status,
    winner: Option<PlayerId>,
    ledger: MoveLedger,
}

impl Game {
    pub fn new(player_1: PlayerId, player_2: PlayerId, rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            player_1,
            player_2,
            status: Status::Player1Turn,
            winner: None,
            ledger: MoveLedger::new(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    pub fn player_1(&self) -> &PlayerId {
        &self.player_1
    }

    pub fn player_2(&self) -> &PlayerId {
        &self.player_2
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    pub fn board(&self) -> Board {
        Board::from_ledger(&self.ledger, self.rows, self.columns)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, Status::Player1Turn | Status::Player2Turn)
    }

    pub fn is_users_turn(&self, player: &PlayerId) -> bool {
        self.turn_status_for(player) == Some(self.status)
    }

    fn turn_status_for(&self, player: &PlayerId) -> Option<Status> {
        if player == &self.player_1 {
            Some(Status::Player1Turn)
        } else if player == &self.player_2 {
            Some(Status::Player2Turn)
        } else {
            None
        }
    }

    /// Drops a coin for `acting_player` into `column`. On success the move is
    /// appended to the ledger and the status recomputed; the returned bool
    /// says whether the game just ended.
    pub fn attempt_move(
        &mut self,
        acting_player: &PlayerId,
        column: usize,
    ) -> Result<bool, MoveError> {
        let turn_status = self
            .turn_status_for(acting_player)
            .ok_or(MoveError::NotAParticipant)?;

        if turn_status != self.status {
            return Err(MoveError::NotYourTurn);
        }

        let board = self.board();
        if !board.available_columns().contains(&column) {
            return Err(MoveError::ColumnFull);
        }

        let row = board.landing_row(column);
        self.ledger
            .append(super::types::Coordinate::new(row, column), acting_player.clone());

        self.calculate_status();

        Ok(!self.is_pending())
    }

    /// Recomputes status and winner as a pure function of the current move
    /// set. There can be at most one winning line in a legal game since a
    /// move ends the game on the turn that completes it, so the scan stops
    /// at the first match.
    fn calculate_status(&mut self) {
        let Some(last_move) = self.ledger.last_move() else {
            self.status = Status::Player1Turn;
            self.winner = None;
            return;
        };
        let last_player = last_move.player.clone();

        let board = self.board();
        for (&coordinate, player) in board.occupancy() {
            for direction in Direction::ALL {
                if direction.has_four_in_row(coordinate, board.occupancy(), self.rows, self.columns)
                {
                    self.status = Status::Complete;
                    self.winner = Some(player.clone());
                    return;
                }
            }
        }

        self.winner = None;
        if board.is_full() {
            self.status = Status::Draw;
        } else if last_player == self.player_1 {
            self.status = Status::Player2Turn;
        } else {
            self.status = Status::Player1Turn;
        }
    }
}
