/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{evaluate_placement, Board, ConnectFourError, GameResult, Placement, Player};

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No piece placed yet.
    NotStarted,

    /// At least one piece placed and nobody has won.
    InProgress,

    /// The player made four in a row.
    Won(Player),

    /// The board filled up without a winner.
    Tied,
}

impl GamePhase {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Tied)
    }
}

/// One game: the board plus whose turn it is and how the game stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    turn: Player,
    phase: GamePhase,
    moves: usize,
    last_placement: Option<Placement>,
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.phase {
            GamePhase::Won(player) => write!(f, "{} won", player),
            GamePhase::Tied => write!(f, "tie"),
            _ => write!(f, "{}'s turn", self.turn),
        }
    }
}

impl Game {
    /// Start a game on an empty `rows` by `cols` board with `first` to move.
    pub fn new(rows: usize, cols: usize, first: Player) -> Result<Self, ConnectFourError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            turn: first,
            phase: GamePhase::NotStarted,
            moves: 0,
            last_placement: None,
        })
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next. Once the game is over this is the player after the last mover.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the game has a winner or is tied.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Number of pieces placed so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Where the most recent piece landed.
    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Columns the player to move may choose. Empty once the game is over.
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.open_columns()
    }

    /// Drop a piece for the player to move into `col`, evaluate it, and pass the turn.
    ///
    /// On error nothing changes, so the same player can try another column.
    pub fn play(&mut self, col: usize) -> Result<GameResult, ConnectFourError> {
        if self.is_over() {
            return Err(ConnectFourError::GameOver);
        }

        let placement = self.board.place(col, self.turn)?;
        let result = evaluate_placement(&self.board, placement)?;

        self.phase = match result {
            GameResult::InProgress => GamePhase::InProgress,
            GameResult::Win(player) => GamePhase::Won(player),
            GameResult::Tie => GamePhase::Tied,
        };
        self.moves += 1;
        self.last_placement = Some(placement);
        debug!(moves = self.moves, phase = ?self.phase, "move applied");
        self.turn = self.turn.other();

        Ok(result)
    }
}
