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

#![warn(missing_docs)]

//! Connect Four game logic.
//!
//! This is a library for playing Connect Four on any board between 4x4 and 20x20. It has no
//! I/O of its own: a driver drops pieces with [`Board::place`] (or [`Game::play`]), then asks
//! [`evaluate`] whether the piece that just landed ended the game.

use serde::{Deserialize, Serialize};

mod board;
mod game;
mod win;

pub use board::{check_dimensions, Board, Placement, MAX_DIMENSION, MIN_DIMENSION};
pub use game::{Game, GamePhase};
pub use win::{evaluate, evaluate_placement, Direction, GameResult, WIN_LENGTH};

/// Connect Four error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectFourError {
    /// Board dimensions are outside of [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    #[error(
        "invalid board dimensions: {rows} rows by {cols} columns (each must be {min} to {max})",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// A column or cell outside of the board.
    #[error("out of range: {0}")]
    OutOfRange(Location),

    /// Column is full.
    #[error("column is full: {0}")]
    ColumnFull(usize),

    /// The game already has a winner or is tied.
    #[error("game is over")]
    GameOver,
}

/// Where an out of range lookup was aimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// A column index.
    Column(usize),

    /// A single cell.
    Cell {
        /// Row index, 0 is the top.
        row: usize,
        /// Column index.
        col: usize,
    },
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Column(col) => write!(f, "column {}", col),
            Location::Cell { row, col } => write!(f, "cell (row {}, column {})", row, col),
        }
    }
}

/// Connect Four player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1, plays `X`.
    PlayerOne,

    /// Player 2, plays `O`.
    PlayerTwo,
}

impl Player {
    /// Get the other player.
    pub fn other(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Character used to draw this player's pieces.
    pub fn mark(self) -> char {
        match self {
            Player::PlayerOne => 'X',
            Player::PlayerTwo => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "Player 1"),
            Player::PlayerTwo => write!(f, "Player 2"),
        }
    }
}

/// Connect Four cell. Part of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,

    /// Cell holding a piece of player 1.
    PlayerOne,

    /// Cell holding a piece of player 2.
    PlayerTwo,
}

impl Cell {
    /// The owner of the piece in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
        }
    }

    /// Whether the cell has no piece in it.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character used to draw this cell, a space when empty.
    pub fn mark(self) -> char {
        self.owner().map_or(' ', Player::mark)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}
