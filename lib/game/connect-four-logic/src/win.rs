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
use tracing::info;

use crate::{Board, Cell, ConnectFourError, Location, Placement, Player};

/// Number of same-owner pieces in a line that wins the game.
pub const WIN_LENGTH: usize = 4;

/// Outcome of evaluating the board after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No four-in-a-row and at least one open column.
    InProgress,

    /// The player completed a four-in-a-row.
    Win(Player),

    /// Every column is full and nobody has won.
    Tie,
}

impl GameResult {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// One of the four line orientations a win can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right.
    Horizontal,

    /// Top to bottom.
    Vertical,

    /// Top-left to bottom-right.
    Diagonal,

    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// All orientations, in the order they are checked.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row, col) step in the positive sense of this orientation.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Count cells owned by `cell` walking away from (row, col), not counting (row, col) itself.
/// Stops at the first differing cell or the edge of the board.
fn count_from(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    cell: Cell,
) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row, col);
    loop {
        let next_row = match r.checked_add_signed(d_row) {
            Some(next) if next < board.rows() => next,
            _ => break,
        };
        let next_col = match c.checked_add_signed(d_col) {
            Some(next) if next < board.cols() => next,
            _ => break,
        };
        if board.get(next_row, next_col) != cell {
            break;
        }
        count += 1;
        r = next_row;
        c = next_col;
    }
    count
}

/// Length of the line through (row, col) along `direction`, counting (row, col). Zero for an
/// empty cell.
pub(crate) fn line_length(board: &Board, row: usize, col: usize, direction: Direction) -> usize {
    let cell = board.get(row, col);
    if cell.is_empty() {
        return 0;
    }
    let (d_row, d_col) = direction.step();
    1 + count_from(board, row, col, d_row, d_col, cell)
        + count_from(board, row, col, -d_row, -d_col, cell)
}

/// Decide whether the piece at (row, col), normally the one that was just placed, ends the game.
///
/// A win needs [`WIN_LENGTH`] or more pieces of the same owner in a straight line through the
/// cell. Without a win the game is a tie once [`Board::is_full`], and in progress otherwise.
/// An empty cell never wins.
pub fn evaluate(board: &Board, row: usize, col: usize) -> Result<GameResult, ConnectFourError> {
    if row >= board.rows() || col >= board.cols() {
        return Err(ConnectFourError::OutOfRange(Location::Cell { row, col }));
    }

    if let Some(player) = board.get(row, col).owner() {
        for direction in Direction::ALL {
            let length = line_length(board, row, col, direction);
            if length >= WIN_LENGTH {
                info!(%player, ?direction, length, row, col, "four in a row");
                return Ok(GameResult::Win(player));
            }
        }
    }

    if board.is_full() {
        info!("board is full, game is tied");
        return Ok(GameResult::Tie);
    }
    Ok(GameResult::InProgress)
}

/// [`evaluate`] at the cell a piece landed on.
pub fn evaluate_placement(
    board: &Board,
    placement: Placement,
) -> Result<GameResult, ConnectFourError> {
    evaluate(board, placement.row, placement.col)
}
