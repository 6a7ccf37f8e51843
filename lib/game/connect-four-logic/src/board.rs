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

use crate::{Cell, ConnectFourError, Location, Player};

/// Smallest allowed number of rows or columns.
pub const MIN_DIMENSION: usize = 4;

/// Largest allowed number of rows or columns.
pub const MAX_DIMENSION: usize = 20;

/// Check that a `rows` by `cols` board is allowed.
pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), ConnectFourError> {
    let allowed = MIN_DIMENSION..=MAX_DIMENSION;
    if !allowed.contains(&rows) || !allowed.contains(&cols) {
        return Err(ConnectFourError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Where a dropped piece came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Row the piece landed on, 0 is the top.
    pub row: usize,

    /// Column the piece was dropped into.
    pub col: usize,
}

/// Connect Four board. This only contains the cells, and not the players or the turn.
///
/// Cells are stored row-major with row 0 at the top. Pieces only enter through [`Board::place`],
/// so a filled cell never has an empty cell underneath it. [`Board::is_full`] relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

// print out cells with column numbers on top, which start at 0.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for col in 0..self.cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = match self.get(row, col) {
                    Cell::Empty => '.',
                    cell => cell.mark(),
                };
                write!(f, "{:>3}", c)?;
            }
            if row < self.rows - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Create a new empty board with `rows` rows and `cols` columns.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConnectFourError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            cells: vec![Cell::Empty; rows * cols],
            rows,
            cols,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Unchecked lookup; callers must stay inside the grid.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn check_col(&self, col: usize) -> Result<(), ConnectFourError> {
        if col >= self.cols {
            return Err(ConnectFourError::OutOfRange(Location::Column(col)));
        }
        Ok(())
    }

    /// Get a cell.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, ConnectFourError> {
        if row >= self.rows || col >= self.cols {
            return Err(ConnectFourError::OutOfRange(Location::Cell { row, col }));
        }
        Ok(self.get(row, col))
    }

    /// Whether another piece fits in `col`, i.e. its top cell is empty.
    pub fn is_column_open(&self, col: usize) -> Result<bool, ConnectFourError> {
        self.check_col(col)?;
        Ok(self.get(0, col).is_empty())
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.get(0, col).is_empty())
            .collect()
    }

    /// Drop a piece for `player` into `col`. It lands on the lowest empty cell of the column.
    pub fn place(&mut self, col: usize, player: Player) -> Result<Placement, ConnectFourError> {
        self.check_col(col)?;
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(ConnectFourError::ColumnFull(col))?;

        self.cells[row * self.cols + col] = Cell::from(player);
        debug!(row, col, %player, "placed piece");
        Ok(Placement { row, col })
    }

    /// Whether no column can take another piece. Only the top row is inspected.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.get(0, col).is_empty())
    }
}
