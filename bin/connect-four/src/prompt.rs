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

//! Line-based questions and answers over any reader and writer.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use connect_four_logic::Board;
use tracing::debug;

/// Printed whenever an answer is rejected.
pub const INVALID_INTEGER: &str = "Please enter a valid integer: ";

/// Asks questions on `output` and reads the answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Print `text` as is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Read one line without its line ending. Running out of input is an error.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Block until the user presses enter.
    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        self.read_line().map(|_| ())
    }

    /// Read lines until one is made of decimal digits only.
    pub fn read_int(&mut self) -> io::Result<u32> {
        loop {
            let line = self.read_line()?;
            match parse_digits(&line) {
                Some(n) => return Ok(n),
                None => {
                    debug!(%line, "rejected non-integer answer");
                    self.print(INVALID_INTEGER)?;
                }
            }
        }
    }

    /// Read integers until one falls in `range`.
    pub fn choose(&mut self, range: RangeInclusive<u32>) -> io::Result<u32> {
        loop {
            let n = self.read_int()?;
            if range.contains(&n) {
                return Ok(n);
            }
            debug!(n, ?range, "rejected answer out of range");
            self.print(INVALID_INTEGER)?;
        }
    }

    /// Read a column that exists on `board` and still has room.
    pub fn read_column(&mut self, board: &Board) -> io::Result<usize> {
        loop {
            let col = self.read_int()? as usize;
            if let Ok(true) = board.is_column_open(col) {
                return Ok(col);
            }
            debug!(col, "rejected column");
            self.print(INVALID_INTEGER)?;
        }
    }
}

/// Parse an unsigned decimal, rejecting signs, spaces and empty text.
pub(crate) fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
