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

use colored::Colorize;
use connect_four_logic::{Board, Cell};

/// Draw the board with column numbers on top and a checkerboard of shaded cells.
///
/// Every cell is four characters wide, `|` then the mark padded by a space each side. A cell is
/// shaded black on white when its row and column have the same parity.
pub fn render(board: &Board) -> String {
    let mut s = String::with_capacity((board.cols() * 4 + 1) * (board.rows() + 1) * 4);

    for col in 0..board.cols() {
        // two-digit numbers eat the trailing space.
        s.push_str(&format!("  {:<2}", col));
    }
    s.push('\n');

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let mark = board.cell_at(row, col).map_or(' ', Cell::mark);
            let body = format!(" {} ", mark);
            s.push('|');
            if row % 2 == col % 2 {
                s.push_str(&body.black().on_white().to_string());
            } else {
                s.push_str(&body);
            }
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use connect_four_logic::Player;

    use super::*;

    #[test]
    fn test_render_plain() {
        colored::control::set_override(false);
        let mut board = Board::new(4, 4).unwrap();
        board.place(0, Player::PlayerOne).unwrap();
        board.place(0, Player::PlayerTwo).unwrap();
        board.place(3, Player::PlayerTwo).unwrap();

        let expected = concat!(
            "  0   1   2   3 \n",
            "|   |   |   |   \n",
            "|   |   |   |   \n",
            "| O |   |   |   \n",
            "| X |   |   | O \n",
        );
        assert_eq!(render(&board), expected);
    }

    #[test]
    fn test_header_keeps_alignment_past_ten_columns() {
        colored::control::set_override(false);
        let board = Board::new(4, 12).unwrap();
        let rendered = render(&board);
        let header = rendered.lines().next().unwrap();
        assert!(header.ends_with("  9   10  11"), "{:?}", header);
        assert_eq!(header.len(), 12 * 4);
        for line in rendered.lines().skip(1) {
            assert_eq!(line.len(), 12 * 4);
        }
    }
}
