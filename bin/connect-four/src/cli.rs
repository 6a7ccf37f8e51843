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

use clap::Parser;

/// Play Connect Four in the terminal on boards from 4x4 to 20x20.
///
/// Give PLAYERS ROWS COLS (1 or 2 players, 4 to 20 rows and columns) to skip the setup
/// questions. Anything else in their place is ignored and every setting is asked for.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "connect-four", version)]
pub struct Cli {
    /// PLAYERS ROWS COLS, checked when the game is set up
    #[arg(value_name = "SETTING", num_args = 0.., allow_negative_numbers = true)]
    pub settings: Vec<String>,

    /// Seed for the computer's moves, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}
