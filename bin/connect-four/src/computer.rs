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

use connect_four_logic::Game;
use rand::prelude::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Computer opponent that picks uniformly among the columns with room left.
pub struct RandomMover {
    rng: rand_pcg::Pcg64,
}

impl RandomMover {
    /// Seeded movers replay the same choices, unseeded ones draw from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => rand_pcg::Pcg64::seed_from_u64(seed),
            None => rand_pcg::Pcg64::from_entropy(),
        };
        Self { rng }
    }

    /// `None` once the game is over.
    pub fn choose(&mut self, game: &Game) -> Option<usize> {
        let col = game.open_columns().choose(&mut self.rng).copied();
        debug!(?col, "computer picked a column");
        col
    }
}
