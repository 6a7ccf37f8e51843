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

use std::io::{self, BufRead, Write};

use connect_four_logic::{check_dimensions, MAX_DIMENSION, MIN_DIMENSION};
use tracing::warn;

use crate::cli::Cli;
use crate::prompt::{parse_digits, Prompter};

/// Who sits across from player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Player 2 is the computer.
    VsComputer,
    /// Two people take turns at the same terminal.
    TwoPlayers,
}

impl TryFrom<u32> for Mode {
    type Error = u32;

    fn try_from(players: u32) -> Result<Self, Self::Error> {
        match players {
            1 => Ok(Mode::VsComputer),
            2 => Ok(Mode::TwoPlayers),
            other => Err(other),
        }
    }
}

/// Settings for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    pub rows: usize,
    pub cols: usize,
}

impl GameConfig {
    /// `None` unless the player count and both dimensions are allowed.
    pub fn new(players: u32, rows: usize, cols: usize) -> Option<Self> {
        let mode = Mode::try_from(players).ok()?;
        check_dimensions(rows, cols).ok()?;
        Some(Self { mode, rows, cols })
    }

    /// Parse `PLAYERS ROWS COLS` as given on the command line.
    fn from_settings(settings: &[String]) -> Option<Self> {
        match settings {
            [players, rows, cols] => Self::new(
                parse_digits(players)?,
                parse_digits(rows)? as usize,
                parse_digits(cols)? as usize,
            ),
            _ => None,
        }
    }

    /// Use the command line when it names a valid game, otherwise ask for every setting.
    pub fn resolve<R: BufRead, W: Write>(
        cli: &Cli,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<Self> {
        if !cli.settings.is_empty() {
            if let Some(config) = Self::from_settings(&cli.settings) {
                return Ok(config);
            }
            warn!(settings = ?cli.settings, "ignoring invalid command line settings");
        }
        Self::ask(prompter)
    }

    fn ask<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Self> {
        let dimensions = MIN_DIMENSION as u32..=MAX_DIMENSION as u32;

        prompter.say("Would you like to play against the computer (1) or with two players (2)?")?;
        let mode = match prompter.choose(1..=2)? {
            1 => Mode::VsComputer,
            _ => Mode::TwoPlayers,
        };

        prompter.say(&format!(
            "How many rows would you like ({} to {})?",
            MIN_DIMENSION, MAX_DIMENSION
        ))?;
        let rows = prompter.choose(dimensions.clone())? as usize;

        prompter.say(&format!(
            "How many columns would you like ({} to {})?",
            MIN_DIMENSION, MAX_DIMENSION
        ))?;
        let cols = prompter.choose(dimensions)? as usize;

        Ok(Self { mode, rows, cols })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::INVALID_INTEGER;

    fn cli(settings: &[&str]) -> Cli {
        Cli {
            settings: settings.iter().map(|s| s.to_string()).collect(),
            seed: None,
        }
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            GameConfig::new(1, 6, 7),
            Some(GameConfig {
                mode: Mode::VsComputer,
                rows: 6,
                cols: 7
            })
        );
        assert_eq!(GameConfig::new(3, 6, 7), None);
        assert_eq!(GameConfig::new(0, 6, 7), None);
        assert_eq!(GameConfig::new(2, 3, 7), None);
        assert_eq!(GameConfig::new(2, 6, 21), None);
    }

    #[test]
    fn test_valid_command_line_skips_questions() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(&b""[..], &mut out);
        let config = GameConfig::resolve(&cli(&["2", "20", "4"]), &mut prompter).unwrap();
        assert_eq!(
            config,
            GameConfig {
                mode: Mode::TwoPlayers,
                rows: 20,
                cols: 4
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_command_line_asks_everything() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(&b"5\n1\n30\n8\n9\n"[..], &mut out);
        let config = GameConfig::resolve(&cli(&["1", "2", "7"]), &mut prompter).unwrap();
        assert_eq!(
            config,
            GameConfig {
                mode: Mode::VsComputer,
                rows: 8,
                cols: 9
            }
        );

        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "Would you like to play against the computer (1) or with two players (2)?\n\
             {invalid}How many rows would you like (4 to 20)?\n\
             {invalid}How many columns would you like (4 to 20)?\n",
            invalid = INVALID_INTEGER
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_missing_arguments_ask() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(&b"2\n4\n4\n"[..], &mut out);
        let config = GameConfig::resolve(&cli(&["2"]), &mut prompter).unwrap();
        assert_eq!(config.mode, Mode::TwoPlayers);
        assert_eq!((config.rows, config.cols), (4, 4));
    }

    #[test]
    fn test_unparseable_command_line_asks_everything() {
        for settings in [
            &["abc", "6", "7"][..],
            &["-1", "6", "7"][..],
            &["1", "6", "7", "8"][..],
            &["2", "+6", "7"][..],
            &["2", "6", ""][..],
        ] {
            let mut out = Vec::new();
            let mut prompter = Prompter::new(&b"2\n5\n6\n"[..], &mut out);
            let config = GameConfig::resolve(&cli(settings), &mut prompter).unwrap();
            assert_eq!(
                config,
                GameConfig {
                    mode: Mode::TwoPlayers,
                    rows: 5,
                    cols: 6
                },
                "settings {:?}",
                settings
            );
            let text = String::from_utf8(out).unwrap();
            assert!(text.starts_with("Would you like to play against the computer"));
        }
    }

    #[test]
    fn test_no_command_line_asks_everything() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(&b"1\n20\n20\n"[..], &mut out);
        let config = GameConfig::resolve(&cli(&[]), &mut prompter).unwrap();
        assert_eq!(config.mode, Mode::VsComputer);
        assert_eq!((config.rows, config.cols), (20, 20));
    }
}
