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

//! Turn loop for a single game and the play-again loop around it.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use connect_four_logic::{Game, GamePhase, Player};
use tracing::info;

use crate::cli::Cli;
use crate::computer::RandomMover;
use crate::config::{GameConfig, Mode};
use crate::prompt::Prompter;
use crate::render::render;

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Human,
    Computer,
}

fn seat(mode: Mode, player: Player) -> Seat {
    match (mode, player) {
        (Mode::VsComputer, Player::PlayerTwo) => Seat::Computer,
        _ => Seat::Human,
    }
}

fn number(player: Player) -> u8 {
    match player {
        Player::PlayerOne => 1,
        Player::PlayerTwo => 2,
    }
}

/// Play one game to the end and return how it finished.
pub fn play_game<R: BufRead, W: Write>(
    config: &GameConfig,
    prompter: &mut Prompter<R, W>,
    mover: &mut RandomMover,
) -> anyhow::Result<GamePhase> {
    let first = match config.mode {
        Mode::TwoPlayers => Player::PlayerOne,
        Mode::VsComputer => {
            prompter.say("Would you like the first move? (1 - Yes), (2 - No)")?;
            match prompter.choose(1..=2)? {
                1 => Player::PlayerOne,
                _ => Player::PlayerTwo,
            }
        }
    };

    let mut game = Game::new(config.rows, config.cols, first)?;
    info!(?config, %first, "game started");
    prompter.print(&render(game.board()))?;

    while !game.is_over() {
        let player = game.turn();
        let col = match seat(config.mode, player) {
            Seat::Human => {
                prompter.say(&format!(
                    "What column does player {} want to place in?",
                    number(player)
                ))?;
                prompter.read_column(game.board())?
            }
            Seat::Computer => {
                prompter.say("Computer is placing, press enter to continue")?;
                prompter.wait_for_enter()?;
                mover
                    .choose(&game)
                    .context("computer has no open column to play")?
            }
        };

        game.play(col)?;
        prompter.print(&render(game.board()))?;
    }

    let message = match (game.phase(), config.mode) {
        (GamePhase::Won(Player::PlayerTwo), Mode::VsComputer) => {
            "The computer has won!".to_string()
        }
        (GamePhase::Won(player), _) => format!("Player {} has won!", number(player)),
        (GamePhase::Tied, _) => "It is a tie!".to_string(),
        (phase, _) => bail!("game loop stopped in phase {:?}", phase),
    };
    info!(phase = ?game.phase(), moves = game.moves(), "game finished");
    prompter.say(&message)?;

    Ok(game.phase())
}

/// Play games until the user declines another one. Returns how each game finished.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
    mover: &mut RandomMover,
) -> anyhow::Result<Vec<GamePhase>> {
    let mut finished = Vec::new();
    loop {
        let config = GameConfig::resolve(cli, prompter).context("reading game settings")?;
        finished.push(play_game(&config, prompter, mover)?);

        prompter.print("Would you like to play again? (1 - Yes), (0 - No): ")?;
        if prompter.choose(0..=1)? == 0 {
            return Ok(finished);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::prompt::INVALID_INTEGER;

    fn two_players(rows: usize, cols: usize) -> GameConfig {
        GameConfig {
            mode: Mode::TwoPlayers,
            rows,
            cols,
        }
    }

    fn play(config: GameConfig, input: &str, seed: u64) -> (anyhow::Result<GamePhase>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut prompter = Prompter::new(input.as_bytes(), &mut out);
        let mut mover = RandomMover::new(Some(seed));
        let result = play_game(&config, &mut prompter, &mut mover);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_two_player_vertical_win() {
        let (result, text) = play(two_players(4, 4), "0\n1\n0\n1\n0\n1\n0\n", 0);
        assert_eq!(result.unwrap(), GamePhase::Won(Player::PlayerOne));
        assert!(text.contains("What column does player 1 want to place in?"));
        assert!(text.contains("What column does player 2 want to place in?"));
        assert!(text.ends_with("Player 1 has won!\n"), "{}", text);
        // board drawn once up front and after each of the 7 moves.
        assert_eq!(text.matches("  0   1   2   3 \n").count(), 8);
    }

    #[test]
    fn test_invalid_column_reprompts_same_player() {
        let (result, text) = play(two_players(4, 4), "9\nx\n1\n2\n1\n2\n1\n2\n1\n", 0);
        assert_eq!(result.unwrap(), GamePhase::Won(Player::PlayerOne));
        assert_eq!(text.matches(INVALID_INTEGER).count(), 2);
    }

    #[test]
    fn test_two_player_tie() {
        let moves = [2, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3];
        let input: String = moves.iter().map(|m| format!("{}\n", m)).collect();
        let (result, text) = play(two_players(4, 4), &input, 0);
        assert_eq!(result.unwrap(), GamePhase::Tied);
        assert!(text.ends_with("It is a tie!\n"), "{}", text);
    }

    #[test]
    fn test_computer_game_runs_to_the_end() {
        let config = GameConfig {
            mode: Mode::VsComputer,
            rows: 4,
            cols: 4,
        };
        // decline the first move, then cycle through the columns. The computer's "press enter"
        // swallows whatever line comes next, and full columns are re-prompted, so any four
        // consecutive answers always reach an open column.
        let mut input = String::from("2\n");
        for _ in 0..100 {
            input.push_str("0\n1\n2\n3\n");
        }
        let (result, text) = play(config, &input, 11);
        let phase = result.unwrap();
        assert!(phase.is_terminal());
        assert!(text.starts_with("Would you like the first move? (1 - Yes), (2 - No)\n"));
        assert!(text.contains("Computer is placing, press enter to continue\n"));
        let first_turn = text.find("Computer is placing").unwrap();
        assert!(text.find("What column does player 1").map_or(true, |i| i > first_turn));
        let ending = match phase {
            GamePhase::Won(Player::PlayerOne) => "Player 1 has won!\n",
            GamePhase::Won(Player::PlayerTwo) => "The computer has won!\n",
            _ => "It is a tie!\n",
        };
        assert!(text.ends_with(ending), "{}", text);
    }

    #[test]
    fn test_running_out_of_input_fails() {
        let (result, _) = play(two_players(6, 7), "3\n", 0);
        let err = result.unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_replay_loop() {
        colored::control::set_override(false);
        let cli = Cli {
            settings: vec!["2".to_string(), "4".to_string(), "4".to_string()],
            seed: None,
        };
        let win = "0\n1\n0\n1\n0\n1\n0\n";
        let input = format!("{win}5\n1\n{win}0\n");
        let mut out = Vec::new();
        let mut prompter = Prompter::new(input.as_bytes(), &mut out);
        let mut mover = RandomMover::new(Some(0));

        let finished = run(&cli, &mut prompter, &mut mover).unwrap();
        assert_eq!(finished, vec![GamePhase::Won(Player::PlayerOne); 2]);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.matches("Would you like to play again? (1 - Yes), (0 - No): ")
                .count(),
            2
        );
        assert_eq!(text.matches(INVALID_INTEGER).count(), 1);
    }
}
