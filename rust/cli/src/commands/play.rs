//! # Play Command
//!
//! Interactive blackjack session: one to seven players against the house.
//!
//! The session asks for the number of players and their names, then plays
//! rounds until someone answers "n" to the play-again prompt. One deck is
//! shuffled when the table opens and is drawn down across rounds.
//!
//! Closing the input (Ctrl+D) is never fatal: at a hit prompt it means stand,
//! at the play-again prompt it ends the session.

use crate::config;
use crate::console::ConsoleTable;
use crate::error::CliError;
use crate::io_utils::prompt;
use crate::ui;
use crate::validation::{Parsed, is_no, parse_player_count, parse_player_name};
use blackjack_engine::game::{Game, MAX_PLAYERS};
use std::io::{BufRead, Write};
use tracing::info;

/// Handle the play command: interactive blackjack session
///
/// # Arguments
///
/// * `seed` - RNG seed for the shuffle (falls back to config, then random)
/// * `out` - Output stream for game display
/// * `err` - Error stream for validation messages
/// * `stdin` - Input stream for answers to prompts
///
/// # Returns
///
/// * `Ok(())` when the session ends normally
/// * `Err(CliError::Interrupted)` if input closes before the table is set up
/// * `Err(CliError)` for configuration or I/O failures
pub fn handle_play_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    info!(seed, house = %cfg.house_name, "session start");

    ui::write_banner(out)?;
    let count = ask_player_count(out, err, stdin)?;
    let names = ask_player_names(count, out, err, stdin)?;
    writeln!(out)?;

    let mut game = Game::with_house_name(names, &cfg.house_name, seed)?;
    let mut rounds = 0u32;

    loop {
        let input_closed = {
            let mut table = ConsoleTable::new(stdin, out);
            game.play(&mut table);
            if let Some(e) = table.take_failure() {
                return Err(e.into());
            }
            table.input_closed()
        };
        rounds += 1;
        if input_closed {
            ui::display_warning(err, "input closed; ending session")?;
            break;
        }

        match prompt(out, stdin, "\nDo you want to play again? (Y/N): ")? {
            Some(answer) if !is_no(&answer) => continue,
            _ => break,
        }
    }

    writeln!(out)?;
    writeln!(out, "Rounds played: {}", rounds)?;
    info!(rounds, deck_remaining = game.deck_remaining(), "session end");
    Ok(())
}

fn ask_player_count(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<usize, CliError> {
    let question = format!("How many players? (1 - {}): ", MAX_PLAYERS);
    loop {
        let Some(answer) = prompt(out, stdin, &question)? else {
            return Err(CliError::Interrupted(
                "input closed before the player count was entered".to_string(),
            ));
        };
        match parse_player_count(&answer) {
            Parsed::Value(n) => return Ok(n),
            Parsed::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn ask_player_names(
    count: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Vec<String>, CliError> {
    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let Some(answer) = prompt(out, stdin, "Enter player name: ")? else {
            return Err(CliError::Interrupted(
                "input closed before every player was named".to_string(),
            ));
        };
        match parse_player_name(&answer) {
            Parsed::Value(name) => names.push(name),
            Parsed::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(names)
}
