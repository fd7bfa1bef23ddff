#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{board::Board, config::BOARD_CELLS, player::Player};
use rand::Rng;

/// Interactive seat reading cell numbers from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a cell number 1-9 (row-major) into a board index 0-8.
pub fn parse_cell(input: &str) -> Result<usize, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Empty input".to_string());
    }
    let cell: usize = trimmed
        .parse()
        .map_err(|_| format!("Invalid cell '{}' - must be a number 1-9", trimmed))?;
    if cell == 0 || cell > BOARD_CELLS {
        return Err(format!("Cell {} out of bounds - must be 1-9", cell));
    }
    Ok(cell - 1)
}

impl Player for CliPlayer {
    fn select_cell<R: Rng>(&mut self, _rng: &mut R, board: &Board) -> Option<usize> {
        let stdin = io::stdin();
        loop {
            print!("Your move (1-9): ");
            io::stdout().flush().ok();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_cell(&line) {
                Ok(index) => {
                    if board.cell(index).is_some_and(|c| c.is_empty()) {
                        return Some(index);
                    }
                    println!("Cell {} is already taken", index + 1);
                }
                Err(msg) => println!("{}", msg),
            }
        }
    }
}
