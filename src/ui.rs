#![cfg(feature = "std")]

use crate::{
    board::Board,
    common::{Cell, MatchStatus},
};

/// Print the 3x3 grid. Empty cells show their cell number so the player
/// knows what to type.
pub fn print_board(board: &Board) {
    std::println!();
    for row in 0..3 {
        let base = row * 3;
        std::println!(
            "     {} | {} | {} ",
            cell_char(board, base),
            cell_char(board, base + 1),
            cell_char(board, base + 2)
        );
        if row < 2 {
            std::println!("    ---+---+---");
        }
    }
    std::println!();
}

fn cell_char(board: &Board, index: usize) -> char {
    match board.cell(index) {
        Some(Cell::Marked(m)) => m.as_char(),
        _ => char::from_digit(index as u32 + 1, 10).unwrap_or(' '),
    }
}

/// Status line shown under the board: empty while the match runs.
pub fn status_text(status: MatchStatus) -> String {
    match status {
        MatchStatus::Active => String::new(),
        MatchStatus::Won(marker) => format!("Player {} wins!", marker),
        MatchStatus::Draw => "It's a draw!".to_string(),
    }
}
