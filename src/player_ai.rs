use crate::{ai, board::Board, player::Player};
use rand::Rng;

/// Unskilled seat that picks uniformly at random among empty cells, the same
/// way the engine's own opponent does.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_cell<R: Rng>(&mut self, rng: &mut R, board: &Board) -> Option<usize> {
        ai::choose_random_cell(board, rng)
    }
}
