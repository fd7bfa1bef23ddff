use crate::board::Board;
use rand::Rng;

/// Interface implemented by different player seats.
pub trait Player {
    /// Choose a cell to mark given the current board. `None` means no cell
    /// is available (full board) or the input source is exhausted.
    fn select_cell<R: Rng>(&mut self, rng: &mut R, board: &Board) -> Option<usize>;
}
