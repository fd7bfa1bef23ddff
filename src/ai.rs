// Cell selection for the unskilled opponent. Uses no heap allocations.

use crate::board::Board;
use rand::Rng;

/// Pick one empty cell uniformly at random, or `None` on a full board.
///
/// Exactly one draw is taken from `rng`, over the candidate count. No
/// weighting and no lookahead, so a seeded rng reproduces a game move for
/// move.
pub fn choose_random_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let candidates = board.empty_cells().count();
    if candidates == 0 {
        return None;
    }
    let pick = rng.random_range(0..candidates);
    board.empty_cells().nth(pick)
}
