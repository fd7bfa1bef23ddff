pub const BOARD_CELLS: usize = 9;

/// The eight winning lines in fixed scan order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Pacing delay before the opponent answers a player move.
pub const OPPONENT_DELAY_MS: u64 = 500;
