pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Every row, column and diagonal, as cell indices.
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

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
