pub const GRID_WIDTH: usize = 3;
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_WIDTH;

/// The 3 rows, 3 columns and 2 diagonals, as row-major board index triples.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
