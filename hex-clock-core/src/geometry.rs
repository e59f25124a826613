//! Everything here is 8x8 and row-major. The Sense HAT is not snake wired so there is no `SnakeXY`.

/// pixels per side of the matrix
pub const WIDTH: usize = 8;

/// total pixels on the matrix
pub const PIXELS: usize = WIDTH * WIDTH;

/// `grid[y][x]`
pub type Grid<T> = [[T; WIDTH]; WIDTH];

/// row-major
pub fn n_to_xy(n: usize) -> (usize, usize) {
    (n % WIDTH, n / WIDTH)
}

/// row-major
pub fn xy_to_n(x: usize, y: usize) -> usize {
    y * WIDTH + x
}

/// One quarter turn anti-clockwise. Column `x` becomes row `WIDTH - 1 - x`.
fn quarter_turn<T: Copy>(grid: &Grid<T>) -> Grid<T> {
    let mut rotated = *grid;

    for (y, row) in rotated.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = grid[x][WIDTH - 1 - y];
        }
    }

    rotated
}

/// Rotate by `90° * turns`. Positive is anti-clockwise, negative is clockwise.
///
/// The input is never modified. Any multiple of 4 returns an identical copy.
pub fn rotate_quarter_turns<T: Copy>(grid: &Grid<T>, turns: i32) -> Grid<T> {
    let mut rotated = *grid;

    for _ in 0..turns.rem_euclid(4) {
        rotated = quarter_turn(&rotated);
    }

    rotated
}
