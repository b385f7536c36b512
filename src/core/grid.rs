// Grid representation and the geometry primitives shared by all detectors.
//
// A grid is a rectangle of color indices 0-9 with 0 as background.
// Every operation returns a fresh grid; nothing mutates in place.

pub type Grid = Vec<Vec<u8>>;

pub const MAX_COLOR: u8 = 9;

/// Non-empty, rectangular, all colors in 0..=9.
pub fn is_well_formed(grid: &Grid) -> bool {
    if grid.is_empty() || grid[0].is_empty() {
        return false;
    }
    let cols = grid[0].len();
    grid.iter()
        .all(|row| row.len() == cols && row.iter().all(|&c| c <= MAX_COLOR))
}

pub fn grid_dimensions(grid: &Grid) -> (usize, usize) {
    if grid.is_empty() { (0, 0) } else { (grid.len(), grid[0].len()) }
}

pub fn same_shape(a: &Grid, b: &Grid) -> bool {
    grid_dimensions(a) == grid_dimensions(b)
}

pub fn rotate_cw(g: &Grid) -> Grid {
    if g.is_empty() { return g.clone(); }
    let rows = g.len();
    let cols = g[0].len();
    (0..cols).map(|c| (0..rows).rev().map(|r| g[r][c]).collect()).collect()
}

pub fn rotate_ccw(g: &Grid) -> Grid {
    if g.is_empty() { return g.clone(); }
    let rows = g.len();
    let cols = g[0].len();
    (0..cols).rev().map(|c| (0..rows).map(|r| g[r][c]).collect()).collect()
}

pub fn rotate_180(g: &Grid) -> Grid {
    g.iter().rev().map(|row| row.iter().rev().cloned().collect()).collect()
}

pub fn flip_h(g: &Grid) -> Grid {
    g.iter().map(|row| row.iter().rev().cloned().collect()).collect()
}

pub fn flip_v(g: &Grid) -> Grid {
    g.iter().rev().cloned().collect()
}

pub fn transpose(g: &Grid) -> Grid {
    if g.is_empty() { return g.clone(); }
    let cols = g[0].len();
    (0..cols).map(|c| g.iter().map(|row| row[c]).collect()).collect()
}

/// Reflection across the anti-diagonal: result[i][j] = g[R-1-j][C-1-i].
pub fn anti_transpose(g: &Grid) -> Grid {
    if g.is_empty() { return g.clone(); }
    let rows = g.len();
    let cols = g[0].len();
    (0..cols)
        .map(|i| (0..rows).map(|j| g[rows - 1 - j][cols - 1 - i]).collect())
        .collect()
}

/// Bounding box of non-background cells as (min_r, min_c, max_r, max_c).
pub fn nonzero_bbox(g: &Grid) -> Option<(usize, usize, usize, usize)> {
    let mut bbox: Option<(usize, usize, usize, usize)> = None;
    for (r, row) in g.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell != 0 {
                bbox = Some(match bbox {
                    None => (r, c, r, c),
                    Some((mr, mc, xr, xc)) => (mr.min(r), mc.min(c), xr.max(r), xc.max(c)),
                });
            }
        }
    }
    bbox
}
