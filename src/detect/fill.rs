// Region-fill detector.
//
// Hypotheses, in order:
// 1. enclosed background filled with one inferred color (4- then 8-conn),
// 2. each enclosed background region filled with its own wall color,
// 3. single-cell markers extended into full rows/columns/crosses.
// "Enclosed" means not reachable from the grid border through background.

use crate::core::grid::Grid;
use crate::core::object::{background_regions, Connectivity};

use super::{explains_all, single_added_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDir {
    Horizontal,
    Vertical,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    Enclosed { color: u8, conn: Connectivity },
    EnclosedByWall { conn: Connectivity },
    MarkerLines(LineDir),
}

impl FillRule {
    pub fn apply(&self, g: &Grid) -> Grid {
        match *self {
            FillRule::Enclosed { color, conn } => fill_enclosed(g, color, conn),
            FillRule::EnclosedByWall { conn } => fill_enclosed_by_wall(g, conn),
            FillRule::MarkerLines(dir) => extend_marker_lines(g, dir),
        }
    }
}

pub fn detect(pairs: &[(Grid, Grid)]) -> Option<FillRule> {
    let (first_in, first_out) = pairs.first()?;
    let mut candidates = Vec::new();
    if let Some(color) = single_added_color(first_in, first_out) {
        candidates.push(FillRule::Enclosed { color, conn: Connectivity::Four });
        candidates.push(FillRule::Enclosed { color, conn: Connectivity::Eight });
    }
    candidates.push(FillRule::EnclosedByWall { conn: Connectivity::Four });
    candidates.push(FillRule::EnclosedByWall { conn: Connectivity::Eight });
    candidates.push(FillRule::MarkerLines(LineDir::Both));
    candidates.push(FillRule::MarkerLines(LineDir::Horizontal));
    candidates.push(FillRule::MarkerLines(LineDir::Vertical));

    candidates.into_iter().find(|rule| {
        // A fill that changes nothing collapses into identity; require work.
        explains_all(pairs, |g| rule.apply(g))
            && pairs.iter().any(|(input, output)| input != output)
    })
}

/// Background cells not reachable from the border through background.
fn enclosed_mask(g: &Grid, conn: Connectivity) -> Vec<Vec<bool>> {
    let rows = g.len();
    let cols = g[0].len();
    let mut reachable = vec![vec![false; cols]; rows];
    let mut stack = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if (r == 0 || r == rows - 1 || c == 0 || c == cols - 1) && g[r][c] == 0 {
                reachable[r][c] = true;
                stack.push((r, c));
            }
        }
    }
    while let Some((r, c)) = stack.pop() {
        for &(dr, dc) in conn.neighbors() {
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            if nr >= 0 && nr < rows as i32 && nc >= 0 && nc < cols as i32 {
                let (nr, nc) = (nr as usize, nc as usize);
                if !reachable[nr][nc] && g[nr][nc] == 0 {
                    reachable[nr][nc] = true;
                    stack.push((nr, nc));
                }
            }
        }
    }
    let mut enclosed = vec![vec![false; cols]; rows];
    for r in 0..rows {
        for c in 0..cols {
            enclosed[r][c] = g[r][c] == 0 && !reachable[r][c];
        }
    }
    enclosed
}

fn fill_enclosed(g: &Grid, color: u8, conn: Connectivity) -> Grid {
    if g.is_empty() { return g.clone(); }
    let enclosed = enclosed_mask(g, conn);
    let mut result = g.clone();
    for (r, row) in enclosed.iter().enumerate() {
        for (c, &inside) in row.iter().enumerate() {
            if inside {
                result[r][c] = color;
            }
        }
    }
    result
}

fn fill_enclosed_by_wall(g: &Grid, conn: Connectivity) -> Grid {
    if g.is_empty() { return g.clone(); }
    let rows = g.len();
    let cols = g[0].len();
    let enclosed = enclosed_mask(g, conn);
    let mut result = g.clone();

    for region in background_regions(g, conn) {
        if !region.cells.iter().all(|&(r, c)| enclosed[r][c]) {
            continue;
        }
        // Fill only when the region is walled in by a single color.
        let mut wall: Option<u8> = None;
        let mut uniform = true;
        for &(r, c) in &region.cells {
            for &(dr, dc) in conn.neighbors() {
                let nr = r as i32 + dr;
                let nc = c as i32 + dc;
                if nr >= 0 && nr < rows as i32 && nc >= 0 && nc < cols as i32 {
                    let v = g[nr as usize][nc as usize];
                    if v != 0 {
                        match wall {
                            None => wall = Some(v),
                            Some(w) if w != v => uniform = false,
                            Some(_) => {}
                        }
                    }
                }
            }
        }
        if let (Some(w), true) = (wall, uniform) {
            for &(r, c) in &region.cells {
                result[r][c] = w;
            }
        }
    }
    result
}

fn extend_marker_lines(g: &Grid, dir: LineDir) -> Grid {
    use crate::core::object::connected_components;
    if g.is_empty() { return g.clone(); }
    let rows = g.len();
    let cols = g[0].len();
    let mut result = g.clone();
    for obj in connected_components(g, Connectivity::Four, true) {
        if obj.area() != 1 {
            continue;
        }
        let (r, c) = obj.cells[0];
        if matches!(dir, LineDir::Horizontal | LineDir::Both) {
            for cc in 0..cols {
                if result[r][cc] == 0 { result[r][cc] = obj.color; }
            }
        }
        if matches!(dir, LineDir::Vertical | LineDir::Both) {
            for rr in 0..rows {
                if result[rr][c] == 0 { result[rr][c] = obj.color; }
            }
        }
    }
    result
}
