// Connected-component extraction. Objects are maximal same-color regions
// under 4-connectivity (8-connectivity available as an alternate hypothesis
// for the region-fill detector).

use super::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Four,
    Eight,
}

impl Connectivity {
    pub fn neighbors(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Four => &[(0, 1), (0, -1), (1, 0), (-1, 0)],
            Connectivity::Eight => &[
                (0, 1), (0, -1), (1, 0), (-1, 0),
                (1, 1), (1, -1), (-1, 1), (-1, -1),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub cells: Vec<(usize, usize)>,
    pub color: u8,
    pub min_r: usize,
    pub min_c: usize,
    pub max_r: usize,
    pub max_c: usize,
}

impl Object {
    pub fn from_cells(mut cells: Vec<(usize, usize)>, color: u8) -> Self {
        cells.sort();
        let min_r = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_c = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let max_r = cells.iter().map(|&(r, _)| r).max().unwrap_or(0);
        let max_c = cells.iter().map(|&(_, c)| c).max().unwrap_or(0);
        Self { cells, color, min_r, min_c, max_r, max_c }
    }

    pub fn area(&self) -> usize { self.cells.len() }

    pub fn contains(&self, r: usize, c: usize) -> bool {
        self.cells.binary_search(&(r, c)).is_ok()
    }

    /// Count of in-object orthogonal neighbors of a cell.
    pub fn neighbor_count(&self, r: usize, c: usize) -> usize {
        Connectivity::Four
            .neighbors()
            .iter()
            .filter(|&&(dr, dc)| {
                let nr = r as i32 + dr;
                let nc = c as i32 + dc;
                nr >= 0 && nc >= 0 && self.contains(nr as usize, nc as usize)
            })
            .count()
    }
}

/// Same-color connected components, row-major discovery order.
/// Background (0) is skipped when `ignore_bg` is set.
pub fn connected_components(grid: &Grid, conn: Connectivity, ignore_bg: bool) -> Vec<Object> {
    if grid.is_empty() { return Vec::new(); }
    let rows = grid.len();
    let cols = grid[0].len();
    let mut visited = vec![vec![false; cols]; rows];
    let mut objects = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            if visited[r][c] { continue; }
            let color = grid[r][c];
            if ignore_bg && color == 0 { continue; }

            let mut cells = Vec::new();
            let mut stack = vec![(r, c)];
            visited[r][c] = true;

            while let Some((cr, cc)) = stack.pop() {
                cells.push((cr, cc));
                for &(dr, dc) in conn.neighbors() {
                    let nr = cr as i32 + dr;
                    let nc = cc as i32 + dc;
                    if nr >= 0 && nr < rows as i32 && nc >= 0 && nc < cols as i32 {
                        let (nr, nc) = (nr as usize, nc as usize);
                        if !visited[nr][nc] && grid[nr][nc] == color {
                            visited[nr][nc] = true;
                            stack.push((nr, nc));
                        }
                    }
                }
            }
            objects.push(Object::from_cells(cells, color));
        }
    }
    objects
}

/// Components of the background color only, border-reachability not implied.
pub fn background_regions(grid: &Grid, conn: Connectivity) -> Vec<Object> {
    connected_components(grid, conn, false)
        .into_iter()
        .filter(|o| o.color == 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_objects_same_color() {
        let g = vec![
            vec![1, 1, 0],
            vec![0, 0, 0],
            vec![0, 1, 1],
        ];
        let objs = connected_components(&g, Connectivity::Four, true);
        assert_eq!(objs.len(), 2);
        assert_eq!(objs[0].cells, vec![(0, 0), (0, 1)]);
        assert_eq!(objs[1].cells, vec![(2, 1), (2, 2)]);
    }

    #[test]
    fn diagonal_cells_join_under_eight() {
        let g = vec![
            vec![2, 0],
            vec![0, 2],
        ];
        assert_eq!(connected_components(&g, Connectivity::Four, true).len(), 2);
        assert_eq!(connected_components(&g, Connectivity::Eight, true).len(), 1);
    }

    #[test]
    fn neighbor_count_on_a_bar() {
        let g = vec![vec![3, 3, 3]];
        let objs = connected_components(&g, Connectivity::Four, true);
        assert_eq!(objs.len(), 1);
        let bar = &objs[0];
        assert_eq!(bar.neighbor_count(0, 0), 1);
        assert_eq!(bar.neighbor_count(0, 1), 2);
        assert_eq!(bar.neighbor_count(0, 2), 1);
    }

    #[test]
    fn background_regions_split_by_wall() {
        let g = vec![
            vec![0, 5, 0],
            vec![0, 5, 0],
        ];
        let regions = background_regions(&g, Connectivity::Four);
        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| r.color == 0));
    }
}
