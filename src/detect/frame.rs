// Boundary/frame detector.
//
// Three frame hypotheses, checked in order:
// 1. the grid's own outermost ring(s) recolored (thickness inferred),
// 2. the outline of the non-background bounding box recolored,
// 3. a 1-cell-expanded frame around every connected component, drawn on
//    background cells only.
// The frame color is inferred from the cells the output adds, never assumed.

use crate::core::grid::{self, Grid};
use crate::core::object::{connected_components, Connectivity};

use super::{explains_all, single_added_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRule {
    /// Recolor the outermost `thickness` rings of the grid.
    OuterBorder { color: u8, thickness: usize },
    /// Recolor the perimeter of the bounding box of non-background cells.
    BBoxOutline { color: u8 },
    /// Draw a frame one cell outside each object's bounding box,
    /// touching background cells only.
    ComponentFrames { color: u8 },
}

impl FrameRule {
    pub fn apply(&self, g: &Grid) -> Grid {
        match *self {
            FrameRule::OuterBorder { color, thickness } => outer_border(g, color, thickness),
            FrameRule::BBoxOutline { color } => bbox_outline(g, color),
            FrameRule::ComponentFrames { color } => component_frames(g, color),
        }
    }
}

pub fn detect(pairs: &[(Grid, Grid)]) -> Option<FrameRule> {
    let (first_in, first_out) = pairs.first()?;
    // A frame rule that changes nothing is indistinguishable from identity.
    let color = single_added_color(first_in, first_out)?;

    // Thickness bound comes from the largest pair: a thick border can cover
    // a small training grid entirely and still be the rule.
    let max_thickness = pairs
        .iter()
        .map(|(input, _)| {
            let (rows, cols) = grid::grid_dimensions(input);
            rows.min(cols).div_ceil(2)
        })
        .max()?;
    for thickness in 1..=max_thickness {
        let rule = FrameRule::OuterBorder { color, thickness };
        if explains_all(pairs, |g| rule.apply(g)) {
            return Some(rule);
        }
    }

    for rule in [
        FrameRule::BBoxOutline { color },
        FrameRule::ComponentFrames { color },
    ] {
        if explains_all(pairs, |g| rule.apply(g)) {
            return Some(rule);
        }
    }
    None
}

fn outer_border(g: &Grid, color: u8, thickness: usize) -> Grid {
    if g.is_empty() { return g.clone(); }
    let rows = g.len();
    let cols = g[0].len();
    let mut result = g.clone();
    for r in 0..rows {
        for c in 0..cols {
            if r < thickness || r >= rows - thickness.min(rows)
                || c < thickness || c >= cols - thickness.min(cols)
            {
                result[r][c] = color;
            }
        }
    }
    result
}

fn bbox_outline(g: &Grid, color: u8) -> Grid {
    let mut result = g.clone();
    let Some((min_r, min_c, max_r, max_c)) = grid::nonzero_bbox(g) else {
        return result;
    };
    for c in min_c..=max_c {
        result[min_r][c] = color;
        result[max_r][c] = color;
    }
    for r in min_r..=max_r {
        result[r][min_c] = color;
        result[r][max_c] = color;
    }
    result
}

fn component_frames(g: &Grid, color: u8) -> Grid {
    if g.is_empty() { return g.clone(); }
    let rows = g.len();
    let cols = g[0].len();
    let mut result = g.clone();
    for obj in connected_components(g, Connectivity::Four, true) {
        let top = obj.min_r.saturating_sub(1);
        let left = obj.min_c.saturating_sub(1);
        let bottom = (obj.max_r + 1).min(rows - 1);
        let right = (obj.max_c + 1).min(cols - 1);
        for c in left..=right {
            if result[top][c] == 0 { result[top][c] = color; }
            if result[bottom][c] == 0 { result[bottom][c] = color; }
        }
        for r in top..=bottom {
            if result[r][left] == 0 { result[r][left] = color; }
            if result[r][right] == 0 { result[r][right] = color; }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_recolor_generalizes_across_sizes() {
        let small = vec![
            vec![1, 1, 1],
            vec![1, 2, 1],
            vec![1, 1, 1],
        ];
        let small_out = vec![
            vec![5, 5, 5],
            vec![5, 2, 5],
            vec![5, 5, 5],
        ];
        let big = vec![
            vec![0, 0, 0, 0],
            vec![0, 7, 7, 0],
            vec![0, 7, 7, 0],
            vec![0, 0, 0, 0],
        ];
        let big_out = vec![
            vec![5, 5, 5, 5],
            vec![5, 7, 7, 5],
            vec![5, 7, 7, 5],
            vec![5, 5, 5, 5],
        ];
        let rule = detect(&[(small, small_out), (big, big_out)]).unwrap();
        assert_eq!(rule, FrameRule::OuterBorder { color: 5, thickness: 1 });

        // thickness 1 carries over to a test grid of yet another size
        let test = vec![vec![0, 0], vec![0, 0]];
        assert_eq!(rule.apply(&test), vec![vec![5, 5], vec![5, 5]]);
    }

    #[test]
    fn bbox_outline_rule() {
        let input = vec![
            vec![0, 0, 0, 0],
            vec![0, 3, 3, 0],
            vec![0, 3, 3, 0],
            vec![0, 0, 0, 0],
        ];
        let output = vec![
            vec![0, 0, 0, 0],
            vec![0, 8, 8, 0],
            vec![0, 8, 8, 0],
            vec![0, 0, 0, 0],
        ];
        let rule = detect(&[(input, output)]).unwrap();
        assert_eq!(rule, FrameRule::BBoxOutline { color: 8 });
    }

    #[test]
    fn component_frames_drawn_on_background_only() {
        let input = vec![
            vec![0, 0, 0, 0],
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let output = component_frames(&input, 4);
        assert_eq!(output[0][0], 4);
        assert_eq!(output[0][2], 4);
        assert_eq!(output[2][1], 4);
        assert_eq!(output[1][1], 2); // object untouched
        assert_eq!(output[3][3], 0); // outside the frame untouched

        let rule = detect(&[(input.clone(), output)]).unwrap();
        assert_eq!(rule, FrameRule::ComponentFrames { color: 4 });
    }

    #[test]
    fn empty_training_set_has_no_rule() {
        assert_eq!(detect(&[]), None);
    }

    #[test]
    fn thickness_bounded_by_largest_pair() {
        // a thickness-2 border consumes the 2x2 pair entirely; only the
        // 5x5 pair pins the thickness down
        let small_in = vec![vec![0, 0], vec![0, 0]];
        let small_out = vec![vec![5, 5], vec![5, 5]];
        let mut big_in = vec![vec![0u8; 5]; 5];
        big_in[2][2] = 1;
        let mut big_out = vec![vec![5u8; 5]; 5];
        big_out[2][2] = 1;
        let rule = detect(&[(small_in, small_out), (big_in, big_out)]).unwrap();
        assert_eq!(rule, FrameRule::OuterBorder { color: 5, thickness: 2 });
    }

    #[test]
    fn mixed_added_colors_reject() {
        let input = vec![vec![0, 0], vec![0, 0]];
        let output = vec![vec![5, 4], vec![4, 5]];
        assert_eq!(detect(&[(input, output)]), None);
    }
}
