// Strategy detectors.
//
// Each detector inspects every training pair and either binds a concrete
// Transformation that reproduces all of them exactly, or reports NoMatch.
// No partial credit: a rule that explains four pairs out of five is no rule.
// Detectors never panic on degenerate input; malformed pairs are NoMatch.

pub mod geometry;
pub mod frame;
pub mod fill;
pub mod objects;
pub mod colormap;

use crate::core::grid::{self, Grid};

pub use colormap::ColorTable;
pub use fill::FillRule;
pub use frame::FrameRule;
pub use geometry::GeomMap;
pub use objects::TipRule;

/// Outcome of running one detector over a task's training pairs.
#[derive(Debug, Clone)]
pub enum MatchResult {
    NoMatch,
    Matched(Transformation),
}

/// A bound rule: pure, deterministic, closed over its inferred parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    Geometry(GeomMap),
    Frame(FrameRule),
    Fill(FillRule),
    Tip(TipRule),
    ColorMap(ColorTable),
    Identity,
}

impl Transformation {
    pub fn apply(&self, grid: &Grid) -> Grid {
        match self {
            Transformation::Geometry(map) => map.apply(grid),
            Transformation::Frame(rule) => rule.apply(grid),
            Transformation::Fill(rule) => rule.apply(grid),
            Transformation::Tip(rule) => rule.apply(grid),
            Transformation::ColorMap(table) => table.apply(grid),
            Transformation::Identity => grid.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transformation::Geometry(_) => "geometry",
            Transformation::Frame(_) => "frame",
            Transformation::Fill(_) => "fill",
            Transformation::Tip(_) => "tip",
            Transformation::ColorMap(_) => "color_map",
            Transformation::Identity => "identity",
        }
    }
}

/// One strategy in the orchestrator's priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    Geometry,
    Frame,
    RegionFill,
    Objects,
    ColorMap,
    Identity,
}

impl Detector {
    pub fn detect(&self, pairs: &[(Grid, Grid)]) -> MatchResult {
        if pairs.is_empty() || !pairs_well_formed(pairs) {
            // Identity still stands: it is the always-matching floor.
            return match self {
                Detector::Identity => MatchResult::Matched(Transformation::Identity),
                _ => MatchResult::NoMatch,
            };
        }
        let found = match self {
            Detector::Geometry => geometry::detect(pairs).map(Transformation::Geometry),
            Detector::Frame => frame::detect(pairs).map(Transformation::Frame),
            Detector::RegionFill => fill::detect(pairs).map(Transformation::Fill),
            Detector::Objects => objects::detect(pairs).map(Transformation::Tip),
            Detector::ColorMap => colormap::detect(pairs).map(Transformation::ColorMap),
            Detector::Identity => Some(Transformation::Identity),
        };
        match found {
            Some(t) => MatchResult::Matched(t),
            None => MatchResult::NoMatch,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Detector::Geometry => "geometry",
            Detector::Frame => "frame",
            Detector::RegionFill => "region_fill",
            Detector::Objects => "objects",
            Detector::ColorMap => "color_map",
            Detector::Identity => "identity",
        }
    }
}

/// The fixed priority order. Specific rules first, the broad object
/// heuristic late, identity as the always-matching floor.
pub fn default_detectors() -> Vec<Detector> {
    vec![
        Detector::Geometry,
        Detector::Frame,
        Detector::RegionFill,
        Detector::Objects,
        Detector::ColorMap,
        Detector::Identity,
    ]
}

fn pairs_well_formed(pairs: &[(Grid, Grid)]) -> bool {
    pairs
        .iter()
        .all(|(i, o)| grid::is_well_formed(i) && grid::is_well_formed(o))
}

/// Shared verification step: a candidate explains the task only if it
/// reproduces every training output exactly.
pub(crate) fn explains_all<F>(pairs: &[(Grid, Grid)], f: F) -> bool
where
    F: Fn(&Grid) -> Grid,
{
    pairs.iter().all(|(input, output)| f(input) == *output)
}

/// If the output differs from the input only by recoloring some cells to a
/// single common color, return that color. Used by frame and fill inference.
pub(crate) fn single_added_color(input: &Grid, output: &Grid) -> Option<u8> {
    if !grid::same_shape(input, output) {
        return None;
    }
    let mut color: Option<u8> = None;
    for (ri, ro) in input.iter().zip(output) {
        for (&ci, &co) in ri.iter().zip(ro) {
            if ci != co {
                match color {
                    None => color = Some(co),
                    Some(c) if c != co => return None,
                    Some(_) => {}
                }
            }
        }
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matches_even_degenerate_input() {
        let jagged = vec![(vec![vec![1, 2], vec![3]], vec![vec![1]])];
        assert!(matches!(
            Detector::Identity.detect(&jagged),
            MatchResult::Matched(Transformation::Identity)
        ));
        assert!(matches!(Detector::Geometry.detect(&jagged), MatchResult::NoMatch));
        assert!(matches!(Detector::ColorMap.detect(&[]), MatchResult::NoMatch));
    }

    #[test]
    fn single_added_color_inference() {
        let input = vec![vec![0, 1], vec![0, 0]];
        let framed = vec![vec![5, 1], vec![5, 5]];
        assert_eq!(single_added_color(&input, &framed), Some(5));

        let mixed = vec![vec![5, 1], vec![4, 5]];
        assert_eq!(single_added_color(&input, &mixed), None);

        let unchanged = input.clone();
        assert_eq!(single_added_color(&input, &unchanged), None);
    }
}
