// Geometric-transform detector: one fixed isometry explains every pair.

use crate::core::grid::{self, Grid};

use super::explains_all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomMap {
    FlipH,
    FlipV,
    Rotate90,
    Rotate180,
    Rotate270,
    Transpose,
    AntiTranspose,
}

impl GeomMap {
    pub fn apply(&self, g: &Grid) -> Grid {
        match self {
            GeomMap::FlipH => grid::flip_h(g),
            GeomMap::FlipV => grid::flip_v(g),
            GeomMap::Rotate90 => grid::rotate_cw(g),
            GeomMap::Rotate180 => grid::rotate_180(g),
            GeomMap::Rotate270 => grid::rotate_ccw(g),
            GeomMap::Transpose => grid::transpose(g),
            GeomMap::AntiTranspose => grid::anti_transpose(g),
        }
    }

    /// Candidate order is part of the contract: when several maps fit
    /// (symmetric grids), the earliest one is the bound rule.
    pub const CANDIDATES: [GeomMap; 7] = [
        GeomMap::FlipH,
        GeomMap::FlipV,
        GeomMap::Rotate90,
        GeomMap::Rotate180,
        GeomMap::Rotate270,
        GeomMap::Transpose,
        GeomMap::AntiTranspose,
    ];
}

pub fn detect(pairs: &[(Grid, Grid)]) -> Option<GeomMap> {
    pairs.first()?;
    GeomMap::CANDIDATES
        .iter()
        .copied()
        .find(|map| explains_all(pairs, |g| map.apply(g)))
}
