// Orchestrator: run the detectors in priority order, bind the first rule
// that explains every training pair, apply it to the test input.
//
// The detector list is built explicitly; there is no registration side
// channel and no fallback special case. Identity sits at the bottom of the
// list and always matches, so solve() always returns a grid.

use crate::core::grid::Grid;
use crate::detect::{default_detectors, Detector, MatchResult, Transformation};

/// Infer the transformation behind a set of training pairs.
/// Always succeeds: Identity is the floor.
pub fn infer(pairs: &[(Grid, Grid)]) -> Transformation {
    infer_with(&default_detectors(), pairs)
}

/// Same, against an explicit detector order (priority is the caller's).
pub fn infer_with(detectors: &[Detector], pairs: &[(Grid, Grid)]) -> Transformation {
    for detector in detectors {
        if let MatchResult::Matched(t) = detector.detect(pairs) {
            return t;
        }
    }
    Transformation::Identity
}

/// Predict the output for one test input.
pub fn solve(pairs: &[(Grid, Grid)], test_input: &Grid) -> Grid {
    infer(pairs).apply(test_input)
}

/// Prediction plus the rule that produced it, for reporting.
pub fn solve_with_rule(pairs: &[(Grid, Grid)], test_input: &Grid) -> (Grid, Transformation) {
    let rule = infer(pairs);
    let output = rule.apply(test_input);
    (output, rule)
}
