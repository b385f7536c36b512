// Scoring: exact-match task accuracy and per-cell pixel correctness.
// The solver core never sees ground truth; only this module compares
// predictions against it.

use crate::core::grid::{grid_dimensions, same_shape, Grid};

/// All cells, colors and positions must match.
pub fn exact_match(predicted: &Grid, truth: &Grid) -> bool {
    predicted == truth
}

/// Fraction of matching cells. A shape mismatch scores zero: there is no
/// partial credit for a grid of the wrong size.
pub fn pixel_accuracy(predicted: &Grid, truth: &Grid) -> f64 {
    if !same_shape(predicted, truth) {
        return 0.0;
    }
    let (rows, cols) = grid_dimensions(truth);
    let total = rows * cols;
    if total == 0 {
        return 0.0;
    }
    let matching = predicted
        .iter()
        .zip(truth)
        .flat_map(|(pr, tr)| pr.iter().zip(tr))
        .filter(|(p, t)| p == t)
        .count();
    matching as f64 / total as f64
}

/// Aggregate over a batch of (prediction, ground truth) grids.
#[derive(Debug, Clone, Default)]
pub struct Score {
    pub total: usize,
    pub exact: usize,
    pub pixel_acc_sum: f64,
}

impl Score {
    pub fn record(&mut self, predicted: &Grid, truth: &Grid) {
        self.total += 1;
        if exact_match(predicted, truth) {
            self.exact += 1;
        }
        self.pixel_acc_sum += pixel_accuracy(predicted, truth);
    }

    /// Fraction of recorded outputs that matched exactly. Task-level
    /// accuracy is the batch runner's job; this is per output grid.
    pub fn exact_rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.exact as f64 / self.total as f64 }
    }

    pub fn avg_pixel_accuracy(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.pixel_acc_sum / self.total as f64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_cellwise() {
        let a = vec![vec![1, 2], vec![3, 4]];
        let mut b = a.clone();
        assert!(exact_match(&a, &b));
        b[1][1] = 0;
        assert!(!exact_match(&a, &b));
    }

    #[test]
    fn pixel_accuracy_counts_matching_cells() {
        let truth = vec![vec![1, 2], vec![3, 4]];
        let pred = vec![vec![1, 2], vec![3, 0]];
        assert!((pixel_accuracy(&pred, &truth) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn shape_mismatch_scores_zero() {
        let truth = vec![vec![1, 2]];
        let pred = vec![vec![1], vec![2]];
        assert_eq!(pixel_accuracy(&pred, &truth), 0.0);
    }

    #[test]
    fn score_aggregates() {
        let truth = vec![vec![1, 1]];
        let mut score = Score::default();
        score.record(&truth, &truth);
        score.record(&vec![vec![1, 0]], &truth);
        assert_eq!(score.total, 2);
        assert_eq!(score.exact, 1);
        assert!((score.exact_rate() - 0.5).abs() < 1e-9);
        assert!((score.avg_pixel_accuracy() - 0.75).abs() < 1e-9);
    }
}
