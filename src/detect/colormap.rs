// Color-map detector: same shape, same layout, colors substituted through
// one global table. Built from the union of (input, output) colors at every
// cell across all pairs; any contradiction rejects the whole task.

use rustc_hash::FxHashMap;

use crate::core::grid::{same_shape, Grid};

use super::explains_all;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    map: FxHashMap<u8, u8>,
}

impl ColorTable {
    pub fn apply(&self, g: &Grid) -> Grid {
        g.iter()
            .map(|row| row.iter().map(|c| *self.map.get(c).unwrap_or(c)).collect())
            .collect()
    }

    pub fn get(&self, color: u8) -> Option<u8> {
        self.map.get(&color).copied()
    }
}

pub fn detect(pairs: &[(Grid, Grid)]) -> Option<ColorTable> {
    let mut map: FxHashMap<u8, u8> = FxHashMap::default();
    let mut changed = false;

    for (input, output) in pairs {
        if !same_shape(input, output) {
            return None;
        }
        for (ri, ro) in input.iter().zip(output) {
            for (&ci, &co) in ri.iter().zip(ro) {
                match map.get(&ci) {
                    Some(&prev) if prev != co => return None, // contradiction
                    Some(_) => {}
                    None => { map.insert(ci, co); }
                }
                if ci != co {
                    changed = true;
                }
            }
        }
    }
    if !changed {
        return None;
    }

    let table = ColorTable { map };
    // The union table is consistent by construction; this re-check keeps the
    // detector sound against its own application path.
    explains_all(pairs, |g| table.apply(g)).then_some(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_remap_across_three_pairs() {
        let pairs = vec![
            (vec![vec![3, 0], vec![0, 3]], vec![vec![7, 0], vec![0, 7]]),
            (vec![vec![3, 3, 1]], vec![vec![7, 7, 1]]),
            (vec![vec![0, 3]], vec![vec![0, 7]]),
        ];
        let table = detect(&pairs).unwrap();
        assert_eq!(table.get(3), Some(7));
        assert_eq!(table.get(0), Some(0));

        // color 3 maps to 7 in the test input, everything else untouched
        let test = vec![vec![3, 1], vec![2, 3]];
        assert_eq!(table.apply(&test), vec![vec![7, 1], vec![2, 3]]);
    }

    #[test]
    fn contradiction_across_pairs_rejects() {
        let pairs = vec![
            (vec![vec![2]], vec![vec![4]]),
            (vec![vec![2]], vec![vec![6]]),
        ];
        assert!(detect(&pairs).is_none());
    }

    #[test]
    fn contradiction_within_one_pair_rejects() {
        let pairs = vec![(vec![vec![2, 2]], vec![vec![4, 6]])];
        assert!(detect(&pairs).is_none());
    }

    #[test]
    fn shape_change_rejects() {
        let pairs = vec![(vec![vec![1, 2]], vec![vec![1], vec![2]])];
        assert!(detect(&pairs).is_none());
    }

    #[test]
    fn non_injective_map_is_allowed() {
        let pairs = vec![(vec![vec![1, 2, 0]], vec![vec![5, 5, 0]])];
        let table = detect(&pairs).unwrap();
        assert_eq!(table.get(1), Some(5));
        assert_eq!(table.get(2), Some(5));
    }

    #[test]
    fn identity_substitution_is_not_a_match() {
        let g = vec![vec![1, 2], vec![3, 4]];
        assert!(detect(&[(g.clone(), g)]).is_none());
    }
}
