//! Exhaustive search: every ordered choice of distinct catalog rows,
//! validated only once the grid is complete.
//!
//! The number of candidates is P(|catalog|, N): about two million for N = 6,
//! but roughly 1.8e12 for N = 8, so this is only usable up to N = 6.

use crate::catalog::RowCatalog;
use crate::grid::{columns_valid, Grid};
use crate::line::Line;
use std::sync::Arc;

/// Injective index sequences of length `r` over `0..n`, in lexicographic order
pub(crate) struct IndexPermutations {
    indices: Vec<usize>,
    cycles: Vec<usize>,
    r: usize,
    started: bool,
    done: bool,
}

impl IndexPermutations {
    pub(crate) fn new(n: usize, r: usize) -> Self {
        let done = r > n;
        let cycles = if done {
            Vec::new()
        } else {
            (n - r + 1..=n).rev().collect()
        };
        Self {
            indices: (0..n).collect(),
            cycles,
            r,
            started: false,
            done,
        }
    }

    /// Step to the next sequence
    pub(crate) fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices[..self.r]);
        }

        let n = self.indices.len();
        for i in (0..self.r).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                // Exhausted position i: restore its suffix and carry left
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return Some(&self.indices[..self.r]);
            }
        }

        self.done = true;
        None
    }
}

pub(crate) struct BruteForce {
    catalog: Arc<RowCatalog>,
    permutations: IndexPermutations,
}

impl BruteForce {
    pub(crate) fn new(catalog: Arc<RowCatalog>) -> Self {
        let permutations = IndexPermutations::new(catalog.len(), catalog.dimension().size());
        Self {
            catalog,
            permutations,
        }
    }
}

impl Iterator for BruteForce {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        while let Some(indices) = self.permutations.advance() {
            let rows: Vec<&Line> = indices.iter().map(|&i| &self.catalog[i]).collect();
            if columns_valid(&rows) {
                let rows = rows.into_iter().cloned().collect();
                return Some(Grid::from_rows_unchecked(rows));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(n: usize, r: usize) -> Vec<Vec<usize>> {
        let mut perms = IndexPermutations::new(n, r);
        let mut out = Vec::new();
        while let Some(p) = perms.advance() {
            out.push(p.to_vec());
        }
        out
    }

    #[test]
    fn test_permutations_lexicographic() {
        assert_eq!(
            collect(3, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1],
            ]
        );
    }

    #[test]
    fn test_permutation_count() {
        // P(6, 4) = 360
        let all = collect(6, 4);
        assert_eq!(all.len(), 360);
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_too_few_items() {
        assert!(collect(2, 3).is_empty());
    }
}
