//! Row-by-row depth-first search with partial column pruning.
//!
//! The grid grows one catalog row at a time. After each row the column
//! prefixes are checked: a branch is abandoned as soon as a column holds more
//! than N/2 of either value or ends in three equal cells. Rows are drawn
//! without repetition through an explicit set of used catalog indices.
//!
//! Candidates are tried in a fixed order at every depth. With the identity
//! order the solutions come out in the same order as the exhaustive search.

use crate::catalog::RowCatalog;
use crate::grid::{columns_valid, Grid};
use crate::line::Line;
use std::ops::Range;
use std::sync::Arc;

pub(crate) struct Backtracker {
    catalog: Arc<RowCatalog>,
    size: usize,
    half: usize,
    /// Catalog indices in the order they are tried
    order: Vec<usize>,
    /// Positions in `order` allowed for the first row
    first_rows: Range<usize>,
    /// Catalog index of each placed row
    chosen: Vec<usize>,
    /// Next position in `order` to try at each depth; always one longer than `chosen`
    cursors: Vec<usize>,
    used: Vec<bool>,
    /// Ones placed so far in each column
    ones: Vec<usize>,
    exhausted: bool,
}

impl Backtracker {
    pub(crate) fn new(catalog: Arc<RowCatalog>) -> Self {
        let all = 0..catalog.len();
        Self::with_first_rows(catalog, all)
    }

    /// Restrict the search to grids whose first row lies in `first_rows`
    pub(crate) fn with_first_rows(catalog: Arc<RowCatalog>, first_rows: Range<usize>) -> Self {
        let order = (0..catalog.len()).collect();
        Self::with_order(catalog, order, first_rows)
    }

    /// Try catalog rows in `order`, which must be a permutation of the
    /// catalog indices. `first_rows` selects positions in that order.
    pub(crate) fn with_order(
        catalog: Arc<RowCatalog>,
        order: Vec<usize>,
        first_rows: Range<usize>,
    ) -> Self {
        let size = catalog.dimension().size();
        let first_rows = first_rows.start.min(catalog.len())..first_rows.end.min(catalog.len());
        Self {
            order,
            half: size / 2,
            used: vec![false; catalog.len()],
            ones: vec![0; size],
            chosen: Vec::with_capacity(size),
            cursors: vec![first_rows.start],
            first_rows,
            size,
            catalog,
            exhausted: false,
        }
    }

    fn candidate_end(&self, depth: usize) -> usize {
        if depth == 0 {
            self.first_rows.end
        } else {
            self.catalog.len()
        }
    }

    /// Whether catalog row `index` can extend the current partial grid
    fn fits(&self, index: usize) -> bool {
        let depth = self.chosen.len();
        let row = &self.catalog[index];
        for col in 0..self.size {
            let bit = row[col].bit() as usize;
            let ones = self.ones[col] + bit;
            let zeros = depth + 1 - ones;
            if ones > self.half || zeros > self.half {
                return false;
            }
            if depth >= 2 {
                let above = self.catalog[self.chosen[depth - 1]][col];
                let two_above = self.catalog[self.chosen[depth - 2]][col];
                if above == two_above && above == row[col] {
                    return false;
                }
            }
        }
        true
    }

    /// Next usable position in `order` at the current depth, starting from its cursor
    fn next_fit(&self) -> Option<usize> {
        let depth = self.chosen.len();
        (self.cursors[depth]..self.candidate_end(depth)).find(|&pos| {
            let index = self.order[pos];
            !self.used[index] && self.fits(index)
        })
    }

    fn push(&mut self, pos: usize) {
        let depth = self.chosen.len();
        let index = self.order[pos];
        self.cursors[depth] = pos + 1;
        self.cursors.push(0);
        self.chosen.push(index);
        self.used[index] = true;
        for (col, cell) in self.catalog[index].cells().iter().enumerate() {
            self.ones[col] += cell.bit() as usize;
        }
    }

    fn pop(&mut self) {
        self.cursors.pop();
        if let Some(index) = self.chosen.pop() {
            self.used[index] = false;
            for (col, cell) in self.catalog[index].cells().iter().enumerate() {
                self.ones[col] -= cell.bit() as usize;
            }
        }
    }

    /// Columns are already balanced and run-free here; only distinctness is left
    fn complete_grid(&self) -> Option<Grid> {
        let rows: Vec<&Line> = self.chosen.iter().map(|&i| &self.catalog[i]).collect();
        if !columns_valid(&rows) {
            return None;
        }
        Some(Grid::from_rows_unchecked(rows.into_iter().cloned().collect()))
    }
}

impl Iterator for Backtracker {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.exhausted {
            return None;
        }

        loop {
            if self.chosen.len() == self.size {
                let found = self.complete_grid();
                self.pop();
                if found.is_some() {
                    return found;
                }
                continue;
            }

            match self.next_fit() {
                Some(pos) => self.push(pos),
                None if self.chosen.is_empty() => {
                    self.exhausted = true;
                    return None;
                }
                None => self.pop(),
            }
        }
    }
}
