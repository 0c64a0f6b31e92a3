//! Complete grids and the column-level checks.

use crate::error::{BinairoError, Result};
use crate::line::{Cell, Dimension, Line};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;

/// A square grid stored as its rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRows")]
pub struct Grid {
    rows: Vec<Line>,
}

/// Unchecked wire form of a grid; deserialization goes through `from_rows`
#[derive(Deserialize)]
struct GridRows {
    rows: Vec<Line>,
}

impl TryFrom<GridRows> for Grid {
    type Error = BinairoError;

    fn try_from(raw: GridRows) -> Result<Self> {
        Self::from_rows(raw.rows)
    }
}

impl Grid {
    /// Build a grid, checking that it is square with an even side
    pub fn from_rows(rows: Vec<Line>) -> Result<Self> {
        check_shape(&rows)?;
        Ok(Self { rows })
    }

    /// Build a grid from nested 0/1 values
    pub fn from_bits(bits: &[Vec<u8>]) -> Result<Self> {
        let rows = bits
            .iter()
            .map(|row| Line::from_bits(row))
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Rows are trusted to be square; used by the enumerator
    pub(crate) fn from_rows_unchecked(rows: Vec<Line>) -> Self {
        Self { rows }
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Line] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Line> {
        self.rows.get(index)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|line| line.get(col))
    }

    /// The line formed by the `index`-th cell of every row, top to bottom
    pub fn column(&self, index: usize) -> Option<Line> {
        column_of(&self.rows, index)
    }

    pub fn columns(&self) -> Vec<Line> {
        (0..self.dimension())
            .filter_map(|i| self.column(i))
            .collect()
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Grid {
        Grid {
            rows: self.columns(),
        }
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(Line::to_bits).collect()
    }

    /// Full check for a grid produced anywhere: rows valid and distinct,
    /// then the column rules of [`is_valid_grid`].
    pub fn is_solution(&self) -> bool {
        if check_shape(&self.rows).is_err() || !self.rows.iter().all(Line::is_valid) {
            return false;
        }
        let distinct: HashSet<&Line> = self.rows.iter().collect();
        if distinct.len() != self.rows.len() {
            return false;
        }
        columns_valid(&self.rows)
    }
}

/// Check the column rules over a grid given as rows.
///
/// Each column must be balanced and free of triple runs, and no two columns
/// may be equal. Rows are assumed to be valid lines already; they are only
/// checked for length. Stops at the first failing column.
pub fn is_valid_grid(rows: &[Line]) -> Result<bool> {
    check_shape(rows)?;
    Ok(columns_valid(rows))
}

fn check_shape(rows: &[Line]) -> Result<Dimension> {
    let dimension = Dimension::new(rows.len())?;
    if let Some(row) = rows.iter().find(|row| row.len() != dimension.size()) {
        return Err(BinairoError::InvalidLineLength {
            expected: dimension.size(),
            found: row.len(),
        });
    }
    Ok(dimension)
}

fn column_of<R: Borrow<Line>>(rows: &[R], index: usize) -> Option<Line> {
    rows.iter()
        .map(|row| row.borrow().get(index))
        .collect::<Option<Vec<_>>>()
        .map(Line::new)
}

pub(crate) fn columns_valid<R: Borrow<Line>>(rows: &[R]) -> bool {
    let mut seen = HashSet::with_capacity(rows.len());
    for index in 0..rows.len() {
        let column = match column_of(rows, index) {
            Some(column) => column,
            None => return false,
        };
        if !column.is_valid() || !seen.insert(column) {
            return false;
        }
    }
    true
}
