//! Cells, lines and the single-line validity rule.
//!
//! A line is read the same way whether it is a row or a column: it is valid
//! when it holds as many zeros as ones and no three neighbouring cells agree.

use crate::error::{BinairoError, Result};
use serde::{Deserialize, Serialize};

/// A single binary cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Zero,
    One,
}

impl Cell {
    /// Numeric value of the cell (0 or 1)
    pub fn bit(self) -> u8 {
        match self {
            Cell::Zero => 0,
            Cell::One => 1,
        }
    }

    /// The opposite value
    pub fn flip(self) -> Self {
        match self {
            Cell::Zero => Cell::One,
            Cell::One => Cell::Zero,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = BinairoError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Zero),
            1 => Ok(Cell::One),
            _ => Err(BinairoError::InvalidCell { value }),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bit())
    }
}

/// Side length of a grid, always a positive even number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Dimension(usize);

impl Dimension {
    /// Validate a side length
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size % 2 != 0 {
            return Err(BinairoError::InvalidDimension {
                dimension: i64::try_from(size).unwrap_or(i64::MAX),
            });
        }
        Ok(Self(size))
    }

    pub fn size(self) -> usize {
        self.0
    }

    /// Number of zeros (and of ones) in every valid line
    pub fn half(self) -> usize {
        self.0 / 2
    }
}

impl TryFrom<usize> for Dimension {
    type Error = BinairoError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl TryFrom<i64> for Dimension {
    type Error = BinairoError;

    fn try_from(size: i64) -> Result<Self> {
        let size = usize::try_from(size)
            .map_err(|_| BinairoError::InvalidDimension { dimension: size })?;
        Self::new(size)
    }
}

impl From<Dimension> for usize {
    fn from(dimension: Dimension) -> usize {
        dimension.0
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of cells, used for both rows and columns
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Build a line from 0/1 values
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let cells = bits
            .iter()
            .map(|&b| Cell::try_from(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cells })
    }

    /// Parse a line from a string of '0' and '1' characters
    ///
    /// Whitespace is ignored, so both "0101" and "0 1 0 1" parse.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut cells = Vec::with_capacity(s.len());
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            match c {
                '0' => cells.push(Cell::Zero),
                '1' => cells.push(Cell::One),
                _ => return None,
            }
        }
        Some(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn to_bits(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.bit()).collect()
    }

    /// Count cells holding the given value
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Whether three neighbouring cells hold the same value
    pub fn has_triple_run(&self) -> bool {
        self.cells.windows(3).any(|w| {
            let sum: u8 = w.iter().map(|c| c.bit()).sum();
            sum == 0 || sum == 3
        })
    }

    /// Balanced and free of triple runs.
    ///
    /// Defined for any length; an odd-length line is never balanced.
    pub fn is_valid(&self) -> bool {
        let zeros = self.count(Cell::Zero);
        zeros * 2 == self.len() && !self.has_triple_run()
    }
}

impl From<Vec<Cell>> for Line {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

impl std::ops::Index<usize> for Line {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

/// Check a line against a pre-agreed dimension.
///
/// Fails with `InvalidLineLength` when the line does not have exactly
/// `dimension` cells.
pub fn is_valid_line(line: &Line, dimension: Dimension) -> Result<bool> {
    if line.len() != dimension.size() {
        return Err(BinairoError::InvalidLineLength {
            expected: dimension.size(),
            found: line.len(),
        });
    }
    Ok(line.is_valid())
}
