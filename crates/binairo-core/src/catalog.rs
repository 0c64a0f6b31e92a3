//! The row catalog: every valid line of a given length.

use crate::line::{Cell, Dimension, Line};

/// All distinct valid lines for one dimension, in lexicographic order
/// (zero sorts before one).
///
/// Built once per enumeration and never modified afterwards. Solution
/// enumeration order follows catalog order, so this order is what makes
/// the sequence of solutions canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCatalog {
    dimension: Dimension,
    lines: Vec<Line>,
}

impl RowCatalog {
    /// Build the catalog for a dimension.
    ///
    /// Walks the distinct orderings of half zeros and half ones by repeatedly
    /// stepping to the next lexicographic permutation of the sorted multiset.
    /// Each distinct ordering is visited exactly once, so no separate
    /// deduplication pass is needed.
    pub fn build(dimension: Dimension) -> Self {
        let half = dimension.half();
        let mut cells: Vec<Cell> = std::iter::repeat(Cell::Zero)
            .take(half)
            .chain(std::iter::repeat(Cell::One).take(half))
            .collect();

        let mut lines = Vec::new();
        loop {
            let line = Line::new(cells.clone());
            if line.is_valid() {
                lines.push(line);
            }
            if !next_permutation(&mut cells) {
                break;
            }
        }

        Self { dimension, lines }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Catalog index of a line, if it is a valid line of this dimension
    pub fn position(&self, line: &Line) -> Option<usize> {
        self.lines.binary_search(line).ok()
    }
}

impl std::ops::Index<usize> for RowCatalog {
    type Output = Line;

    fn index(&self, index: usize) -> &Line {
        &self.lines[index]
    }
}

impl<'a> IntoIterator for &'a RowCatalog {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Rearrange into the next lexicographically greater permutation.
///
/// Returns false (leaving the slice untouched) when it is already the last one.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}
