//! Solution enumeration.
//!
//! Two interchangeable searches produce the same sequence of grids: an
//! exhaustive walk over ordered row choices, and a pruned depth-first search.
//! Either way the result is a lazy iterator that does no work ahead of demand.

mod backtrack;
mod brute_force;

use crate::catalog::RowCatalog;
use crate::error::Result;
use crate::grid::Grid;
use crate::line::Dimension;
pub(crate) use backtrack::Backtracker;
use brute_force::BruteForce;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How the space of row orderings is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Build every ordering of distinct rows, validate complete grids only.
    /// Only practical up to N = 6.
    BruteForce,
    /// Add one row at a time and drop a branch as soon as a column prefix
    /// breaks balance or contains a triple run
    #[default]
    Backtracking,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::BruteForce => write!(f, "brute force"),
            Strategy::Backtracking => write!(f, "backtracking"),
        }
    }
}

/// Configuration for enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratorConfig {
    /// Grid side length; must be positive and even
    pub dimension: usize,
    /// Search strategy
    pub strategy: Strategy,
    /// Stop after this many solutions (None = all)
    pub limit: Option<usize>,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            dimension: 6,
            strategy: Strategy::Backtracking,
            limit: None,
        }
    }
}

impl EnumeratorConfig {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Holds the row catalog for one dimension and hands out solution sequences.
///
/// The catalog is built once in [`Enumerator::new`]; every call to
/// [`Enumerator::solutions`] starts a fresh search over it.
#[derive(Debug, Clone)]
pub struct Enumerator {
    config: EnumeratorConfig,
    catalog: Arc<RowCatalog>,
}

impl Enumerator {
    /// Validate the configuration and build the row catalog
    pub fn new(config: EnumeratorConfig) -> Result<Self> {
        let dimension = Dimension::new(config.dimension)?;
        let catalog = Arc::new(RowCatalog::build(dimension));
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    pub fn dimension(&self) -> Dimension {
        self.catalog.dimension()
    }

    pub fn catalog(&self) -> &RowCatalog {
        &self.catalog
    }

    /// Start a new search from the beginning
    pub fn solutions(&self) -> Solutions {
        let catalog = Arc::clone(&self.catalog);
        let search = match self.config.strategy {
            Strategy::BruteForce => Search::BruteForce(BruteForce::new(catalog)),
            Strategy::Backtracking => Search::Backtracking(Backtracker::new(catalog)),
        };
        Solutions {
            search,
            remaining: self.config.limit,
        }
    }

    /// Solutions whose first row is catalog entry `first_row`.
    ///
    /// Partitions always use the pruned search and ignore the limit.
    /// Chaining the partitions for `0..catalog().len()` reproduces
    /// [`Enumerator::solutions`] exactly.
    pub fn partition(&self, first_row: usize) -> Solutions {
        let first_rows = first_row..first_row.saturating_add(1);
        let search = Backtracker::with_first_rows(Arc::clone(&self.catalog), first_rows);
        Solutions {
            search: Search::Backtracking(search),
            remaining: None,
        }
    }

    /// One partition per catalog entry, in catalog order
    pub fn partitions(&self) -> impl Iterator<Item = Solutions> + '_ {
        (0..self.catalog.len()).map(move |i| self.partition(i))
    }

    /// Count all solutions, searching partitions on the rayon pool
    #[cfg(feature = "parallel")]
    pub fn par_count(&self) -> usize {
        use rayon::prelude::*;

        (0..self.catalog.len())
            .into_par_iter()
            .map(|i| self.partition(i).count())
            .sum()
    }
}

enum Search {
    BruteForce(BruteForce),
    Backtracking(Backtracker),
}

/// Lazy sequence of solutions.
///
/// Each call to `next` resumes the search where the previous one stopped.
/// Dropping the iterator abandons the search; nothing else needs cleaning up.
pub struct Solutions {
    search: Search,
    remaining: Option<usize>,
}

impl Iterator for Solutions {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.remaining == Some(0) {
            return None;
        }
        let grid = match &mut self.search {
            Search::BruteForce(search) => search.next(),
            Search::Backtracking(search) => search.next(),
        }?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(grid)
    }
}

/// Enumerate every solution for a dimension with the default search.
///
/// Fails with `InvalidDimension` before any work when `dimension` is zero or odd.
pub fn enumerate(dimension: usize) -> Result<Solutions> {
    Ok(Enumerator::new(EnumeratorConfig::new(dimension))?.solutions())
}

/// Count solutions up to a limit
pub fn count_solutions(dimension: usize, limit: usize) -> Result<usize> {
    let config = EnumeratorConfig::new(dimension).with_limit(limit);
    Ok(Enumerator::new(config)?.solutions().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BinairoError;

    #[test]
    fn test_invalid_dimension() {
        for dimension in [0, 1, 3, 7] {
            assert_eq!(
                enumerate(dimension).err(),
                Some(BinairoError::InvalidDimension {
                    dimension: dimension as i64
                })
            );
        }
    }

    #[test]
    fn test_enumerate_two() {
        let grids: Vec<Grid> = enumerate(2).unwrap().collect();
        assert_eq!(
            grids,
            vec![
                Grid::from_bits(&[vec![0, 1], vec![1, 0]]).unwrap(),
                Grid::from_bits(&[vec![1, 0], vec![0, 1]]).unwrap(),
            ]
        );
    }

    #[test]
    fn test_strategies_agree() {
        let brute = Enumerator::new(EnumeratorConfig::new(4).with_strategy(Strategy::BruteForce))
            .unwrap()
            .solutions();
        let pruned = enumerate(4).unwrap();
        assert!(brute.eq(pruned));
    }

    #[test]
    fn test_strategies_agree_at_six() {
        let brute: Vec<Grid> =
            Enumerator::new(EnumeratorConfig::new(6).with_strategy(Strategy::BruteForce))
                .unwrap()
                .solutions()
                .collect();
        let pruned: Vec<Grid> = enumerate(6).unwrap().collect();
        assert_eq!(brute.len(), 4140);
        assert_eq!(brute, pruned);
    }

    #[test]
    fn test_limit() {
        assert_eq!(count_solutions(4, 10), Ok(10));
        assert_eq!(count_solutions(4, 1000), Ok(72));
        assert_eq!(count_solutions(4, 0), Ok(0));
    }

    #[test]
    fn test_restart() {
        let enumerator = Enumerator::new(EnumeratorConfig::new(4)).unwrap();
        let first: Vec<Grid> = enumerator.solutions().take(5).collect();
        let again: Vec<Grid> = enumerator.solutions().take(5).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_partitions_chain_to_full_sequence() {
        let enumerator = Enumerator::new(EnumeratorConfig::new(4)).unwrap();
        let chained: Vec<Grid> = enumerator.partitions().flatten().collect();
        let full: Vec<Grid> = enumerator.solutions().collect();
        assert_eq!(chained, full);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_count() {
        let enumerator = Enumerator::new(EnumeratorConfig::new(6)).unwrap();
        assert_eq!(enumerator.par_count(), 4140);
    }

    #[test]
    fn test_config_serialization() {
        let config = EnumeratorConfig::new(8)
            .with_strategy(Strategy::BruteForce)
            .with_limit(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: EnumeratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
