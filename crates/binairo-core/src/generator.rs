use crate::catalog::RowCatalog;
use crate::enumerator::Backtracker;
use crate::error::Result;
use crate::grid::Grid;
use crate::line::Dimension;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

/// Produces single random solutions.
///
/// Each call shuffles the order in which catalog rows are tried and returns
/// the first grid the pruned search reaches. Every solution can come out, but
/// not with equal probability.
pub struct Generator {
    catalog: Arc<RowCatalog>,
    rng: StdRng,
}

impl Generator {
    /// Create a generator seeded from the operating system
    pub fn new(dimension: usize) -> Result<Self> {
        Ok(Self {
            catalog: Self::catalog(dimension)?,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(dimension: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            catalog: Self::catalog(dimension)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn catalog(dimension: usize) -> Result<Arc<RowCatalog>> {
        let dimension = Dimension::new(dimension)?;
        Ok(Arc::new(RowCatalog::build(dimension)))
    }

    pub fn dimension(&self) -> Dimension {
        self.catalog.dimension()
    }

    /// Generate a random solution
    pub fn generate(&mut self) -> Option<Grid> {
        let mut order: Vec<usize> = (0..self.catalog.len()).collect();
        order.shuffle(&mut self.rng);
        let first_rows = 0..order.len();
        Backtracker::with_order(Arc::clone(&self.catalog), order, first_rows).next()
    }
}
