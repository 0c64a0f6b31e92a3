//! Binairo (Takuzu) grids: validation and exhaustive solution enumeration.
//!
//! A solution is an N×N grid of zeros and ones, N even, where every row and
//! every column holds N/2 of each value, no line contains three equal cells
//! in a row, and all rows and all columns are distinct.
//!
//! ```
//! use binairo_core::{enumerate, is_valid_grid};
//!
//! let solutions: Vec<_> = enumerate(4).unwrap().collect();
//! assert_eq!(solutions.len(), 72);
//! assert!(solutions.iter().all(|g| is_valid_grid(g.rows()) == Ok(true)));
//! ```

pub mod catalog;
pub mod enumerator;
pub mod error;
pub mod generator;
pub mod grid;
pub mod line;

pub use catalog::RowCatalog;
pub use enumerator::{count_solutions, enumerate, Enumerator, EnumeratorConfig, Solutions, Strategy};
pub use error::{BinairoError, Result};
pub use generator::Generator;
pub use grid::{is_valid_grid, Grid};
pub use line::{is_valid_line, Cell, Dimension, Line};
