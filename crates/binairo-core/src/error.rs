use serde::{Deserialize, Serialize};

/// Errors raised by the validation and enumeration entry points.
///
/// Every error is reported synchronously, before any search work begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinairoError {
    /// The grid side length is not a positive even integer
    InvalidDimension { dimension: i64 },
    /// A line does not have the length the dimension requires
    InvalidLineLength { expected: usize, found: usize },
    /// A cell value other than 0 or 1
    InvalidCell { value: u8 },
}

impl std::fmt::Display for BinairoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinairoError::InvalidDimension { dimension } => {
                write!(f, "invalid dimension {}: must be a positive even integer", dimension)
            }
            BinairoError::InvalidLineLength { expected, found } => {
                write!(f, "invalid line length {}: expected {}", found, expected)
            }
            BinairoError::InvalidCell { value } => {
                write!(f, "invalid cell value {}: must be 0 or 1", value)
            }
        }
    }
}

impl std::error::Error for BinairoError {}

pub type Result<T> = std::result::Result<T, BinairoError>;
