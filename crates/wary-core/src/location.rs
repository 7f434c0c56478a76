use serde::{Deserialize, Serialize};

/// A human-facing position: 1-indexed row, 0-indexed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
