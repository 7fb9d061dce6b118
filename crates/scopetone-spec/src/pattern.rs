//! Binary pattern grids.

use serde::{Deserialize, Serialize};

/// A square binary pixel grid representing one still image.
///
/// Cells are stored row-major as `0` (inactive) or `1` (active). Row 0 is the
/// top of the image, column 0 the left edge. A `Pattern` is a plain data
/// container: shape and cell-value invariants are checked by
/// [`validate_project`](crate::validation::validate_project), not enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    rows: Vec<Vec<u8>>,
}

impl Pattern {
    /// Creates a pattern from raw rows.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Creates an all-inactive pattern of the given dimension.
    pub fn blank(dimension: usize) -> Self {
        Self {
            rows: vec![vec![0; dimension]; dimension],
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Raw row access.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Cell value at (row, col), or `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets a cell active or inactive. Out-of-bounds indices are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, active: bool) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = u8::from(active);
        }
    }

    /// Returns true if every row has exactly `dimension` cells and there are
    /// exactly `dimension` rows.
    pub fn is_square_of(&self, dimension: usize) -> bool {
        self.rows.len() == dimension && self.rows.iter().all(|r| r.len() == dimension)
    }

    /// Iterates active cell coordinates in row-major order (row ascending,
    /// then column ascending).
    ///
    /// Row-major order is load-bearing: it fixes the temporal order in which
    /// points are traced by the synthesized waveform.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &v)| v == 1)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Number of active cells.
    pub fn active_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|&&v| v == 1).count())
            .sum()
    }

    /// Returns true if no cell is active.
    pub fn is_blank(&self) -> bool {
        self.active_count() == 0
    }
}
