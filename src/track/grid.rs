use crate::foundation::core::{Category, GRID_CELLS, GRID_SIDE};
use crate::foundation::error::{RacetrackError, RacetrackResult};

/// A 50x50 grid of cell categories, stored row-major.
///
/// Cell `(i, j)` lives at flat offset `50 * i + j`, which is also its byte offset in a
/// track file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGrid {
    cells: Vec<Category>,
}

impl CategoryGrid {
    /// Grid where every cell holds `cat`.
    pub fn filled(cat: Category) -> Self {
        Self {
            cells: vec![cat; GRID_CELLS],
        }
    }

    /// Decode a track file body.
    ///
    /// The buffer must be exactly [`GRID_CELLS`] bytes and every byte must be a valid
    /// category value.
    pub fn from_bytes(bytes: &[u8]) -> RacetrackResult<Self> {
        if bytes.len() != GRID_CELLS {
            return Err(RacetrackError::format(format!(
                "track data must be exactly {GRID_CELLS} bytes, got {}",
                bytes.len()
            )));
        }
        let cells = bytes
            .iter()
            .map(|&b| Category::try_from(b))
            .collect::<RacetrackResult<Vec<_>>>()?;
        Ok(Self { cells })
    }

    /// Encode as a track file body (one byte per cell, row-major, no header).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.as_u8()).collect()
    }

    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`GRID_SIDE`].
    pub fn get(&self, i: usize, j: usize) -> Category {
        self.cells[Self::offset(i, j)]
    }

    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`GRID_SIDE`].
    pub fn set(&mut self, i: usize, j: usize, cat: Category) {
        let off = Self::offset(i, j);
        self.cells[off] = cat;
    }

    /// Row-major iterator over `((i, j), category)`.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Category)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(off, &c)| ((off / GRID_SIDE, off % GRID_SIDE), c))
    }

    pub fn count(&self, cat: Category) -> usize {
        self.cells.iter().filter(|&&c| c == cat).count()
    }

    /// A usable track must have walls.
    pub fn ensure_walls(&self) -> RacetrackResult<()> {
        if self.count(Category::Boundary) == 0 {
            return Err(RacetrackError::MissingBoundary);
        }
        Ok(())
    }

    fn offset(i: usize, j: usize) -> usize {
        assert!(
            i < GRID_SIDE && j < GRID_SIDE,
            "cell ({i}, {j}) is outside the {GRID_SIDE}x{GRID_SIDE} grid"
        );
        GRID_SIDE * i + j
    }
}

impl Default for CategoryGrid {
    fn default() -> Self {
        Self::filled(Category::Track)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/grid.rs"]
mod tests;
