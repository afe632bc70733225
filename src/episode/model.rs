use crate::foundation::core::GRID_SIDE;
use crate::foundation::error::{RacetrackError, RacetrackResult};

/// One recorded agent position, 1-indexed in episode coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Grid cell `(x - 1, y - 1)`, or `None` when either coordinate is outside `1..=50`.
    pub fn cell(self) -> Option<(usize, usize)> {
        let in_range = |v: u8| (1..=GRID_SIDE).contains(&usize::from(v));
        if in_range(self.x) && in_range(self.y) {
            Some((usize::from(self.x) - 1, usize::from(self.y) - 1))
        } else {
            None
        }
    }
}

/// Ordered sequence of agent positions from one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Episode {
    pub positions: Vec<Position>,
}

impl Episode {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Decode an episode file body: consecutive `(x, y)` byte pairs.
    pub fn from_bytes(bytes: &[u8]) -> RacetrackResult<Self> {
        if bytes.len() % 2 != 0 {
            return Err(RacetrackError::format(format!(
                "episode data must hold whole (x, y) byte pairs, got {} bytes",
                bytes.len()
            )));
        }
        let positions = bytes
            .chunks_exact(2)
            .map(|pair| Position::new(pair[0], pair[1]))
            .collect();
        Ok(Self { positions })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.positions.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Reject the whole episode if any position would index outside the grid.
    pub fn validate(&self) -> RacetrackResult<()> {
        for (index, p) in self.positions.iter().enumerate() {
            if p.cell().is_none() {
                return Err(RacetrackError::CoordinateOutOfRange {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/episode/model.rs"]
mod tests;
