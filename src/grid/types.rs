//! Placement handles and metadata.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Footprint;

/// Handle to a placement within one [`Garden`](super::Garden).
///
/// Ids start at 1 and increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlacementId(pub(super) u32);

impl PlacementId {
    pub(crate) fn from_slot(slot: usize) -> Self {
        Self(slot as u32 + 1)
    }

    /// Arena slot of this id. Id 0 is never allocated and maps to none.
    pub(crate) fn slot(self) -> Option<usize> {
        self.0.checked_sub(1).map(|slot| slot as usize)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One item instance occupying a footprint anchored at its top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub item: String,
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Placement {
    pub(crate) fn new(item: &str, row: usize, col: usize, footprint: Footprint) -> Self {
        Self {
            item: item.to_owned(),
            row,
            col,
            width: footprint.width(),
            height: footprint.height(),
        }
    }

    /// Whether `(row, col)` lies inside this footprint.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }

    /// Covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.row..self.row + self.height)
            .flat_map(move |r| (self.col..self.col + self.width).map(move |c| (r, c)))
    }
}
