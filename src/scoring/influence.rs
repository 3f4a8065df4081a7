//! Neighborhood influence of a single placement.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::engine::Scorer;
use crate::grid::{Garden, PlacementId};

/// How a placement relates to one adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InfluenceKind {
    /// Occupied by a different item.
    Boost,
    /// Occupied by the same item; both sides pay the same-species penalty.
    Penalty,
    /// Empty; a future neighbor here would be affected.
    Open,
}

/// A cell orthogonally adjacent to a placement's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfluencedCell {
    pub row: usize,
    pub col: usize,
    pub kind: InfluenceKind,
}

impl Scorer {
    /// Cells bordering placement `id`, each listed once in row-major order.
    ///
    /// Returns an empty vector for an unknown id.
    pub fn influence(garden: &Garden, id: PlacementId) -> Vec<InfluencedCell> {
        let Some(placement) = garden.placement(id) else {
            return Vec::new();
        };

        let border: BTreeSet<(usize, usize)> = placement
            .cells()
            .flat_map(|(r, c)| garden.neighbors(r, c))
            .filter(|&(r, c)| garden.cell(r, c) != Some(id))
            .collect();

        border
            .into_iter()
            .map(|(row, col)| {
                let kind = match garden.cell(row, col).and_then(|n| garden.placement(n)) {
                    Some(neighbor) if neighbor.item == placement.item => InfluenceKind::Penalty,
                    Some(_) => InfluenceKind::Boost,
                    None => InfluenceKind::Open,
                };
                InfluencedCell { row, col, kind }
            })
            .collect()
    }
}
