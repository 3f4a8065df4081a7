//! Score breakdown value object.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Effect;
use crate::mode::OptimizationMode;

/// Flat bonus per placement of the preferred item.
pub const PREFERRED_WEIGHT: f64 = 0.5;

/// Penalty per covered cell touching a cell of the same item.
pub const SAME_SPECIES_PENALTY: f64 = 0.25;

/// Result of scoring one layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreBreakdown {
    /// Unrounded total.
    pub total: f64,
    /// `total` rounded to three decimals, for display.
    pub reported_total: f64,
    /// Number of (cell, effect) pairs that received each effect's bonus.
    pub bonus_counts: BTreeMap<Effect, usize>,
    /// Number of same-item (covered cell, neighbor) pairs penalized.
    pub same_species_adjacent: usize,
    /// Number of placements of the preferred item.
    pub preferred_count: usize,
    /// Mode the layout was scored under.
    pub mode: OptimizationMode,
}

impl ScoreBreakdown {
    /// Cells that received `effect`.
    pub fn bonus_count(&self, effect: Effect) -> usize {
        self.bonus_counts.get(&effect).copied().unwrap_or(0)
    }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
