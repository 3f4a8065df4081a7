//! Adjacency-based layout scoring.
//!
//! A layout's score is the sum of:
//!
//! - a flat bonus per placement of the preferred item,
//! - for every covered cell, the mode weight of each distinct effect
//!   category received from orthogonally adjacent placements of other
//!   items,
//! - a penalty for every covered cell / neighbor pair where both cells
//!   hold the same item name.
//!
//! Scoring is a pure function of the grid, the preferred item name and
//! the mode.

mod engine;
mod influence;
mod types;

pub use engine::Scorer;
pub use influence::{InfluenceKind, InfluencedCell};
pub use types::{ScoreBreakdown, PREFERRED_WEIGHT, SAME_SPECIES_PENALTY};
