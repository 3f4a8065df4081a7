//! Grid occupancy model.
//!
//! A [`Garden`] is a `rows × cols` matrix of optional placement ids plus
//! an arena of placement metadata indexed by id. Every mutation either
//! keeps the occupancy invariant intact or is rejected without touching
//! any state:
//!
//! - every cell covered by a placement's footprint holds that placement's id
//! - every id present in the matrix has metadata
//! - footprints never overlap and always lie within bounds
//!
//! Ids are allocated from a monotonic counter and never reused until the
//! garden is cleared.

mod model;
mod types;

pub use model::Garden;
pub use types::{Placement, PlacementId};
