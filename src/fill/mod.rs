//! Greedy constructive fill.
//!
//! Builds an initial layout from an [`Inventory`]:
//!
//! 1. expand the inventory into one candidate per item instance,
//! 2. shuffle the candidates so equal-priority items vary between runs,
//! 3. stable-sort them with a [`RuleEngine`] (preferred item first, then
//!    the mode's effect emphasis, then larger footprints),
//! 4. place each at the first row-major anchor that admits it.
//!
//! Items that fit nowhere are skipped and reported; the fill never fails
//! because of a single unplaceable item.

mod inventory;
mod rules;
mod runner;

pub use inventory::Inventory;
pub use rules::{
    Candidate, EffectEmphasis, FillContext, LargestFootprint, PreferredFirst, PriorityRule,
    RuleEngine,
};
pub use runner::{FillReport, GreedyFill};
