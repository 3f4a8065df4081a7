//! Stochastic hill-climbing over single-placement relocations.
//!
//! Each iteration picks a random placement and a random in-bounds anchor
//! for it, applies the move to a clone of the current best layout and
//! keeps the clone if its score is at least as good. Ties are accepted so
//! the search can drift across plateaus. There is no temperature schedule
//! and strictly worse layouts are never accepted, so the best score never
//! decreases.
//!
//! Independent restarts from the same input (each with its own seed) are
//! the only escape from local optima. With the `parallel` feature they
//! can run on rayon.

mod config;
mod runner;

pub use config::SearchConfig;
pub use runner::{LocalSearch, SearchResult};
