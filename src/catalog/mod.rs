//! Item type catalog.
//!
//! The catalog is read-only input to every other module: it maps an item
//! name to its [`ItemSpec`] (effect category and footprint). It is built
//! explicitly by the caller and shared through `Arc`, never read from
//! ambient global state.

mod builtin;
mod types;

pub use types::{Catalog, Effect, Footprint, ItemSpec};
