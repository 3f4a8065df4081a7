//! Crop placement planning on a rectangular grid.
//!
//! Places game-world crops on a grid to maximize an adjacency synergy
//! score, then improves the layout with randomized local search:
//!
//! - **Catalog**: item types with an effect category and a footprint,
//!   built explicitly and shared read-only.
//! - **Grid**: occupancy matrix plus an arena of placements addressed by
//!   monotonically increasing ids. Mutations are atomic.
//! - **Scoring**: per-cell effect bonuses weighted by the active mode,
//!   a preferred-item bonus, and a same-species adjacency penalty.
//! - **Fill**: greedy row-major first-fit construction ordered by
//!   composable priority rules.
//! - **Search**: stochastic hill-climbing over single-placement moves,
//!   accepting ties, with optional independent restarts.
//! - **Planner**: the generate / optimize workflow of an interactive
//!   front end.
//!
//! # Architecture
//!
//! Everything is synchronous and single-threaded unless the `parallel`
//! feature is enabled for search restarts. Every randomized operation
//! takes an injectable random source or an explicit seed, so runs are
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_garden::catalog::Catalog;
//! use u_garden::fill::{GreedyFill, Inventory};
//! use u_garden::grid::Garden;
//! use u_garden::mode::OptimizationMode;
//! use u_garden::scoring::Scorer;
//! use u_garden::search::LocalSearch;
//!
//! let catalog = Arc::new(Catalog::builtin());
//! let mut garden = Garden::new(9, 9, catalog.clone());
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let inventory = Inventory::add_all(&catalog);
//! GreedyFill::new()
//!     .fill(&mut garden, &inventory, "Tomato", OptimizationMode::Balanced, &mut rng)
//!     .unwrap();
//! let before = Scorer::score(&garden, "Tomato", OptimizationMode::Balanced);
//!
//! let result = LocalSearch::improve(&garden, "Tomato", OptimizationMode::Balanced, 1000, &mut rng);
//! assert!(result.best_score >= before.total);
//! ```

pub mod catalog;
pub mod error;
pub mod fill;
pub mod grid;
pub mod mode;
pub mod planner;
pub mod scoring;
pub mod search;

mod random;

pub use error::{Error, Result};
