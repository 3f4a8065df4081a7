//! Local search execution loop.

use rand::Rng;
use tracing::debug;
#[cfg(not(feature = "parallel"))]
use tracing::warn;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::SearchConfig;
use crate::error::{Error, Result};
use crate::grid::Garden;
use crate::mode::OptimizationMode;
use crate::random::{create_rng, resolve_seed};
use crate::scoring::Scorer;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best layout found.
    pub best: Garden,

    /// Unrounded score of the best layout.
    pub best_score: f64,

    /// Relocation attempts executed.
    pub iterations: usize,

    /// Valid moves whose score was at least the best so far.
    pub accepted_moves: usize,

    /// Accepted moves that strictly improved the score.
    pub improving_moves: usize,

    /// Attempts whose destination was out of bounds or occupied.
    pub rejected_moves: usize,

    /// Best score before the first iteration, then after each iteration.
    /// Never decreases.
    pub score_history: Vec<f64>,
}

/// Executes randomized hill-climbing.
pub struct LocalSearch;

impl LocalSearch {
    /// Improves `garden` with `iterations` single-placement relocations
    /// drawn from `rng`.
    ///
    /// The input is never modified. A garden with no placements is returned
    /// as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use u_garden::catalog::Catalog;
    /// use u_garden::grid::Garden;
    /// use u_garden::mode::OptimizationMode;
    /// use u_garden::search::LocalSearch;
    ///
    /// let mut garden = Garden::new(3, 3, Arc::new(Catalog::builtin()));
    /// garden.place("Corn", 0, 0);
    /// garden.place("Corn", 0, 1);
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let result = LocalSearch::improve(&garden, "", OptimizationMode::Balanced, 500, &mut rng);
    /// assert!(result.best_score >= -0.5);
    /// ```
    pub fn improve<R: Rng + ?Sized>(
        garden: &Garden,
        preferred: &str,
        mode: OptimizationMode,
        iterations: usize,
        rng: &mut R,
    ) -> SearchResult {
        let mut best = garden.clone();
        let mut best_score = Scorer::total(&best, preferred, mode);
        let mut score_history = vec![best_score];

        let ids = best.placement_ids();
        if ids.is_empty() {
            return SearchResult {
                best,
                best_score,
                iterations: 0,
                accepted_moves: 0,
                improving_moves: 0,
                rejected_moves: 0,
                score_history,
            };
        }

        score_history.reserve(iterations);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut rejected_moves = 0usize;

        for _ in 0..iterations {
            let id = ids[rng.random_range(0..ids.len())];
            let Some(placement) = best.placement(id) else {
                continue;
            };
            // footprints always fit, so these ranges are non-empty
            let row = rng.random_range(0..=best.rows() - placement.height);
            let col = rng.random_range(0..=best.cols() - placement.width);

            let mut candidate = best.clone();
            if candidate.move_placement(id, row, col) {
                let score = Scorer::total(&candidate, preferred, mode);
                if score >= best_score {
                    if score > best_score {
                        improving_moves += 1;
                    }
                    accepted_moves += 1;
                    best = candidate;
                    best_score = score;
                }
            } else {
                rejected_moves += 1;
            }

            score_history.push(best_score);
        }

        SearchResult {
            best,
            best_score,
            iterations,
            accepted_moves,
            improving_moves,
            rejected_moves,
            score_history,
        }
    }

    /// Runs `config.restarts` independent improvements of `garden` and
    /// returns the best (the earliest restart wins ties).
    pub fn run(
        garden: &Garden,
        preferred: &str,
        mode: OptimizationMode,
        config: &SearchConfig,
    ) -> Result<SearchResult> {
        config.validate()?;

        let base_seed = resolve_seed(config.seed);
        let restart = |i: usize| {
            let mut rng = create_rng(base_seed.wrapping_add(i as u64));
            Self::improve(garden, preferred, mode, config.iterations, &mut rng)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<SearchResult> = if config.parallel {
            (0..config.restarts).into_par_iter().map(restart).collect()
        } else {
            (0..config.restarts).map(restart).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<SearchResult> = {
            if config.parallel {
                warn!("Parallel restarts need the `parallel` feature; running sequentially.");
            }
            (0..config.restarts).map(restart).collect()
        };

        let best = results
            .into_iter()
            .reduce(|best, r| if r.best_score > best.best_score { r } else { best })
            .ok_or_else(|| Error::InvalidConfig("restarts must be at least 1".into()))?;

        debug!(
            "Local search ({}): {:.3} -> {:.3} over {} restart(s) x {} iterations, seed {}.",
            mode,
            best.score_history[0],
            best.best_score,
            config.restarts,
            config.iterations,
            base_seed,
        );
        Ok(best)
    }
}
