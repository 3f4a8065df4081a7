//! Local search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for [`LocalSearch::run`](super::LocalSearch::run).
///
/// # Examples
///
/// ```
/// use u_garden::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_iterations(4000)
///     .with_restarts(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Relocation attempts per restart. 0 returns the input unchanged.
    pub iterations: usize,

    /// Independent restarts from the input layout. Must be at least 1.
    pub restarts: usize,

    /// Random seed for reproducibility. Restart `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Whether to run restarts in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 3000,
            restarts: 1,
            seed: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(Error::InvalidConfig("restarts must be at least 1".into()));
        }
        Ok(())
    }
}
