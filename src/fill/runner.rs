//! Greedy fill execution.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::inventory::Inventory;
use super::rules::{Candidate, FillContext, RuleEngine};
use crate::error::Result;
use crate::grid::{Garden, PlacementId};
use crate::mode::OptimizationMode;

/// Outcome of one fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Ids of the new placements, in placement order.
    pub placed: Vec<PlacementId>,
    /// Instances that fit nowhere, per item.
    pub unplaced: BTreeMap<String, usize>,
}

impl FillReport {
    /// Whether every requested instance was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Total instances left unplaced.
    pub fn unplaced_total(&self) -> usize {
        self.unplaced.values().sum()
    }
}

/// Row-major first-fit constructor ordered by a [`RuleEngine`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_garden::catalog::Catalog;
/// use u_garden::fill::{GreedyFill, Inventory};
/// use u_garden::grid::Garden;
/// use u_garden::mode::OptimizationMode;
///
/// let mut garden = Garden::new(9, 9, Arc::new(Catalog::builtin()));
/// let inventory = Inventory::new().with("Apple", 2).with("Corn", 10);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let report = GreedyFill::new()
///     .fill(&mut garden, &inventory, "Corn", OptimizationMode::MaxHarvest, &mut rng)
///     .unwrap();
/// assert!(report.is_complete());
/// assert_eq!(garden.len(), 12);
/// ```
pub struct GreedyFill {
    engine: RuleEngine,
}

impl GreedyFill {
    /// Fill with the standard priority rules.
    pub fn new() -> Self {
        Self::with_engine(RuleEngine::standard())
    }

    /// Fill with a custom rule engine.
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Places as much of `inventory` into `garden` as fits.
    ///
    /// Existing placements are kept. Fails with
    /// [`Error::UnknownItem`](crate::error::Error::UnknownItem) before
    /// touching the garden if the inventory names an item missing from the
    /// garden's catalog.
    pub fn fill<R: Rng + ?Sized>(
        &self,
        garden: &mut Garden,
        inventory: &Inventory,
        preferred: &str,
        mode: OptimizationMode,
        rng: &mut R,
    ) -> Result<FillReport> {
        let catalog = garden.catalog().clone();

        let mut candidates = Vec::with_capacity(inventory.total());
        for (name, count) in inventory.iter() {
            let spec = *catalog.require(name)?;
            candidates.extend(std::iter::repeat_n(Candidate { name, spec }, count));
        }
        candidates.shuffle(rng);

        let context = FillContext { preferred, mode };
        let order = self.engine.sort_indices(&candidates, &context);

        let mut report = FillReport::default();
        for idx in order {
            let name = candidates[idx].name;
            match first_fit(garden, name) {
                Some(id) => report.placed.push(id),
                None => *report.unplaced.entry(name.to_owned()).or_insert(0) += 1,
            }
        }

        debug!(
            "Fill ({}): placed {} of {} items, {} unplaced.",
            mode,
            report.placed.len(),
            candidates.len(),
            report.unplaced_total(),
        );

        Ok(report)
    }
}

impl Default for GreedyFill {
    fn default() -> Self {
        Self::new()
    }
}

/// Places `item` at the first row-major anchor that admits it.
fn first_fit(garden: &mut Garden, item: &str) -> Option<PlacementId> {
    for row in 0..garden.rows() {
        for col in 0..garden.cols() {
            if garden.can_place(item, row, col) {
                return garden.place(item, row, col);
            }
        }
    }
    None
}
