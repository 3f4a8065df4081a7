//! High-level generate / optimize workflow.
//!
//! [`Planner`] bundles the settings an interactive front end keeps
//! between actions (catalog, preferred item, mode, search budget) and
//! runs the two user-facing operations: *generate* clears the garden and
//! fills it from an inventory, *optimize* improves the current layout.
use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::fill::{FillReport, GreedyFill, Inventory};
use crate::grid::Garden;
use crate::mode::OptimizationMode;
use crate::random::{create_rng, resolve_seed};
use crate::scoring::{ScoreBreakdown, Scorer};
use crate::search::{LocalSearch, SearchConfig, SearchResult};

/// Iteration budget of one "optimize" action.
pub const DEFAULT_OPTIMIZE_ITERATIONS: usize = 4000;

/// Outcome of [`Planner::plan`].
#[derive(Debug, Clone)]
pub struct Plan {
    /// What the greedy fill placed and dropped.
    pub fill: FillReport,
    /// Score of the greedy layout.
    pub initial: ScoreBreakdown,
    /// Local search outcome; `search.best` is the final layout.
    pub search: SearchResult,
    /// Score of the final layout.
    pub score: ScoreBreakdown,
}

/// Generate / optimize driver.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_garden::catalog::Catalog;
/// use u_garden::fill::Inventory;
/// use u_garden::mode::OptimizationMode;
/// use u_garden::planner::Planner;
/// use u_garden::search::SearchConfig;
///
/// let catalog = Arc::new(Catalog::builtin());
/// let planner = Planner::new(catalog.clone())
///     .with_preferred("Tomato")
///     .with_mode(OptimizationMode::LowMaintenance)
///     .with_search(SearchConfig::default().with_iterations(500).with_seed(1));
///
/// let plan = planner.plan(6, 6, &Inventory::full(&catalog, 2)).unwrap();
/// assert!(plan.score.total >= plan.initial.total);
/// ```
pub struct Planner {
    catalog: Arc<Catalog>,
    preferred: String,
    mode: OptimizationMode,
    search: SearchConfig,
    fill: GreedyFill,
}

impl Planner {
    /// Planner with no preferred item, balanced mode and the default
    /// optimize budget.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            preferred: String::new(),
            mode: OptimizationMode::default(),
            search: SearchConfig::default().with_iterations(DEFAULT_OPTIMIZE_ITERATIONS),
            fill: GreedyFill::new(),
        }
    }

    /// Item that earns the preference bonus. Empty means none.
    pub fn with_preferred(mut self, preferred: impl Into<String>) -> Self {
        self.preferred = preferred.into();
        self
    }

    pub fn with_mode(mut self, mode: OptimizationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_fill(mut self, fill: GreedyFill) -> Self {
        self.fill = fill;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn preferred(&self) -> &str {
        &self.preferred
    }

    pub fn mode(&self) -> OptimizationMode {
        self.mode
    }

    /// Empty garden sharing this planner's catalog.
    pub fn garden(&self, rows: usize, cols: usize) -> Garden {
        Garden::new(rows, cols, self.catalog.clone())
    }

    /// Checks that the preferred item exists and the search config is valid.
    pub fn validate(&self) -> Result<()> {
        if !self.preferred.is_empty() {
            self.catalog.require(&self.preferred)?;
        }
        self.search.validate()
    }

    /// Scores `garden` with this planner's preferred item and mode.
    pub fn score(&self, garden: &Garden) -> ScoreBreakdown {
        Scorer::score(garden, &self.preferred, self.mode)
    }

    /// Clears `garden` and refills it from `inventory`.
    pub fn generate(
        &self,
        garden: &mut Garden,
        inventory: &Inventory,
    ) -> Result<(FillReport, ScoreBreakdown)> {
        self.validate()?;

        let mut rng = create_rng(resolve_seed(self.fill_seed()));
        garden.clear();
        let report = self
            .fill
            .fill(garden, inventory, &self.preferred, self.mode, &mut rng)?;
        let score = self.score(garden);

        info!(
            "Generated {}x{} layout ({}): {} placed, {} unplaced, score {}.",
            garden.rows(),
            garden.cols(),
            self.mode,
            report.placed.len(),
            report.unplaced_total(),
            score.reported_total,
        );
        Ok((report, score))
    }

    /// Seed of the fill stream: just past the seeds the search restarts
    /// use, so generate and optimize never share a stream.
    fn fill_seed(&self) -> Option<u64> {
        self.search
            .seed
            .map(|seed| seed.wrapping_add(self.search.restarts as u64))
    }

    /// Improves `garden` without modifying it.
    pub fn optimize(&self, garden: &Garden) -> Result<(SearchResult, ScoreBreakdown)> {
        self.validate()?;

        let result = LocalSearch::run(garden, &self.preferred, self.mode, &self.search)?;
        let score = self.score(&result.best);

        info!(
            "Optimized layout ({}): score {} after {} iterations ({} accepted).",
            self.mode, score.reported_total, result.iterations, result.accepted_moves,
        );
        Ok((result, score))
    }

    /// Generates a fresh `rows × cols` layout and optimizes it.
    pub fn plan(&self, rows: usize, cols: usize, inventory: &Inventory) -> Result<Plan> {
        let mut garden = self.garden(rows, cols);
        let (fill, initial) = self.generate(&mut garden, inventory)?;
        let (search, score) = self.optimize(&garden)?;
        Ok(Plan {
            fill,
            initial,
            search,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn planner() -> Planner {
        Planner::new(Arc::new(Catalog::builtin()))
            .with_search(SearchConfig::default().with_iterations(300).with_seed(8))
    }

    #[test]
    fn test_default_budget() {
        let p = Planner::new(Arc::new(Catalog::new()));
        assert_eq!(p.search.iterations, DEFAULT_OPTIMIZE_ITERATIONS);
        assert_eq!(p.mode(), OptimizationMode::Balanced);
        assert_eq!(p.preferred(), "");
    }

    #[test]
    fn test_generate_clears_previous_layout() {
        let p = planner();
        let mut garden = p.garden(3, 3);
        garden.place("Apple", 0, 0).unwrap();

        let inv = Inventory::new().with("Corn", 2);
        let (report, score) = p.generate(&mut garden, &inv).unwrap();
        assert_eq!(garden.len(), 2);
        assert_eq!(report.placed.len(), 2);
        assert_eq!(report.placed[0].get(), 1);
        // two corn side by side in the top row
        assert_eq!(score.same_species_adjacent, 2);
    }

    #[test]
    fn test_fill_stream_is_separate_from_search() {
        let catalog = Arc::new(Catalog::builtin());
        let inv = Inventory::new().with("Corn", 3).with("Onion", 3).with("Tomato", 3);
        let p = Planner::new(catalog.clone())
            .with_search(SearchConfig::default().with_seed(40).with_restarts(3));
        assert_eq!(p.fill_seed(), Some(43));

        let mut generated = p.garden(3, 3);
        p.generate(&mut generated, &inv).unwrap();

        let mut expected = p.garden(3, 3);
        let mut rng = create_rng(43);
        GreedyFill::new()
            .fill(&mut expected, &inv, "", OptimizationMode::Balanced, &mut rng)
            .unwrap();
        assert_eq!(generated, expected);
    }

    #[test]
    fn test_unknown_preferred_is_rejected() {
        let p = planner().with_preferred("Moonflower");
        let mut garden = p.garden(3, 3);
        let err = p.generate(&mut garden, &Inventory::new()).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownItem {
                name: "Moonflower".into()
            }
        );
    }

    #[test]
    fn test_plan_never_loses_score() {
        let catalog = Arc::new(Catalog::builtin());
        let p = Planner::new(catalog.clone())
            .with_preferred("Corn")
            .with_mode(OptimizationMode::MaxHarvest)
            .with_search(SearchConfig::default().with_iterations(400).with_seed(3));

        let plan = p.plan(9, 9, &Inventory::full(&catalog, 3)).unwrap();
        assert!(plan.score.total >= plan.initial.total);
        assert_eq!(plan.search.best.len(), plan.fill.placed.len());
        plan.search.best.validate().unwrap();
    }

    #[test]
    fn test_optimize_keeps_input() {
        let p = planner();
        let mut garden = p.garden(4, 4);
        p.generate(&mut garden, &Inventory::new().with("Corn", 6).with("Onion", 2))
            .unwrap();
        let before = garden.clone();
        let (result, score) = p.optimize(&garden).unwrap();
        assert_eq!(garden, before);
        assert_eq!(score.total.to_bits(), result.best_score.to_bits());
    }
}
