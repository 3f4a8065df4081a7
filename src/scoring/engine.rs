//! Layout scoring.

use std::collections::BTreeMap;

use super::types::{round3, ScoreBreakdown, PREFERRED_WEIGHT, SAME_SPECIES_PENALTY};
use crate::catalog::Effect;
use crate::grid::Garden;
use crate::mode::OptimizationMode;

/// Scores garden layouts.
pub struct Scorer;

impl Scorer {
    /// Scores `garden` under `mode`, favoring placements of `preferred`.
    ///
    /// Each covered cell looks at its four orthogonal neighbors. A neighbor
    /// holding the same item name costs [`SAME_SPECIES_PENALTY`] per
    /// (cell, neighbor) pair. Otherwise the neighbor's effect, if any, is
    /// received by the cell; each distinct effect counts once per cell and
    /// adds its mode weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use u_garden::catalog::{Catalog, Effect, Footprint};
    /// use u_garden::grid::Garden;
    /// use u_garden::mode::OptimizationMode;
    /// use u_garden::scoring::Scorer;
    ///
    /// let catalog = Arc::new(
    ///     Catalog::new()
    ///         .with_item("Corn", Some(Effect::Harvest), Footprint::UNIT)
    ///         .with_item("Onion", Some(Effect::Weed), Footprint::UNIT),
    /// );
    /// let mut garden = Garden::new(1, 2, catalog);
    /// garden.place("Corn", 0, 0);
    /// garden.place("Onion", 0, 1);
    ///
    /// let score = Scorer::score(&garden, "", OptimizationMode::Balanced);
    /// assert_eq!(score.reported_total, 1.3);
    /// ```
    pub fn score(garden: &Garden, preferred: &str, mode: OptimizationMode) -> ScoreBreakdown {
        let weights = mode.weights();
        let catalog = garden.catalog();

        let mut total = 0.0;
        let mut counts = [0usize; Effect::ALL.len()];
        let mut same_species_adjacent = 0;
        let mut preferred_count = 0;

        for (id, placement) in garden.placements() {
            let spec = catalog.get(&placement.item).copied();

            if placement.item == preferred {
                let effect = spec.and_then(|s| s.effect);
                total += PREFERRED_WEIGHT * mode.preference_multiplier(effect);
                preferred_count += 1;
            }

            for (row, col) in placement.cells() {
                let mut received = [false; Effect::ALL.len()];

                for (nr, nc) in garden.neighbors(row, col) {
                    let Some(neighbor_id) = garden.cell(nr, nc) else {
                        continue;
                    };
                    if neighbor_id == id {
                        continue;
                    }
                    let Some(neighbor) = garden.placement(neighbor_id) else {
                        continue;
                    };

                    if neighbor.item == placement.item {
                        same_species_adjacent += 1;
                        total -= SAME_SPECIES_PENALTY;
                        continue;
                    }
                    if let Some(effect) = catalog.get(&neighbor.item).and_then(|s| s.effect) {
                        received[effect.index()] = true;
                    }
                }

                for effect in Effect::ALL {
                    if received[effect.index()] {
                        total += weights.weight(effect);
                        counts[effect.index()] += 1;
                    }
                }
            }
        }

        let bonus_counts: BTreeMap<Effect, usize> = Effect::ALL
            .into_iter()
            .filter(|e| counts[e.index()] > 0)
            .map(|e| (e, counts[e.index()]))
            .collect();

        ScoreBreakdown {
            total,
            reported_total: round3(total),
            bonus_counts,
            same_species_adjacent,
            preferred_count,
            mode,
        }
    }

    /// Unrounded total only.
    pub fn total(garden: &Garden, preferred: &str, mode: OptimizationMode) -> f64 {
        Self::score(garden, preferred, mode).total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Footprint};
    use std::sync::Arc;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new()
                .with_item("Corn", Some(Effect::Harvest), Footprint::UNIT)
                .with_item("Onion", Some(Effect::Weed), Footprint::UNIT)
                .with_item("Carrot", Some(Effect::Weed), Footprint::UNIT)
                .with_item("Tomato", Some(Effect::Water), Footprint::UNIT)
                .with_item("Lettuce", None, Footprint::UNIT)
                .with_item("Pepper", Some(Effect::Quality), Footprint::square(2).unwrap()),
        )
    }

    #[test]
    fn test_empty_garden_scores_zero() {
        let g = Garden::new(4, 4, catalog());
        let s = Scorer::score(&g, "Corn", OptimizationMode::Balanced);
        assert_eq!(s.total, 0.0);
        assert!(s.bonus_counts.is_empty());
        assert_eq!(s.same_species_adjacent, 0);
        assert_eq!(s.preferred_count, 0);
    }

    #[test]
    fn test_harvest_surrounded_by_weed() {
        let mut g = Garden::new(3, 3, catalog());
        g.place("Corn", 1, 1).unwrap();
        for (r, c) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            g.place("Onion", r, c).unwrap();
        }

        let s = Scorer::score(&g, "", OptimizationMode::Balanced);
        // center receives weed once (0.3); each onion receives harvest (4 x 1.0)
        assert_eq!(s.bonus_count(Effect::Weed), 1);
        assert_eq!(s.bonus_count(Effect::Harvest), 4);
        assert_eq!(s.same_species_adjacent, 0);
        assert!((s.total - 4.3).abs() < 1e-9);
        assert_eq!(s.reported_total, 4.3);
    }

    #[test]
    fn test_distinct_effects_each_count_per_cell() {
        let mut g = Garden::new(1, 3, catalog());
        g.place("Onion", 0, 0).unwrap();
        g.place("Corn", 0, 1).unwrap();
        g.place("Tomato", 0, 2).unwrap();

        let s = Scorer::score(&g, "", OptimizationMode::Balanced);
        // corn: weed 0.3 + water 0.6; onion: harvest 1.0; tomato: harvest 1.0
        assert_eq!(s.bonus_count(Effect::Harvest), 2);
        assert_eq!(s.bonus_count(Effect::Weed), 1);
        assert_eq!(s.bonus_count(Effect::Water), 1);
        assert!((s.total - 2.9).abs() < 1e-9);
    }

    #[test]
    fn test_same_species_pair_penalty() {
        for mode in OptimizationMode::ALL {
            let mut g = Garden::new(2, 2, catalog());
            g.place("Corn", 0, 0).unwrap();
            g.place("Corn", 0, 1).unwrap();

            let s = Scorer::score(&g, "", mode);
            assert_eq!(s.same_species_adjacent, 2);
            assert!(s.bonus_counts.is_empty());
            assert!((s.total + 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_same_species_penalty_scales_with_shared_edge() {
        let mut g = Garden::new(2, 4, catalog());
        g.place("Pepper", 0, 0).unwrap();
        g.place("Pepper", 0, 2).unwrap();

        let s = Scorer::score(&g, "", OptimizationMode::Balanced);
        assert_eq!(s.same_species_adjacent, 4);
        assert!((s.total + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_different_items_same_effect_are_not_penalized() {
        let mut g = Garden::new(1, 2, catalog());
        g.place("Onion", 0, 0).unwrap();
        g.place("Carrot", 0, 1).unwrap();

        let s = Scorer::score(&g, "", OptimizationMode::LowMaintenance);
        assert_eq!(s.same_species_adjacent, 0);
        assert_eq!(s.bonus_count(Effect::Weed), 2);
        assert!((s.total - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_effect_neighbor_gives_nothing() {
        let mut g = Garden::new(1, 2, catalog());
        g.place("Corn", 0, 0).unwrap();
        g.place("Lettuce", 0, 1).unwrap();

        let s = Scorer::score(&g, "", OptimizationMode::Balanced);
        // only lettuce receives harvest
        assert_eq!(s.bonus_count(Effect::Harvest), 1);
        assert!((s.total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_large_item_receives_per_cell() {
        let mut g = Garden::new(2, 3, catalog());
        g.place("Pepper", 0, 0).unwrap();
        g.place("Corn", 0, 2).unwrap();
        g.place("Tomato", 1, 2).unwrap();

        let s = Scorer::score(&g, "", OptimizationMode::MaxQuality);
        // pepper (0,1) gets harvest, pepper (1,1) gets water
        // corn gets quality and water, tomato gets quality and harvest
        assert_eq!(s.bonus_count(Effect::Harvest), 2);
        assert_eq!(s.bonus_count(Effect::Water), 2);
        assert_eq!(s.bonus_count(Effect::Quality), 2);
        let expected = 0.8 + 0.5 + 2.0 + 0.5 + 2.0 + 0.8;
        assert!((s.total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_preferred_bonus() {
        let mut g = Garden::new(3, 3, catalog());
        g.place("Onion", 0, 0).unwrap();
        g.place("Onion", 2, 2).unwrap();

        let s = Scorer::score(&g, "Onion", OptimizationMode::Balanced);
        assert_eq!(s.preferred_count, 2);
        assert!((s.total - 1.0).abs() < 1e-12);

        let s = Scorer::score(&g, "Onion", OptimizationMode::LowMaintenance);
        assert!((s.total - 2.0).abs() < 1e-12);

        let s = Scorer::score(&g, "Corn", OptimizationMode::LowMaintenance);
        assert_eq!(s.preferred_count, 0);
        assert_eq!(s.total, 0.0);
    }

    #[test]
    fn test_preferred_multiplier_needs_low_upkeep_effect() {
        let mut g = Garden::new(3, 3, catalog());
        g.place("Corn", 0, 0).unwrap();
        let s = Scorer::score(&g, "Corn", OptimizationMode::LowMaintenance);
        assert!((s.total - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut g = Garden::new(3, 3, catalog());
        g.place("Pepper", 0, 0).unwrap();
        g.place("Corn", 0, 2).unwrap();
        g.place("Corn", 1, 2).unwrap();
        g.place("Tomato", 2, 0).unwrap();

        let a = Scorer::score(&g, "Corn", OptimizationMode::MaxHarvest);
        let b = Scorer::score(&g, "Corn", OptimizationMode::MaxHarvest);
        assert_eq!(a.total.to_bits(), b.total.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_mode_changes_weights() {
        let mut g = Garden::new(1, 2, catalog());
        g.place("Corn", 0, 0).unwrap();
        g.place("Lettuce", 0, 1).unwrap();
        assert!((Scorer::total(&g, "", OptimizationMode::MaxHarvest) - 2.0).abs() < 1e-12);
        assert!((Scorer::total(&g, "", OptimizationMode::LowMaintenance) - 0.5).abs() < 1e-12);
    }
}
