//! Priority rules for ordering fill candidates.

use crate::catalog::ItemSpec;
use crate::mode::OptimizationMode;

/// One item instance waiting to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub spec: ItemSpec,
}

/// State shared by every rule during one fill.
#[derive(Debug, Clone, Copy)]
pub struct FillContext<'a> {
    pub preferred: &'a str,
    pub mode: OptimizationMode,
}

/// A scoring rule that assigns a priority value to a candidate.
///
/// Rules return `f64` scores where **lower is higher priority**.
///
/// # Examples
///
/// ```
/// use u_garden::fill::{Candidate, FillContext, PriorityRule};
///
/// // Place items without an effect last.
/// struct EffectFirst;
///
/// impl PriorityRule for EffectFirst {
///     fn name(&self) -> &str { "EffectFirst" }
///     fn score(&self, item: &Candidate<'_>, _ctx: &FillContext<'_>) -> f64 {
///         if item.spec.effect.is_some() { 0.0 } else { 1.0 }
///     }
/// }
/// ```
pub trait PriorityRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given candidate.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, item: &Candidate<'_>, context: &FillContext<'_>) -> f64;
}

/// The preferred item ahead of everything else.
pub struct PreferredFirst;

impl PriorityRule for PreferredFirst {
    fn name(&self) -> &str {
        "PreferredFirst"
    }

    fn score(&self, item: &Candidate<'_>, context: &FillContext<'_>) -> f64 {
        if item.name == context.preferred {
            0.0
        } else {
            1.0
        }
    }
}

/// Effects the active mode emphasizes ahead of the rest.
pub struct EffectEmphasis;

impl PriorityRule for EffectEmphasis {
    fn name(&self) -> &str {
        "EffectEmphasis"
    }

    fn score(&self, item: &Candidate<'_>, context: &FillContext<'_>) -> f64 {
        -f64::from(context.mode.effect_priority(item.spec.effect))
    }
}

/// Bulky items first, while open space remains.
pub struct LargestFootprint;

impl PriorityRule for LargestFootprint {
    fn name(&self) -> &str {
        "LargestFootprint"
    }

    fn score(&self, item: &Candidate<'_>, _context: &FillContext<'_>) -> f64 {
        -(item.spec.footprint.area() as f64)
    }
}

/// Applies rules in order; a later rule is only consulted when every
/// earlier rule ties (within epsilon). Full ties keep their input order.
///
/// # Examples
///
/// ```
/// use u_garden::fill::{LargestFootprint, PreferredFirst, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(PreferredFirst)
///     .with_rule(LargestFootprint);
/// assert_eq!(engine.rule_names(), vec!["PreferredFirst", "LargestFootprint"]);
/// ```
pub struct RuleEngine {
    rules: Vec<Box<dyn PriorityRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Preferred item, then mode emphasis, then footprint area.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(PreferredFirst)
            .with_rule(EffectEmphasis)
            .with_rule(LargestFootprint)
    }

    /// Sets the epsilon for floating-point comparison.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Appends a rule.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by priority (lowest score first = highest priority).
    ///
    /// Returns indices into the original slice. The sort is stable.
    pub fn sort_indices(&self, items: &[Candidate<'_>], context: &FillContext<'_>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        let scores: Vec<Vec<f64>> = items
            .iter()
            .map(|item| self.rules.iter().map(|r| r.score(item, context)).collect())
            .collect();

        indices.sort_by(|&a, &b| {
            for (va, vb) in scores[a].iter().zip(scores[b].iter()) {
                if (va - vb).abs() > self.epsilon {
                    return va.partial_cmp(vb).unwrap_or(std::cmp::Ordering::Equal);
                }
            }
            std::cmp::Ordering::Equal
        });

        indices
    }
}

/// Same as [`RuleEngine::new`]: no rules.
impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Effect, Footprint};

    fn candidate(name: &str, effect: Option<Effect>, side: usize) -> Candidate<'_> {
        Candidate {
            name,
            spec: ItemSpec::new(effect, Footprint::square(side).unwrap()),
        }
    }

    #[test]
    fn test_empty_engine_preserves_order() {
        let items = vec![candidate("B", None, 1), candidate("A", None, 2)];
        let ctx = FillContext {
            preferred: "",
            mode: OptimizationMode::Balanced,
        };
        assert_eq!(RuleEngine::new().sort_indices(&items, &ctx), vec![0, 1]);
        assert_eq!(RuleEngine::default().rule_count(), 0);
    }

    #[test]
    fn test_standard_order_balanced() {
        let items = vec![
            candidate("Lettuce", None, 1),
            candidate("Corn", Some(Effect::Harvest), 1),
            candidate("Apple", Some(Effect::Harvest), 3),
            candidate("Onion", Some(Effect::Weed), 1),
            candidate("Tomato", Some(Effect::Water), 1),
        ];
        let ctx = FillContext {
            preferred: "Tomato",
            mode: OptimizationMode::Balanced,
        };
        let order = RuleEngine::standard().sort_indices(&items, &ctx);
        // Tomato (preferred), Apple (harvest, 9), Corn (harvest, 1), then
        // Lettuce and Onion tie and keep input order.
        assert_eq!(order, vec![4, 2, 1, 0, 3]);
    }

    #[test]
    fn test_low_maintenance_emphasizes_upkeep() {
        let items = vec![
            candidate("Apple", Some(Effect::Harvest), 3),
            candidate("Onion", Some(Effect::Weed), 1),
            candidate("Tomato", Some(Effect::Water), 1),
        ];
        let ctx = FillContext {
            preferred: "",
            mode: OptimizationMode::LowMaintenance,
        };
        let order = RuleEngine::standard().sort_indices(&items, &ctx);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_equal_priority_is_stable() {
        let items: Vec<_> = (0..20).map(|_| candidate("Corn", Some(Effect::Harvest), 1)).collect();
        let ctx = FillContext {
            preferred: "",
            mode: OptimizationMode::MaxHarvest,
        };
        let order = RuleEngine::standard().sort_indices(&items, &ctx);
        assert_eq!(order, (0..20).collect::<Vec<_>>());
    }

    struct Nudge;

    impl PriorityRule for Nudge {
        fn name(&self) -> &str {
            "Nudge"
        }

        fn score(&self, item: &Candidate<'_>, _context: &FillContext<'_>) -> f64 {
            if item.name == "B" {
                -1e-6
            } else {
                0.0
            }
        }
    }

    #[test]
    fn test_epsilon_controls_ties() {
        let items = vec![candidate("A", None, 1), candidate("B", None, 1)];
        let ctx = FillContext {
            preferred: "",
            mode: OptimizationMode::Balanced,
        };

        let strict = RuleEngine::new().with_rule(Nudge);
        assert_eq!(strict.sort_indices(&items, &ctx), vec![1, 0]);

        let loose = RuleEngine::new().with_rule(Nudge).with_epsilon(1e-3);
        assert_eq!(loose.sort_indices(&items, &ctx), vec![0, 1]);
    }

    #[test]
    fn test_rule_names() {
        let engine = RuleEngine::standard();
        assert_eq!(engine.rule_count(), 3);
        assert_eq!(
            engine.rule_names(),
            vec!["PreferredFirst", "EffectEmphasis", "LargestFootprint"]
        );
    }
}
