//! Optimization modes and their weight profiles.
//!
//! A mode selects both the per-effect scoring weights used by
//! [`Scorer`](crate::scoring::Scorer) and the effect emphasis used when
//! ordering items in [`GreedyFill`](crate::fill::GreedyFill).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Effect;
use crate::error::Error;

/// Per-effect scoring weights.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightProfile {
    pub harvest: f64,
    pub quality: f64,
    pub growth: f64,
    pub water: f64,
    pub weed: f64,
}

impl WeightProfile {
    /// Weight applied when a cell receives `effect`.
    pub fn weight(&self, effect: Effect) -> f64 {
        match effect {
            Effect::Harvest => self.harvest,
            Effect::Quality => self.quality,
            Effect::Growth => self.growth,
            Effect::Water => self.water,
            Effect::Weed => self.weed,
        }
    }
}

const BALANCED: WeightProfile = WeightProfile {
    harvest: 1.0,
    quality: 0.8,
    growth: 0.8,
    water: 0.6,
    weed: 0.3,
};

const LOW_MAINTENANCE: WeightProfile = WeightProfile {
    harvest: 0.5,
    quality: 0.3,
    growth: 0.3,
    water: 2.0,
    weed: 2.0,
};

const MAX_HARVEST: WeightProfile = WeightProfile {
    harvest: 2.0,
    quality: 0.5,
    growth: 1.0,
    water: 0.3,
    weed: 0.3,
};

const MAX_QUALITY: WeightProfile = WeightProfile {
    harvest: 0.8,
    quality: 2.0,
    growth: 1.0,
    water: 0.5,
    weed: 0.3,
};

/// Named weight profile.
///
/// # Examples
///
/// ```
/// use u_garden::mode::OptimizationMode;
///
/// let mode: OptimizationMode = "max_harvest".parse().unwrap();
/// assert_eq!(mode, OptimizationMode::MaxHarvest);
/// assert_eq!(mode.to_string(), "max_harvest");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OptimizationMode {
    #[default]
    Balanced,
    LowMaintenance,
    MaxHarvest,
    MaxQuality,
}

impl OptimizationMode {
    pub const ALL: [OptimizationMode; 4] = [
        OptimizationMode::Balanced,
        OptimizationMode::LowMaintenance,
        OptimizationMode::MaxHarvest,
        OptimizationMode::MaxQuality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationMode::Balanced => "balanced",
            OptimizationMode::LowMaintenance => "low_maintenance",
            OptimizationMode::MaxHarvest => "max_harvest",
            OptimizationMode::MaxQuality => "max_quality",
        }
    }

    /// Scoring weights for this mode.
    pub fn weights(self) -> &'static WeightProfile {
        match self {
            OptimizationMode::Balanced => &BALANCED,
            OptimizationMode::LowMaintenance => &LOW_MAINTENANCE,
            OptimizationMode::MaxHarvest => &MAX_HARVEST,
            OptimizationMode::MaxQuality => &MAX_QUALITY,
        }
    }

    /// Fill-order emphasis for an item's effect. Higher is placed earlier.
    pub fn effect_priority(self, effect: Option<Effect>) -> u8 {
        let Some(effect) = effect else {
            return 1;
        };
        match self {
            OptimizationMode::LowMaintenance if effect.is_low_upkeep() => 3,
            OptimizationMode::MaxHarvest if effect == Effect::Harvest => 3,
            OptimizationMode::MaxQuality if effect == Effect::Quality => 3,
            OptimizationMode::Balanced
                if matches!(effect, Effect::Harvest | Effect::Quality) =>
            {
                2
            }
            _ => 1,
        }
    }

    /// Multiplier on the preference bonus given the preferred item's effect.
    pub fn preference_multiplier(self, effect: Option<Effect>) -> f64 {
        match (self, effect) {
            (OptimizationMode::LowMaintenance, Some(e)) if e.is_low_upkeep() => 2.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptimizationMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::UnknownMode { name: s.to_owned() })
    }
}
