//! Catalog data types.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Effect category an item grants to orthogonally adjacent cells.
///
/// "No effect" is modeled as `Option<Effect>::None` on [`ItemSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    Harvest,
    Water,
    Quality,
    Weed,
    Growth,
}

impl Effect {
    /// All effect categories in a fixed order.
    pub const ALL: [Effect; 5] = [
        Effect::Harvest,
        Effect::Water,
        Effect::Quality,
        Effect::Weed,
        Effect::Growth,
    ];

    /// Dense index in `0..Effect::ALL.len()`.
    pub fn index(self) -> usize {
        match self {
            Effect::Harvest => 0,
            Effect::Water => 1,
            Effect::Quality => 2,
            Effect::Weed => 3,
            Effect::Growth => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Effect::Harvest => "harvest",
            Effect::Water => "water",
            Effect::Quality => "quality",
            Effect::Weed => "weed",
            Effect::Growth => "growth",
        }
    }

    /// Whether this effect reduces upkeep (watering or weeding).
    pub fn is_low_upkeep(self) -> bool {
        matches!(self, Effect::Water | Effect::Weed)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width × height rectangle of cells an item occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footprint {
    width: usize,
    height: usize,
}

impl Footprint {
    /// 1×1 footprint.
    pub const UNIT: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    /// Creates a footprint; both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidFootprint { width, height });
        }
        Ok(Self { width, height })
    }

    /// Both dimensions must be non-zero; callers pass literals.
    pub(crate) const fn new_unchecked(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Square footprint of side `side`.
    pub fn square(side: usize) -> Result<Self> {
        Self::new(side, side)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of covered cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Static description of one item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemSpec {
    /// Effect granted to neighbors, if any.
    pub effect: Option<Effect>,
    /// Cells covered when placed.
    pub footprint: Footprint,
}

impl ItemSpec {
    pub fn new(effect: Option<Effect>, footprint: Footprint) -> Self {
        Self { effect, footprint }
    }
}

/// Mapping from item name to [`ItemSpec`].
///
/// Names are case-sensitive. Iteration is ordered by name so that any
/// order derived from the catalog is reproducible.
///
/// # Examples
///
/// ```
/// use u_garden::catalog::{Catalog, Effect, Footprint};
///
/// let catalog = Catalog::new()
///     .with_item("Corn", Some(Effect::Harvest), Footprint::UNIT)
///     .with_item("Lettuce", None, Footprint::UNIT);
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("Corn").unwrap().effect, Some(Effect::Harvest));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    items: BTreeMap<String, ItemSpec>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an item.
    pub fn with_item(
        mut self,
        name: impl Into<String>,
        effect: Option<Effect>,
        footprint: Footprint,
    ) -> Self {
        self.insert(name, ItemSpec::new(effect, footprint));
        self
    }

    /// Inserts an item, returning the previous spec for that name.
    pub fn insert(&mut self, name: impl Into<String>, spec: ItemSpec) -> Option<ItemSpec> {
        self.items.insert(name.into(), spec)
    }

    pub fn get(&self, name: &str) -> Option<&ItemSpec> {
        self.items.get(name)
    }

    /// Looks up an item, reporting a miss as [`Error::UnknownItem`].
    pub fn require(&self, name: &str) -> Result<&ItemSpec> {
        self.items.get(name).ok_or_else(|| Error::UnknownItem {
            name: name.to_owned(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates `(name, spec)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemSpec)> {
        self.items.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Item names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}
