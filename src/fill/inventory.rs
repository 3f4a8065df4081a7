//! Item counts available for placement.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Mapping from item name to the number of instances available.
///
/// Ordered by name, so expansion order is reproducible for a given seed.
///
/// # Examples
///
/// ```
/// use u_garden::fill::Inventory;
///
/// let inventory = Inventory::new().with("Corn", 3).with("Onion", 2);
/// assert_eq!(inventory.total(), 5);
/// assert_eq!(inventory.count("Corn"), 3);
/// assert_eq!(inventory.count("Apple"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    counts: BTreeMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every item in `catalog`, stocked by size: 2 of each 3×3 item, 4 of
    /// each 2×2 item and 8 of everything else.
    pub fn add_all(catalog: &Catalog) -> Self {
        catalog
            .iter()
            .map(|(name, spec)| {
                let fp = spec.footprint;
                let count = match (fp.width(), fp.height()) {
                    (3, 3) => 2,
                    (2, 2) => 4,
                    _ => 8,
                };
                (name, count)
            })
            .collect()
    }

    /// `count` of every item in `catalog`.
    pub fn full(catalog: &Catalog, count: usize) -> Self {
        catalog.names().map(|name| (name, count)).collect()
    }

    /// Sets the count for `name`.
    pub fn with(mut self, name: impl Into<String>, count: usize) -> Self {
        self.set(name, count);
        self
    }

    /// Sets the count for `name`; a zero count removes the entry.
    pub fn set(&mut self, name: impl Into<String>, count: usize) {
        let name = name.into();
        if count == 0 {
            self.counts.remove(&name);
        } else {
            self.counts.insert(name, count);
        }
    }

    /// Adds `count` instances of `name`.
    pub fn add(&mut self, name: impl Into<String>, count: usize) {
        if count > 0 {
            *self.counts.entry(name.into()).or_insert(0) += count;
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Total number of instances.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(name, count)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for (name, count) in iter {
            inventory.add(name, count);
        }
        inventory
    }
}
