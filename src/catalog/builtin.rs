//! Built-in crop table.

use super::types::{Catalog, Effect, Footprint, ItemSpec};

const SMALL: Footprint = Footprint::UNIT;
const MEDIUM: Footprint = Footprint::new_unchecked(2, 2);
const LARGE: Footprint = Footprint::new_unchecked(3, 3);

const CROPS: [(&str, Option<Effect>, Footprint); 16] = [
    ("Apple", Some(Effect::Harvest), LARGE),
    ("Blueberry", Some(Effect::Harvest), MEDIUM),
    ("Bok Choy", Some(Effect::Weed), SMALL),
    ("Butterfly Bean", Some(Effect::Harvest), MEDIUM),
    ("Carrot", Some(Effect::Weed), SMALL),
    ("Corn", Some(Effect::Harvest), SMALL),
    ("Cotton", Some(Effect::Quality), SMALL),
    ("Lettuce", None, SMALL),
    ("Napa Cabbage", Some(Effect::Water), SMALL),
    ("Onion", Some(Effect::Weed), SMALL),
    ("Potato", Some(Effect::Water), SMALL),
    ("Rice", Some(Effect::Harvest), SMALL),
    ("Rockhopper Pumpkin", Some(Effect::Quality), MEDIUM),
    ("Spicy Pepper", Some(Effect::Quality), MEDIUM),
    ("Tomato", Some(Effect::Water), SMALL),
    ("Wheat", Some(Effect::Harvest), SMALL),
];

impl Catalog {
    /// The standard crop table.
    ///
    /// Apple trees cover 3×3 cells; Blueberry, Butterfly Bean, Rockhopper
    /// Pumpkin and Spicy Pepper cover 2×2; every other crop is 1×1.
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        for (name, effect, footprint) in CROPS {
            catalog.insert(name, ItemSpec::new(effect, footprint));
        }
        catalog
    }
}
