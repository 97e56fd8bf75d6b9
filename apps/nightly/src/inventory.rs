//! # Inventory Seeding
//!
//! Turns configured item specs into a catalog. Without a config file the inn
//! opens with its classic stock.

use gilded_core::{Catalog, Item, ItemKind, Money};
use serde::{Deserialize, Serialize};

/// One item as written in the config file.
///
/// ```toml
/// [[inventory]]
/// name = "Aged Brie"
/// kind = "aged_brie"
/// sell_in = 2
/// quality = 0
/// base_price_cents = 800
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,

    #[serde(default)]
    pub kind: ItemKind,

    pub sell_in: i64,

    pub quality: i64,

    #[serde(default)]
    pub base_price_cents: i64,
}

impl ItemSpec {
    pub fn new(name: &str, kind: ItemKind, sell_in: i64, quality: i64, base_price_cents: i64) -> Self {
        ItemSpec {
            name: name.to_string(),
            kind,
            sell_in,
            quality,
            base_price_cents,
        }
    }

    /// Builds a fresh item (new identity) from this spec.
    pub fn to_item(&self) -> Item {
        Item::with_kind(
            self.kind,
            self.name.clone(),
            self.sell_in,
            self.quality,
            Money::from_cents(self.base_price_cents),
        )
    }
}

/// The stock the inn opens with.
pub fn classic_inventory() -> Vec<ItemSpec> {
    vec![
        ItemSpec::new("+5 Dexterity Vest", ItemKind::Standard, 10, 20, 1500),
        ItemSpec::new("Aged Brie", ItemKind::AgedBrie, 2, 0, 800),
        ItemSpec::new("Elixir of the Mongoose", ItemKind::Standard, 5, 7, 1099),
        ItemSpec::new("Sulfuras, Hand of Ragnaros", ItemKind::Sulfuras, 0, 80, 100_000),
        ItemSpec::new("Sulfuras, Hand of Ragnaros", ItemKind::Sulfuras, -1, 80, 100_000),
        ItemSpec::new(
            "Backstage passes to a TAFKAL80ETC concert",
            ItemKind::BackstagePass,
            15,
            20,
            2500,
        ),
        ItemSpec::new(
            "Backstage passes to a TAFKAL80ETC concert",
            ItemKind::BackstagePass,
            10,
            49,
            2500,
        ),
        ItemSpec::new(
            "Backstage passes to a TAFKAL80ETC concert",
            ItemKind::BackstagePass,
            5,
            49,
            2500,
        ),
        ItemSpec::new("Conjured Mana Cake", ItemKind::Conjured, 3, 6, 300),
    ]
}

/// Builds a catalog holding one item per spec, in order.
pub fn seed_catalog(specs: &[ItemSpec]) -> Catalog {
    specs.iter().map(ItemSpec::to_item).collect()
}
