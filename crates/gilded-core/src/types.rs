//! # Domain Types
//!
//! Core domain types used throughout the inn.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    ItemKind     │   │  CurrencyCode   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  Standard       │   │  "EUR", "USD"   │       │
//! │  │  name           │   │  AgedBrie       │   └─────────────────┘       │
//! │  │  kind           │   │  BackstagePass  │                             │
//! │  │  sell_in        │   │  Sulfuras       │                             │
//! │  │  quality        │   │  Conjured       │                             │
//! │  │  base_price     │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! An item's `id` is generated once, at construction. A clone keeps the id,
//! so the catalog and the cart agree on "the same item" without sharing a
//! reference. Two items built with identical fields are still different items.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;
use crate::quality::{apply_daily_update, QualityState};
use crate::DEFAULT_CURRENCY_CODE;

// =============================================================================
// Item Id
// =============================================================================

/// Identity of an item, independent of its field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh identity (UUID v4).
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Item Kind
// =============================================================================

/// The variant of an item, which selects its daily update rule.
///
/// Fixed for the lifetime of the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Placeholder variant whose daily update changes nothing.
    #[default]
    Standard,
    /// Improves with age, twice as fast once past its sell-by date.
    AgedBrie,
    /// Gains value as the concert nears, worthless after it.
    BackstagePass,
    /// Legendary: never sold, never degrades.
    Sulfuras,
    /// Degrades twice as fast as it would otherwise.
    Conjured,
}

impl ItemKind {
    /// All variants, in declaration order.
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Standard,
        ItemKind::AgedBrie,
        ItemKind::BackstagePass,
        ItemKind::Sulfuras,
        ItemKind::Conjured,
    ];

    /// Whether `quality` is expected to stay within `[0, 50]`.
    pub fn is_quality_bounded(&self) -> bool {
        !matches!(self, ItemKind::Sulfuras)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Standard => write!(f, "standard"),
            ItemKind::AgedBrie => write!(f, "aged_brie"),
            ItemKind::BackstagePass => write!(f, "backstage_pass"),
            ItemKind::Sulfuras => write!(f, "sulfuras"),
            ItemKind::Conjured => write!(f, "conjured"),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// An item in the inn's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identity shared by every clone of this item.
    pub id: ItemId,

    /// Display name, e.g. "Aged Brie".
    pub name: String,

    /// Variant selecting the daily update rule.
    pub kind: ItemKind,

    /// Days left to sell the item. Negative once the date has passed.
    pub sell_in: i64,

    /// How valuable the item is.
    pub quality: i64,

    /// Price a cart line freezes when the item is added.
    pub base_price: Money,
}

impl Item {
    /// Creates a standard item: `(name, sell_in, quality, base_price)`.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64, base_price: Money) -> Self {
        Self::with_kind(ItemKind::Standard, name, sell_in, quality, base_price)
    }

    /// Creates an item of an explicit kind.
    pub fn with_kind(
        kind: ItemKind,
        name: impl Into<String>,
        sell_in: i64,
        quality: i64,
        base_price: Money,
    ) -> Self {
        Item {
            id: ItemId::new(),
            name: name.into(),
            kind,
            sell_in,
            quality,
            base_price,
        }
    }

    pub fn aged_brie(name: impl Into<String>, sell_in: i64, quality: i64, base_price: Money) -> Self {
        Self::with_kind(ItemKind::AgedBrie, name, sell_in, quality, base_price)
    }

    pub fn backstage_pass(
        name: impl Into<String>,
        sell_in: i64,
        quality: i64,
        base_price: Money,
    ) -> Self {
        Self::with_kind(ItemKind::BackstagePass, name, sell_in, quality, base_price)
    }

    pub fn sulfuras(name: impl Into<String>, sell_in: i64, quality: i64, base_price: Money) -> Self {
        Self::with_kind(ItemKind::Sulfuras, name, sell_in, quality, base_price)
    }

    pub fn conjured(name: impl Into<String>, sell_in: i64, quality: i64, base_price: Money) -> Self {
        Self::with_kind(ItemKind::Conjured, name, sell_in, quality, base_price)
    }

    /// Current `(sell_in, quality)` pair.
    #[inline]
    pub fn quality_state(&self) -> QualityState {
        QualityState {
            sell_in: self.sell_in,
            quality: self.quality,
        }
    }

    /// Advances the item by one day according to its kind.
    pub fn update_quality(&mut self) {
        let next = apply_daily_update(self.kind, self.quality_state());
        self.sell_in = next.sell_in;
        self.quality = next.quality;
    }

    /// Whether the sell-by date has passed.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

// =============================================================================
// Currency Code
// =============================================================================

/// An ISO 4217-style currency code such as `"EUR"`.
///
/// Not validated; conversion is a passthrough today.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        CurrencyCode(code.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::new(DEFAULT_CURRENCY_CODE)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new_is_standard() {
        let item = Item::new("+5 Dexterity Vest", 10, 20, Money::from_cents(1500));
        assert_eq!(item.kind, ItemKind::Standard);
        assert_eq!(item.sell_in, 10);
        assert_eq!(item.quality, 20);
        assert_eq!(item.base_price.cents(), 1500);
    }

    #[test]
    fn test_identity_survives_clone_but_not_reconstruction() {
        let a = Item::aged_brie("Aged Brie", 2, 0, Money::from_cents(500));
        let clone = a.clone();
        let twin = Item::aged_brie("Aged Brie", 2, 0, Money::from_cents(500));

        assert_eq!(a.id, clone.id);
        assert_ne!(a.id, twin.id);
    }

    #[test]
    fn test_update_quality_dispatches_on_kind() {
        let mut brie = Item::aged_brie("Aged Brie", 2, 0, Money::zero());
        brie.update_quality();
        assert_eq!((brie.sell_in, brie.quality), (1, 1));

        let mut hand = Item::sulfuras("Sulfuras, Hand of Ragnaros", 0, 80, Money::zero());
        hand.update_quality();
        assert_eq!((hand.sell_in, hand.quality), (0, 80));
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&ItemKind::BackstagePass).unwrap();
        assert_eq!(json, "\"backstage_pass\"");

        let kind: ItemKind = serde_json::from_str("\"conjured\"").unwrap();
        assert_eq!(kind, ItemKind::Conjured);

        for kind in ItemKind::ALL {
            assert_eq!(format!("\"{}\"", kind), serde_json::to_string(&kind).unwrap());
        }
    }

    #[test]
    fn test_only_sulfuras_is_unbounded() {
        assert!(!ItemKind::Sulfuras.is_quality_bounded());
        assert!(ItemKind::AgedBrie.is_quality_bounded());
    }

    #[test]
    fn test_currency_code_default() {
        assert_eq!(CurrencyCode::default().as_str(), "EUR");
        assert_eq!(CurrencyCode::new("USD").to_string(), "USD");
    }
}
