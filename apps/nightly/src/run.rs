//! # Nightly Run
//!
//! Owns the catalog and ages it one night at a time, keeping a snapshot of
//! every item after each night (day 0 is the opening stock).
//!
//! ```text
//! NightlyRun::new(catalog)      history = [day 0]
//!      │
//!      ▼
//! advance_day() × N             catalog.update_quality(); history.push(day n)
//!      │
//!      ▼
//! fill_cart(orders, currency)   prices today's stock
//! ```

use gilded_core::{Cart, Catalog, CurrencyCode, Item, ItemKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::OrderSpec;
use crate::error::{NightlyError, NightlyResult};

/// One item as it stood at the end of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub kind: ItemKind,
    pub sell_in: i64,
    pub quality: i64,
}

impl From<&Item> for ItemSnapshot {
    fn from(item: &Item) -> Self {
        ItemSnapshot {
            name: item.name.clone(),
            kind: item.kind,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

/// The whole inventory at the end of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<ItemSnapshot>,
}

impl DaySnapshot {
    fn capture(day: u32, catalog: &Catalog) -> Self {
        DaySnapshot {
            day,
            items: catalog.items().iter().map(ItemSnapshot::from).collect(),
        }
    }
}

/// A simulation over one catalog.
#[derive(Debug)]
pub struct NightlyRun {
    catalog: Catalog,
    day: u32,
    history: Vec<DaySnapshot>,
}

impl NightlyRun {
    pub fn new(catalog: Catalog) -> Self {
        let history = vec![DaySnapshot::capture(0, &catalog)];
        NightlyRun {
            catalog,
            day: 0,
            history,
        }
    }

    /// Ages every item by one night and records the result.
    pub fn advance_day(&mut self) -> &DaySnapshot {
        self.catalog.update_quality();
        self.day += 1;

        let expired = self.catalog.items().iter().filter(|i| i.is_expired()).count();
        debug!(day = self.day, items = self.catalog.len(), expired, "Night passed");

        self.history.push(DaySnapshot::capture(self.day, &self.catalog));
        &self.history[self.history.len() - 1]
    }

    /// Advances `days` nights.
    pub fn run_for(&mut self, days: u32) {
        info!(from_day = self.day, days, items = self.catalog.len(), "Starting nightly run");
        for _ in 0..days {
            self.advance_day();
        }
        info!(day = self.day, "Nightly run finished");
    }

    /// Builds a cart in `currency` from the orders, against today's stock.
    ///
    /// Orders refer to items by name; the first catalog item with that name
    /// is used.
    pub fn fill_cart(&self, orders: &[OrderSpec], currency: CurrencyCode) -> NightlyResult<Cart> {
        let mut cart = Cart::with_currency(currency);

        for order in orders {
            let item = self.catalog.find_by_name(&order.item).ok_or_else(|| {
                NightlyError::InvalidConfig(format!("no item named '{}' in stock", order.item))
            })?;
            cart.add_item(item, order.amount)?;
            debug!(item = %order.item, amount = order.amount, total = %cart.total_price(), "Added to cart");
        }

        info!(
            lines = cart.line_count(),
            total = %cart.total_price(),
            currency = %cart.currency(),
            "Cart priced"
        );
        Ok(cart)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &[DaySnapshot] {
        &self.history
    }

    /// Consumes the run, returning its snapshots.
    pub fn into_history(self) -> Vec<DaySnapshot> {
        self.history
    }
}
