//! # Cart
//!
//! A shopping cart over catalog items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(item, n) ──► validate n ──► merge or push line ──┐           │
//! │                                                            │           │
//! │  remove_item(id) ────► retain lines with other ids ────────┤           │
//! │                                                            ▼           │
//! │                                        PriceCalculator::calculate_price │
//! │                                                            │           │
//! │                                                            ▼           │
//! │                                                  total_price (cached)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshots, Not References
//! A line stores the item's id plus its name and price as they were when the
//! item was added. If the item later leaves the catalog the line keeps its
//! snapshot price; [`Cart::prune_missing`] drops such lines on request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PriceCalculator;
use crate::types::{CurrencyCode, Item, ItemId};
use crate::validation::validate_amount;
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One item and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item this line refers to.
    pub item_id: ItemId,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Number of units. Always > 0.
    pub amount: i64,

    /// Item base price at time of adding (frozen).
    pub unit_price: Money,

    /// Unit price after the most recent discount pass.
    pub discounted_unit_price: Money,

    /// When the line was created.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line from an item, freezing its name and base price.
    pub fn from_item(item: &Item, amount: i64) -> Self {
        CartLine {
            item_id: item.id,
            name: item.name.clone(),
            amount,
            unit_price: item.base_price,
            discounted_unit_price: item.base_price,
            added_at: Utc::now(),
        }
    }

    /// Discounted unit price × amount.
    pub fn line_total(&self) -> Money {
        self.discounted_unit_price.multiply_quantity(self.amount)
    }

    /// How much the discounts took off this line.
    pub fn savings(&self) -> Money {
        self.unit_price
            .multiply_quantity(self.amount)
            .saturating_sub(self.line_total())
    }
}

fn checked_line_amount(amount: i64) -> CoreResult<i64> {
    if amount > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: amount,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(amount)
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item increases amount)
/// - Every line amount is in `1..=MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_LINES` lines
/// - `total_price` always reflects the current lines
#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    calculator: PriceCalculator,
    currency: CurrencyCode,
    total_price: Money,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart priced in the default currency.
    pub fn new() -> Self {
        Self::with_currency(CurrencyCode::default())
    }

    /// Creates an empty cart priced in `currency`, fixed for its lifetime.
    pub fn with_currency(currency: CurrencyCode) -> Self {
        Self::with_calculator(currency, PriceCalculator::standard())
    }

    /// Creates an empty cart priced by a custom discount chain.
    pub fn with_calculator(currency: CurrencyCode, calculator: PriceCalculator) -> Self {
        Cart {
            lines: Vec::new(),
            calculator,
            currency,
            total_price: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item to the cart or increases its amount if already present.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` if `amount <= 0`
    /// - `QuantityTooLarge` if the line would exceed `MAX_ITEM_QUANTITY`
    /// - `CartTooLarge` if a new line would exceed `MAX_CART_LINES`
    /// - `PriceOverflow` if the new total does not fit in `Money`
    ///
    /// The cart is unchanged when an error is returned.
    pub fn add_item(&mut self, item: &Item, amount: i64) -> CoreResult<()> {
        validate_amount(amount)?;

        let mut lines = self.lines.clone();

        match lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => {
                line.amount = checked_line_amount(line.amount.saturating_add(amount))?;
            }
            None => {
                if lines.len() >= MAX_CART_LINES {
                    return Err(CoreError::CartTooLarge {
                        max: MAX_CART_LINES,
                    });
                }
                lines.push(CartLine::from_item(item, checked_line_amount(amount)?));
            }
        }

        self.total_price = self.calculator.calculate_price(&mut lines, &self.currency)?;
        self.lines = lines;
        Ok(())
    }

    /// Removes every line for the given item. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: ItemId) {
        self.lines.retain(|l| l.item_id != id);
        self.recalculate();
    }

    /// Drops lines whose item is no longer in `catalog`.
    ///
    /// Returns the ids that were dropped.
    pub fn prune_missing(&mut self, catalog: &Catalog) -> Vec<ItemId> {
        let stale: Vec<ItemId> = self
            .lines
            .iter()
            .map(|l| l.item_id)
            .filter(|id| !catalog.contains(*id))
            .collect();

        if !stale.is_empty() {
            self.lines.retain(|l| !stale.contains(&l.item_id));
            self.recalculate();
        }

        stale
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
        self.recalculate();
    }

    /// Reprices after lines were removed.
    ///
    /// Dropping lines only overflows when the remaining lines mix very large
    /// and negative prices; the total then saturates at `Money::MAX`.
    fn recalculate(&mut self) {
        self.total_price = self
            .calculator
            .calculate_price(&mut self.lines, &self.currency)
            .unwrap_or(Money::MAX);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for the given item, if present.
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == id)
    }

    /// Total after discounts and conversion, as of the last change.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line amounts.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// Total before any discount.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .map(|l| l.unit_price.multiply_quantity(l.amount))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Serializable cart summary for reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSummary {
    pub currency: CurrencyCode,
    pub discounts: Vec<String>,
    pub lines: Vec<CartLine>,
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub total_price: Money,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            currency: cart.currency.clone(),
            discounts: cart
                .calculator
                .strategy_names()
                .into_iter()
                .map(String::from)
                .collect(),
            lines: cart.lines.clone(),
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
