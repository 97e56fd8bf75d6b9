//! # Pricing
//!
//! The price calculator turns cart lines into one total in the cart currency.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_price(lines, currency)                                       │
//! │                                                                         │
//! │  1. discounted_unit_price = unit_price   (every line)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. for strategy in registration order:                                │
//! │         strategy.apply_discount(lines)   (in place)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. total = Σ discounted_unit_price × amount   (checked)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. converter.convert(total, currency)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 1 makes the calculation repeatable: the cart recalculates after every
//! add and remove, and without the reset each recalculation would discount
//! the already-discounted prices again.

use std::fmt;

use crate::cart::CartLine;
use crate::discount::{BulkDiscount, DiscountStrategy, SeasonalDiscount};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CurrencyCode;

// =============================================================================
// Currency Converter
// =============================================================================

/// Converts an amount into the given currency.
///
/// Seam for a future exchange-rate service.
pub trait CurrencyConverter: fmt::Debug + Send + Sync {
    fn convert(&self, amount: Money, currency: &CurrencyCode) -> Money;
}

/// Returns every amount unchanged, whatever the currency (1:1).
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughConverter;

impl CurrencyConverter for PassthroughConverter {
    fn convert(&self, amount: Money, _currency: &CurrencyCode) -> Money {
        amount
    }
}

// =============================================================================
// Price Calculator
// =============================================================================

/// Runs a discount chain over cart lines and totals them.
#[derive(Debug)]
pub struct PriceCalculator {
    strategies: Vec<Box<dyn DiscountStrategy>>,
    converter: Box<dyn CurrencyConverter>,
}

impl PriceCalculator {
    /// A calculator with no discounts and the passthrough converter.
    pub fn new() -> Self {
        PriceCalculator {
            strategies: Vec::new(),
            converter: Box::new(PassthroughConverter),
        }
    }

    /// The chain every cart uses: bulk, then seasonal.
    pub fn standard() -> Self {
        let mut calculator = Self::new();
        calculator.add_discount_strategy(BulkDiscount);
        calculator.add_discount_strategy(SeasonalDiscount);
        calculator
    }

    /// Replaces the currency converter.
    pub fn with_converter(mut self, converter: impl CurrencyConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Registers a strategy at the end of the chain.
    pub fn add_discount_strategy(&mut self, strategy: impl DiscountStrategy + 'static) {
        self.strategies.push(Box::new(strategy));
    }

    /// Names of the registered strategies, in application order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Prices `lines` in `currency`, rewriting each line's discounted price.
    ///
    /// ## Errors
    /// `PriceOverflow` if a line total or the sum leaves the `i64` cent range.
    /// The discounted prices are still rewritten in that case.
    pub fn calculate_price(
        &self,
        lines: &mut [CartLine],
        currency: &CurrencyCode,
    ) -> CoreResult<Money> {
        for line in lines.iter_mut() {
            line.discounted_unit_price = line.unit_price;
        }

        for strategy in &self.strategies {
            strategy.apply_discount(lines);
        }

        // Summed wide so only the final total has to fit
        let mut total: i128 = 0;
        for line in lines.iter() {
            let line_total = line
                .discounted_unit_price
                .checked_multiply_quantity(line.amount)
                .ok_or(CoreError::PriceOverflow)?;
            total += i128::from(line_total.cents());
        }
        let total = i64::try_from(total)
            .map(Money::from_cents)
            .map_err(|_| CoreError::PriceOverflow)?;

        Ok(self.converter.convert(total, currency))
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
