//! # Discount Strategies
//!
//! A discount strategy rewrites `discounted_unit_price` on cart lines.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apply_discount(&self, lines: &mut [CartLine])                          │
//! │                                                                         │
//! │  • Reads the CURRENT discounted_unit_price, not unit_price             │
//! │  • Writes discounted_unit_price in place, nothing else                 │
//! │  • Keeps no state between calls                                        │
//! │                                                                         │
//! │  So strategies compose multiplicatively and their order matters:       │
//! │                                                                         │
//! │    10.00 ─Bulk(-10%)→ 9.00 ─Seasonal(-5%)→ 8.55                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::cart::CartLine;

/// Minimum line amount that earns the bulk discount.
pub const BULK_MIN_AMOUNT: i64 = 10;

/// Bulk discount in basis points (10%).
pub const BULK_DISCOUNT_BPS: u32 = 1000;

/// Seasonal discount in basis points (5%).
pub const SEASONAL_DISCOUNT_BPS: u32 = 500;

/// A price transformation over cart lines.
pub trait DiscountStrategy: fmt::Debug + Send + Sync {
    /// Stable name for summaries and logs.
    fn name(&self) -> &'static str;

    /// Applies the discount to every eligible line, in place.
    fn apply_discount(&self, lines: &mut [CartLine]);
}

/// 10% off lines with an amount of at least ten.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulkDiscount;

impl DiscountStrategy for BulkDiscount {
    fn name(&self) -> &'static str {
        "bulk"
    }

    fn apply_discount(&self, lines: &mut [CartLine]) {
        for line in lines.iter_mut().filter(|l| l.amount >= BULK_MIN_AMOUNT) {
            line.discounted_unit_price = line
                .discounted_unit_price
                .apply_percentage_discount(BULK_DISCOUNT_BPS);
        }
    }
}

/// 5% off every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalDiscount;

impl DiscountStrategy for SeasonalDiscount {
    fn name(&self) -> &'static str {
        "seasonal"
    }

    fn apply_discount(&self, lines: &mut [CartLine]) {
        for line in lines.iter_mut() {
            line.discounted_unit_price = line
                .discounted_unit_price
                .apply_percentage_discount(SEASONAL_DISCOUNT_BPS);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
