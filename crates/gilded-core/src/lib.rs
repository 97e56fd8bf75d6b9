//! # gilded-core: Pure Inventory & Pricing Logic for the Gilded Rose
//!
//! This crate holds the inn's business rules as plain data and pure
//! functions: the nightly quality update, the catalog, and cart pricing.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gilded Rose Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/nightly (gilded-rose binary)               │   │
//! │  │      config ──► seed catalog ──► tick N days ──► report         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gilded-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │ quality  │  │ catalog  │  │   cart   │  │ discount /   │   │   │
//! │  │   │ ItemKind │  │ Catalog  │  │   Cart   │  │ pricing      │   │   │
//! │  │   │ rules    │  │ ItemId   │  │ CartLine │  │ Calculator   │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO PERSISTENCE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, ItemId, ItemKind, CurrencyCode
//! - [`quality`] - The per-variant daily update rules
//! - [`catalog`] - The inn's item collection
//! - [`cart`] - Cart lines and the cart itself
//! - [`discount`] - Discount strategies (bulk, seasonal)
//! - [`pricing`] - Price calculator and currency conversion
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Cart input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use gilded_core::{Cart, Catalog, Item, Money};
//!
//! let mut catalog = Catalog::new();
//! let brie = Item::aged_brie("Aged Brie", 2, 0, Money::from_cents(1000));
//! let id = catalog.add_item(brie);
//!
//! // One night passes
//! catalog.update_quality();
//! let brie = catalog.get(id).unwrap();
//! assert_eq!((brie.sell_in, brie.quality), (1, 1));
//!
//! // Ten wheels of cheese qualify for both discounts: 10.00 × 0.9 × 0.95
//! let mut cart = Cart::new();
//! cart.add_item(brie, 10).unwrap();
//! assert_eq!(cart.total_price().cents(), 8550);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod quality;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSummary};
pub use catalog::Catalog;
pub use discount::{BulkDiscount, DiscountStrategy, SeasonalDiscount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{CurrencyConverter, PassthroughConverter, PriceCalculator};
pub use quality::{apply_daily_update, QualityState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound on quality for every variant except Sulfuras.
pub const MAX_QUALITY: i64 = 50;

/// Lower bound on quality. Decrements clamp here immediately.
pub const MIN_QUALITY: i64 = 0;

/// Currency every cart is priced in unless constructed otherwise.
pub const DEFAULT_CURRENCY_CODE: &str = "EUR";

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Largest base price, in cents, a configured item may carry (10 million).
///
/// 100 lines × 999 units at this price still fit in `Money`.
pub const MAX_BASE_PRICE_CENTS: i64 = 1_000_000_000;

/// Maximum quantity of a single item in a cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
