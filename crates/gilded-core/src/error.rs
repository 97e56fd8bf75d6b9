//! # Error Types
//!
//! Domain-specific error types for gilded-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gilded-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog and cart rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  apps/nightly errors (separate crate)                                  │
//! │  └── NightlyError     - Config loading, output, wrapped CoreError      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → NightlyError → exit status        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The quality rules themselves have no error paths. Everything here guards
//! the cart, where a bad amount would otherwise corrupt totals.

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and cart errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item is not (or no longer) in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Cart has reached the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity would exceed the maximum allowed.
    ///
    /// ## When This Occurs
    /// ```text
    /// add_item(vest, 600)   → line amount 600
    /// add_item(vest, 600)   → would be 1200
    ///      │
    ///      ▼
    /// QuantityTooLarge { requested: 1200, max: 999 }
    /// ```
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// A line total or the cart total does not fit in [`Money`].
    ///
    /// [`Money`]: crate::money::Money
    #[error("Cart total overflows the money range")]
    PriceOverflow,

    /// An input check failed before the cart was touched.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejected inputs: cart amounts, item names, currency codes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Blank where text is needed.
    #[error("{field} is required")]
    Required { field: String },

    /// Outside `[min, max]`.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Zero or negative.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of a catalog or cart operation.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_limit_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1200,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity 1200 exceeds maximum allowed (999)");

        let err = CoreError::CartTooLarge { max: 100 };
        assert_eq!(err.to_string(), "Cart cannot have more than 100 lines");

        assert_eq!(
            CoreError::PriceOverflow.to_string(),
            "Cart total overflows the money range"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must be positive");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_rejected_amount_surfaces_as_core_error() {
        let err: CoreError = ValidationError::MustBePositive {
            field: "amount".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
    }
}
