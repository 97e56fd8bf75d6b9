//! # Validation Module
//!
//! The few input checks the inn needs: a cart amount must be a real quantity,
//! and configured names and currency codes must not be blank.
//!
//! ## Usage
//! ```rust
//! use gilded_core::validation::{validate_amount, validate_item_name};
//!
//! assert!(validate_amount(5).is_ok());
//! assert!(validate_amount(0).is_err());
//! assert!(validate_item_name("Aged Brie").is_ok());
//! ```

use crate::error::ValidationError;
use crate::MAX_BASE_PRICE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an amount passed to a cart operation.
///
/// ```text
/// add_item(item, amount)
///      │
///      ▼
/// validate_amount(amount) ← THIS FUNCTION
///      │
///      ├── amount <= 0?   → MustBePositive
///      └── OK → merge or create line, then the line cap (999) applies
/// ```
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a configured base price: `0..=MAX_BASE_PRICE_CENTS`.
///
/// Keeps every cart built from configured items far inside the money range.
pub fn validate_base_price(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_BASE_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "base_price".to_string(),
            min: 0,
            max: MAX_BASE_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates an item name: must not be blank.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a currency code: must not be blank.
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency_code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(1).is_ok());
        assert!(validate_amount(10).is_ok());
        // The line cap is the cart's concern
        assert!(validate_amount(1000).is_ok());

        assert!(validate_amount(0).is_err());
        assert!(matches!(
            validate_amount(-1),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(0).is_ok());
        assert!(validate_base_price(1099).is_ok());
        assert!(validate_base_price(MAX_BASE_PRICE_CENTS).is_ok());

        assert!(matches!(
            validate_base_price(-1),
            Err(ValidationError::OutOfRange { min: 0, .. })
        ));
        assert!(validate_base_price(MAX_BASE_PRICE_CENTS + 1).is_err());
        assert!(validate_base_price(i64::MAX / 100).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Sulfuras, Hand of Ragnaros").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("EUR").is_ok());
        assert!(validate_currency_code("").is_err());
    }
}
